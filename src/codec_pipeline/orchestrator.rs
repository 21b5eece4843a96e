// In: src/codec_pipeline/orchestrator.rs

use bitvec::prelude::*;

use crate::codec_pipeline::artifact::CompressedArtifact;
use crate::error::HuffpackError;
use crate::kernels::{self, Code, CodeTable, FrequencyTable, HuffmanTree};

//==================================================================================
// 1. Compression
//==================================================================================

/// Compresses a fully materialized input into a self-describing artifact.
///
/// The pipeline is linear: count frequencies, build the tree, derive codes,
/// concatenate the code of every input byte, pack the bits. The frequency table
/// travels in the artifact so `decompress` can rebuild exactly the same codes.
pub fn compress(input: &[u8]) -> Result<CompressedArtifact, HuffpackError> {
    // 1. Empty input is a terminal case, not an error.
    if input.is_empty() {
        log::debug!("compress: empty input, emitting empty artifact");
        return Ok(CompressedArtifact::empty());
    }

    // 2. Model and code construction.
    let (frequencies, table) = build_model(input)?;

    // 3. Encode every symbol into a single bit stream.
    let mut bits: BitVec<u8, Msb0> = BitVec::with_capacity(encoded_bit_len(&frequencies, &table)?);
    for &byte in input {
        bits.extend_from_bitslice(table.code(byte)?.as_bitslice());
    }
    log::debug!(
        "compress: {} symbols, {} distinct, longest code {} bits, {} payload bits",
        input.len(),
        frequencies.len(),
        table.max_code_len(),
        bits.len()
    );

    // 4. Pack and assemble.
    let packed = kernels::pack(&bits);
    Ok(CompressedArtifact {
        frequencies,
        padding: packed.padding,
        is_empty: false,
        payload: packed.payload,
    })
}

//==================================================================================
// 2. Decompression
//==================================================================================

/// Restores the original bytes from an artifact.
///
/// Every structural inconsistency between header and payload is reported as an
/// error; a partial result is never returned.
pub fn decompress(artifact: &CompressedArtifact) -> Result<Vec<u8>, HuffpackError> {
    // 1. Empty artifacts decode to nothing.
    if artifact.is_empty {
        return Ok(Vec::new());
    }

    // 2. Rebuild the exact code table the encoder used.
    let tree = HuffmanTree::build(&artifact.frequencies)?;
    let table = CodeTable::derive(&tree);
    let expected_len = usize::try_from(artifact.frequencies.total()).map_err(|_| {
        HuffpackError::FrameFormat("Declared original length does not fit in memory".to_string())
    })?;

    // 3. Recover the bit stream.
    let bits = kernels::unpack(&artifact.payload, artifact.padding)?;

    // 4. Walk the bits, emitting a symbol whenever the accumulator matches a code.
    // Every symbol costs at least one bit, so `bits.len()` bounds the output.
    let max_code_len = table.max_code_len();
    let mut output = Vec::with_capacity(expected_len.min(bits.len()));
    let mut accumulator = Code::with_capacity(max_code_len);

    for (offset, bit) in bits.iter().by_vals().enumerate() {
        accumulator.push(bit);
        if let Some(symbol) = table.symbol_for(&accumulator) {
            output.push(symbol);
            accumulator.clear();
            // Stop as soon as the declared length is reached; anything left is garbage.
            if output.len() == expected_len && offset + 1 < bits.len() {
                return Err(HuffpackError::UndecodableStream(format!(
                    "Header declares {} symbols but {} bits follow the last one",
                    expected_len,
                    bits.len() - offset - 1
                )));
            }
        } else if accumulator.len() >= max_code_len {
            return Err(HuffpackError::UndecodableStream(format!(
                "No code matches the {} bits ending at bit offset {}",
                accumulator.len(),
                offset
            )));
        }
    }

    if !accumulator.is_empty() {
        return Err(HuffpackError::UndecodableStream(format!(
            "Stream ended inside a code with {} unmatched bits",
            accumulator.len()
        )));
    }
    if output.len() != expected_len {
        return Err(HuffpackError::UndecodableStream(format!(
            "Decoded {} symbols but the header declares {}",
            output.len(),
            expected_len
        )));
    }

    log::debug!(
        "decompress: {} payload bits -> {} symbols",
        bits.len(),
        output.len()
    );
    Ok(output)
}

//==================================================================================
// 3. Code Inspection
//==================================================================================

/// Builds the frequency and code tables for `input` without encoding it.
/// Returns `None` for an empty input, which has no codes.
pub fn build_code_table(input: &[u8]) -> Result<Option<(FrequencyTable, CodeTable)>, HuffpackError> {
    if input.is_empty() {
        return Ok(None);
    }
    build_model(input).map(Some)
}

/// Exact number of payload bits `frequencies` encodes to under `table`.
pub(crate) fn encoded_bit_len(
    frequencies: &FrequencyTable,
    table: &CodeTable,
) -> Result<usize, HuffpackError> {
    let mut total: u64 = 0;
    for (symbol, count) in frequencies.iter() {
        let bits = count
            .checked_mul(table.code(symbol)?.len() as u64)
            .and_then(|bits| total.checked_add(bits))
            .ok_or_else(|| HuffpackError::InternalError("Encoded bit length overflows u64".to_string()))?;
        total = bits;
    }
    usize::try_from(total).map_err(|_| {
        HuffpackError::InternalError(format!("{} payload bits do not fit in memory", total))
    })
}

fn build_model(input: &[u8]) -> Result<(FrequencyTable, CodeTable), HuffpackError> {
    let frequencies = FrequencyTable::build(input);
    let tree = HuffmanTree::build(&frequencies)?;
    let table = CodeTable::derive(&tree);
    Ok((frequencies, table))
}
