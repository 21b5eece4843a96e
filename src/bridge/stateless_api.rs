// In: src/bridge/stateless_api.rs

use crate::bridge::format::{symbol_label, ArtifactStats, CodeReport, CompressionReport};
use crate::codec_pipeline::{self, CompressedArtifact};
use crate::error::HuffpackError;
use crate::kernels::code_table::code_to_string;

/// Compresses a byte buffer into a serialized artifact.
pub fn compress_bytes(input: &[u8]) -> Result<Vec<u8>, HuffpackError> {
    let artifact = codec_pipeline::compress(input)?;
    Ok(artifact.to_bytes())
}

/// Compresses a byte buffer and reports the size reduction.
pub fn compress_with_report(input: &[u8]) -> Result<(Vec<u8>, CompressionReport), HuffpackError> {
    let bytes = compress_bytes(input)?;
    let report = CompressionReport::new(input.len(), bytes.len());
    log::info!(
        "compressed {} bytes -> {} bytes ({:.2}% saved)",
        report.original_size,
        report.compressed_size,
        report.compression_ratio
    );
    Ok((bytes, report))
}

/// Parses and decompresses a serialized artifact.
pub fn decompress_bytes(bytes: &[u8]) -> Result<Vec<u8>, HuffpackError> {
    let artifact = CompressedArtifact::from_bytes(bytes).inspect_err(|e| {
        log::warn!("rejected artifact of {} bytes: {}", bytes.len(), e);
    })?;
    let output = codec_pipeline::decompress(&artifact)?;
    log::info!("decompressed {} bytes -> {} bytes", bytes.len(), output.len());
    Ok(output)
}

/// Analyzes a serialized artifact without decoding its payload.
/// This function acts as a simple facade over `CompressedArtifact::peek_info`.
pub fn analyze_artifact(bytes: &[u8]) -> Result<ArtifactStats, HuffpackError> {
    let info = CompressedArtifact::peek_info(bytes)?;

    Ok(ArtifactStats {
        header_size: info.header_size,
        payload_size: info.payload_size,
        total_size: bytes.len(),
        symbol_count: info.symbol_count,
        original_len: info.original_len,
        padding_bits: info.padding,
        is_empty: info.is_empty,
    })
}

/// Returns the codes and frequencies `compress_bytes` would use for `input`.
/// An empty input yields an empty report.
pub fn inspect_codes(input: &[u8]) -> Result<CodeReport, HuffpackError> {
    let Some((frequencies, table)) = codec_pipeline::build_code_table(input)? else {
        return Ok(CodeReport::default());
    };

    Ok(CodeReport {
        codes: table
            .iter()
            .map(|(symbol, code)| (symbol_label(symbol), code_to_string(code)))
            .collect(),
        frequencies: frequencies
            .iter()
            .map(|(symbol, count)| (symbol_label(symbol), count))
            .collect(),
    })
}
