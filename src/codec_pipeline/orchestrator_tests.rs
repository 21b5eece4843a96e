use bitvec::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::codec_pipeline::artifact::CompressedArtifact;
use crate::codec_pipeline::orchestrator::{build_code_table, compress, decompress, encoded_bit_len};
use crate::error::HuffpackError;
use crate::kernels::{self, CodeTable, FrequencyTable, HuffmanTree};

// Test Helpers
/// Compresses, serializes, parses and decompresses `input`, asserting equality.
fn assert_roundtrip(input: &[u8]) -> CompressedArtifact {
    let artifact = compress(input).unwrap();
    let bytes = artifact.to_bytes();
    let parsed = CompressedArtifact::from_bytes(&bytes).unwrap();
    assert_eq!(parsed, artifact);
    let restored = decompress(&parsed).unwrap();
    assert_eq!(restored, input);
    artifact
}

//==================================================================================
// Round-trip behaviour
//==================================================================================

#[test]
fn test_roundtrip_plain_text() {
    assert_roundtrip(b"Huffman encoding is a greedy algorithm that builds optimal prefix codes.");
}

#[test]
fn test_roundtrip_empty_input() {
    let artifact = assert_roundtrip(b"");
    assert!(artifact.is_empty);
    assert_eq!(artifact.to_bytes(), vec![0, 0, 0, 0, 0, 1]);
}

#[test]
fn test_roundtrip_single_repeated_symbol() {
    let artifact = assert_roundtrip(b"aaaa");
    assert_eq!(artifact.frequencies.len(), 1);
    // Four one-bit codes of `0` and four bits of padding.
    assert_eq!(artifact.payload, vec![0x00]);
    assert_eq!(artifact.padding, 4);
}

#[test]
fn test_roundtrip_single_byte() {
    assert_roundtrip(&[0xFF]);
}

#[test]
fn test_roundtrip_every_byte_value() {
    let input: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).collect();
    let artifact = assert_roundtrip(&input);
    assert_eq!(artifact.frequencies.len(), 256);
}

#[test]
fn test_roundtrip_utf8_text() {
    assert_roundtrip("naïve café ñ 東京 🚀🚀🚀".as_bytes());
}

#[test]
fn test_roundtrip_seeded_random_inputs() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..50 {
        let len = rng.random_range(0..2_000);
        let uniform: Vec<u8> = (0..len).map(|_| rng.random()).collect();
        assert_roundtrip(&uniform);

        let skewed: Vec<u8> = (0..len)
            .map(|_| if rng.random_range(0..10) < 8 { b'e' } else { rng.random_range(b'a'..=b'z') })
            .collect();
        assert_roundtrip(&skewed);
    }
}

//==================================================================================
// Determinism & padding
//==================================================================================

#[test]
fn test_compression_is_deterministic() {
    let input = b"she sells sea shells by the sea shore";
    let first = compress(input).unwrap().to_bytes();
    let second = compress(input).unwrap().to_bytes();
    assert_eq!(first, second);
}

#[test]
fn test_byte_aligned_stream_records_zero_padding() {
    // Two symbols with one-bit codes, eight symbols total: exactly one byte.
    let artifact = assert_roundtrip(b"abababab");
    assert_eq!(artifact.padding, 0);
    assert_eq!(artifact.payload.len(), 1);

    // Single symbol, sixteen one-bit codes: exactly two bytes.
    let artifact = assert_roundtrip(&[b'x'; 16]);
    assert_eq!(artifact.padding, 0);
    assert_eq!(artifact.payload, vec![0x00, 0x00]);
}

#[test]
fn test_compressed_text_is_smaller_than_input() {
    let input = "the quick brown fox jumps over the lazy dog. ".repeat(200);
    let artifact = compress(input.as_bytes()).unwrap();
    assert!(artifact.to_bytes().len() < input.len());
}

//==================================================================================
// Corruption handling
//==================================================================================

#[test]
fn test_truncated_payload_is_undecodable() {
    let mut artifact = compress(b"hello world, hello huffman, hello again").unwrap();
    assert!(artifact.payload.len() > 2);
    artifact.payload.pop();
    let result = decompress(&artifact);
    assert!(matches!(result, Err(HuffpackError::UndecodableStream(_))));
}

#[test]
fn test_stream_ending_mid_code_is_undecodable() {
    // a:1 b:1 c:2 gives c=0, a=10, b=11. A lone `1` bit is half of a code.
    let artifact = CompressedArtifact {
        frequencies: FrequencyTable::build(b"abcc"),
        padding: 7,
        is_empty: false,
        payload: vec![0b1000_0000],
    };
    let result = decompress(&artifact);
    assert!(matches!(result, Err(HuffpackError::UndecodableStream(_))));
}

#[test]
fn test_unmatchable_bits_for_single_symbol_table() {
    // The only code is `0`; a `1` bit can never match.
    let artifact = CompressedArtifact {
        frequencies: FrequencyTable::build(b"a"),
        padding: 7,
        is_empty: false,
        payload: vec![0b1000_0000],
    };
    let result = decompress(&artifact);
    assert!(matches!(result, Err(HuffpackError::UndecodableStream(_))));
}

#[test]
fn test_symbol_count_mismatch_is_undecodable() {
    // Header claims five symbols, payload carries four `0` codes.
    let artifact = CompressedArtifact {
        frequencies: FrequencyTable::build(b"aaaaa"),
        padding: 4,
        is_empty: false,
        payload: vec![0x00],
    };
    let result = decompress(&artifact);
    assert!(matches!(result, Err(HuffpackError::UndecodableStream(_))));
}

#[test]
fn test_decoding_stops_at_declared_length() {
    // One `a` declared, but a long run of `0` codes follows it.
    let artifact = CompressedArtifact {
        frequencies: FrequencyTable::build(b"a"),
        padding: 0,
        is_empty: false,
        payload: vec![0x00; 4096],
    };
    match decompress(&artifact) {
        Err(HuffpackError::UndecodableStream(msg)) => {
            assert!(msg.contains("follow the last one"), "unexpected message: {}", msg)
        }
        other => panic!("expected UndecodableStream, got {:?}", other),
    }
}

#[test]
fn test_padding_exceeding_payload_is_rejected() {
    let artifact = CompressedArtifact {
        frequencies: FrequencyTable::build(b"ab"),
        padding: 3,
        is_empty: false,
        payload: Vec::new(),
    };
    let result = decompress(&artifact);
    assert!(matches!(result, Err(HuffpackError::CorruptPadding { .. })));
}

#[test]
fn test_tampered_frequency_table_does_not_roundtrip() {
    let input = b"abracadabra alakazam";
    let mut artifact = compress(input).unwrap();
    artifact.frequencies =
        FrequencyTable::from_counts(artifact.frequencies.iter().map(|(s, _)| (s, 1))).unwrap();
    match decompress(&artifact) {
        Ok(restored) => assert_ne!(restored, input),
        Err(e) => assert!(matches!(e, HuffpackError::UndecodableStream(_))),
    }
}

//==================================================================================
// Code table properties
//==================================================================================

#[test]
fn test_payload_size_matches_weighted_code_lengths() {
    let input = "aaaaaaaabbbbccd, an uneven alphabet".repeat(30);
    let (frequencies, table) = build_code_table(input.as_bytes()).unwrap().unwrap();
    let expected_bits = frequencies
        .iter()
        .map(|(symbol, count)| count as usize * table.code(symbol).unwrap().len())
        .sum::<usize>();
    assert_eq!(encoded_bit_len(&frequencies, &table).unwrap(), expected_bits);

    let artifact = compress(input.as_bytes()).unwrap();
    assert_eq!(artifact.payload.len() * 8 - artifact.padding as usize, expected_bits);
}

#[test]
fn test_build_code_table_for_empty_input_is_none() {
    assert!(build_code_table(b"").unwrap().is_none());
}

#[test]
fn test_frequency_total_matches_input_length() {
    let input = b"count me in, count me out";
    let (frequencies, table) = build_code_table(input).unwrap().unwrap();
    assert_eq!(frequencies.total(), input.len() as u64);
    assert_eq!(table.len(), frequencies.len());
}

#[test]
fn test_codes_longer_than_a_machine_word() {
    // Power-of-two frequencies produce a maximally skewed tree.
    let counts = (0..40u8).map(|s| (s, 1u64 << s));
    let frequencies = FrequencyTable::from_counts(counts).unwrap();
    let table = CodeTable::derive(&HuffmanTree::build(&frequencies).unwrap());
    assert!(table.max_code_len() >= 39);

    let message = [0u8, 39, 1, 0, 20];
    let mut bits: BitVec<u8, Msb0> = BitVec::new();
    for &s in &message {
        bits.extend_from_bitslice(table.code(s).unwrap().as_bitslice());
    }
    let packed = kernels::pack(&bits);
    let unpacked = kernels::unpack(&packed.payload, packed.padding).unwrap();
    assert_eq!(unpacked, bits);

    let mut decoded = Vec::new();
    let mut acc = kernels::Code::new();
    for bit in unpacked.iter().by_vals() {
        acc.push(bit);
        if let Some(s) = table.symbol_for(&acc) {
            decoded.push(s);
            acc.clear();
        }
    }
    assert_eq!(decoded, message);
}
