// In: src/bridge/format.rs

//! Defines all on-disk constants for the huffpack artifact format and the
//! public-facing report structs returned by the bridge.
//! This is the single source of truth for field sizes; `codec_pipeline::artifact`
//! does the actual reading and writing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

//==================================================================================
// I. Artifact Layout Constants
//==================================================================================

/// Size of the leading `u32` symbol count.
pub const SYMBOL_COUNT_SIZE: usize = 4;
/// Size of one `[u32 symbol][u64 frequency]` header entry.
pub const HEADER_ENTRY_SIZE: usize = 4 + 8;
/// Size of the `[u8 padding][u8 empty_flag]` pair that closes the header.
pub const TRAILER_SIZE: usize = 2;
/// The smallest valid artifact: a zero symbol count and the trailer.
pub const MIN_ARTIFACT_SIZE: usize = SYMBOL_COUNT_SIZE + TRAILER_SIZE;

pub const EMPTY_FLAG_CLEAR: u8 = 0;
pub const EMPTY_FLAG_SET: u8 = 1;

/// Symbols are bytes; any stored value above this is rejected.
pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

/// Header size with all 256 symbols present.
pub const MAX_HEADER_SIZE: usize =
    SYMBOL_COUNT_SIZE + (MAX_SYMBOL_VALUE as usize + 1) * HEADER_ENTRY_SIZE + TRAILER_SIZE;
/// Longest code a 256-symbol tree can assign.
pub const MAX_CODE_LEN: usize = MAX_SYMBOL_VALUE as usize;

/// Largest artifact that can decode to at most `max_output` bytes.
pub fn max_artifact_size(max_output: usize) -> usize {
    MAX_HEADER_SIZE.saturating_add(max_output.saturating_mul(MAX_CODE_LEN).div_ceil(8))
}

//==================================================================================
// II. Public Report Structs
//==================================================================================

/// Size summary for one compression call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompressionReport {
    pub original_size: usize,
    pub compressed_size: usize,
    /// `(1 - compressed / original) * 100`. Negative when the artifact is larger
    /// than its input; `0.0` for an empty input.
    pub compression_ratio: f64,
}

impl CompressionReport {
    pub fn new(original_size: usize, compressed_size: usize) -> Self {
        let compression_ratio = if original_size > 0 {
            (1.0 - compressed_size as f64 / original_size as f64) * 100.0
        } else {
            0.0
        };
        Self {
            original_size,
            compressed_size,
            compression_ratio,
        }
    }
}

/// Header-level statistics for a serialized artifact, returned by
/// `analyze_artifact` without decoding the payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArtifactStats {
    pub header_size: usize,
    pub payload_size: usize,
    pub total_size: usize,
    pub symbol_count: usize,
    pub original_len: u64,
    pub padding_bits: u8,
    pub is_empty: bool,
}

/// The code assignment for a text sample: what a diagnostic view needs to draw
/// the table. Keys are printable symbol labels (see `symbol_label`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeReport {
    pub codes: BTreeMap<String, String>,
    pub frequencies: BTreeMap<String, u64>,
}

/// Printable ASCII (including space) renders as itself, everything else as
/// `0xNN`. The two forms never collide.
pub fn symbol_label(symbol: u8) -> String {
    if symbol == b' ' || symbol.is_ascii_graphic() {
        (symbol as char).to_string()
    } else {
        format!("0x{:02X}", symbol)
    }
}
