//! Defines the self-describing on-disk format for a compressed artifact.
//! This module is the single source of truth for serialization, deserialization,
//! and efficient metadata peeking of the artifact.
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! [u32 symbol_count]
//!   symbol_count x [u32 symbol][u64 frequency]
//! [u8 padding]        0..=7
//! [u8 empty_flag]     1 => original input was empty, nothing follows
//! [payload bytes]
//! ```

use std::io::{Cursor, Read};

use crate::bridge::format::{
    EMPTY_FLAG_CLEAR, EMPTY_FLAG_SET, HEADER_ENTRY_SIZE, MAX_SYMBOL_VALUE, MIN_ARTIFACT_SIZE,
    SYMBOL_COUNT_SIZE, TRAILER_SIZE,
};
use crate::error::HuffpackError;
use crate::kernels::FrequencyTable;
use crate::Symbol;

//==================================================================================
// Public Structs
//==================================================================================

/// Metadata extracted from an artifact's header without touching the payload.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct HeaderInfo {
    pub symbol_count: usize,
    /// Sum of the stored frequencies, i.e. the decompressed length.
    pub original_len: u64,
    pub padding: u8,
    pub is_empty: bool,
    /// Size of everything before the payload, in bytes.
    pub header_size: usize,
    pub payload_size: usize,
}

/// A fully materialized compressed artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressedArtifact {
    pub frequencies: FrequencyTable,
    pub padding: u8,
    pub is_empty: bool,
    pub payload: Vec<u8>,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl CompressedArtifact {
    /// The artifact produced for an empty input.
    pub fn empty() -> Self {
        Self {
            frequencies: FrequencyTable::default(),
            padding: 0,
            is_empty: true,
            payload: Vec::new(),
        }
    }

    /// Serializes the artifact. Frequency entries are written in ascending symbol
    /// order, so equal artifacts always serialize to identical bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(
            MIN_ARTIFACT_SIZE + self.frequencies.len() * HEADER_ENTRY_SIZE + self.payload.len(),
        );

        buf.extend_from_slice(&(self.frequencies.len() as u32).to_le_bytes());
        for (symbol, count) in self.frequencies.iter() {
            buf.extend_from_slice(&(symbol as u32).to_le_bytes());
            buf.extend_from_slice(&count.to_le_bytes());
        }

        buf.push(self.padding);
        buf.push(if self.is_empty {
            EMPTY_FLAG_SET
        } else {
            EMPTY_FLAG_CLEAR
        });
        buf.extend_from_slice(&self.payload);
        buf
    }

    /// Deserializes and validates a full artifact.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HuffpackError> {
        let header = parse_header(bytes)?;
        let payload = bytes[header.header_size..].to_vec();

        Ok(Self {
            frequencies: header.frequencies,
            padding: header.padding,
            is_empty: header.is_empty,
            payload,
        })
    }

    /// Peeks into a serialized artifact's header to extract metadata without
    /// copying the payload.
    pub fn peek_info(bytes: &[u8]) -> Result<HeaderInfo, HuffpackError> {
        let header = parse_header(bytes)?;
        Ok(HeaderInfo {
            symbol_count: header.frequencies.len(),
            original_len: header.frequencies.total(),
            padding: header.padding,
            is_empty: header.is_empty,
            header_size: header.header_size,
            payload_size: bytes.len() - header.header_size,
        })
    }
}

//==================================================================================
// Private Helpers
//==================================================================================

struct ParsedHeader {
    frequencies: FrequencyTable,
    padding: u8,
    is_empty: bool,
    header_size: usize,
}

fn parse_header(bytes: &[u8]) -> Result<ParsedHeader, HuffpackError> {
    if bytes.len() < MIN_ARTIFACT_SIZE {
        return Err(HuffpackError::FrameFormat(format!(
            "Artifact is too small to be valid. Minimum size: {}, got: {}",
            MIN_ARTIFACT_SIZE,
            bytes.len()
        )));
    }

    let mut cursor = Cursor::new(bytes);
    let symbol_count = read_u32(&mut cursor)? as usize;

    // Check the declared table against the buffer before allocating for it.
    if symbol_count > MAX_SYMBOL_VALUE as usize + 1 {
        return Err(HuffpackError::FrameFormat(format!(
            "Header declares {} symbols, at most {} are possible",
            symbol_count,
            MAX_SYMBOL_VALUE as usize + 1
        )));
    }
    let header_size = SYMBOL_COUNT_SIZE + symbol_count * HEADER_ENTRY_SIZE + TRAILER_SIZE;
    if bytes.len() < header_size {
        return Err(HuffpackError::FrameFormat(format!(
            "Header declares {} symbols ({} bytes) but the artifact has only {} bytes",
            symbol_count,
            header_size,
            bytes.len()
        )));
    }

    let mut pairs = Vec::with_capacity(symbol_count);
    for _ in 0..symbol_count {
        let raw_symbol = read_u32(&mut cursor)?;
        let count = read_u64(&mut cursor)?;
        let symbol = Symbol::try_from(raw_symbol)
            .map_err(|_| HuffpackError::UnsupportedSymbol(raw_symbol))?;
        pairs.push((symbol, count));
    }
    let frequencies = FrequencyTable::from_counts(pairs)?;

    let padding = read_u8(&mut cursor)?;
    if padding > 7 {
        return Err(HuffpackError::CorruptPadding {
            padding,
            payload_bits: (bytes.len() - header_size) * 8,
        });
    }

    let is_empty = match read_u8(&mut cursor)? {
        EMPTY_FLAG_CLEAR => false,
        EMPTY_FLAG_SET => true,
        other => {
            return Err(HuffpackError::FrameFormat(format!(
                "Invalid empty flag: {}",
                other
            )))
        }
    };

    if is_empty && (!frequencies.is_empty() || padding != 0) {
        return Err(HuffpackError::FrameFormat(
            "Empty artifact must not carry a frequency table or padding".to_string(),
        ));
    }
    if is_empty && bytes.len() > header_size {
        return Err(HuffpackError::FrameFormat(format!(
            "Empty artifact carries {} payload bytes",
            bytes.len() - header_size
        )));
    }
    if !is_empty && frequencies.is_empty() {
        return Err(HuffpackError::FrameFormat(
            "Non-empty artifact has no frequency table".to_string(),
        ));
    }

    Ok(ParsedHeader {
        frequencies,
        padding,
        is_empty,
        header_size,
    })
}

fn read_array<const N: usize>(cursor: &mut Cursor<&[u8]>) -> Result<[u8; N], HuffpackError> {
    let mut buf = [0u8; N];
    cursor
        .read_exact(&mut buf)
        .map_err(|e| HuffpackError::FrameFormat(e.to_string()))?;
    Ok(buf)
}

fn read_u8(cursor: &mut Cursor<&[u8]>) -> Result<u8, HuffpackError> {
    Ok(read_array::<1>(cursor)?[0])
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, HuffpackError> {
    read_array::<4>(cursor).map(u32::from_le_bytes)
}

fn read_u64(cursor: &mut Cursor<&[u8]>) -> Result<u64, HuffpackError> {
    read_array::<8>(cursor).map(u64::from_le_bytes)
}

//==================================================================================
// Unit Tests
//==================================================================================
