// In: src/error.rs

//! This module defines the single, unified error type for the entire huffpack library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffpackError {
    // =========================================================================
    // === Codec Errors (Specific to the Huffman pipeline)
    // =========================================================================
    /// A prefix tree was requested for a frequency table with no symbols.
    /// Callers special-case empty input before reaching the tree builder.
    #[error("Cannot build a prefix tree from an empty frequency table")]
    EmptyInput,

    #[error("Corrupt padding: {padding} padding bits declared for a {payload_bits}-bit payload")]
    CorruptPadding { padding: u8, payload_bits: usize },

    #[error("Undecodable bit stream: {0}")]
    UndecodableStream(String),

    #[error("Symbol {0} has no code in this table")]
    UnsupportedSymbol(u32),

    #[error("Artifact format error: {0}")]
    FrameFormat(String),

    // =========================================================================
    // === Boundary Errors (File API, configuration)
    // =========================================================================
    #[error("Input of {size} bytes exceeds the configured limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a config
    /// or rendering a report.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
