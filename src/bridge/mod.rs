// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of the huffpack library. It wraps the pure
// `codec_pipeline` engine with byte-level and file-level entry points, and is the
// only layer that knows about configuration and the filesystem.
//
// Data Flow (Compression):
//
//   1. [File API (compress_file)]          -> Reads a file, applies config limits
//         |
//         `-> 2. [Stateless API (compress_bytes)] -> Receives `&[u8]`
//                  |
//                  `-> 3. [Codec Engine (codec_pipeline::compress)] -> `CompressedArtifact`
//                  |
//                  `-> Serializes the artifact to `Vec<u8>`
//
// Data Flow (Decompression):
//
//   1. [File API (decompress_file)]        -> Checks the extension and declared size
//         |
//         `-> 2. [Stateless API (decompress_bytes)] -> Parses the artifact
//                  |
//                  `-> 3. [Codec Engine (codec_pipeline::decompress)] -> `Vec<u8>`
//
// ====================================================================================
pub mod file_api;
pub mod format;
pub mod stateless_api;

// --- File-Level API ---
pub use file_api::{compress_file, decompress_file, FileCompression};

// --- Low-Level Stateless API ---
pub use stateless_api::{
    analyze_artifact, compress_bytes, compress_with_report, decompress_bytes, inspect_codes,
};

// --- Report Structs ---
pub use format::{ArtifactStats, CodeReport, CompressionReport};
