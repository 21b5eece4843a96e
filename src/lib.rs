//! This file is the root of the `huffpack` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`kernels`,
//!     `codec_pipeline`, `bridge`, etc.) so the Rust compiler knows they exist.
//! 2.  Defining the crate-wide primitive types and re-exporting the entry points
//!     an embedding service calls.
//!
//! ```
//! let artifact = huffpack::compress_bytes(b"abracadabra")?;
//! assert_eq!(huffpack::decompress_bytes(&artifact)?, b"abracadabra");
//! # Ok::<(), huffpack::HuffpackError>(())
//! ```

//==================================================================================
// 0. Constants & Primitive Types
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One unit of the input alphabet.
pub type Symbol = u8;

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod codec_pipeline;
pub mod config;
pub mod kernels;
pub mod observability;

mod error;

//==================================================================================
// 2. Re-exports
//==================================================================================
pub use bridge::{
    analyze_artifact, compress_bytes, compress_file, compress_with_report, decompress_bytes,
    decompress_file, inspect_codes,
};
pub use codec_pipeline::{compress, decompress, CompressedArtifact};
pub use config::HuffpackConfig;
pub use error::HuffpackError;
