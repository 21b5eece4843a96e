//! The pure codec engine: the artifact format and the orchestrator that chains
//! the kernels into `compress` / `decompress`. Nothing in here touches the
//! filesystem or configuration; that is the bridge's job.

pub mod artifact;
pub mod orchestrator;

pub use artifact::{CompressedArtifact, HeaderInfo};
pub use orchestrator::{build_code_table, compress, decompress};

#[cfg(test)]
mod orchestrator_tests;
