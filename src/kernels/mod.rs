//! This module declares the pure, stateless kernels that make up the Huffman
//! codec. Each kernel owns one stage of the pipeline; the orchestrator in
//! `codec_pipeline` is the only place that chains them together.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Stage 1: Modelling
pub mod frequency;

/// Stage 2: Prefix Code Construction
pub mod tree;
pub mod code_table;

/// Stage 3: Bit Serialization
pub mod bitpack;

//==================================================================================
// 2. Re-exports
//==================================================================================

pub use bitpack::{pack, unpack, PackedBits};
pub use code_table::{Code, CodeTable};
pub use frequency::FrequencyTable;
pub use tree::{HuffNode, HuffmanTree};
