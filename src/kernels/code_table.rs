//! This module derives the forward (symbol -> code) and reverse (code -> symbol)
//! mappings from a `HuffmanTree`.
//!
//! Codes are stored as `BitVec<u8, Msb0>` so they can be appended directly to the
//! output stream and used as lookup keys while decoding.

use std::collections::BTreeMap;

use bitvec::prelude::*;
use hashbrown::HashMap;

use crate::error::HuffpackError;
use crate::kernels::tree::{HuffNode, HuffmanTree};
use crate::Symbol;

/// A single prefix code, most significant (first emitted) bit first.
pub type Code = BitVec<u8, Msb0>;

#[derive(Debug, Clone)]
pub struct CodeTable {
    forward: BTreeMap<Symbol, Code>,
    reverse: HashMap<Code, Symbol>,
    max_code_len: usize,
}

impl CodeTable {
    /// Walks the tree, appending `0` for every left edge and `1` for every right
    /// edge. A tree consisting of one leaf assigns that symbol the code `0`.
    pub fn derive(tree: &HuffmanTree) -> Self {
        let mut forward = BTreeMap::new();

        match &tree.root {
            HuffNode::Leaf { symbol, .. } => {
                forward.insert(*symbol, bitvec![u8, Msb0; 0]);
            }
            root @ HuffNode::Internal { .. } => {
                let mut path = Code::new();
                collect_codes(root, &mut path, &mut forward);
            }
        }

        let reverse = forward
            .iter()
            .map(|(&symbol, code)| (code.clone(), symbol))
            .collect();
        let max_code_len = forward.values().map(|code| code.len()).max().unwrap_or(0);

        Self {
            forward,
            reverse,
            max_code_len,
        }
    }

    /// The code for `symbol`, or `UnsupportedSymbol` if it was not in the
    /// frequency table this code table was derived from.
    pub fn code(&self, symbol: Symbol) -> Result<&Code, HuffpackError> {
        self.forward
            .get(&symbol)
            .ok_or(HuffpackError::UnsupportedSymbol(symbol as u32))
    }

    pub fn symbol_for(&self, code: &Code) -> Option<Symbol> {
        self.reverse.get(code).copied()
    }

    /// Length of the longest code. No accumulator longer than this can match.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Iterates `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.forward.iter().map(|(&symbol, code)| (symbol, code))
    }
}

fn collect_codes(node: &HuffNode, path: &mut Code, out: &mut BTreeMap<Symbol, Code>) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            out.insert(*symbol, path.clone());
        }
        HuffNode::Internal { left, right, .. } => {
            path.push(false);
            collect_codes(left, path, out);
            path.pop();

            path.push(true);
            collect_codes(right, path, out);
            path.pop();
        }
    }
}

/// Renders a code as a string of `'0'`/`'1'` characters.
pub fn code_to_string(code: &BitSlice<u8, Msb0>) -> String {
    code.iter().by_vals().map(|bit| if bit { '1' } else { '0' }).collect()
}
