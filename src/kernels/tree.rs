//! This module contains the kernel that builds a Huffman prefix tree from a
//! `FrequencyTable` via the classic greedy merge.
//!
//! Merge order is fully determined by `MergeKey`, so an identical frequency
//! table always produces an identical tree. The decoder depends on this: it
//! rebuilds the tree from the stored table and must arrive at the same codes
//! the encoder used.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::HuffpackError;
use crate::kernels::frequency::FrequencyTable;
use crate::Symbol;

//==================================================================================
// 1. Tree Nodes
//==================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// Joins two subtrees. `left` is the node popped first (the smaller one).
    fn merge(left: HuffNode, right: HuffNode) -> HuffNode {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn count_leaves(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.count_leaves() + right.count_leaves(),
        }
    }
}

//==================================================================================
// 2. Priority Ordering
//==================================================================================

/// Total ordering used by the merge queue: weight first, then leaves before
/// internal nodes, then symbol value (leaves) or creation order (internal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MergeKey {
    weight: u64,
    class: u8,
    tiebreak: u64,
}

impl MergeKey {
    const LEAF: u8 = 0;
    const INTERNAL: u8 = 1;
}

/// A queued subtree. Equality and ordering look only at the key.
#[derive(Debug)]
struct QueueEntry {
    key: MergeKey,
    node: HuffNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

//==================================================================================
// 3. Tree Construction
//==================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    /// Builds the prefix tree for `freqs`.
    ///
    /// A single-symbol table produces a tree whose root is that leaf; no merge
    /// takes place.
    pub fn build(freqs: &FrequencyTable) -> Result<Self, HuffpackError> {
        if freqs.is_empty() {
            return Err(HuffpackError::EmptyInput);
        }

        let mut queue: BinaryHeap<Reverse<QueueEntry>> = freqs
            .iter()
            .map(|(symbol, weight)| {
                Reverse(QueueEntry {
                    key: MergeKey {
                        weight,
                        class: MergeKey::LEAF,
                        tiebreak: symbol as u64,
                    },
                    node: HuffNode::Leaf { symbol, weight },
                })
            })
            .collect();

        let mut next_internal_id: u64 = 0;
        while queue.len() > 1 {
            let (Some(Reverse(first)), Some(Reverse(second))) = (queue.pop(), queue.pop()) else {
                return Err(HuffpackError::InternalError(
                    "Merge queue drained while more than one node remained".to_string(),
                ));
            };

            let merged = HuffNode::merge(first.node, second.node);
            queue.push(Reverse(QueueEntry {
                key: MergeKey {
                    weight: merged.weight(),
                    class: MergeKey::INTERNAL,
                    tiebreak: next_internal_id,
                },
                node: merged,
            }));
            next_internal_id += 1;
        }

        let Reverse(root) = queue
            .pop()
            .ok_or_else(|| HuffpackError::InternalError("Merge queue is empty".to_string()))?;

        log::debug!(
            "huffman tree: {} leaves, {} merges, root weight {}",
            freqs.len(),
            next_internal_id,
            root.node.weight()
        );

        Ok(Self { root: root.node })
    }

    pub fn leaf_count(&self) -> usize {
        self.root.count_leaves()
    }
}
