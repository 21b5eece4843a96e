//! This module contains the pure, stateless kernel for counting symbol
//! occurrences in an input buffer.
//!
//! The resulting `FrequencyTable` is the only model information the container
//! persists, so it must be reconstructible bit-for-bit from the header.

use std::collections::BTreeMap;

use crate::error::HuffpackError;
use crate::Symbol;

/// Symbol -> occurrence count, iterated in ascending symbol order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    /// Counts every byte of `input`. An empty input yields an empty table.
    pub fn build(input: &[u8]) -> Self {
        let mut histogram = [0u64; 256];
        for &byte in input {
            histogram[byte as usize] += 1;
        }

        let counts = histogram
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(symbol, &count)| (symbol as Symbol, count))
            .collect();

        Self { counts }
    }

    /// Rebuilds a table from explicit `(symbol, count)` pairs, as read from a
    /// container header.
    pub fn from_counts<I>(pairs: I) -> Result<Self, HuffpackError>
    where
        I: IntoIterator<Item = (Symbol, u64)>,
    {
        let mut counts = BTreeMap::new();
        let mut total: u64 = 0;
        for (symbol, count) in pairs {
            if count == 0 {
                return Err(HuffpackError::FrameFormat(format!(
                    "Symbol {} stored with a zero frequency",
                    symbol
                )));
            }
            // Merged node weights are bounded by this total.
            total = total.checked_add(count).ok_or_else(|| {
                HuffpackError::FrameFormat("Stored frequencies overflow a u64 total".to_string())
            })?;
            if counts.insert(symbol, count).is_some() {
                return Err(HuffpackError::FrameFormat(format!(
                    "Symbol {} stored more than once",
                    symbol
                )));
            }
        }
        Ok(Self { counts })
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Sum of all counts, i.e. the length of the input the table was built from.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
