//! One-shot Huffman analysis of a text.
//!
//! [`Analysis`] owns the frequency table, tree and code table derived from a
//! single input. It is built once and only read afterwards.

use crate::codes::CodeTable;
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::stats::CompressionStats;
use crate::tree::HuffmanTree;

/// Frequencies, tree and codes for one input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    codes: CodeTable,
}

impl Analysis {
    /// Analyse `text`. Fails with [`crate::HuffError::EmptyInput`] on empty text.
    pub fn new(text: &str) -> Result<Self> {
        Self::from_frequencies(FrequencyTable::from_text(text))
    }

    /// Build the tree and codes for an existing frequency table.
    pub fn from_frequencies(frequencies: FrequencyTable) -> Result<Self> {
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::from_tree(&tree);
        Ok(Self {
            frequencies,
            tree,
            codes,
        })
    }

    /// Symbol counts.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The Huffman tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The code table.
    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    /// Size statistics.
    pub fn stats(&self) -> CompressionStats {
        CompressionStats::compute(&self.frequencies, &self.codes)
    }

    /// Encode `text` with this analysis' codes.
    pub fn encode(&self, text: &str) -> Result<String> {
        self.codes.encode(text)
    }
}
