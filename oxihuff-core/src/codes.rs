//! Code table derivation.
//!
//! Codes are read off the tree by a left-first walk: a left edge appends
//! `'0'`, a right edge appends `'1'`. A tree that is a single leaf assigns
//! that symbol the one-bit code `"0"` so that no code is ever empty.

use crate::error::{HuffError, Result};
use crate::frequency::FrequencyTable;
use crate::tree::{HuffNode, HuffmanTree};
use std::collections::BTreeMap;

/// Code assigned to the only symbol of a single-leaf tree.
pub const SINGLE_SYMBOL_CODE: &str = "0";

/// Mapping from symbol to its bit-string code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, String>,
}

impl CodeTable {
    /// Derive the code table of a tree.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        match tree.root() {
            HuffNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, SINGLE_SYMBOL_CODE.to_string());
            }
            root => {
                let mut path = String::new();
                collect_codes(root, &mut path, &mut codes);
            }
        }
        Self { codes }
    }

    /// Code of `symbol`, if it has one.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Code length of `symbol` in bits.
    pub fn code_len(&self, symbol: char) -> Option<usize> {
        self.codes.get(&symbol).map(String::len)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Longest code length, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Check that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In sorted order, a code that prefixes others sorts directly before
        // one of them, so comparing neighbours is enough.
        let mut sorted: Vec<&str> = self.codes.values().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Concatenate the codes of every symbol in `text`.
    ///
    /// Fails with [`HuffError::UnknownSymbol`] on the first symbol that has
    /// no code.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut bits = String::with_capacity(text.len() * self.max_code_len().max(1));
        for (position, symbol) in text.chars().enumerate() {
            let code = self
                .get(symbol)
                .ok_or_else(|| HuffError::unknown_symbol(symbol, position))?;
            bits.push_str(code);
        }
        Ok(bits)
    }

    /// Total encoded size in bits of the text `frequencies` was built from.
    ///
    /// Symbols without a code contribute nothing.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.code_len(symbol).map(|len| count * len as u64))
            .sum()
    }
}

fn collect_codes(node: &HuffNode, path: &mut String, codes: &mut BTreeMap<char, String>) {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            codes.insert(*symbol, path.clone());
        }
        HuffNode::Internal { left, right, .. } => {
            path.push('0');
            collect_codes(left, path, codes);
            path.pop();

            path.push('1');
            collect_codes(right, path, codes);
            path.pop();
        }
    }
}
