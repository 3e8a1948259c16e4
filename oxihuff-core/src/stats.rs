//! Compression statistics.

use crate::codes::CodeTable;
use crate::frequency::FrequencyTable;
use serde::Serialize;

/// Bits per symbol in the uncompressed representation.
pub const ORIGINAL_BITS_PER_SYMBOL: u64 = 8;

/// Size figures comparing fixed-width and Huffman-coded representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompressionStats {
    /// Number of symbols in the input.
    #[serde(rename = "text_length")]
    pub symbol_count: u64,
    /// Number of distinct symbols.
    pub distinct_symbols: usize,
    /// Uncompressed size in bits.
    pub original_bits: u64,
    /// Huffman-coded size in bits.
    pub compressed_bits: u64,
}

impl CompressionStats {
    /// Compute statistics for the text `frequencies` was built from.
    pub fn compute(frequencies: &FrequencyTable, codes: &CodeTable) -> Self {
        Self {
            symbol_count: frequencies.total(),
            distinct_symbols: frequencies.len(),
            original_bits: original_bits(frequencies),
            compressed_bits: codes.encoded_bits(frequencies),
        }
    }

    /// Compressed size over original size (0.0 for empty input).
    pub fn ratio(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            self.compressed_bits as f64 / self.original_bits as f64
        }
    }

    /// Space savings as a percentage (0.0 for empty input).
    pub fn space_savings(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            (1.0 - self.ratio()) * 100.0
        }
    }

    /// Mean code length in bits per symbol (0.0 for empty input).
    pub fn average_code_length(&self) -> f64 {
        if self.symbol_count == 0 {
            0.0
        } else {
            self.compressed_bits as f64 / self.symbol_count as f64
        }
    }
}

/// Uncompressed size in bits: every symbol costs [`ORIGINAL_BITS_PER_SYMBOL`].
pub fn original_bits(frequencies: &FrequencyTable) -> u64 {
    frequencies.total() * ORIGINAL_BITS_PER_SYMBOL
}
