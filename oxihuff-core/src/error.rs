//! Error types for OxiHuff operations.
//!
//! Frequency counting never fails. Building a tree needs at least one
//! symbol, and encoding needs every symbol of the text to have a code.

use thiserror::Error;

/// The main error type for OxiHuff operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffError {
    /// A Huffman tree was requested for a frequency table with no symbols.
    #[error("Empty input: a Huffman tree needs at least one symbol")]
    EmptyInput,

    /// A symbol was looked up that has no code in the table.
    #[error("Unknown symbol {symbol:?} at position {position}: no Huffman code assigned")]
    UnknownSymbol {
        /// The symbol without a code.
        symbol: char,
        /// Index of the symbol in the encoded text (in chars).
        position: usize,
    },
}

/// Result type alias for OxiHuff operations.
pub type Result<T> = std::result::Result<T, HuffError>;

impl HuffError {
    /// Create an empty input error.
    pub fn empty_input() -> Self {
        Self::EmptyInput
    }

    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: char, position: usize) -> Self {
        Self::UnknownSymbol { symbol, position }
    }
}
