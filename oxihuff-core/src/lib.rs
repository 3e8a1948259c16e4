//! # OxiHuff Core
//!
//! Huffman coding of text: frequency analysis, prefix-code tree
//! construction, code derivation and size statistics.
//!
//! - [`frequency`]: Symbol occurrence counting
//! - [`tree`]: Huffman tree construction
//! - [`codes`]: Bit-string code tables derived from a tree
//! - [`stats`]: Original vs. compressed size figures
//! - [`render`]: Indented text rendering of a tree
//! - [`analysis`]: All of the above for one input text
//! - [`error`]: Error types
//!
//! ## Pipeline
//!
//! ```text
//! text ──► FrequencyTable ──► HuffmanTree ──► CodeTable ──► CompressionStats
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxihuff_core::{Analysis, HuffError};
//!
//! let analysis = Analysis::new("aaabb").unwrap();
//! assert_eq!(analysis.codes().get('a'), Some("1"));
//! assert_eq!(analysis.codes().get('b'), Some("0"));
//!
//! let stats = analysis.stats();
//! assert_eq!(stats.original_bits, 40);
//! assert_eq!(stats.compressed_bits, 5);
//!
//! assert_eq!(Analysis::new(""), Err(HuffError::EmptyInput));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod codes;
pub mod error;
pub mod frequency;
pub mod render;
pub mod stats;
pub mod tree;

// Re-exports for convenience
pub use analysis::Analysis;
pub use codes::{CodeTable, SINGLE_SYMBOL_CODE};
pub use error::{HuffError, Result};
pub use frequency::FrequencyTable;
pub use render::{render_tree, symbol_label};
pub use stats::{CompressionStats, ORIGINAL_BITS_PER_SYMBOL};
pub use tree::{HuffNode, HuffmanTree};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::Analysis;
    pub use crate::codes::CodeTable;
    pub use crate::error::{HuffError, Result};
    pub use crate::frequency::FrequencyTable;
    pub use crate::stats::CompressionStats;
    pub use crate::tree::{HuffNode, HuffmanTree};
}
