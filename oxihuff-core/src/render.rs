//! Text rendering of Huffman trees.
//!
//! ```text
//! └─* (5)
//!   ├─'b' (2)
//!   └─'a' (3)
//! ```
//!
//! Nodes are written in pre-order, left subtree before right. The root and
//! every right child use the closing connector.

use crate::tree::{HuffNode, HuffmanTree};
use std::fmt::{self, Write};

const BRANCH: &str = "├─";
const LAST_BRANCH: &str = "└─";
const PIPE_INDENT: &str = "│ ";
const BLANK_INDENT: &str = "  ";

/// Render `tree` as an indented multi-line string.
pub fn render_tree(tree: &HuffmanTree) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, tree);
    out
}

/// Write `tree` to any formatter sink.
pub fn write_tree<W: Write>(out: &mut W, tree: &HuffmanTree) -> fmt::Result {
    let mut indent = String::new();
    write_node(out, tree.root(), &mut indent, true)
}

fn write_node<W: Write>(
    out: &mut W,
    node: &HuffNode,
    indent: &mut String,
    last: bool,
) -> fmt::Result {
    let connector = if last { LAST_BRANCH } else { BRANCH };
    match node {
        HuffNode::Leaf { symbol, weight } => {
            writeln!(out, "{indent}{connector}'{}' ({weight})", symbol.escape_debug())
        }
        HuffNode::Internal {
            weight,
            left,
            right,
        } => {
            writeln!(out, "{indent}{connector}* ({weight})")?;

            let saved = indent.len();
            indent.push_str(if last { BLANK_INDENT } else { PIPE_INDENT });
            write_node(out, left, indent, false)?;
            write_node(out, right, indent, true)?;
            indent.truncate(saved);
            Ok(())
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tree(f, self)
    }
}

/// Human-readable label for a symbol in tables.
///
/// A space is shown quoted so the column is not blank; control characters
/// are escaped.
pub fn symbol_label(symbol: char) -> String {
    if symbol == ' ' {
        "' '".to_string()
    } else {
        symbol.escape_debug().to_string()
    }
}
