//! Huffman tree construction.
//!
//! The tree is built by greedy minimum-weight merging. Nodes waiting to be
//! merged sit in a `BinaryHeap` keyed on `(weight, sequence)`:
//!
//! - leaves get sequence numbers `0..n` in ascending symbol order;
//! - each internal node gets the next sequence number when it is created.
//!
//! Among nodes of equal weight the lower sequence number is taken first, so
//! leaves precede internal nodes and older internal nodes precede newer ones.
//! The first node taken in a merge becomes the left child.

use crate::error::{HuffError, Result};
use crate::frequency::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    /// A symbol and its frequency.
    Leaf {
        /// The symbol.
        symbol: char,
        /// Occurrence count.
        weight: u64,
    },
    /// A merge of two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached by a `0` bit.
        left: Box<HuffNode>,
        /// Subtree reached by a `1` bit.
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    /// Create a leaf node.
    pub fn leaf(symbol: char, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Merge two nodes; `left` is the one extracted first.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Weight of this node.
    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } | HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// The symbol of a leaf, `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(*symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    /// True for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Left and right children of an internal node.
    pub fn children(&self) -> Option<(&HuffNode, &HuffNode)> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some((left, right)),
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest
/// `(weight, sequence)` first.
#[derive(Debug)]
struct Pending {
    weight: u64,
    sequence: usize,
    node: HuffNode,
}

impl Pending {
    fn new(node: HuffNode, sequence: usize) -> Self {
        Self {
            weight: node.weight(),
            sequence,
            node,
        }
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        (other.weight, other.sequence).cmp(&(self.weight, self.sequence))
    }
}

/// A Huffman tree over `char` symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: HuffNode,
}

impl HuffmanTree {
    /// Build a tree from a frequency table.
    ///
    /// Returns [`HuffError::EmptyInput`] if the table has no symbols. A table
    /// with one symbol yields a tree whose root is that symbol's leaf.
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(HuffError::empty_input());
        }

        let mut heap: BinaryHeap<Pending> = frequencies
            .iter()
            .enumerate()
            .map(|(sequence, (symbol, count))| Pending::new(HuffNode::leaf(symbol, count), sequence))
            .collect();
        let mut next_sequence = heap.len();

        while heap.len() > 1 {
            let (Some(first), Some(second)) = (heap.pop(), heap.pop()) else {
                break;
            };
            let merged = HuffNode::merge(first.node, second.node);
            heap.push(Pending::new(merged, next_sequence));
            next_sequence += 1;
        }

        let root = heap.pop().map(|p| p.node).ok_or(HuffError::EmptyInput)?;

        tracing::debug!(
            symbols = frequencies.len(),
            weight = root.weight(),
            depth = root.depth(),
            "built huffman tree"
        );

        Ok(Self { root })
    }

    /// Count the symbols of `text` and build a tree from them.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::build(&FrequencyTable::from_text(text))
    }

    /// The root node.
    pub fn root(&self) -> &HuffNode {
        &self.root
    }

    /// Total weight (number of symbols the tree was built from).
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Length of the longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// True when the whole tree is a single leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_rejected() {
        let table = FrequencyTable::from_text("");
        assert_eq!(HuffmanTree::build(&table), Err(HuffError::EmptyInput));
    }

    #[test]
    fn test_single_symbol_is_leaf() {
        let tree = HuffmanTree::from_text("aaaa").unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.root(), &HuffNode::leaf('a', 4));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn test_two_symbols() {
        let tree = HuffmanTree::from_text("aaabb").unwrap();
        // 'b' (2) is extracted first and goes left.
        let expected = HuffNode::merge(HuffNode::leaf('b', 2), HuffNode::leaf('a', 3));
        assert_eq!(tree.root(), &expected);
        assert_eq!(tree.weight(), 5);
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn test_equal_weights_fifo() {
        // All weights 1: leaves pair up in symbol order, then the two
        // internal nodes merge oldest-first.
        let tree = HuffmanTree::from_text("abcd").unwrap();
        let ab = HuffNode::merge(HuffNode::leaf('a', 1), HuffNode::leaf('b', 1));
        let cd = HuffNode::merge(HuffNode::leaf('c', 1), HuffNode::leaf('d', 1));
        assert_eq!(tree.root(), &HuffNode::merge(ab, cd));
    }

    #[test]
    fn test_leaf_precedes_internal_on_tie() {
        // a:1 b:1 merge into weight 2, which ties with leaf c:2.
        // The leaf is older, so it is extracted first and goes left.
        let tree = HuffmanTree::from_text("abcc").unwrap();
        let ab = HuffNode::merge(HuffNode::leaf('a', 1), HuffNode::leaf('b', 1));
        assert_eq!(tree.root(), &HuffNode::merge(HuffNode::leaf('c', 2), ab));
    }

    #[test]
    fn test_internal_weights_sum_children() {
        fn check(node: &HuffNode) {
            if let Some((left, right)) = node.children() {
                assert_eq!(node.weight(), left.weight() + right.weight());
                check(left);
                check(right);
            }
        }

        let text = "the quick brown fox jumps over the lazy dog";
        let freqs = FrequencyTable::from_text(text);
        let tree = HuffmanTree::build(&freqs).unwrap();
        check(tree.root());
        assert_eq!(tree.weight(), 43);
        // 26 letters plus the space.
        assert_eq!(tree.leaf_count(), 27);
        assert_eq!(tree.leaf_count(), freqs.len());
    }

    #[test]
    fn test_node_accessors() {
        let leaf = HuffNode::leaf('x', 7);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.symbol(), Some('x'));
        assert!(leaf.children().is_none());

        let node = HuffNode::merge(leaf.clone(), HuffNode::leaf('y', 1));
        assert!(!node.is_leaf());
        assert_eq!(node.symbol(), None);
        assert_eq!(node.weight(), 8);
    }
}
