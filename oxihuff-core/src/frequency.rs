//! Symbol frequency analysis.
//!
//! A [`FrequencyTable`] counts how often each distinct `char` occurs in the
//! input. Keys are kept in a `BTreeMap`, so iteration is always by ascending
//! symbol, which the tree builder relies on for a reproducible tie-break.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// Mapping from symbol to occurrence count.
///
/// Every key has a count of at least 1 and the counts sum to the number of
/// symbols the table was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
    total: u64,
}

impl FrequencyTable {
    /// Count the symbols of a text.
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }

    /// Count an arbitrary sequence of symbols.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts = BTreeMap::new();
        let mut total = 0u64;
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0u64) += 1;
            total += 1;
        }

        tracing::trace!(distinct = counts.len(), total, "counted symbol frequencies");

        Self { counts, total }
    }

    /// Occurrence count of `symbol`, or `None` if it never occurred.
    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Whether `symbol` occurred at least once.
    pub fn contains(&self, symbol: char) -> bool {
        self.counts.contains_key(&symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True if the table was built from empty input.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the input length in symbols).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Symbols in ascending order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }
}

/// Iterator over the entries of a [`FrequencyTable`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, char, u64>,
}

impl Iterator for Iter<'_> {
    type Item = (char, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&symbol, &count)| (symbol, count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (char, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}
