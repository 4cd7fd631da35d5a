//! Shared types for lexicon-based word counting over Hindi text.
//!
//! [`CategoryCounts`] is the sparse accumulator produced by an analysis pass:
//! it only ever holds labels that were actually hit, and every stored count is
//! at least one. [`DEVANAGARI`] is the Unicode block that tokenization and
//! normalization accept whole, in addition to letters and numbers.
//!
//! ```rust
//! use liwc_types::{CategoryCounts, DEVANAGARI};
//!
//! let mut counts = CategoryCounts::new();
//! counts.increment("family");
//! counts.increment("family");
//! assert_eq!(counts.get("family"), 2);
//! assert_eq!(counts.get("work"), 0);
//! assert!(DEVANAGARI.contains(&'घ'));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::ops::RangeInclusive;

/// The Devanagari Unicode block.
pub const DEVANAGARI: RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Per-category occurrence counts, ordered by label.
///
/// Zero-valued entries are never stored: a label is present only after at
/// least one [`increment`](Self::increment).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CategoryCounts {
    counts: BTreeMap<String, usize>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    /// Add `n` occurrences of `label`; `n == 0` leaves the map untouched.
    pub fn add(&mut self, label: &str, n: usize) {
        if n == 0 {
            return;
        }
        match self.counts.get_mut(label) {
            Some(count) => *count += n,
            None => {
                self.counts.insert(label.to_string(), n);
            }
        }
    }

    /// Count for `label`, or zero when it was never seen.
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.counts.contains_key(label)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(label, n)| (label.as_str(), *n))
    }

    /// Borrow the underlying ordered map.
    pub fn as_map(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    pub fn into_map(self) -> BTreeMap<String, usize> {
        self.counts
    }
}

impl<'a> IntoIterator for &'a CategoryCounts {
    type Item = (&'a String, &'a usize);
    type IntoIter = btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CategoryCounts {
    /// Count each label once per occurrence in the iterator.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut counts = CategoryCounts::new();
        for label in iter {
            counts.increment(label.as_ref());
        }
        counts
    }
}
