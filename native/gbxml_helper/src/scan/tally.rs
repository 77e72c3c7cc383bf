//! Child Tag Tally
//!
//! Distinct local tags among an element's direct children, in first-seen
//! order, with how often each occurs. Keys borrow from the scanned node.

use indexmap::IndexMap;

use crate::dom::{local_tag, ElementAccess};

/// Insertion-ordered count of local tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTally<'a> {
    counts: IndexMap<&'a str, usize>,
}

impl<'a> TagTally<'a> {
    /// Create an empty tally
    pub fn new() -> Self {
        TagTally {
            counts: IndexMap::new(),
        }
    }

    /// Tally the children of `node` in a single left-to-right pass
    pub fn from_element<E: ElementAccess>(node: &'a E) -> Self {
        let mut tally = TagTally::new();
        for tag in node.child_tags() {
            tally.record(tag);
        }
        tally
    }

    /// Count one child tag (namespace prefix stripped)
    pub fn record(&mut self, tag: &'a str) {
        *self.counts.entry(local_tag(tag)).or_insert(0) += 1;
    }

    /// Distinct local tags in first-seen order
    pub fn tags(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.counts.keys().copied()
    }

    /// Counts, parallel to `tags()`
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.values().copied()
    }

    /// `(tag, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, usize)> + '_ {
        self.counts.iter().map(|(&tag, &n)| (tag, n))
    }

    /// Occurrences of a local tag, if it was seen at all
    pub fn count(&self, tag: &str) -> Option<usize> {
        self.counts.get(tag).copied()
    }

    /// Number of distinct tags
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no tags were recorded
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of children recorded
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Split into the two parallel sequences
    pub fn into_parts(self) -> (Vec<&'a str>, Vec<usize>) {
        self.counts.into_iter().unzip()
    }
}

/// Distinct local child tags and their counts, as two parallel sequences.
///
/// A childless node gives `([], [])`.
pub fn find_the_key<E: ElementAccess>(node: &E) -> (Vec<&str>, Vec<usize>) {
    TagTally::from_element(node).into_parts()
}
