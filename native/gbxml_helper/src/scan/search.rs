//! Child Index Lookup
//!
//! Position of the first direct child whose local tag equals a target.

use crate::dom::{local_tag, ElementAccess};

/// Find the index of the first child whose local tag is exactly `tag`.
///
/// Returns `None` when nothing matches, including for a childless node.
/// Later duplicates are never reported.
pub fn search_its_idx<E: ElementAccess>(node: &E, tag: &str) -> Option<usize> {
    node.child_tags().position(|child| local_tag(child) == tag)
}
