//! Child scans over a single element
//!
//! - search: index of the first child with a given local tag
//! - tally: distinct local child tags with counts, first-seen order

pub mod search;
pub mod tally;

pub use search::search_its_idx;
pub use tally::{find_the_key, TagTally};
