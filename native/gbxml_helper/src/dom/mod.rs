//! DOM Module - Element access for child scans
//!
//! The scans never own a tree. They read one element and the tags of its
//! direct children through `ElementAccess`, which is implemented for:
//! - `XmlElement`: owned tree nodes built on the Rust side
//! - `term::ElementTerm`: element tuples handed in from Elixir

pub mod namespace;
pub mod node;

pub use namespace::{local_tag, qualify};
pub use node::XmlElement;

/// Trait for element access - lets the scans work over any caller-owned tree
pub trait ElementAccess {
    /// Tag of this element, possibly namespace-qualified
    fn tag(&self) -> &str;

    /// Tags of the direct element children, in document order
    fn child_tags(&self) -> impl Iterator<Item = &str>;
}
