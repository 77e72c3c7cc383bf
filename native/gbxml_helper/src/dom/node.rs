//! Owned XML element
//!
//! Minimal tree node for Rust callers: a tag plus ordered element children.

use super::namespace::qualify;
use super::ElementAccess;

/// An element with ordered element children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag as produced by the tree builder (may be Clark-qualified)
    pub tag: String,
    /// Element children in document order
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create a childless element with the given tag
    pub fn new(tag: impl Into<String>) -> Self {
        XmlElement {
            tag: tag.into(),
            children: Vec::new(),
        }
    }

    /// Create a childless element in the gbXML namespace
    pub fn gbxml(local: &str) -> Self {
        XmlElement::new(qualify(local))
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child
    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Element children in document order
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// Number of element children
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if this element has no children
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<T: Into<String>> FromIterator<T> for XmlElement {
    /// Build an anonymous parent whose children carry the given tags
    fn from_iter<I: IntoIterator<Item = T>>(tags: I) -> Self {
        XmlElement {
            tag: String::new(),
            children: tags.into_iter().map(XmlElement::new).collect(),
        }
    }
}

impl ElementAccess for XmlElement {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn child_tags(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.tag.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::namespace::ns;

    #[test]
    fn test_element_creation() {
        let elem = XmlElement::new("Campus");
        assert_eq!(elem.tag(), "Campus");
        assert!(elem.is_empty());
    }

    #[test]
    fn test_gbxml_element() {
        let elem = XmlElement::gbxml("Building");
        assert_eq!(elem.tag, format!("{}Building", ns::GBXML_PREFIX));
    }

    #[test]
    fn test_child_order() {
        let mut campus = XmlElement::gbxml("Campus")
            .with_child(XmlElement::gbxml("Location"))
            .with_child(XmlElement::gbxml("Building"));
        campus.push(XmlElement::gbxml("Surface"));

        assert_eq!(campus.len(), 3);
        let tags: Vec<_> = campus.child_tags().collect();
        assert_eq!(tags[0], qualify("Location"));
        assert_eq!(tags[1], qualify("Building"));
        assert_eq!(tags[2], qualify("Surface"));
    }

    #[test]
    fn test_from_tags() {
        let node: XmlElement = ["A", "B"].into_iter().collect();
        assert_eq!(node.tag(), "");
        assert_eq!(node.child_tags().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_grandchildren_not_listed() {
        let node = XmlElement::new("root")
            .with_child(XmlElement::new("a").with_child(XmlElement::new("b")));
        assert_eq!(node.child_tags().collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(node.children()[0].len(), 1);
    }
}
