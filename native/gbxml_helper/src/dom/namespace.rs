//! gbXML Namespace Handling
//!
//! Tags coming out of a namespace-aware tree are Clark-qualified:
//! `{http://www.gbxml.org/schema}Surface`. Both scans compare local tags,
//! so the prefix is stripped here and nowhere else.

/// Well-known namespace strings
pub mod ns {
    /// gbXML schema namespace URI
    pub const GBXML: &str = "http://www.gbxml.org/schema";
    /// Clark-notation prefix for gbXML tags (`{` + URI + `}`)
    pub const GBXML_PREFIX: &str = "{http://www.gbxml.org/schema}";
}

/// Strip the gbXML namespace prefix from a tag.
///
/// Purely textual: a tag without the prefix is returned unchanged, and
/// nothing else about the tag is checked. Only one leading prefix is
/// removed, so `{ns}{ns}Surface` becomes `{ns}Surface`.
#[inline]
pub fn local_tag(tag: &str) -> &str {
    tag.strip_prefix(ns::GBXML_PREFIX).unwrap_or(tag)
}

/// Qualify a local name with the gbXML namespace
pub fn qualify(local: &str) -> String {
    let mut tag = String::with_capacity(ns::GBXML_PREFIX.len() + local.len());
    tag.push_str(ns::GBXML_PREFIX);
    tag.push_str(local);
    tag
}
