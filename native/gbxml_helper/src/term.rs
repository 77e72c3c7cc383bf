//! Elixir Term Conversion Utilities
//!
//! Decodes element tuples coming from Elixir and encodes scan results.
//!
//! Elements use the DOM term shape `{:element, name, attrs, children}`.
//! Only element tuples count as children; text binaries, `{:comment, _}`
//! and `{:pi, _}` entries in the children list are skipped.

use rustler::types::list::ListIterator;
use rustler::types::tuple::get_tuple;
use rustler::{Atom, Encoder, Env, Error, NewBinary, NifResult, Term};

use crate::dom::ElementAccess;
use crate::scan::TagTally;

rustler::atoms! {
    element,
}

/// Shallow, borrowed view of an element tuple: its tag and its children's tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTerm<'a> {
    tag: &'a str,
    child_tags: Vec<&'a str>,
}

impl<'a> ElementTerm<'a> {
    /// Build a view from already-extracted tags
    pub fn new(tag: &'a str, child_tags: Vec<&'a str>) -> Self {
        ElementTerm { tag, child_tags }
    }

    /// Decode `{:element, name, attrs, children}`, one level deep.
    ///
    /// Anything not of that shape, or an element child that is itself
    /// malformed, is `badarg`.
    pub fn from_term(term: Term<'a>) -> NifResult<Self> {
        let fields = match split_entry(term) {
            (EntryShape::Element, fields) => fields,
            _ => return Err(Error::BadArg),
        };
        let tag: &'a str = fields[1].decode()?;

        let children: ListIterator<'a> = fields[3].decode()?;
        let mut child_tags = Vec::new();
        for child in children {
            match split_entry(child) {
                (EntryShape::Element, child_fields) => {
                    child_tags.push(child_fields[1].decode::<&'a str>()?);
                }
                (EntryShape::Other, _) => continue,
                (EntryShape::Malformed, _) => return Err(Error::BadArg),
            }
        }

        Ok(ElementTerm { tag, child_tags })
    }
}

impl ElementAccess for ElementTerm<'_> {
    fn tag(&self) -> &str {
        self.tag
    }

    fn child_tags(&self) -> impl Iterator<Item = &str> {
        self.child_tags.iter().copied()
    }
}

/// How a term in element position is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryShape {
    /// `{:element, name, attrs, children}`
    Element,
    /// Text, comment, PI or anything else that is not an element
    Other,
    /// Tagged `:element` but not four fields
    Malformed,
}

/// Classify by tuple arity (`None` if not a tuple) and whether the first
/// field is the `:element` atom
fn entry_shape(arity: Option<usize>, headed_by_element: bool) -> EntryShape {
    match arity {
        Some(_) if !headed_by_element => EntryShape::Other,
        Some(4) => EntryShape::Element,
        Some(_) => EntryShape::Malformed,
        None => EntryShape::Other,
    }
}

/// Classify a term and hand back its tuple fields
fn split_entry(term: Term<'_>) -> (EntryShape, Vec<Term<'_>>) {
    if !term.is_tuple() {
        return (entry_shape(None, false), Vec::new());
    }
    let fields = get_tuple(term).unwrap_or_default();
    let headed_by_element = fields.first().is_some_and(|&head| is_element_tag(head));
    (entry_shape(Some(fields.len()), headed_by_element), fields)
}

#[inline]
fn is_element_tag(term: Term<'_>) -> bool {
    term.decode::<Atom>().is_ok_and(|atom| atom == element())
}

/// Convert a tally to `{[tag_binary], [count]}`
pub fn tally_to_term<'a>(env: Env<'a>, tally: TagTally<'_>) -> Term<'a> {
    let (tags, counts) = tally.into_parts();

    let mut tag_list = Term::list_new_empty(env);
    for tag in tags.into_iter().rev() {
        tag_list = tag_list.list_prepend(str_to_binary(env, tag));
    }

    (tag_list, counts).encode(env)
}

/// Convert a string to a binary term (more efficient than .encode())
#[inline]
pub fn str_to_binary<'a>(env: Env<'a>, s: &str) -> Term<'a> {
    let bytes = s.as_bytes();
    let mut binary = NewBinary::new(env, bytes.len());
    binary.as_mut_slice().copy_from_slice(bytes);
    binary.into()
}
