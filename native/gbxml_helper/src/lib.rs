//! gbxml_helper - Child scans for gbXML elements
//!
//! Operations:
//! - search_its_idx: index of the first child with a given local tag
//! - find_the_key: distinct local child tags with counts, first-seen order
//!
//! Tags in the gbXML namespace (`{http://www.gbxml.org/schema}Surface`) are
//! compared by local name. Both scans read direct children only.

use rustler::{Env, NifResult, Term};

pub mod dom;
pub mod scan;
pub mod term;

use scan::TagTally;
use term::{str_to_binary, tally_to_term, ElementTerm};

// ============================================================================
// Allocator Configuration
// ============================================================================

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

// ============================================================================
// Child Scans
// ============================================================================

/// Index of the first child element whose local tag equals `tag`, or nil
#[rustler::nif]
fn search_its_idx<'a>(node: Term<'a>, tag: &str) -> NifResult<Option<usize>> {
    let element = ElementTerm::from_term(node)?;
    Ok(scan::search_its_idx(&element, tag))
}

/// Distinct local child tags and their counts as `{tags, counts}`
#[rustler::nif]
fn find_the_key<'a>(env: Env<'a>, node: Term<'a>) -> NifResult<Term<'a>> {
    let element = ElementTerm::from_term(node)?;
    let tally = TagTally::from_element(&element);
    Ok(tally_to_term(env, tally))
}

/// Strip the gbXML namespace prefix from a tag
#[rustler::nif]
fn local_tag<'a>(env: Env<'a>, tag: &str) -> Term<'a> {
    str_to_binary(env, dom::local_tag(tag))
}

// ============================================================================
// NIF Initialization
// ============================================================================

rustler::init!("Elixir.GbxmlHelper.Native");
