//! Rust-side callers scanning their own trees

use gbxml_helper::dom::namespace::{local_tag, ns, qualify};
use gbxml_helper::dom::{ElementAccess, XmlElement};
use gbxml_helper::scan::{find_the_key, search_its_idx, TagTally};

fn building() -> XmlElement {
    XmlElement::gbxml("Building")
        .with_child(XmlElement::gbxml("Name"))
        .with_child(XmlElement::gbxml("Area"))
        .with_child(XmlElement::gbxml("Space"))
        .with_child(XmlElement::gbxml("Space"))
        .with_child(XmlElement::gbxml("BuildingStorey"))
        .with_child(XmlElement::gbxml("Space"))
}

#[test]
fn test_search_owned_tree() {
    let node = building();
    assert_eq!(local_tag(node.tag()), "Building");
    assert_eq!(search_its_idx(&node, "Space"), Some(2));
    assert_eq!(search_its_idx(&node, "BuildingStorey"), Some(4));
    assert_eq!(search_its_idx(&node, "Spa"), None);
}

#[test]
fn test_tally_owned_tree() {
    let node = building();
    let (tags, counts) = find_the_key(&node);
    assert_eq!(tags, vec!["Name", "Area", "Space", "BuildingStorey"]);
    assert_eq!(counts, vec![1, 1, 3, 1]);
}

#[test]
fn test_tally_accessors() {
    let node = building();
    let tally = TagTally::from_element(&node);
    assert_eq!(tally.len(), 4);
    assert_eq!(tally.total(), node.len());
    assert_eq!(tally.count("Space"), Some(3));
    assert_eq!(tally.count("Surface"), None);
    assert_eq!(
        tally.tags().collect::<Vec<_>>(),
        vec!["Name", "Area", "Space", "BuildingStorey"]
    );
    assert_eq!(tally.counts().sum::<usize>(), 6);
    assert_eq!(tally.iter().nth(2), Some(("Space", 3)));
}

#[test]
fn test_qualify_matches_namespace() {
    let tag = qualify("Opening");
    assert_eq!(tag, format!("{}Opening", ns::GBXML_PREFIX));

    let mut surface = XmlElement::gbxml("Surface");
    surface.push(XmlElement::new(tag));
    surface.push(XmlElement::new("Opening"));
    assert_eq!(search_its_idx(&surface, "Opening"), Some(0));
    assert_eq!(TagTally::from_element(&surface).count("Opening"), Some(2));
}
