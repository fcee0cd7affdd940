//! Integration tests for node ownership, nullable properties and deep copies.

use ddldom::prelude::*;
use ddldom::{is_unset_or_empty, Error, Value};

fn sample_document() -> Document {
    let doc = Document::new().unwrap();
    doc.set_comment("sample").unwrap();
    doc.info().unwrap().set_title("Report").unwrap();
    let files = doc.embedded_files().unwrap();
    files.add_file("Spec", "./spec.pdf").unwrap();
    files.add_file("Logo", "./logo.png").unwrap();

    let elements = doc.add_section().unwrap().elements().unwrap();
    let paragraph = elements.add_paragraph("First").unwrap();
    paragraph.set_color(Color::BLUE).unwrap();
    elements.add_page_break().unwrap();
    let image = elements.add_image("chart.png").unwrap();
    image.set_top(TopPosition::Center).unwrap();
    doc
}

#[test]
fn test_deep_copy_is_equal_and_distinct() {
    let doc = sample_document();
    let copy = doc.deep_copy();

    assert_eq!(copy, doc);
    assert!(!copy.node().ptr_eq(doc.node()));
    assert!(copy.parent().is_none());

    let original_nodes = doc.node().children();
    let copied_nodes = copy.node().children();
    assert_eq!(original_nodes.len(), copied_nodes.len());
    for (a, b) in original_nodes.iter().zip(&copied_nodes) {
        assert!(!a.ptr_eq(b));
        assert!(b.parent().unwrap().ptr_eq(copy.node()));
    }
}

#[test]
fn test_mutating_copy_leaves_original() {
    let doc = sample_document();
    let copy = doc.deep_copy();

    copy.set_comment("changed").unwrap();
    copy.info().unwrap().set_title("Other").unwrap();
    let copied_elements = copy.sections().unwrap().get(0).unwrap().elements().unwrap();
    copied_elements
        .get(0)
        .unwrap()
        .as_paragraph()
        .unwrap()
        .set_text("Edited")
        .unwrap();
    copied_elements.remove(1).unwrap();

    assert_eq!(doc.comment(), "sample");
    assert_eq!(doc.info().unwrap().title(), "Report");
    let elements = doc.sections().unwrap().get(0).unwrap().elements().unwrap();
    assert_eq!(elements.len(), 3);
    assert_eq!(elements.get(0).unwrap().as_paragraph().unwrap().text(), "First");
    assert_ne!(copy, doc);
}

#[test]
fn test_deep_copy_preserves_unset_state() {
    let paragraph = Paragraph::with_text("x").unwrap();
    paragraph.set_style("").unwrap();

    let copy = paragraph.deep_copy();
    assert!(!copy.node().is_unset("style").unwrap());
    assert!(copy.node().is_unset("color").unwrap());
    assert!(copy.color().is_unset());
}

#[test]
fn test_is_unset_or_empty_for_every_value_type() {
    assert!(is_unset_or_empty::<String>(None));
    assert!(is_unset_or_empty(Some(&NullableValue::<String>::unset())));
    assert!(!is_unset_or_empty(Some(&NullableValue::new(String::new()))));

    assert!(is_unset_or_empty::<Color>(None));
    assert!(is_unset_or_empty(Some(&NullableValue::<Color>::unset())));
    assert!(!is_unset_or_empty(Some(&NullableValue::new(Color::default()))));

    assert!(is_unset_or_empty::<Unit>(None));
    assert!(is_unset_or_empty(Some(&NullableValue::<Unit>::unset())));
    assert!(!is_unset_or_empty(Some(&NullableValue::new(Unit::default()))));

    assert!(is_unset_or_empty::<TopPosition>(None));
    assert!(is_unset_or_empty(Some(&NullableValue::<TopPosition>::unset())));
    assert!(!is_unset_or_empty(Some(&NullableValue::new(TopPosition::Top))));

    assert!(is_unset_or_empty::<LeftPosition>(None));
    assert!(is_unset_or_empty(Some(&NullableValue::<LeftPosition>::unset())));
    assert!(!is_unset_or_empty(Some(&NullableValue::new(LeftPosition::default()))));

    assert!(is_unset_or_empty::<Node>(None));
    assert!(is_unset_or_empty(Some(&NullableValue::<Node>::unset())));
    let node = Node::new(NodeKind::PageBreak).unwrap();
    assert!(!is_unset_or_empty(Some(&NullableValue::new(node))));
}

#[test]
fn test_slot_containers_from_a_live_node() {
    let image = Image::new("a.png").unwrap();
    let index = image.meta().index_of("width").unwrap();
    assert!(is_unset_or_empty(image.node().values().nullable::<Unit>(index)));

    image.set_width(Unit::from_point(0.0)).unwrap();
    assert!(!is_unset_or_empty(image.node().values().nullable::<Unit>(index)));

    // Wrong type for the slot reads as absent.
    assert!(image.node().values().nullable::<Color>(index).is_none());
}

#[test]
fn test_add_file_keeps_order() {
    let files = EmbeddedFiles::new().unwrap();
    assert!(files.is_empty());
    files.add_file("A", "./a").unwrap();
    files.add_file("B", "./b").unwrap();

    assert_eq!(files.len(), 2);
    assert_eq!(files.get(0).unwrap().name(), "A");
    assert_eq!(files.get(1).unwrap().name(), "B");
    assert!(matches!(
        files.get(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn test_attached_node_cannot_be_inserted_twice() {
    let first = EmbeddedFiles::new().unwrap();
    let second = EmbeddedFiles::new().unwrap();
    let file = first.add_file("A", "./a").unwrap();

    let err = second.add(file.clone()).unwrap_err();
    assert!(matches!(err, Error::AlreadyAttached("EmbeddedFile")));
    assert!(second.is_empty());
    assert!(file.parent().unwrap().ptr_eq(first.node()));

    let removed = first.remove(0).unwrap();
    assert!(removed.parent().is_none());
    second.add(removed).unwrap();
    assert!(file.parent().unwrap().ptr_eq(second.node()));
}

#[test]
fn test_replacing_child_detaches_previous() {
    let doc = Document::new().unwrap();
    let old_info = doc.info().unwrap();
    old_info.set_title("Old").unwrap();

    let new_info = DocumentInfo::create().unwrap();
    new_info.set_title("New").unwrap();
    doc.set_info(new_info.clone()).unwrap();

    assert!(old_info.parent().is_none());
    assert!(new_info.parent().unwrap().ptr_eq(doc.node()));
    assert_eq!(doc.info().unwrap().title(), "New");

    // The detached node is free to join another tree.
    let other = Document::new().unwrap();
    other.set_info(old_info.clone()).unwrap();
    assert!(old_info.parent().unwrap().ptr_eq(other.node()));
}

#[test]
fn test_reset_child_detaches() {
    let doc = Document::new().unwrap();
    let sections = doc.sections().unwrap();

    let previous = doc.node().reset("sections").unwrap();
    assert!(matches!(previous, Some(Value::Node(_))));
    assert!(sections.parent().is_none());
    assert!(doc.node().is_unset("sections").unwrap());
}

#[test]
fn test_typed_access_to_mismatched_element() {
    let elements = DocumentElements::new().unwrap();
    elements.add_page_break().unwrap();

    let err = elements.get_as::<Paragraph>(0).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidRepresentation {
            expected: "Paragraph",
            found: "PageBreak"
        }
    ));
    assert!(elements.get_as::<PageBreak>(0).is_ok());
}

#[test]
fn test_owner_lookup_through_collections() {
    let doc = sample_document();
    let paragraph = doc
        .sections()
        .unwrap()
        .get(0)
        .unwrap()
        .elements()
        .unwrap()
        .get_as::<Paragraph>(0)
        .unwrap();

    let owner = paragraph.node().owner_of::<Document>().unwrap();
    assert!(owner.node().ptr_eq(doc.node()));
    assert!(paragraph.node().root().ptr_eq(doc.node()));
    assert!(doc.node().is_root());
}
