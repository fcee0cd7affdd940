//! Integration tests for the visitor pattern.

use ddldom::prelude::*;
use ddldom::render::visitor::{
    walk, CompositeVisitor, DefaultVisitor, DocumentVisitor, VisitorAction,
};

/// Custom visitor that tracks visit counts.
#[derive(Default)]
struct CountingVisitor {
    section_count: usize,
    paragraph_count: usize,
    image_count: usize,
    file_count: usize,
}

impl DocumentVisitor for CountingVisitor {
    fn visit_section(&mut self, _section: &Section) -> VisitorAction {
        self.section_count += 1;
        VisitorAction::Continue
    }

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) -> VisitorAction {
        self.paragraph_count += 1;
        VisitorAction::Continue
    }

    fn visit_image(&mut self, _image: &Image) -> VisitorAction {
        self.image_count += 1;
        VisitorAction::Continue
    }

    fn visit_embedded_file(&mut self, _file: &EmbeddedFile) -> VisitorAction {
        self.file_count += 1;
        VisitorAction::Continue
    }
}

/// Visitor that prunes sections and counts what it still reaches.
#[derive(Default)]
struct SkipSections {
    entered: Vec<String>,
}

impl DocumentVisitor for SkipSections {
    fn enter(&mut self, node: &Node, _depth: usize) -> VisitorAction {
        self.entered.push(node.type_name().to_string());
        if node.kind() == NodeKind::Section {
            VisitorAction::SkipChildren
        } else {
            VisitorAction::Continue
        }
    }
}

fn sample() -> Document {
    let doc = Document::new().unwrap();
    let files = doc.embedded_files().unwrap();
    files.add_file("Spec", "./spec.pdf").unwrap();
    files.add_file("Logo", "./logo.png").unwrap();
    for _ in 0..2 {
        let elements = doc.add_section().unwrap().elements().unwrap();
        elements.add_paragraph("text").unwrap();
        elements.add_image("chart.png").unwrap();
        elements.add_page_break().unwrap();
    }
    doc
}

#[test]
fn test_default_visitor_walks_everything() {
    let mut visitor = DefaultVisitor::new();
    assert!(walk(sample().node(), &mut visitor));
}

#[test]
fn test_counting_visitor() {
    let mut visitor = CountingVisitor::default();
    walk(sample().node(), &mut visitor);

    assert_eq!(visitor.section_count, 2);
    assert_eq!(visitor.paragraph_count, 2);
    assert_eq!(visitor.image_count, 2);
    assert_eq!(visitor.file_count, 2);
}

#[test]
fn test_skip_children_prunes_subtree() {
    let mut visitor = SkipSections::default();
    assert!(walk(sample().node(), &mut visitor));

    assert_eq!(visitor.entered.iter().filter(|n| *n == "Section").count(), 2);
    assert!(!visitor.entered.iter().any(|n| n == "Paragraph"));
    assert!(visitor.entered.iter().any(|n| n == "EmbeddedFile"));
}

#[test]
fn test_composite_first_non_continue_wins() {
    let mut composite = CompositeVisitor::new()
        .with_visitor(SkipSections::default())
        .with_visitor(DefaultVisitor::new());
    let doc = sample();
    let section = doc.sections().unwrap().get(0).unwrap();

    assert_eq!(
        composite.enter(section.node(), 2),
        VisitorAction::SkipChildren
    );
    assert_eq!(composite.enter(doc.node(), 0), VisitorAction::Continue);
}

#[test]
fn test_visitor_action_helpers() {
    assert!(VisitorAction::Continue.should_descend());
    assert!(!VisitorAction::SkipChildren.should_descend());
    assert!(!VisitorAction::SkipChildren.is_stop());
    assert!(VisitorAction::Stop.is_stop());
    assert_eq!(VisitorAction::default(), VisitorAction::Continue);
}
