//! Depth-first traversal with visitor hooks.
//!
//! A visitor sees every node of a tree in document order: node-valued
//! properties in declaration order, then collection elements. It can prune a
//! subtree or stop the walk.
//!
//! # Example
//!
//! ```
//! use ddldom::prelude::*;
//! use ddldom::render::visitor::{walk, DocumentVisitor, VisitorAction};
//!
//! struct FileNames(Vec<String>);
//!
//! impl DocumentVisitor for FileNames {
//!     fn visit_embedded_file(&mut self, file: &EmbeddedFile) -> VisitorAction {
//!         self.0.push(file.name());
//!         VisitorAction::Continue
//!     }
//! }
//!
//! let doc = Document::new()?;
//! doc.embedded_files()?.add_file("Spec", "./spec.pdf")?;
//!
//! let mut names = FileNames(Vec::new());
//! walk(doc.node(), &mut names);
//! assert_eq!(names.0, ["Spec"]);
//! # Ok::<(), ddldom::Error>(())
//! ```

use crate::dom::{DocumentObject, Node, NodeKind};
use crate::model::{EmbeddedFile, Image, Paragraph, Section};

/// Action returned by visitor hooks to steer the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Visit the node's children next.
    #[default]
    Continue,

    /// Do not descend into this node's children.
    SkipChildren,

    /// End the walk.
    Stop,
}

impl VisitorAction {
    /// Check if the walk should descend into children.
    pub fn should_descend(&self) -> bool {
        matches!(self, VisitorAction::Continue)
    }

    /// Check if the walk should end.
    pub fn is_stop(&self) -> bool {
        matches!(self, VisitorAction::Stop)
    }
}

/// Hooks called during a [`walk`].
///
/// `enter` dispatches to the typed `visit_*` hooks by default, so most
/// visitors only override the ones they care about.
pub trait DocumentVisitor {
    /// Called before a node's children are visited.
    fn enter(&mut self, node: &Node, depth: usize) -> VisitorAction {
        let _ = depth;
        match node.kind() {
            NodeKind::Section => self.visit_section(&Section::from_node_unchecked(node.clone())),
            NodeKind::Paragraph => {
                self.visit_paragraph(&Paragraph::from_node_unchecked(node.clone()))
            }
            NodeKind::Image => self.visit_image(&Image::from_node_unchecked(node.clone())),
            NodeKind::EmbeddedFile => {
                self.visit_embedded_file(&EmbeddedFile::from_node_unchecked(node.clone()))
            }
            _ => VisitorAction::Continue,
        }
    }

    /// Called after a node's children were visited (or skipped).
    fn leave(&mut self, node: &Node, depth: usize) {
        let _ = (node, depth);
    }

    /// Called when entering a section.
    fn visit_section(&mut self, section: &Section) -> VisitorAction {
        let _ = section;
        VisitorAction::Continue
    }

    /// Called when entering a paragraph.
    fn visit_paragraph(&mut self, paragraph: &Paragraph) -> VisitorAction {
        let _ = paragraph;
        VisitorAction::Continue
    }

    /// Called when entering an image.
    fn visit_image(&mut self, image: &Image) -> VisitorAction {
        let _ = image;
        VisitorAction::Continue
    }

    /// Called when entering an embedded file.
    fn visit_embedded_file(&mut self, file: &EmbeddedFile) -> VisitorAction {
        let _ = file;
        VisitorAction::Continue
    }
}

/// Visit `root` and its subtree depth-first.
///
/// Returns `false` if a hook stopped the walk.
pub fn walk<V: DocumentVisitor + ?Sized>(root: &Node, visitor: &mut V) -> bool {
    walk_at(root, 0, visitor)
}

fn walk_at<V: DocumentVisitor + ?Sized>(node: &Node, depth: usize, visitor: &mut V) -> bool {
    let action = visitor.enter(node, depth);
    if action.is_stop() {
        return false;
    }
    if action.should_descend() {
        for child in node.children() {
            if !walk_at(&child, depth + 1, visitor) {
                return false;
            }
        }
    }
    visitor.leave(node, depth);
    true
}

/// Visitor that does nothing.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentVisitor for DefaultVisitor {}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns a
/// non-Continue action determines the result; `leave` reaches every visitor.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn DocumentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: DocumentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for CompositeVisitor {
    fn enter(&mut self, node: &Node, depth: usize) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.enter(node, depth);
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn leave(&mut self, node: &Node, depth: usize) {
        for visitor in &mut self.visitors {
            visitor.leave(node, depth);
        }
    }
}
