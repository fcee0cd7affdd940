//! Tree statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::visitor::{walk, DocumentVisitor, VisitorAction};
use crate::dom::{DocumentObject, Node, NodeKind};
use crate::model::Paragraph;

/// Counts gathered from one walk of a tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes
    pub node_count: u32,

    /// Deepest nesting level (the root is level 0)
    pub max_depth: u32,

    /// Number of nodes per type name
    pub counts: BTreeMap<String, u32>,

    /// Number of properties holding a value, over all nodes
    pub set_property_count: u32,

    /// Approximate word count of paragraph text
    pub word_count: u32,
}

impl TreeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root` and count everything under it.
    pub fn collect(root: &Node) -> Self {
        let mut stats = Self::new();
        walk(root, &mut stats);
        stats
    }

    /// Number of nodes of one kind.
    pub fn count_of(&self, kind: NodeKind) -> u32 {
        self.counts.get(kind.name()).copied().unwrap_or(0)
    }

    /// Merge statistics from another tree.
    pub fn merge(&mut self, other: &TreeStats) {
        self.node_count += other.node_count;
        self.max_depth = self.max_depth.max(other.max_depth);
        for (name, count) in &other.counts {
            *self.counts.entry(name.clone()).or_default() += count;
        }
        self.set_property_count += other.set_property_count;
        self.word_count += other.word_count;
    }
}

impl DocumentVisitor for TreeStats {
    fn enter(&mut self, node: &Node, depth: usize) -> VisitorAction {
        self.node_count += 1;
        self.max_depth = self.max_depth.max(depth as u32);
        *self.counts.entry(node.type_name().to_string()).or_default() += 1;
        self.set_property_count += node.values().set_count() as u32;
        if node.kind() == NodeKind::Paragraph {
            self.visit_paragraph(&Paragraph::from_node_unchecked(node.clone()))
        } else {
            VisitorAction::Continue
        }
    }

    fn visit_paragraph(&mut self, paragraph: &Paragraph) -> VisitorAction {
        self.word_count += paragraph.text().split_whitespace().count() as u32;
        VisitorAction::Continue
    }
}
