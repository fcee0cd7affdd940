//! Concrete node type identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of concrete node types.
pub const KIND_COUNT: usize = 10;

/// The concrete type of a [`Node`](super::Node).
///
/// Every kind has exactly one [`Meta`](super::Meta) descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Document root
    Document,
    /// Document information (title, author, ...)
    DocumentInfo,
    /// Collection of sections
    Sections,
    /// A section of the document body
    Section,
    /// Collection of body elements inside a section
    DocumentElements,
    /// A paragraph of text
    Paragraph,
    /// A page break marker
    PageBreak,
    /// An image shape referencing an external file
    Image,
    /// Collection of embedded files
    EmbeddedFiles,
    /// A file embedded by reference
    EmbeddedFile,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; KIND_COUNT] = [
        NodeKind::Document,
        NodeKind::DocumentInfo,
        NodeKind::Sections,
        NodeKind::Section,
        NodeKind::DocumentElements,
        NodeKind::Paragraph,
        NodeKind::PageBreak,
        NodeKind::Image,
        NodeKind::EmbeddedFiles,
        NodeKind::EmbeddedFile,
    ];

    /// Dense index, used as the registry key.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Type name (e.g. `EmbeddedFile`).
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::DocumentInfo => "DocumentInfo",
            NodeKind::Sections => "Sections",
            NodeKind::Section => "Section",
            NodeKind::DocumentElements => "DocumentElements",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::PageBreak => "PageBreak",
            NodeKind::Image => "Image",
            NodeKind::EmbeddedFiles => "EmbeddedFiles",
            NodeKind::EmbeddedFile => "EmbeddedFile",
        }
    }

    /// Type key used in JSON interchange (e.g. `embedded_file`).
    pub fn type_key(self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::DocumentInfo => "document_info",
            NodeKind::Sections => "sections",
            NodeKind::Section => "section",
            NodeKind::DocumentElements => "document_elements",
            NodeKind::Paragraph => "paragraph",
            NodeKind::PageBreak => "page_break",
            NodeKind::Image => "image",
            NodeKind::EmbeddedFiles => "embedded_files",
            NodeKind::EmbeddedFile => "embedded_file",
        }
    }

    /// Look up a kind by its type key or type name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        NodeKind::ALL.into_iter().find(|kind| {
            kind.type_key().eq_ignore_ascii_case(name) || kind.name().eq_ignore_ascii_case(name)
        })
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_dense() {
        for (i, kind) in NodeKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(
            NodeKind::from_name("embedded_file"),
            Some(NodeKind::EmbeddedFile)
        );
        assert_eq!(NodeKind::from_name("PageBreak"), Some(NodeKind::PageBreak));
        assert_eq!(NodeKind::from_name("table"), None);
    }
}
