//! Sections of the document body.

use std::io::Write;

use super::{get_or_default, DocumentElements};
use crate::dom::{
    document_object, Collection, CollectionElement, DocumentObject, Node, NodeKind, PropertyDecl,
    TypeDecl, ValueType,
};
use crate::error::Result;
use crate::render::ddl::{write_attributes, Serializer};

const COMMENT: &str = "comment";
const ELEMENTS: &str = "elements";

static PROPERTIES: [PropertyDecl; 2] = [
    PropertyDecl::attribute(COMMENT, "Comment", ValueType::String),
    PropertyDecl::child(ELEMENTS, "Elements", NodeKind::DocumentElements),
];

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::Section,
    keyword: "section",
    properties: &PROPERTIES,
    elements: &[],
    element_name: "",
};

pub(super) static SECTIONS_DECL: TypeDecl = TypeDecl {
    kind: NodeKind::Sections,
    keyword: "sections",
    properties: &[],
    elements: &[NodeKind::Section],
    element_name: "Section",
};

document_object! {
    /// A run of body content.
    Section => Section
}

/// The sections of a document.
pub type Sections = Collection<Section>;

impl Section {
    /// Free-form comment.
    pub fn comment(&self) -> String {
        get_or_default(&self.node, COMMENT)
    }

    /// Set the comment.
    pub fn set_comment(&self, comment: impl Into<String>) -> Result<()> {
        self.node.set(COMMENT, comment.into())
    }

    /// Body elements, created on first access.
    pub fn elements(&self) -> Result<DocumentElements> {
        self.node
            .child_or_insert(ELEMENTS)
            .map(DocumentElements::from_node_unchecked)
    }
}

impl CollectionElement for Section {
    const COLLECTION: NodeKind = NodeKind::Sections;

    fn from_element(node: Node) -> Result<Self> {
        Self::try_from_node(node)
    }

    fn element_node(&self) -> &Node {
        &self.node
    }
}

impl Collection<Section> {
    /// Create an empty section and append it.
    pub fn add_section(&self) -> Result<Section> {
        self.add(Section::create()?)
    }
}

pub(super) fn serialize<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    serializer.write_line("\\section")?;
    write_attributes(node, serializer)?;
    serializer.begin_content()?;
    if let Some(elements) = node.child(ELEMENTS)? {
        elements.serialize(serializer)?;
    }
    serializer.end_content()
}
