//! Document root.

use std::io::Write;

use super::{
    get_or_default, serialize_collection_block, DocumentInfo, EmbeddedFiles, Section, Sections,
};
use crate::dom::{document_object, DocumentObject, Node, NodeKind, PropertyDecl, TypeDecl, ValueType};
use crate::error::Result;
use crate::render::ddl::{write_attributes, Serializer};

const COMMENT: &str = "comment";
const IMAGE_PATH: &str = "image_path";
const INFO: &str = "info";
const EMBEDDED_FILES: &str = "embedded_files";
const SECTIONS: &str = "sections";

static PROPERTIES: [PropertyDecl; 5] = [
    PropertyDecl::attribute(COMMENT, "Comment", ValueType::String),
    PropertyDecl::attribute(IMAGE_PATH, "ImagePath", ValueType::String),
    PropertyDecl::child(INFO, "Info", NodeKind::DocumentInfo),
    PropertyDecl::child(EMBEDDED_FILES, "EmbeddedFiles", NodeKind::EmbeddedFiles),
    PropertyDecl::child(SECTIONS, "Sections", NodeKind::Sections),
];

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::Document,
    keyword: "document",
    properties: &PROPERTIES,
    elements: &[],
    element_name: "",
};

document_object! {
    /// The root of a document tree.
    ///
    /// Info, embedded files and sections are created on first access and
    /// owned by the document.
    ///
    /// ```
    /// use ddldom::prelude::*;
    ///
    /// let doc = Document::new()?;
    /// doc.info()?.set_title("Report")?;
    /// doc.embedded_files()?.add_file("Spec", "./spec.pdf")?;
    /// doc.add_section()?.elements()?.add_paragraph("Hello")?;
    ///
    /// let ddl = ddldom::to_ddl(&doc, &DdlOptions::default())?;
    /// assert!(ddl.starts_with("\\document"));
    /// # Ok::<(), ddldom::Error>(())
    /// ```
    Document => Document
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Result<Self> {
        Self::create()
    }

    /// Free-form comment.
    pub fn comment(&self) -> String {
        get_or_default(&self.node, COMMENT)
    }

    /// Set the comment.
    pub fn set_comment(&self, comment: impl Into<String>) -> Result<()> {
        self.node.set(COMMENT, comment.into())
    }

    /// Base path for image files.
    pub fn image_path(&self) -> String {
        get_or_default(&self.node, IMAGE_PATH)
    }

    /// Set the base path for image files.
    pub fn set_image_path(&self, path: impl Into<String>) -> Result<()> {
        self.node.set(IMAGE_PATH, path.into())
    }

    /// Document information, created on first access.
    pub fn info(&self) -> Result<DocumentInfo> {
        self.node
            .child_or_insert(INFO)
            .map(DocumentInfo::from_node_unchecked)
    }

    /// Replace the document information.
    pub fn set_info(&self, info: DocumentInfo) -> Result<()> {
        self.node.set::<Node>(INFO, info.into())
    }

    /// Embedded files, created on first access.
    pub fn embedded_files(&self) -> Result<EmbeddedFiles> {
        self.node
            .child_or_insert(EMBEDDED_FILES)
            .map(EmbeddedFiles::from_node_unchecked)
    }

    /// Sections, created on first access.
    pub fn sections(&self) -> Result<Sections> {
        self.node
            .child_or_insert(SECTIONS)
            .map(Sections::from_node_unchecked)
    }

    /// Append a new, empty section.
    pub fn add_section(&self) -> Result<Section> {
        self.sections()?.add_section()
    }
}

pub(super) fn serialize<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    serializer.write_line("\\document")?;
    write_attributes(node, serializer)?;
    serializer.begin_content()?;

    if let Some(info) = node.child(INFO)? {
        info.serialize(serializer)?;
    }
    serialize_collection_block(node, EMBEDDED_FILES, serializer)?;
    if let Some(sections) = node.child(SECTIONS)? {
        sections.serialize(serializer)?;
    }

    serializer.end_content()
}
