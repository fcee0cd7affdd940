//! Document information.

use std::io::Write;

use super::get_or_default;
use crate::dom::{document_object, Node, NodeKind, PropertyDecl, TypeDecl, ValueType};
use crate::error::Result;
use crate::render::ddl::{write_attributes, Serializer};

const TITLE: &str = "title";
const AUTHOR: &str = "author";
const SUBJECT: &str = "subject";
const KEYWORDS: &str = "keywords";
const COMMENT: &str = "comment";

static PROPERTIES: [PropertyDecl; 5] = [
    PropertyDecl::attribute(TITLE, "Title", ValueType::String),
    PropertyDecl::attribute(AUTHOR, "Author", ValueType::String),
    PropertyDecl::attribute(SUBJECT, "Subject", ValueType::String),
    PropertyDecl::attribute(KEYWORDS, "Keywords", ValueType::String),
    PropertyDecl::attribute(COMMENT, "Comment", ValueType::String),
];

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::DocumentInfo,
    keyword: "info",
    properties: &PROPERTIES,
    elements: &[],
    element_name: "",
};

document_object! {
    /// Title, author and other descriptive fields of a document.
    DocumentInfo => DocumentInfo
}

impl DocumentInfo {
    /// Document title.
    pub fn title(&self) -> String {
        get_or_default(&self.node, TITLE)
    }

    /// Set the document title.
    pub fn set_title(&self, title: impl Into<String>) -> Result<()> {
        self.node.set(TITLE, title.into())
    }

    /// Document author.
    pub fn author(&self) -> String {
        get_or_default(&self.node, AUTHOR)
    }

    /// Set the document author.
    pub fn set_author(&self, author: impl Into<String>) -> Result<()> {
        self.node.set(AUTHOR, author.into())
    }

    /// Document subject.
    pub fn subject(&self) -> String {
        get_or_default(&self.node, SUBJECT)
    }

    /// Set the document subject.
    pub fn set_subject(&self, subject: impl Into<String>) -> Result<()> {
        self.node.set(SUBJECT, subject.into())
    }

    /// Keywords, as free text.
    pub fn keywords(&self) -> String {
        get_or_default(&self.node, KEYWORDS)
    }

    /// Set the keywords.
    pub fn set_keywords(&self, keywords: impl Into<String>) -> Result<()> {
        self.node.set(KEYWORDS, keywords.into())
    }

    /// Free-form comment.
    pub fn comment(&self) -> String {
        get_or_default(&self.node, COMMENT)
    }

    /// Set the comment.
    pub fn set_comment(&self, comment: impl Into<String>) -> Result<()> {
        self.node.set(COMMENT, comment.into())
    }
}

pub(super) fn serialize<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    // An info block without fields says nothing.
    if node.values().set_count() == 0 {
        return Ok(());
    }
    serializer.write_line("\\info")?;
    write_attributes(node, serializer)?;
    Ok(())
}
