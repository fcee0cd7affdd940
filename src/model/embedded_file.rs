//! Files embedded by reference.

use std::io::Write;

use super::get_or_default;
use crate::dom::{
    document_object, Collection, CollectionElement, DocumentObject, Node, NodeKind, PropertyDecl,
    TypeDecl, ValueType,
};
use crate::error::Result;
use crate::render::ddl::{quote, Serializer};

const NAME: &str = "name";
const PATH: &str = "path";

static PROPERTIES: [PropertyDecl; 2] = [
    PropertyDecl::content(NAME, "Name", ValueType::String),
    PropertyDecl::content(PATH, "Path", ValueType::String),
];

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::EmbeddedFile,
    keyword: "embeddedfile",
    properties: &PROPERTIES,
    elements: &[],
    element_name: "",
};

pub(super) static COLLECTION_DECL: TypeDecl = TypeDecl {
    kind: NodeKind::EmbeddedFiles,
    keyword: "embeddedfiles",
    properties: &[],
    elements: &[NodeKind::EmbeddedFile],
    element_name: "EmbeddedFile",
};

document_object! {
    /// A file attached to the document.
    ///
    /// `path` is an opaque locator; turning it into bytes is the job of a
    /// [`ResourceResolver`](crate::resource::ResourceResolver).
    EmbeddedFile => EmbeddedFile
}

/// The embedded files of a document, in insertion order.
pub type EmbeddedFiles = Collection<EmbeddedFile>;

impl EmbeddedFile {
    /// Create a detached embedded file.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Result<Self> {
        let file = Self::create()?;
        file.set_name(name)?;
        file.set_path(path)?;
        Ok(file)
    }

    /// Display and reference label.
    pub fn name(&self) -> String {
        get_or_default(&self.node, NAME)
    }

    /// Set the label.
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        self.node.set(NAME, name.into())
    }

    /// Resource locator.
    pub fn path(&self) -> String {
        get_or_default(&self.node, PATH)
    }

    /// Set the resource locator.
    pub fn set_path(&self, path: impl Into<String>) -> Result<()> {
        self.node.set(PATH, path.into())
    }
}

impl CollectionElement for EmbeddedFile {
    const COLLECTION: NodeKind = NodeKind::EmbeddedFiles;

    fn from_element(node: Node) -> Result<Self> {
        Self::try_from_node(node)
    }

    fn element_node(&self) -> &Node {
        &self.node
    }
}

impl Collection<EmbeddedFile> {
    /// Create an embedded file and append it.
    pub fn add_file(&self, name: impl Into<String>, path: impl Into<String>) -> Result<EmbeddedFile> {
        self.add(EmbeddedFile::new(name, path)?)
    }
}

pub(super) fn serialize<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    let name: String = get_or_default(node, NAME);
    let path: String = get_or_default(node, PATH);
    serializer.write_line(&format!("\\embeddedfile({}, {})", quote(&name), quote(&path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{to_ddl, DdlOptions};

    #[test]
    fn test_embedded_file_fragment() {
        let file = EmbeddedFile::new("Spec", "./spec.pdf").unwrap();
        let ddl = to_ddl(&file, &DdlOptions::default()).unwrap();
        assert_eq!(ddl, "\\embeddedfile(\"Spec\", \"./spec.pdf\")\n");
    }

    #[test]
    fn test_collection_fragments_in_order() {
        let files = EmbeddedFiles::new().unwrap();
        files.add_file("Spec", "./spec.pdf").unwrap();
        files.add_file("Logo", "./logo.png").unwrap();

        let ddl = to_ddl(&files, &DdlOptions::default()).unwrap();
        let lines: Vec<&str> = ddl.lines().collect();
        assert_eq!(
            lines,
            [
                "\\embeddedfile(\"Spec\", \"./spec.pdf\")",
                "\\embeddedfile(\"Logo\", \"./logo.png\")",
            ]
        );
    }

    #[test]
    fn test_quotes_in_names_escaped() {
        let file = EmbeddedFile::new("a \"b\"", "C:\\data").unwrap();
        let ddl = to_ddl(&file, &DdlOptions::default()).unwrap();
        assert_eq!(ddl, "\\embeddedfile(\"a \\\"b\\\"\", \"C:\\\\data\")\n");
    }
}
