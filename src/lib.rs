//! # ddldom
//!
//! Document object model with nullable properties, shared type descriptors
//! and DDL text output.
//!
//! A document is a tree of typed nodes (sections, paragraphs, page breaks,
//! embedded files, ...). Trees are built programmatically or imported from
//! JSON, deep-copied, inspected through per-type descriptors, and serialized
//! into DDL markup.
//!
//! ## Quick Start
//!
//! ```
//! use ddldom::prelude::*;
//!
//! fn main() -> ddldom::Result<()> {
//!     let doc = Document::new()?;
//!     let files = doc.embedded_files()?;
//!     files.add_file("Spec", "./spec.pdf")?;
//!     files.add_file("Logo", "./logo.png")?;
//!
//!     let ddl = ddldom::to_ddl(&doc, &DdlOptions::default())?;
//!     assert!(ddl.contains("\\embeddedfile(\"Spec\", \"./spec.pdf\")"));
//!
//!     let copy = doc.deep_copy();
//!     copy.embedded_files()?.get(0)?.set_name("Changed")?;
//!     assert_eq!(files.get(0)?.name(), "Spec");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Tri-state properties**: unset, set to the default, and set are distinct
//! - **Shared descriptors**: one lazily built [`Meta`] per node type
//! - **Owned trees**: parent links kept in step by every insert and removal
//! - **DDL output**: streaming serializer over any writer
//! - **JSON interchange**: descriptor-driven export and import

pub mod dom;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod resource;
pub mod types;

// Re-export commonly used types
pub use dom::{
    is_unset_or_empty, Collection, CollectionElement, DocumentObject, Meta, Node, NodeKind,
    NullableValue, PropertyDescriptor, Value, ValueType,
};
pub use error::{Error, Result};
pub use model::{
    Document, DocumentElement, DocumentElements, DocumentInfo, EmbeddedFile, EmbeddedFiles, Image,
    PageBreak, Paragraph, Section, Sections,
};
pub use parser::{from_json, ErrorMode, ImportOptions};
pub use render::{
    to_ddl, to_json, write_ddl, write_ddl_file, DdlOptions, JsonFormat, LineEnding, Serializer,
    TreeStats,
};
pub use resource::{collect_resources, MapResolver, ResourceRef, ResourceResolver};
pub use types::{Color, LeftPosition, TopPosition, Unit, UnitType};

/// Everything needed to build and write documents.
pub mod prelude {
    pub use crate::dom::{DocumentObject, Node, NodeKind, NullableValue};
    pub use crate::model::{
        Document, DocumentElement, DocumentElements, DocumentInfo, EmbeddedFile, EmbeddedFiles,
        Image, PageBreak, Paragraph, Section, Sections,
    };
    pub use crate::render::DdlOptions;
    pub use crate::types::{Color, LeftPosition, TopPosition, Unit};
}

use std::path::Path;

/// Load a tree from a JSON file.
///
/// # Example
///
/// ```no_run
/// use ddldom::load_json_file;
///
/// let tree = load_json_file("report.json").unwrap();
/// println!("Root: {}", tree.type_name());
/// ```
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Node> {
    load_json_file_with_options(path, &ImportOptions::default())
}

/// Load a tree from a JSON file with custom options.
pub fn load_json_file_with_options<P: AsRef<Path>>(path: P, options: &ImportOptions) -> Result<Node> {
    let input = std::fs::read_to_string(path.as_ref())?;
    log::debug!("Loaded {} bytes from {}", input.len(), path.as_ref().display());
    from_json(&input, options)
}

/// Convert a JSON tree to DDL text.
///
/// # Example
///
/// ```
/// use ddldom::{json_to_ddl, DdlOptions};
///
/// let ddl = json_to_ddl(r#"{ "type": "page_break" }"#, &DdlOptions::default())?;
/// assert_eq!(ddl, "\\pagebreak\n");
/// # Ok::<(), ddldom::Error>(())
/// ```
pub fn json_to_ddl(input: &str, options: &DdlOptions) -> Result<String> {
    let tree = from_json(input, &ImportOptions::default())?;
    to_ddl(&tree, options)
}

/// Builder for loading and converting trees.
///
/// # Example
///
/// ```no_run
/// use ddldom::DdlDom;
///
/// let ddl = DdlDom::new()
///     .lenient()
///     .with_indent(4)
///     .with_header("generated")
///     .load("report.json")?
///     .to_ddl()?;
/// # Ok::<(), ddldom::Error>(())
/// ```
pub struct DdlDom {
    import_options: ImportOptions,
    ddl_options: DdlOptions,
}

impl DdlDom {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            import_options: ImportOptions::default(),
            ddl_options: DdlOptions::default(),
        }
    }

    /// Enable lenient import mode.
    pub fn lenient(mut self) -> Self {
        self.import_options = self.import_options.lenient();
        self
    }

    /// Require a root node kind on import.
    pub fn with_root_kind(mut self, kind: NodeKind) -> Self {
        self.import_options = self.import_options.with_root_kind(kind);
        self
    }

    /// Set the DDL indent width.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.ddl_options = self.ddl_options.with_indent(width);
        self
    }

    /// Set a DDL header comment.
    pub fn with_header(mut self, comment: impl Into<String>) -> Self {
        self.ddl_options = self.ddl_options.with_header(comment);
        self
    }

    /// Write empty collection blocks.
    pub fn with_empty_collections(mut self) -> Self {
        self.ddl_options = self.ddl_options.with_empty_collections(true);
        self
    }

    /// Load a JSON file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<Loaded> {
        let root = load_json_file_with_options(path, &self.import_options)?;
        Ok(self.wrap(root))
    }

    /// Load JSON text.
    pub fn load_str(self, input: &str) -> Result<Loaded> {
        let root = from_json(input, &self.import_options)?;
        Ok(self.wrap(root))
    }

    /// Wrap an existing tree.
    pub fn wrap(self, root: Node) -> Loaded {
        Loaded {
            root,
            ddl_options: self.ddl_options,
        }
    }
}

impl Default for DdlDom {
    fn default() -> Self {
        Self::new()
    }
}

/// A loaded tree together with its output options.
pub struct Loaded {
    /// The root node
    pub root: Node,
    /// DDL options to use
    ddl_options: DdlOptions,
}

impl Loaded {
    /// Convert to DDL.
    pub fn to_ddl(&self) -> Result<String> {
        to_ddl(&self.root, &self.ddl_options)
    }

    /// Write DDL to a file.
    pub fn write_ddl_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_ddl_file(&self.root, path, &self.ddl_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(&self.root, format)
    }

    /// Tree statistics.
    pub fn stats(&self) -> TreeStats {
        TreeStats::collect(&self.root)
    }

    /// Resources referenced by the tree.
    pub fn resources(&self) -> Vec<ResourceRef> {
        collect_resources(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let builder = DdlDom::new().lenient().with_indent(4).with_header("x");
        assert_eq!(builder.import_options.error_mode, ErrorMode::Lenient);
        assert_eq!(builder.ddl_options.indent_width, 4);
        assert_eq!(builder.ddl_options.header_comment.as_deref(), Some("x"));
    }

    #[test]
    fn test_builder_default() {
        let builder = DdlDom::default();
        assert_eq!(builder.import_options.error_mode, ErrorMode::Strict);
        assert!(builder.ddl_options.omit_empty_collections);
    }

    #[test]
    fn test_load_str_and_convert() {
        let loaded = DdlDom::new()
            .with_header("generated")
            .load_str(r#"{ "type": "embedded_file", "name": "A", "path": "a.bin" }"#)
            .unwrap();
        assert_eq!(
            loaded.to_ddl().unwrap(),
            "// generated\n\\embeddedfile(\"A\", \"a.bin\")\n"
        );
        assert_eq!(loaded.resources().len(), 1);
        assert_eq!(loaded.stats().node_count, 1);
    }

    #[test]
    fn test_load_str_invalid_json() {
        let result = DdlDom::new().load_str("{ not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_json_file("/nonexistent/tree.json");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
