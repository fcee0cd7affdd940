//! Concrete document types.
//!
//! Each type is a thin typed view over a [`Node`]: a static declaration of
//! its properties (from which the shared [`Meta`](crate::dom::Meta) is built),
//! typed accessors, and the function that writes its DDL fragment.

mod document;
mod elements;
mod embedded_file;
mod image;
mod info;
mod page_break;
mod paragraph;
mod section;

pub use document::Document;
pub use elements::{DocumentElement, DocumentElements};
pub use embedded_file::{EmbeddedFile, EmbeddedFiles};
pub use image::Image;
pub use info::DocumentInfo;
pub use page_break::PageBreak;
pub use paragraph::Paragraph;
pub use section::{Section, Sections};

use std::io::Write;

use crate::dom::{Node, NodeKind, SlotValue, TypeDecl};
use crate::error::Result;
use crate::render::ddl::Serializer;

/// Static declaration of a node kind.
pub(crate) fn declaration(kind: NodeKind) -> &'static TypeDecl {
    match kind {
        NodeKind::Document => &document::DECL,
        NodeKind::DocumentInfo => &info::DECL,
        NodeKind::Sections => &section::SECTIONS_DECL,
        NodeKind::Section => &section::DECL,
        NodeKind::DocumentElements => &elements::DECL,
        NodeKind::Paragraph => &paragraph::DECL,
        NodeKind::PageBreak => &page_break::DECL,
        NodeKind::Image => &image::DECL,
        NodeKind::EmbeddedFiles => &embedded_file::COLLECTION_DECL,
        NodeKind::EmbeddedFile => &embedded_file::DECL,
    }
}

/// Write the DDL fragment of `node`.
pub(crate) fn serialize_node<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    match node.kind() {
        NodeKind::Document => document::serialize(node, serializer),
        NodeKind::DocumentInfo => info::serialize(node, serializer),
        NodeKind::Section => section::serialize(node, serializer),
        NodeKind::Paragraph => paragraph::serialize(node, serializer),
        NodeKind::PageBreak => page_break::serialize(serializer),
        NodeKind::Image => image::serialize(node, serializer),
        NodeKind::EmbeddedFile => embedded_file::serialize(node, serializer),
        NodeKind::Sections | NodeKind::DocumentElements | NodeKind::EmbeddedFiles => {
            serialize_elements(node, serializer)
        }
    }
}

/// Collections write nothing of their own: just their elements, in order.
fn serialize_elements<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    for element in node.elements() {
        element.serialize(serializer)?;
    }
    Ok(())
}

/// Write `\keyword { … }` around a collection held in `property`.
///
/// Skipped when the collection is missing, or empty and the options say to
/// omit empty collections.
fn serialize_collection_block<W: Write>(
    owner: &Node,
    property: &str,
    serializer: &mut Serializer<W>,
) -> Result<()> {
    let Some(collection) = owner.child(property)? else {
        return Ok(());
    };
    if collection.element_count() == 0 && serializer.options().omit_empty_collections {
        return Ok(());
    }
    serializer.write_line(&format!("\\{}", collection.meta().keyword()))?;
    serializer.begin_content()?;
    collection.serialize(serializer)?;
    serializer.end_content()
}

/// Typed read of a statically declared property.
///
/// Accessors on the concrete types only name properties their own
/// declaration carries, so the lookup cannot miss.
fn get_or_default<T: SlotValue + Default>(node: &Node, name: &str) -> T {
    node.get(name).unwrap_or_default()
}
