//! Page break marker.

use std::io::Write;

use crate::dom::{document_object, DocumentObject, NodeKind, TypeDecl};
use crate::error::Result;
use crate::render::ddl::Serializer;

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::PageBreak,
    keyword: "pagebreak",
    properties: &[],
    elements: &[],
    element_name: "",
};

document_object! {
    /// Forces the following content onto a new page. Has no properties.
    PageBreak => PageBreak
}

impl PageBreak {
    /// Create a page break.
    pub fn new() -> Result<Self> {
        Self::create()
    }
}

pub(super) fn serialize<W: Write>(serializer: &mut Serializer<W>) -> Result<()> {
    serializer.write_line("\\pagebreak")
}
