//! Body elements of a section.

use super::{Image, PageBreak, Paragraph};
use crate::dom::{Collection, CollectionElement, DocumentObject, Node, NodeKind, TypeDecl};
use crate::error::{Error, Result};

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::DocumentElements,
    keyword: "elements",
    properties: &[],
    elements: &[NodeKind::Paragraph, NodeKind::PageBreak, NodeKind::Image],
    element_name: "DocumentElement",
};

/// One element of a section body.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentElement {
    /// Paragraph of text
    Paragraph(Paragraph),
    /// Page break
    PageBreak(PageBreak),
    /// Image
    Image(Image),
}

impl DocumentElement {
    /// The underlying node.
    pub fn node(&self) -> &Node {
        match self {
            DocumentElement::Paragraph(p) => p.node(),
            DocumentElement::PageBreak(b) => b.node(),
            DocumentElement::Image(i) => i.node(),
        }
    }

    /// Get as a paragraph if this is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            DocumentElement::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get as an image if this is one.
    pub fn as_image(&self) -> Option<&Image> {
        match self {
            DocumentElement::Image(i) => Some(i),
            _ => None,
        }
    }

    /// Check if this is a page break.
    pub fn is_page_break(&self) -> bool {
        matches!(self, DocumentElement::PageBreak(_))
    }
}

impl CollectionElement for DocumentElement {
    const COLLECTION: NodeKind = NodeKind::DocumentElements;

    fn from_element(node: Node) -> Result<Self> {
        match node.kind() {
            NodeKind::Paragraph => Ok(DocumentElement::Paragraph(Paragraph::from_node_unchecked(node))),
            NodeKind::PageBreak => Ok(DocumentElement::PageBreak(PageBreak::from_node_unchecked(node))),
            NodeKind::Image => Ok(DocumentElement::Image(Image::from_node_unchecked(node))),
            _ => Err(Error::InvalidRepresentation {
                expected: "DocumentElement",
                found: node.type_name(),
            }),
        }
    }

    fn element_node(&self) -> &Node {
        self.node()
    }
}

impl From<Paragraph> for DocumentElement {
    fn from(value: Paragraph) -> Self {
        DocumentElement::Paragraph(value)
    }
}

impl From<PageBreak> for DocumentElement {
    fn from(value: PageBreak) -> Self {
        DocumentElement::PageBreak(value)
    }
}

impl From<Image> for DocumentElement {
    fn from(value: Image) -> Self {
        DocumentElement::Image(value)
    }
}

/// The body elements of a section, in document order.
pub type DocumentElements = Collection<DocumentElement>;

impl Collection<DocumentElement> {
    /// Append a paragraph holding `text`.
    pub fn add_paragraph(&self, text: impl Into<String>) -> Result<Paragraph> {
        let paragraph = Paragraph::with_text(text)?;
        self.add(paragraph.clone().into())?;
        Ok(paragraph)
    }

    /// Append a page break.
    pub fn add_page_break(&self) -> Result<PageBreak> {
        let page_break = PageBreak::new()?;
        self.add(page_break.clone().into())?;
        Ok(page_break)
    }

    /// Append an image referencing `name`.
    pub fn add_image(&self, name: impl Into<String>) -> Result<Image> {
        let image = Image::new(name)?;
        self.add(image.clone().into())?;
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_elements_keep_order() {
        let elements = DocumentElements::new().unwrap();
        elements.add_paragraph("one").unwrap();
        elements.add_image("chart.png").unwrap();
        elements.add_page_break().unwrap();

        let kinds: Vec<NodeKind> = elements
            .iter()
            .map(|e| e.unwrap().node().kind())
            .collect();
        assert_eq!(
            kinds,
            [NodeKind::Paragraph, NodeKind::Image, NodeKind::PageBreak]
        );
        assert_eq!(
            elements.get(0).unwrap().as_paragraph().unwrap().text(),
            "one"
        );
        assert!(elements.last().unwrap().unwrap().is_page_break());
    }
}
