//! Paragraph of text.

use std::io::Write;

use super::get_or_default;
use crate::dom::{
    document_object, DocumentObject, Node, NodeKind, NullableValue, PropertyDecl, TypeDecl,
    ValueType,
};
use crate::error::Result;
use crate::render::ddl::{escape_text, write_attributes, Serializer};
use crate::types::{Color, Unit};

const STYLE: &str = "style";
const COLOR: &str = "color";
const LEFT_INDENT: &str = "left_indent";
const SPACE_BEFORE: &str = "space_before";
const TEXT: &str = "text";

static PROPERTIES: [PropertyDecl; 5] = [
    PropertyDecl::attribute(STYLE, "Style", ValueType::String),
    PropertyDecl::attribute(COLOR, "Font.Color", ValueType::Color),
    PropertyDecl::attribute(LEFT_INDENT, "Format.LeftIndent", ValueType::Unit),
    PropertyDecl::attribute(SPACE_BEFORE, "Format.SpaceBefore", ValueType::Unit),
    PropertyDecl::content(TEXT, "Text", ValueType::String),
];

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::Paragraph,
    keyword: "paragraph",
    properties: &PROPERTIES,
    elements: &[],
    element_name: "",
};

document_object! {
    /// A paragraph of plain text with a few formatting properties.
    Paragraph => Paragraph
}

impl Paragraph {
    /// Create a paragraph holding `text`.
    pub fn with_text(text: impl Into<String>) -> Result<Self> {
        let paragraph = Self::create()?;
        paragraph.set_text(text)?;
        Ok(paragraph)
    }

    /// Paragraph text.
    pub fn text(&self) -> String {
        get_or_default(&self.node, TEXT)
    }

    /// Set the paragraph text.
    pub fn set_text(&self, text: impl Into<String>) -> Result<()> {
        self.node.set(TEXT, text.into())
    }

    /// Style name.
    pub fn style(&self) -> String {
        get_or_default(&self.node, STYLE)
    }

    /// Set the style name.
    pub fn set_style(&self, style: impl Into<String>) -> Result<()> {
        self.node.set(STYLE, style.into())
    }

    /// Font color, with its set/unset state.
    pub fn color(&self) -> NullableValue<Color> {
        self.node.get_nullable(COLOR).unwrap_or_default()
    }

    /// Set the font color.
    pub fn set_color(&self, color: Color) -> Result<()> {
        self.node.set(COLOR, color)
    }

    /// Left indent.
    pub fn left_indent(&self) -> Unit {
        get_or_default(&self.node, LEFT_INDENT)
    }

    /// Set the left indent.
    pub fn set_left_indent(&self, indent: Unit) -> Result<()> {
        self.node.set(LEFT_INDENT, indent)
    }

    /// Space above the paragraph.
    pub fn space_before(&self) -> Unit {
        get_or_default(&self.node, SPACE_BEFORE)
    }

    /// Set the space above the paragraph.
    pub fn set_space_before(&self, space: Unit) -> Result<()> {
        self.node.set(SPACE_BEFORE, space)
    }
}

pub(super) fn serialize<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    serializer.write_line("\\paragraph")?;
    write_attributes(node, serializer)?;
    serializer.begin_content()?;
    let text: String = get_or_default(node, TEXT);
    for line in text.lines() {
        serializer.write_line(&escape_text(line))?;
    }
    serializer.end_content()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{to_ddl, DdlOptions};

    #[test]
    fn test_color_unset_vs_default() {
        let paragraph = Paragraph::with_text("x").unwrap();
        assert!(paragraph.color().is_unset());

        paragraph.set_color(Color::default()).unwrap();
        assert!(!paragraph.color().is_unset());
        assert_eq!(paragraph.color().get(), Color::default());
    }

    #[test]
    fn test_paragraph_ddl() {
        let paragraph = Paragraph::with_text("Total {net}").unwrap();
        paragraph.set_color(Color::RED).unwrap();
        paragraph.set_left_indent(Unit::from_centimeter(2.5)).unwrap();

        let ddl = to_ddl(&paragraph, &DdlOptions::default()).unwrap();
        assert_eq!(
            ddl,
            "\\paragraph\n\
             [\n  Font.Color = RGB(255,0,0)\n  Format.LeftIndent = 2.5cm\n]\n\
             {\n  Total \\{net\\}\n}\n"
        );
    }

    #[test]
    fn test_zero_indent_is_written_when_set() {
        let paragraph = Paragraph::with_text("").unwrap();
        paragraph.set_space_before(Unit::from_point(0.0)).unwrap();
        let ddl = to_ddl(&paragraph, &DdlOptions::default()).unwrap();
        assert!(ddl.contains("Format.SpaceBefore = 0pt"));
        assert!(ddl.ends_with("{\n}\n"));
    }
}
