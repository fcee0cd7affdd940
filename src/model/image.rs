//! Image shape.

use std::io::Write;

use super::get_or_default;
use crate::dom::{
    document_object, DocumentObject, Node, NodeKind, PropertyDecl, TypeDecl, ValueType,
};
use crate::error::Result;
use crate::render::ddl::{quote, write_attributes, Serializer};
use crate::types::{LeftPosition, TopPosition, Unit};

const NAME: &str = "name";
const WIDTH: &str = "width";
const HEIGHT: &str = "height";
const TOP: &str = "top";
const LEFT: &str = "left";

static PROPERTIES: [PropertyDecl; 5] = [
    PropertyDecl::content(NAME, "Name", ValueType::String),
    PropertyDecl::attribute(WIDTH, "Width", ValueType::Unit),
    PropertyDecl::attribute(HEIGHT, "Height", ValueType::Unit),
    PropertyDecl::attribute(TOP, "Top", ValueType::TopPosition),
    PropertyDecl::attribute(LEFT, "Left", ValueType::LeftPosition),
];

pub(super) static DECL: TypeDecl = TypeDecl {
    kind: NodeKind::Image,
    keyword: "image",
    properties: &PROPERTIES,
    elements: &[],
    element_name: "",
};

document_object! {
    /// An image placed in the flow, referencing an external file by name.
    ///
    /// The name is resolved to bytes by a
    /// [`ResourceResolver`](crate::resource::ResourceResolver), never here.
    Image => Image
}

impl Image {
    /// Create an image referencing `name`.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let image = Self::create()?;
        image.node.set(NAME, name.into())?;
        Ok(image)
    }

    /// File name of the image.
    pub fn name(&self) -> String {
        get_or_default(&self.node, NAME)
    }

    /// Set the file name.
    pub fn set_name(&self, name: impl Into<String>) -> Result<()> {
        self.node.set(NAME, name.into())
    }

    /// Width.
    pub fn width(&self) -> Unit {
        get_or_default(&self.node, WIDTH)
    }

    /// Set the width.
    pub fn set_width(&self, width: Unit) -> Result<()> {
        self.node.set(WIDTH, width)
    }

    /// Height.
    pub fn height(&self) -> Unit {
        get_or_default(&self.node, HEIGHT)
    }

    /// Set the height.
    pub fn set_height(&self, height: Unit) -> Result<()> {
        self.node.set(HEIGHT, height)
    }

    /// Vertical position.
    pub fn top(&self) -> TopPosition {
        get_or_default(&self.node, TOP)
    }

    /// Set the vertical position.
    pub fn set_top(&self, top: TopPosition) -> Result<()> {
        self.node.set(TOP, top)
    }

    /// Horizontal position.
    pub fn left(&self) -> LeftPosition {
        get_or_default(&self.node, LEFT)
    }

    /// Set the horizontal position.
    pub fn set_left(&self, left: LeftPosition) -> Result<()> {
        self.node.set(LEFT, left)
    }
}

pub(super) fn serialize<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    let name: String = get_or_default(node, NAME);
    serializer.write_line(&format!("\\image({})", quote(&name)))?;
    write_attributes(node, serializer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{to_ddl, DdlOptions};

    #[test]
    fn test_image_without_attributes() {
        let image = Image::new("logo.png").unwrap();
        let ddl = to_ddl(&image, &DdlOptions::default()).unwrap();
        assert_eq!(ddl, "\\image(\"logo.png\")\n");
    }

    #[test]
    fn test_image_positions() {
        let image = Image::new("logo.png").unwrap();
        image.set_width(Unit::from_centimeter(4.0)).unwrap();
        image.set_top(TopPosition::Center).unwrap();
        image
            .set_left(LeftPosition::Offset(Unit::from_millimeter(10.0)))
            .unwrap();

        assert_eq!(image.height(), Unit::default());
        let ddl = to_ddl(&image, &DdlOptions::default()).unwrap();
        assert_eq!(
            ddl,
            "\\image(\"logo.png\")\n[\n  Width = 4cm\n  Top = Center\n  Left = 10mm\n]\n"
        );
    }
}
