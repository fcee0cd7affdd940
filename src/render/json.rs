//! JSON export of document trees.
//!
//! The export is driven by each node's [`Meta`](crate::dom::Meta): every set
//! property is written under its name, scalars in their text form, child
//! collections as arrays. Unset properties are left out, so an import of the
//! output restores the same set/unset state.

use serde_json::{Map, Value as JsonValue};

use crate::dom::{Node, Value};
use crate::error::Result;

/// Key holding the node type.
pub(crate) const TYPE_KEY: &str = "type";
/// Key holding the elements of a collection node.
pub(crate) const ELEMENTS_KEY: &str = "elements";

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a tree to JSON.
pub fn to_json(node: impl AsRef<Node>, format: JsonFormat) -> Result<String> {
    let value = to_json_value(node.as_ref());
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(&value)?,
        JsonFormat::Compact => serde_json::to_string(&value)?,
    };
    Ok(json)
}

/// Convert a tree to a `serde_json` value.
pub fn to_json_value(node: &Node) -> JsonValue {
    let mut object = Map::new();
    object.insert(
        TYPE_KEY.to_string(),
        JsonValue::String(node.kind().type_key().to_string()),
    );

    let properties: Vec<(&'static str, Value)> = node
        .values()
        .iter()
        .filter_map(|(name, slot)| slot.value().map(|value| (name, value)))
        .collect();

    for (name, value) in properties {
        let json = match value {
            Value::Node(child) if child.meta().is_collection() => elements_array(&child),
            Value::Node(child) => to_json_value(&child),
            scalar => scalar
                .to_text()
                .map(JsonValue::String)
                .unwrap_or(JsonValue::Null),
        };
        object.insert(name.to_string(), json);
    }

    if node.meta().is_collection() {
        object.insert(ELEMENTS_KEY.to_string(), elements_array(node));
    }

    JsonValue::Object(object)
}

fn elements_array(collection: &Node) -> JsonValue {
    JsonValue::Array(
        collection
            .elements()
            .iter()
            .map(to_json_value)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DocumentObject;
    use crate::model::{Document, EmbeddedFiles};
    use crate::types::Color;

    #[test]
    fn test_to_json_pretty() {
        let doc = Document::new().unwrap();
        doc.info().unwrap().set_title("Test").unwrap();

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = Document::new().unwrap();
        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert_eq!(json, r#"{"type":"document"}"#);
    }

    #[test]
    fn test_collections_export_as_arrays() {
        let doc = Document::new().unwrap();
        doc.embedded_files()
            .unwrap()
            .add_file("Spec", "./spec.pdf")
            .unwrap();
        let paragraph = doc
            .add_section()
            .unwrap()
            .elements()
            .unwrap()
            .add_paragraph("Hi")
            .unwrap();
        paragraph.set_color(Color::BLUE).unwrap();

        let value = to_json_value(doc.node());
        assert_eq!(value["embedded_files"][0]["name"], "Spec");
        assert_eq!(value["sections"][0]["type"], "section");
        let para = &value["sections"][0]["elements"][0];
        assert_eq!(para["text"], "Hi");
        assert_eq!(para["color"], "RGB(0,0,255)");
        assert!(para.get("style").is_none());
    }

    #[test]
    fn test_root_collection_lists_elements() {
        let files = EmbeddedFiles::new().unwrap();
        files.add_file("A", "a.bin").unwrap();
        let value = to_json_value(files.node());
        assert_eq!(value["type"], "embedded_files");
        assert_eq!(value["elements"][0]["path"], "a.bin");
    }
}
