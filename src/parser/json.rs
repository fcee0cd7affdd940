//! JSON import of document trees.
//!
//! Reads the shape written by [`to_json`](crate::render::to_json): an object
//! per node with a `"type"` key, properties under their names, child
//! collections as arrays and root collections under `"elements"`. Property
//! names and value types come from each type's descriptor; nothing here is
//! specific to one node type.

use serde_json::{Map, Value as JsonValue};

use super::options::{ErrorMode, ImportOptions};
use crate::dom::{Meta, Node, NodeKind, PropertyDescriptor, Value, ValueType};
use crate::error::{Error, Result};
use crate::render::{ELEMENTS_KEY, TYPE_KEY};

/// Build a tree from JSON text.
pub fn from_json(input: &str, options: &ImportOptions) -> Result<Node> {
    let value: JsonValue = serde_json::from_str(input)?;
    from_json_value(&value, options)
}

/// Build a tree from a `serde_json` value.
pub fn from_json_value(value: &JsonValue, options: &ImportOptions) -> Result<Node> {
    let root = Importer { options }.build(value, options.root_kind, 0)?;
    if let Some(expected) = options.root_kind {
        if root.kind() != expected {
            return Err(Error::InvalidRepresentation {
                expected: expected.name(),
                found: root.type_name(),
            });
        }
    }
    Ok(root)
}

struct Importer<'a> {
    options: &'a ImportOptions,
}

impl Importer<'_> {
    fn lenient(&self) -> bool {
        self.options.error_mode == ErrorMode::Lenient
    }

    /// Report a recoverable problem: an error in strict mode, a warning in
    /// lenient mode.
    fn recover(&self, error: Error) -> Result<()> {
        if self.lenient() {
            log::warn!("Skipping invalid input: {}", error);
            Ok(())
        } else {
            Err(error)
        }
    }

    fn build(&self, value: &JsonValue, default_kind: Option<NodeKind>, depth: usize) -> Result<Node> {
        if depth > self.options.max_depth {
            return Err(Error::Other(format!(
                "nesting deeper than {} levels",
                self.options.max_depth
            )));
        }

        let object = value
            .as_object()
            .ok_or_else(|| Error::invalid_value("node", value.to_string()))?;

        let kind = match object.get(TYPE_KEY) {
            Some(JsonValue::String(name)) => {
                NodeKind::from_name(name).ok_or_else(|| Error::UnknownNodeType(name.clone()))?
            }
            Some(other) => return Err(Error::UnknownNodeType(other.to_string())),
            None => default_kind.ok_or_else(|| Error::UnknownNodeType("<missing>".to_string()))?,
        };

        let node = Node::new(kind)?;
        self.fill(&node, object, depth)?;
        Ok(node)
    }

    fn fill(&self, node: &Node, object: &Map<String, JsonValue>, depth: usize) -> Result<()> {
        let meta = node.meta();
        for (key, value) in object {
            if key == TYPE_KEY || value.is_null() {
                continue;
            }

            if key == ELEMENTS_KEY && meta.is_collection() {
                self.fill_elements(node, value, depth)?;
                continue;
            }

            let Some(property) = meta.property(key) else {
                self.recover(Error::UnknownProperty {
                    node: meta.type_name(),
                    property: key.clone(),
                })?;
                continue;
            };

            let result = if property.value_type == ValueType::Node {
                self.fill_child(node, property, value, depth)
            } else {
                self.fill_scalar(node, property, value)
            };
            if let Err(error) = result {
                self.recover(error)?;
            }
        }
        Ok(())
    }

    fn fill_scalar(&self, node: &Node, property: &PropertyDescriptor, value: &JsonValue) -> Result<()> {
        let text = value
            .as_str()
            .ok_or_else(|| Error::invalid_value(property.value_type.name(), value.to_string()))?;
        node.set_value(property.name, Value::parse(property.value_type, text)?)
    }

    fn fill_child(
        &self,
        node: &Node,
        property: &PropertyDescriptor,
        value: &JsonValue,
        depth: usize,
    ) -> Result<()> {
        match value {
            JsonValue::Array(items) => {
                let element_kind = property
                    .child_kind
                    .map(Meta::for_kind)
                    .transpose()?
                    .and_then(single_element_kind);
                for item in items {
                    let result = self
                        .build(item, element_kind, depth + 2)
                        .and_then(|element| node.add_to(property.name, element));
                    if let Err(error) = result {
                        self.recover(error)?;
                    }
                }
                // An empty array still creates the collection.
                node.child_or_insert(property.name)?;
                Ok(())
            }
            _ => {
                let child = self.build(value, property.child_kind, depth + 1)?;
                node.set_value(property.name, Value::Node(child))
            }
        }
    }

    fn fill_elements(&self, node: &Node, value: &JsonValue, depth: usize) -> Result<()> {
        let items = value
            .as_array()
            .ok_or_else(|| Error::invalid_value("elements", value.to_string()))?;
        let element_kind = single_element_kind(node.meta());
        for item in items {
            let result = self
                .build(item, element_kind, depth + 1)
                .and_then(|element| node.push_element(element));
            if let Err(error) = result {
                self.recover(error)?;
            }
        }
        Ok(())
    }
}

/// The element kind of a homogeneous collection.
fn single_element_kind(meta: &Meta) -> Option<NodeKind> {
    match meta.element_kinds() {
        [kind] => Some(*kind),
        _ => None,
    }
}
