//! Per-node property storage.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Meta, Node, NullableValue};
use crate::error::{Error, Result};
use crate::types::{Color, LeftPosition, TopPosition, Unit};

/// Type of value a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Text
    String,
    /// ARGB color
    Color,
    /// Length with unit
    Unit,
    /// Vertical placement
    TopPosition,
    /// Horizontal placement
    LeftPosition,
    /// Owned child node
    Node,
}

impl ValueType {
    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Color => "color",
            ValueType::Unit => "unit",
            ValueType::TopPosition => "top position",
            ValueType::LeftPosition => "left position",
            ValueType::Node => "node",
        }
    }
}

/// A property value of any supported type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text
    String(String),
    /// ARGB color
    Color(Color),
    /// Length with unit
    Unit(Unit),
    /// Vertical placement
    TopPosition(TopPosition),
    /// Horizontal placement
    LeftPosition(LeftPosition),
    /// Owned child node
    Node(Node),
}

impl Value {
    /// Type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Color(_) => ValueType::Color,
            Value::Unit(_) => ValueType::Unit,
            Value::TopPosition(_) => ValueType::TopPosition,
            Value::LeftPosition(_) => ValueType::LeftPosition,
            Value::Node(_) => ValueType::Node,
        }
    }

    /// The child node, for node values.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Parse a scalar from its text form (`2.5cm`, `RGB(255,0,0)`, `Center`).
    pub fn parse(value_type: ValueType, text: &str) -> Result<Value> {
        match value_type {
            ValueType::String => Ok(Value::String(text.to_string())),
            ValueType::Color => text.parse().map(Value::Color),
            ValueType::Unit => text.parse().map(Value::Unit),
            ValueType::TopPosition => text.parse().map(Value::TopPosition),
            ValueType::LeftPosition => text.parse().map(Value::LeftPosition),
            ValueType::Node => Err(Error::invalid_value("node", text)),
        }
    }

    /// Text form of a scalar, unquoted; `None` for node values.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::String(text) => Some(text.clone()),
            Value::Color(color) => Some(color.to_string()),
            Value::Unit(unit) => Some(unit.to_string()),
            Value::TopPosition(position) => Some(position.to_string()),
            Value::LeftPosition(position) => Some(position.to_string()),
            Value::Node(_) => None,
        }
    }
}

/// Storage cell for one declared property.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// Text slot
    String(NullableValue<String>),
    /// Color slot
    Color(NullableValue<Color>),
    /// Unit slot
    Unit(NullableValue<Unit>),
    /// Top position slot
    TopPosition(NullableValue<TopPosition>),
    /// Left position slot
    LeftPosition(NullableValue<LeftPosition>),
    /// Child node slot
    Node(NullableValue<Node>),
}

impl Slot {
    fn empty(value_type: ValueType) -> Self {
        match value_type {
            ValueType::String => Slot::String(NullableValue::unset()),
            ValueType::Color => Slot::Color(NullableValue::unset()),
            ValueType::Unit => Slot::Unit(NullableValue::unset()),
            ValueType::TopPosition => Slot::TopPosition(NullableValue::unset()),
            ValueType::LeftPosition => Slot::LeftPosition(NullableValue::unset()),
            ValueType::Node => Slot::Node(NullableValue::unset()),
        }
    }

    /// Check if the slot holds no value.
    pub fn is_unset(&self) -> bool {
        match self {
            Slot::String(v) => v.is_unset(),
            Slot::Color(v) => v.is_unset(),
            Slot::Unit(v) => v.is_unset(),
            Slot::TopPosition(v) => v.is_unset(),
            Slot::LeftPosition(v) => v.is_unset(),
            Slot::Node(v) => v.is_unset(),
        }
    }

    /// Copy of the stored value. Node values are returned as handles.
    pub fn value(&self) -> Option<Value> {
        match self {
            Slot::String(v) => v.as_ref().cloned().map(Value::String),
            Slot::Color(v) => v.as_ref().copied().map(Value::Color),
            Slot::Unit(v) => v.as_ref().copied().map(Value::Unit),
            Slot::TopPosition(v) => v.as_ref().copied().map(Value::TopPosition),
            Slot::LeftPosition(v) => v.as_ref().copied().map(Value::LeftPosition),
            Slot::Node(v) => v.as_ref().cloned().map(Value::Node),
        }
    }

    /// Store `value`, returning the previous value. Hands `value` back when
    /// its type does not match the slot.
    fn replace(&mut self, value: Value) -> std::result::Result<Option<Value>, Value> {
        let previous = match (self, value) {
            (Slot::String(slot), Value::String(v)) => slot.set(v).map(Value::String),
            (Slot::Color(slot), Value::Color(v)) => slot.set(v).map(Value::Color),
            (Slot::Unit(slot), Value::Unit(v)) => slot.set(v).map(Value::Unit),
            (Slot::TopPosition(slot), Value::TopPosition(v)) => {
                slot.set(v).map(Value::TopPosition)
            }
            (Slot::LeftPosition(slot), Value::LeftPosition(v)) => {
                slot.set(v).map(Value::LeftPosition)
            }
            (Slot::Node(slot), Value::Node(v)) => slot.set(v).map(Value::Node),
            (_, value) => return Err(value),
        };
        Ok(previous)
    }

    fn take(&mut self) -> Option<Value> {
        match self {
            Slot::String(v) => v.reset().map(Value::String),
            Slot::Color(v) => v.reset().map(Value::Color),
            Slot::Unit(v) => v.reset().map(Value::Unit),
            Slot::TopPosition(v) => v.reset().map(Value::TopPosition),
            Slot::LeftPosition(v) => v.reset().map(Value::LeftPosition),
            Slot::Node(v) => v.reset().map(Value::Node),
        }
    }
}

/// A type that can live in a property slot.
pub trait SlotValue: Clone + Sized {
    /// Declared value type matching this Rust type.
    const VALUE_TYPE: ValueType;

    /// Borrow the container if `slot` holds this type.
    fn from_slot(slot: &Slot) -> Option<&NullableValue<Self>>;

    /// Wrap into a dynamic [`Value`].
    fn into_value(self) -> Value;
}

macro_rules! slot_value {
    ($ty:ty, $variant:ident) => {
        impl SlotValue for $ty {
            const VALUE_TYPE: ValueType = ValueType::$variant;

            fn from_slot(slot: &Slot) -> Option<&NullableValue<Self>> {
                match slot {
                    Slot::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    };
}

slot_value!(String, String);
slot_value!(Color, Color);
slot_value!(Unit, Unit);
slot_value!(TopPosition, TopPosition);
slot_value!(LeftPosition, LeftPosition);
slot_value!(Node, Node);

/// The property slots of one node, laid out in [`Meta`] order.
pub struct Values {
    meta: &'static Meta,
    slots: Vec<Slot>,
}

impl Values {
    pub(crate) fn new(meta: &'static Meta) -> Self {
        Self {
            meta,
            slots: meta
                .properties()
                .iter()
                .map(|p| Slot::empty(p.value_type))
                .collect(),
        }
    }

    /// Number of slots (equals the number of declared properties).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the node declares no properties.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow the slot at `index`.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Borrow a typed container; `None` if the index is out of range or the
    /// slot holds another type.
    pub fn nullable<T: SlotValue>(&self, index: usize) -> Option<&NullableValue<T>> {
        self.slots.get(index).and_then(T::from_slot)
    }

    /// Iterate `(property name, slot)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Slot)> {
        self.meta
            .properties()
            .iter()
            .map(|p| p.name)
            .zip(self.slots.iter())
    }

    /// Number of slots holding a value.
    pub fn set_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_unset()).count()
    }

    pub(crate) fn replace(
        &mut self,
        index: usize,
        value: Value,
    ) -> std::result::Result<Option<Value>, Value> {
        match self.slots.get_mut(index) {
            Some(slot) => slot.replace(value),
            None => Err(value),
        }
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<Value> {
        self.slots.get_mut(index).and_then(Slot::take)
    }

    /// Copy every slot; child nodes are deep-copied and attached to `owner`.
    pub(crate) fn deep_copy_for(&self, owner: &Node) -> Values {
        let slots = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Node(child) => Slot::Node(
                    child
                        .as_ref()
                        .map(|node| {
                            let copy = node.deep_copy();
                            copy.set_parent(owner);
                            copy
                        })
                        .into(),
                ),
                other => other.clone(),
            })
            .collect();

        Values {
            meta: self.meta,
            slots,
        }
    }

    /// Child nodes held in node-valued slots, in declaration order.
    pub(crate) fn child_nodes(&self) -> Vec<Node> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Node(v) => v.as_ref().cloned(),
                _ => None,
            })
            .collect()
    }
}

impl PartialEq for Values {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.meta, other.meta) && self.slots == other.slots
    }
}

impl fmt::Debug for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().filter(|(_, slot)| !slot.is_unset()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::NodeKind;

    fn paragraph_values() -> Values {
        Values::new(Meta::for_kind(NodeKind::Paragraph).unwrap())
    }

    #[test]
    fn test_values_start_unset() {
        let values = paragraph_values();
        assert!(!values.is_empty());
        assert_eq!(values.set_count(), 0);
        assert!(values.iter().all(|(_, slot)| slot.is_unset()));
    }

    #[test]
    fn test_replace_rejects_wrong_type() {
        let mut values = paragraph_values();
        let color_index = Meta::for_kind(NodeKind::Paragraph)
            .unwrap()
            .index_of("color")
            .unwrap();

        let result = values.replace(color_index, Value::String("red".into()));
        assert!(result.is_err());

        let previous = values.replace(color_index, Value::Color(Color::RED)).unwrap();
        assert!(previous.is_none());
        assert_eq!(
            values.nullable::<Color>(color_index).map(NullableValue::get),
            Some(Color::RED)
        );
        assert!(values.nullable::<Unit>(color_index).is_none());
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(
            Value::parse(ValueType::Unit, "2.5cm").unwrap(),
            Value::Unit(Unit::from_centimeter(2.5))
        );
        assert_eq!(
            Value::parse(ValueType::TopPosition, "Center").unwrap(),
            Value::TopPosition(TopPosition::Center)
        );
        assert!(Value::parse(ValueType::Color, "not a color").is_err());
        assert!(Value::parse(ValueType::Node, "x").is_err());
        assert_eq!(
            Value::Color(Color::RED).to_text().as_deref(),
            Some("RGB(255,0,0)")
        );
    }

    #[test]
    fn test_marker_has_no_slots() {
        let values = Values::new(Meta::for_kind(NodeKind::PageBreak).unwrap());
        assert!(values.is_empty());
    }
}
