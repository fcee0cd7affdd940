//! Node substrate shared by every document type.
//!
//! A tree is made of [`Node`] handles. Each node owns a [`Values`] container
//! with one [`NullableValue`] slot per property its type declares, an ordered
//! element list when the type is a collection, and a weak link to its owner.
//! What a type declares is described by its shared [`Meta`] descriptor.

mod collection;
mod kind;
pub mod meta;
mod node;
mod nullable;
mod values;

pub use collection::{Collection, CollectionElement};
pub use kind::{NodeKind, KIND_COUNT};
pub use meta::{Meta, PropertyDescriptor};
pub use node::{DocumentObject, Node};
pub use nullable::{is_unset_or_empty, NullableValue};
pub use values::{Slot, SlotValue, Value, ValueType, Values};

pub(crate) use meta::{PropertyDecl, TypeDecl};
pub(crate) use node::document_object;
