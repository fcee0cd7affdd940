//! Per-type property descriptors and the process-wide registry.
//!
//! A [`Meta`] describes which properties a node type declares, how they are
//! named in DDL and whether generic tooling may serialize or mutate them.
//! Descriptors are built on first request and shared for the lifetime of the
//! process:
//!
//! ```
//! use ddldom::dom::{Meta, NodeKind};
//!
//! let meta = Meta::for_kind(NodeKind::EmbeddedFile)?;
//! let names: Vec<_> = meta.properties().iter().map(|p| p.name).collect();
//! assert_eq!(names, ["name", "path"]);
//! assert!(std::ptr::eq(meta, Meta::for_kind(NodeKind::EmbeddedFile)?));
//! # Ok::<(), ddldom::Error>(())
//! ```

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};

use rayon::prelude::*;
use serde::Serialize;

use super::{NodeKind, ValueType, KIND_COUNT};
use crate::error::{Error, Result};

/// Static declaration of one property, written next to each node type.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PropertyDecl {
    pub name: &'static str,
    pub keyword: &'static str,
    pub value_type: ValueType,
    pub serializable: bool,
    pub child_kind: Option<NodeKind>,
}

impl PropertyDecl {
    /// A scalar written into the node's DDL attribute block.
    pub const fn attribute(name: &'static str, keyword: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            keyword,
            value_type,
            serializable: true,
            child_kind: None,
        }
    }

    /// A scalar the node writes itself (positional argument or content).
    pub const fn content(name: &'static str, keyword: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            keyword,
            value_type,
            serializable: false,
            child_kind: None,
        }
    }

    /// An owned child node of the given kind.
    pub const fn child(name: &'static str, keyword: &'static str, kind: NodeKind) -> Self {
        Self {
            name,
            keyword,
            value_type: ValueType::Node,
            serializable: false,
            child_kind: Some(kind),
        }
    }
}

/// Static declaration of a node type.
#[derive(Debug)]
pub(crate) struct TypeDecl {
    pub kind: NodeKind,
    pub keyword: &'static str,
    pub properties: &'static [PropertyDecl],
    /// Element kinds accepted when the type is a collection.
    pub elements: &'static [NodeKind],
    /// Name reported for the element type in representation errors.
    pub element_name: &'static str,
}

/// Descriptor of one declared property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name used by the Rust and JSON APIs
    pub name: &'static str,
    /// DDL keyword
    pub keyword: &'static str,
    /// Type of value stored
    pub value_type: ValueType,
    /// Written by the generic DDL attribute writer
    pub serializable: bool,
    /// Shown by generic tooling
    pub visible: bool,
    /// Generic tooling may add elements to the collection held here
    pub can_add: bool,
    /// Generic tooling may remove elements from the collection held here
    pub can_remove: bool,
    /// Declared kind of the child, for node-valued properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child_kind: Option<NodeKind>,
}

impl PropertyDescriptor {
    fn from_decl(decl: &PropertyDecl) -> Self {
        Self {
            name: decl.name,
            keyword: decl.keyword,
            value_type: decl.value_type,
            serializable: decl.serializable,
            visible: true,
            can_add: true,
            can_remove: true,
            child_kind: decl.child_kind,
        }
    }
}

/// Shared, immutable descriptor of a node type.
#[derive(Debug, Serialize)]
pub struct Meta {
    kind: NodeKind,
    type_name: &'static str,
    keyword: &'static str,
    properties: Vec<PropertyDescriptor>,
    element_kinds: Vec<NodeKind>,
    #[serde(skip)]
    element_name: &'static str,
}

impl Meta {
    /// The shared descriptor for `kind`, built on first request.
    ///
    /// Fails with [`Error::InvalidMeta`] when the declaration of the type is
    /// malformed; the failure repeats on every request and nothing is cached.
    pub fn for_kind(kind: NodeKind) -> Result<&'static Meta> {
        REGISTRY.get_or_build(kind)
    }

    pub(crate) fn from_decl(decl: &TypeDecl) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidMeta {
            node: decl.kind.name(),
            reason,
        };

        if decl.keyword.is_empty() {
            return Err(invalid("empty DDL keyword".to_string()));
        }

        let mut names = HashSet::new();
        let mut keywords = HashSet::new();
        for property in decl.properties {
            if property.name.is_empty() || property.keyword.is_empty() {
                return Err(invalid("property with empty name or keyword".to_string()));
            }
            if !names.insert(property.name) {
                return Err(invalid(format!("duplicate property '{}'", property.name)));
            }
            if !keywords.insert(property.keyword) {
                return Err(invalid(format!("duplicate keyword '{}'", property.keyword)));
            }
            let is_node = property.value_type == ValueType::Node;
            if is_node != property.child_kind.is_some() {
                return Err(invalid(format!(
                    "property '{}' must declare a child kind exactly when it holds a node",
                    property.name
                )));
            }
            if is_node && property.serializable {
                return Err(invalid(format!(
                    "node property '{}' cannot be a DDL attribute",
                    property.name
                )));
            }
        }

        if decl.elements.contains(&decl.kind) {
            return Err(invalid("collection cannot contain itself".to_string()));
        }

        Ok(Self {
            kind: decl.kind,
            type_name: decl.kind.name(),
            keyword: decl.keyword,
            properties: decl.properties.iter().map(PropertyDescriptor::from_decl).collect(),
            element_kinds: decl.elements.to_vec(),
            element_name: decl.element_name,
        })
    }

    /// Node kind described.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Type name (e.g. `EmbeddedFile`).
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// DDL keyword, without the leading backslash.
    pub fn keyword(&self) -> &'static str {
        self.keyword
    }

    /// Declared properties in declaration order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Look up a property by DDL keyword.
    pub fn property_by_keyword(&self, keyword: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.keyword == keyword)
    }

    /// Slot index of a property.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Properties the generic DDL attribute writer emits.
    pub fn serializable_properties(&self) -> impl Iterator<Item = (usize, &PropertyDescriptor)> {
        self.properties
            .iter()
            .enumerate()
            .filter(|(_, p)| p.serializable)
    }

    /// Element kinds accepted by a collection type (empty otherwise).
    pub fn element_kinds(&self) -> &[NodeKind] {
        &self.element_kinds
    }

    /// Check if nodes of this type hold an ordered element list.
    pub fn is_collection(&self) -> bool {
        !self.element_kinds.is_empty()
    }

    /// Check if a collection of this type accepts elements of `kind`.
    pub fn accepts(&self, kind: NodeKind) -> bool {
        self.element_kinds.contains(&kind)
    }

    pub(crate) fn element_name(&self) -> &'static str {
        self.element_name
    }
}

/// How many times the descriptor for `kind` has been built in this process.
///
/// Stays at 1 once the descriptor exists; exposed for diagnostics.
pub fn build_count(kind: NodeKind) -> usize {
    REGISTRY.builds[kind.index()].load(Ordering::Acquire)
}

/// Build every descriptor eagerly, in parallel.
pub fn preload_all() -> Result<Vec<&'static Meta>> {
    NodeKind::ALL
        .par_iter()
        .map(|kind| Meta::for_kind(*kind))
        .collect()
}

struct Registry {
    cells: [OnceLock<Meta>; KIND_COUNT],
    builds: [AtomicUsize; KIND_COUNT],
    init_lock: Mutex<()>,
}

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_CELL: OnceLock<Meta> = OnceLock::new();
#[allow(clippy::declare_interior_mutable_const)]
const ZERO: AtomicUsize = AtomicUsize::new(0);

static REGISTRY: Registry = Registry {
    cells: [EMPTY_CELL; KIND_COUNT],
    builds: [ZERO; KIND_COUNT],
    init_lock: Mutex::new(()),
};

impl Registry {
    fn get_or_build(&'static self, kind: NodeKind) -> Result<&'static Meta> {
        let cell = &self.cells[kind.index()];
        if let Some(meta) = cell.get() {
            return Ok(meta);
        }

        // Serialize first-time construction so a descriptor is built once.
        let _guard = self
            .init_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(meta) = cell.get() {
            return Ok(meta);
        }

        let meta = Meta::from_decl(crate::model::declaration(kind))?;
        self.builds[kind.index()].fetch_add(1, Ordering::AcqRel);
        log::debug!(
            "Built descriptor for {} ({} properties)",
            kind,
            meta.properties.len()
        );
        Ok(cell.get_or_init(|| meta))
    }
}
