//! The node handle shared by every document object.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::io::Write;
use std::rc::{Rc, Weak};

use super::{Meta, NodeKind, NullableValue, PropertyDescriptor, SlotValue, Value, Values};
use crate::error::{Error, Result};
use crate::render::ddl::Serializer;

/// A handle to one node of a document tree.
///
/// Cloning a `Node` clones the handle, not the node: both handles see the same
/// properties and children. Use [`deep_copy`](Node::deep_copy) for an
/// independent tree. Equality is structural; use [`ptr_eq`](Node::ptr_eq) to
/// compare identity.
///
/// Parent links are weak, so a subtree kept alive only by a handle into it
/// does not keep its former ancestors alive.
#[derive(Clone)]
pub struct Node(Rc<NodeData>);

struct NodeData {
    meta: &'static Meta,
    parent: RefCell<Weak<NodeData>>,
    values: RefCell<Values>,
    elements: RefCell<Vec<Node>>,
}

impl Node {
    /// Create a detached root node of `kind`.
    pub fn new(kind: NodeKind) -> Result<Node> {
        Ok(Self::with_meta(Meta::for_kind(kind)?))
    }

    /// Create a node owned by `parent`.
    ///
    /// Only the back-reference is set; placing the node into one of the
    /// parent's slots or element lists is up to the caller.
    pub fn new_in(kind: NodeKind, parent: &Node) -> Result<Node> {
        let node = Self::new(kind)?;
        node.set_parent(parent);
        Ok(node)
    }

    fn with_meta(meta: &'static Meta) -> Node {
        Node(Rc::new(NodeData {
            meta,
            parent: RefCell::new(Weak::new()),
            values: RefCell::new(Values::new(meta)),
            elements: RefCell::new(Vec::new()),
        }))
    }

    /// Concrete type of this node.
    pub fn kind(&self) -> NodeKind {
        self.0.meta.kind()
    }

    /// Shared descriptor of this node's type.
    pub fn meta(&self) -> &'static Meta {
        self.0.meta
    }

    /// Type name (e.g. `EmbeddedFile`).
    pub fn type_name(&self) -> &'static str {
        self.0.meta.type_name()
    }

    /// Check if two handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // ----------------------------------------------------------------
    // Tree navigation
    // ----------------------------------------------------------------

    /// The owning node, if any.
    pub fn parent(&self) -> Option<Node> {
        self.0.parent.borrow().upgrade().map(Node)
    }

    /// Check if the node has no owner.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }

    /// The root of the tree containing this node.
    pub fn root(&self) -> Node {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Nearest ancestor (excluding self) of the given kind.
    pub fn ancestor(&self, kind: NodeKind) -> Option<Node> {
        let mut current = self.parent();
        while let Some(node) = current {
            if node.kind() == kind {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    /// Nearest ancestor of a typed document object, e.g. the `Document`
    /// that owns a paragraph.
    pub fn owner_of<T: DocumentObject>(&self) -> Option<T> {
        self.ancestor(T::KIND).map(T::from_node_unchecked)
    }

    fn is_self_or_ancestor(&self, candidate: &Node) -> bool {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.ptr_eq(candidate) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    pub(crate) fn set_parent(&self, parent: &Node) {
        *self.0.parent.borrow_mut() = Rc::downgrade(&parent.0);
    }

    pub(crate) fn clear_parent(&self) {
        *self.0.parent.borrow_mut() = Weak::new();
    }

    // ----------------------------------------------------------------
    // Properties
    // ----------------------------------------------------------------

    fn descriptor(&self, name: &str) -> Result<(usize, &'static PropertyDescriptor)> {
        let meta = self.0.meta;
        meta.index_of(name)
            .map(|index| (index, &meta.properties()[index]))
            .ok_or_else(|| Error::UnknownProperty {
                node: meta.type_name(),
                property: name.to_string(),
            })
    }

    fn typed_descriptor<T: SlotValue>(&self, name: &str) -> Result<usize> {
        let (index, descriptor) = self.descriptor(name)?;
        if descriptor.value_type != T::VALUE_TYPE {
            return Err(Error::ValueTypeMismatch {
                property: name.to_string(),
                declared: descriptor.value_type.name(),
                requested: T::VALUE_TYPE.name(),
            });
        }
        Ok(index)
    }

    /// Read a property, falling back to the type's default when unset.
    pub fn get<T: SlotValue + Default>(&self, name: &str) -> Result<T> {
        let index = self.typed_descriptor::<T>(name)?;
        let values = self.0.values.borrow();
        Ok(values
            .nullable::<T>(index)
            .and_then(NullableValue::as_ref)
            .cloned()
            .unwrap_or_default())
    }

    /// Read a property together with its set/unset state.
    pub fn get_nullable<T: SlotValue>(&self, name: &str) -> Result<NullableValue<T>> {
        let index = self.typed_descriptor::<T>(name)?;
        let values = self.0.values.borrow();
        Ok(values.nullable::<T>(index).cloned().unwrap_or_default())
    }

    /// Store a typed value into a property.
    pub fn set<T: SlotValue>(&self, name: &str, value: T) -> Result<()> {
        self.set_value(name, value.into_value())
    }

    /// Store a dynamic value into a property.
    ///
    /// A node value becomes a child of `self`; the child it replaces (if any)
    /// is detached.
    pub fn set_value(&self, name: &str, value: Value) -> Result<()> {
        let (index, descriptor) = self.descriptor(name)?;
        if value.value_type() != descriptor.value_type {
            return Err(Error::ValueTypeMismatch {
                property: name.to_string(),
                declared: descriptor.value_type.name(),
                requested: value.value_type().name(),
            });
        }

        if let Value::Node(child) = &value {
            if descriptor.child_kind != Some(child.kind()) {
                return Err(Error::InvalidRepresentation {
                    expected: descriptor.child_kind.map_or("node", NodeKind::name),
                    found: child.type_name(),
                });
            }
            let current = self.0.values.borrow().slot(index).and_then(|slot| {
                slot.value().and_then(|v| v.as_node().cloned())
            });
            if current.is_some_and(|c| c.ptr_eq(child)) {
                return Ok(());
            }
            self.check_attachable(child)?;
            child.set_parent(self);
        }

        let previous = self
            .0
            .values
            .borrow_mut()
            .replace(index, value)
            .map_err(|rejected| Error::ValueTypeMismatch {
                property: name.to_string(),
                declared: descriptor.value_type.name(),
                requested: rejected.value_type().name(),
            })?;

        if let Some(Value::Node(old)) = previous {
            old.clear_parent();
        }
        Ok(())
    }

    /// Return a property to the unset state, handing back what it held.
    pub fn reset(&self, name: &str) -> Result<Option<Value>> {
        let (index, _) = self.descriptor(name)?;
        let previous = self.0.values.borrow_mut().take(index);
        if let Some(Value::Node(old)) = &previous {
            old.clear_parent();
        }
        Ok(previous)
    }

    /// Check if a property is unset.
    pub fn is_unset(&self, name: &str) -> Result<bool> {
        let (index, _) = self.descriptor(name)?;
        let values = self.0.values.borrow();
        Ok(values.slot(index).map_or(true, |slot| slot.is_unset()))
    }

    /// Copy of a property value; node values come back as handles.
    pub fn value(&self, name: &str) -> Result<Option<Value>> {
        let (index, _) = self.descriptor(name)?;
        let values = self.0.values.borrow();
        Ok(values.slot(index).and_then(|slot| slot.value()))
    }

    /// The child held in a node-valued property.
    pub fn child(&self, name: &str) -> Result<Option<Node>> {
        Ok(self
            .get_nullable::<Node>(name)?
            .into_option())
    }

    /// The child held in a node-valued property, created on first access.
    pub fn child_or_insert(&self, name: &str) -> Result<Node> {
        if let Some(child) = self.child(name)? {
            return Ok(child);
        }
        let (_, descriptor) = self.descriptor(name)?;
        let kind = descriptor.child_kind.ok_or_else(|| Error::ValueTypeMismatch {
            property: name.to_string(),
            declared: descriptor.value_type.name(),
            requested: "node",
        })?;
        let child = Node::new(kind)?;
        self.set_value(name, Value::Node(child.clone()))?;
        Ok(child)
    }

    /// Borrow the property storage.
    ///
    /// The borrow must end before the node is mutated.
    pub fn values(&self) -> Ref<'_, Values> {
        self.0.values.borrow()
    }

    // ----------------------------------------------------------------
    // Elements (collection nodes)
    // ----------------------------------------------------------------

    /// Handles to the elements, in order.
    pub fn elements(&self) -> Vec<Node> {
        self.0.elements.borrow().clone()
    }

    /// Number of elements.
    pub fn element_count(&self) -> usize {
        self.0.elements.borrow().len()
    }

    /// The element at `index`.
    pub fn element(&self, index: usize) -> Result<Node> {
        let elements = self.0.elements.borrow();
        elements.get(index).cloned().ok_or(Error::IndexOutOfRange {
            index,
            len: elements.len(),
        })
    }

    /// Append an element and make `self` its parent.
    pub fn push_element(&self, node: Node) -> Result<Node> {
        let len = self.element_count();
        self.insert_element(len, node)
    }

    /// Insert an element at `index` and make `self` its parent.
    pub fn insert_element(&self, index: usize, node: Node) -> Result<Node> {
        let meta = self.0.meta;
        if !meta.is_collection() {
            return Err(Error::NotPermitted(format!(
                "{} does not hold elements",
                meta.type_name()
            )));
        }
        if !meta.accepts(node.kind()) {
            return Err(Error::InvalidRepresentation {
                expected: meta.element_name(),
                found: node.type_name(),
            });
        }
        let len = self.element_count();
        if index > len {
            return Err(Error::IndexOutOfRange { index, len });
        }
        self.check_attachable(&node)?;

        node.set_parent(self);
        self.0.elements.borrow_mut().insert(index, node.clone());
        Ok(node)
    }

    /// Remove the element at `index`; it becomes a detached root.
    pub fn remove_element(&self, index: usize) -> Result<Node> {
        let mut elements = self.0.elements.borrow_mut();
        if index >= elements.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: elements.len(),
            });
        }
        let node = elements.remove(index);
        node.clear_parent();
        Ok(node)
    }

    /// Remove every element.
    pub fn clear_elements(&self) {
        for node in self.0.elements.borrow_mut().drain(..) {
            node.clear_parent();
        }
    }

    /// A node may join `self` when it has no owner, or when it was created
    /// for `self` (see [`Node::new_in`]) and is not held yet.
    fn check_attachable(&self, node: &Node) -> Result<()> {
        if let Some(parent) = node.parent() {
            if !parent.ptr_eq(self) || self.holds(node) {
                return Err(Error::AlreadyAttached(node.type_name()));
            }
        }
        if self.is_self_or_ancestor(node) {
            return Err(Error::NotPermitted(format!(
                "{} cannot be placed inside its own subtree",
                node.type_name()
            )));
        }
        Ok(())
    }

    fn holds(&self, node: &Node) -> bool {
        self.0.elements.borrow().iter().any(|e| e.ptr_eq(node))
            || self.0.values.borrow().child_nodes().iter().any(|c| c.ptr_eq(node))
    }

    /// Append to the collection held in a node-valued property, creating the
    /// collection if needed. Honors the descriptor's `can_add` flag.
    pub fn add_to(&self, property: &str, node: Node) -> Result<Node> {
        let (_, descriptor) = self.descriptor(property)?;
        if !descriptor.can_add {
            return Err(Error::NotPermitted(format!(
                "adding to {}.{}",
                self.type_name(),
                property
            )));
        }
        self.child_or_insert(property)?.push_element(node)
    }

    /// Remove from the collection held in a node-valued property. Honors the
    /// descriptor's `can_remove` flag.
    pub fn remove_from(&self, property: &str, index: usize) -> Result<Node> {
        let (_, descriptor) = self.descriptor(property)?;
        if !descriptor.can_remove {
            return Err(Error::NotPermitted(format!(
                "removing from {}.{}",
                self.type_name(),
                property
            )));
        }
        match self.child(property)? {
            Some(collection) => collection.remove_element(index),
            None => Err(Error::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// Owned children: node-valued properties in declaration order, then
    /// elements.
    pub fn children(&self) -> Vec<Node> {
        let mut children = self.0.values.borrow().child_nodes();
        children.extend(self.elements());
        children
    }

    /// Release this node from its owner, wherever it is held.
    pub fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };

        let position = parent
            .0
            .elements
            .borrow()
            .iter()
            .position(|e| e.ptr_eq(self));
        if let Some(index) = position {
            parent.0.elements.borrow_mut().remove(index);
        } else {
            let mut values = parent.0.values.borrow_mut();
            let held = values.iter().position(|(_, slot)| {
                slot.value()
                    .and_then(|v| v.as_node().cloned())
                    .is_some_and(|n| n.ptr_eq(self))
            });
            if let Some(index) = held {
                values.take(index);
            }
        }
        self.clear_parent();
    }

    // ----------------------------------------------------------------
    // Copy and output
    // ----------------------------------------------------------------

    /// Copy the whole subtree.
    ///
    /// The copy is a detached root sharing nothing with the original except
    /// the type descriptors.
    pub fn deep_copy(&self) -> Node {
        let copy = Node::with_meta(self.0.meta);
        let values = self.0.values.borrow().deep_copy_for(&copy);
        *copy.0.values.borrow_mut() = values;

        let elements: Vec<Node> = self
            .0
            .elements
            .borrow()
            .iter()
            .map(|element| {
                let element_copy = element.deep_copy();
                element_copy.set_parent(&copy);
                element_copy
            })
            .collect();
        *copy.0.elements.borrow_mut() = elements;
        copy
    }

    /// Write this node's DDL fragment, recursing into its children.
    pub fn serialize<W: Write>(&self, serializer: &mut Serializer<W>) -> Result<()> {
        log::trace!("Serializing {}", self.type_name());
        crate::model::serialize_node(self, serializer)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
            || (std::ptr::eq(self.0.meta, other.0.meta)
                && *self.0.values.borrow() == *other.0.values.borrow()
                && *self.0.elements.borrow() == *other.0.elements.borrow())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct(self.type_name());
        let values = self.0.values.borrow();
        if !values.is_empty() {
            debug.field("values", &*values);
        }
        let elements = self.0.elements.borrow();
        if self.0.meta.is_collection() {
            debug.field("elements", &*elements);
        }
        debug.finish()
    }
}

impl AsRef<Node> for Node {
    fn as_ref(&self) -> &Node {
        self
    }
}

/// A statically typed view of a [`Node`].
///
/// Every concrete document type implements this through a thin wrapper; the
/// node behind it does the work.
pub trait DocumentObject: Sized {
    /// Node kind wrapped by this type.
    const KIND: NodeKind;

    /// The underlying node.
    fn node(&self) -> &Node;

    /// Wrap a node without checking its kind.
    fn from_node_unchecked(node: Node) -> Self;

    /// Wrap a node, failing if it is of another kind.
    fn try_from_node(node: Node) -> Result<Self> {
        if node.kind() == Self::KIND {
            Ok(Self::from_node_unchecked(node))
        } else {
            Err(Error::InvalidRepresentation {
                expected: Self::KIND.name(),
                found: node.type_name(),
            })
        }
    }

    /// Create a detached node of this type.
    fn create() -> Result<Self> {
        Node::new(Self::KIND).map(Self::from_node_unchecked)
    }

    /// Create a node of this type owned by `parent`.
    fn create_in(parent: &Node) -> Result<Self> {
        Node::new_in(Self::KIND, parent).map(Self::from_node_unchecked)
    }

    /// Shared descriptor of this type.
    fn meta(&self) -> &'static Meta {
        self.node().meta()
    }

    /// The owning node, if any.
    fn parent(&self) -> Option<Node> {
        self.node().parent()
    }

    /// Typed [`Node::deep_copy`].
    fn deep_copy(&self) -> Self {
        Self::from_node_unchecked(self.node().deep_copy())
    }

    /// Write this object's DDL fragment.
    fn serialize<W: Write>(&self, serializer: &mut Serializer<W>) -> Result<()> {
        self.node().serialize(serializer)
    }
}

/// Declare a typed wrapper around [`Node`] for one node kind.
macro_rules! document_object {
    ($(#[$attr:meta])* $name:ident => $kind:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            node: $crate::dom::Node,
        }

        impl $crate::dom::DocumentObject for $name {
            const KIND: $crate::dom::NodeKind = $crate::dom::NodeKind::$kind;

            fn node(&self) -> &$crate::dom::Node {
                &self.node
            }

            fn from_node_unchecked(node: $crate::dom::Node) -> Self {
                Self { node }
            }
        }

        impl AsRef<$crate::dom::Node> for $name {
            fn as_ref(&self) -> &$crate::dom::Node {
                &self.node
            }
        }

        impl From<$name> for $crate::dom::Node {
            fn from(value: $name) -> Self {
                value.node
            }
        }
    };
}

pub(crate) use document_object;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Unit};

    fn paragraph() -> Node {
        Node::new(NodeKind::Paragraph).unwrap()
    }

    #[test]
    fn test_new_node_is_unset_root() {
        let node = paragraph();
        assert!(node.is_root());
        assert!(node.is_unset("color").unwrap());
        assert_eq!(node.get::<Color>("color").unwrap(), Color::default());
    }

    #[test]
    fn test_set_and_reset() {
        let node = paragraph();
        node.set("color", Color::RED).unwrap();
        assert!(!node.is_unset("color").unwrap());
        assert_eq!(node.get::<Color>("color").unwrap(), Color::RED);

        let previous = node.reset("color").unwrap();
        assert_eq!(previous, Some(Value::Color(Color::RED)));
        assert!(node.is_unset("color").unwrap());
    }

    #[test]
    fn test_unknown_property() {
        let err = paragraph().set("colour", Color::RED).unwrap_err();
        assert!(matches!(err, Error::UnknownProperty { .. }));
    }

    #[test]
    fn test_type_mismatch() {
        let err = paragraph()
            .set("color", Unit::from_point(1.0))
            .unwrap_err();
        assert!(matches!(err, Error::ValueTypeMismatch { .. }));

        let err = paragraph().get::<String>("left_indent").unwrap_err();
        assert!(matches!(err, Error::ValueTypeMismatch { .. }));
    }

    #[test]
    fn test_push_sets_parent() {
        let files = Node::new(NodeKind::EmbeddedFiles).unwrap();
        let file = files
            .push_element(Node::new(NodeKind::EmbeddedFile).unwrap())
            .unwrap();
        assert!(file.parent().unwrap().ptr_eq(&files));
        assert_eq!(files.element_count(), 1);
    }

    #[test]
    fn test_node_created_for_parent() {
        let files = Node::new(NodeKind::EmbeddedFiles).unwrap();
        let file = Node::new_in(NodeKind::EmbeddedFile, &files).unwrap();
        assert!(file.parent().unwrap().ptr_eq(&files));
        assert_eq!(files.element_count(), 0);

        files.push_element(file.clone()).unwrap();
        let err = files.push_element(file).unwrap_err();
        assert!(matches!(err, Error::AlreadyAttached(_)));
        assert_eq!(files.element_count(), 1);

        let other = Node::new(NodeKind::EmbeddedFiles).unwrap();
        let stray = Node::new_in(NodeKind::EmbeddedFile, &files).unwrap();
        assert!(matches!(
            other.push_element(stray),
            Err(Error::AlreadyAttached(_))
        ));
    }

    #[test]
    fn test_push_rejects_wrong_kind() {
        let files = Node::new(NodeKind::EmbeddedFiles).unwrap();
        let err = files.push_element(paragraph()).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRepresentation {
                expected: "EmbeddedFile",
                found: "Paragraph"
            }
        ));
    }

    #[test]
    fn test_push_into_leaf_not_permitted() {
        let err = paragraph().push_element(paragraph()).unwrap_err();
        assert!(matches!(err, Error::NotPermitted(_)));
    }

    #[test]
    fn test_attached_node_rejected_until_removed() {
        let first = Node::new(NodeKind::EmbeddedFiles).unwrap();
        let second = Node::new(NodeKind::EmbeddedFiles).unwrap();
        let file = first
            .push_element(Node::new(NodeKind::EmbeddedFile).unwrap())
            .unwrap();

        let err = second.push_element(file.clone()).unwrap_err();
        assert!(matches!(err, Error::AlreadyAttached("EmbeddedFile")));

        let removed = first.remove_element(0).unwrap();
        assert!(removed.is_root());
        second.push_element(removed).unwrap();
        assert!(file.parent().unwrap().ptr_eq(&second));
    }

    #[test]
    fn test_replacing_child_detaches_previous() {
        let doc = Node::new(NodeKind::Document).unwrap();
        let old_info = doc.child_or_insert("info").unwrap();
        assert!(old_info.parent().unwrap().ptr_eq(&doc));

        let new_info = Node::new(NodeKind::DocumentInfo).unwrap();
        doc.set("info", new_info.clone()).unwrap();
        assert!(old_info.is_root());
        assert!(new_info.parent().unwrap().ptr_eq(&doc));

        // Setting the same child again is a no-op.
        doc.set("info", new_info.clone()).unwrap();
        assert!(new_info.parent().unwrap().ptr_eq(&doc));
    }

    #[test]
    fn test_child_kind_checked() {
        let doc = Node::new(NodeKind::Document).unwrap();
        let err = doc.set("info", paragraph()).unwrap_err();
        assert!(matches!(err, Error::InvalidRepresentation { .. }));
    }

    #[test]
    fn test_collection_rejects_own_kind() {
        let sections = Node::new(NodeKind::Sections).unwrap();
        let err = sections.push_element(sections.clone()).unwrap_err();
        assert!(matches!(err, Error::InvalidRepresentation { .. }));
        assert!(sections.is_root());
    }

    #[test]
    fn test_detach_from_slot_and_elements() {
        let doc = Node::new(NodeKind::Document).unwrap();
        let info = doc.child_or_insert("info").unwrap();
        info.detach();
        assert!(info.is_root());
        assert!(doc.is_unset("info").unwrap());

        let files = doc.child_or_insert("embedded_files").unwrap();
        let file = files
            .push_element(Node::new(NodeKind::EmbeddedFile).unwrap())
            .unwrap();
        file.detach();
        assert_eq!(files.element_count(), 0);
    }

    #[test]
    fn test_deep_copy_is_disjoint() {
        let files = Node::new(NodeKind::EmbeddedFiles).unwrap();
        let file = Node::new(NodeKind::EmbeddedFile).unwrap();
        file.set("name", "Spec".to_string()).unwrap();
        files.push_element(file).unwrap();

        let copy = files.deep_copy();
        assert_eq!(copy, files);
        assert!(!copy.ptr_eq(&files));

        let copied_file = copy.element(0).unwrap();
        assert!(copied_file.parent().unwrap().ptr_eq(&copy));
        copied_file.set("name", "Changed".to_string()).unwrap();
        assert_eq!(
            files.element(0).unwrap().get::<String>("name").unwrap(),
            "Spec"
        );
        assert_ne!(copy, files);
    }

    #[test]
    fn test_deep_copy_detaches_copy() {
        let doc = Node::new(NodeKind::Document).unwrap();
        let info = doc.child_or_insert("info").unwrap();
        let copy = info.deep_copy();
        assert!(copy.is_root());
        assert!(!info.is_root());
    }

    #[test]
    fn test_add_to_creates_collection() {
        let doc = Node::new(NodeKind::Document).unwrap();
        assert!(doc.is_unset("embedded_files").unwrap());
        doc.add_to("embedded_files", Node::new(NodeKind::EmbeddedFile).unwrap())
            .unwrap();
        let files = doc.child("embedded_files").unwrap().unwrap();
        assert_eq!(files.element_count(), 1);

        doc.remove_from("embedded_files", 0).unwrap();
        assert_eq!(files.element_count(), 0);
        let err = doc.remove_from("embedded_files", 0).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_ancestor_lookup() {
        let doc = Node::new(NodeKind::Document).unwrap();
        let sections = doc.child_or_insert("sections").unwrap();
        let section = sections
            .push_element(Node::new(NodeKind::Section).unwrap())
            .unwrap();
        let elements = section.child_or_insert("elements").unwrap();
        let para = elements.push_element(paragraph()).unwrap();

        assert!(para.ancestor(NodeKind::Document).unwrap().ptr_eq(&doc));
        assert!(para.root().ptr_eq(&doc));
        assert!(doc.ancestor(NodeKind::Document).is_none());
        assert_eq!(doc.children().len(), 1);
    }
}
