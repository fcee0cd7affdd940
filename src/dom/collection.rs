//! Typed, ordered collections of nodes.

use std::fmt;
use std::marker::PhantomData;

use super::{DocumentObject, Node, NodeKind};
use crate::error::Result;

/// A type that can be stored in a [`Collection`].
pub trait CollectionElement: Sized {
    /// Node kind of collections holding this element type.
    const COLLECTION: NodeKind;

    /// Narrow a stored element to this type.
    ///
    /// Fails with [`Error::InvalidRepresentation`](crate::Error::InvalidRepresentation)
    /// when the stored node is of another kind.
    fn from_element(node: Node) -> Result<Self>;

    /// The node to store.
    fn element_node(&self) -> &Node;
}

/// An ordered sequence of elements owned by one collection node.
///
/// Elements keep insertion order and each element's parent is the collection
/// node. The collection itself is usually held by an owner node (a document
/// or a section) that writes any DDL block around it.
pub struct Collection<T> {
    node: Node,
    _element: PhantomData<T>,
}

impl<T: CollectionElement> Collection<T> {
    /// Create an empty, detached collection.
    pub fn new() -> Result<Self> {
        Self::create()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.node.element_count()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append an element, returning it for chaining.
    pub fn add(&self, item: T) -> Result<T> {
        self.node.push_element(item.element_node().clone())?;
        Ok(item)
    }

    /// Insert an element at `index`.
    pub fn insert(&self, index: usize, item: T) -> Result<T> {
        self.node.insert_element(index, item.element_node().clone())?;
        Ok(item)
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        T::from_element(self.node.element(index)?)
    }

    /// The element at `index`, narrowed to a concrete document type.
    pub fn get_as<U: DocumentObject>(&self, index: usize) -> Result<U> {
        U::try_from_node(self.node.element(index)?)
    }

    /// The first element, if any.
    pub fn first(&self) -> Result<Option<T>> {
        if self.is_empty() {
            return Ok(None);
        }
        self.get(0).map(Some)
    }

    /// The last element, if any.
    pub fn last(&self) -> Result<Option<T>> {
        match self.len() {
            0 => Ok(None),
            len => self.get(len - 1).map(Some),
        }
    }

    /// Remove the element at `index`; it becomes a detached root.
    pub fn remove(&self, index: usize) -> Result<T> {
        T::from_element(self.node.remove_element(index)?)
    }

    /// Remove every element.
    pub fn clear(&self) {
        self.node.clear_elements();
    }

    /// Iterate the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = Result<T>> {
        self.node.elements().into_iter().map(T::from_element)
    }
}

impl<T: CollectionElement> DocumentObject for Collection<T> {
    const KIND: NodeKind = T::COLLECTION;

    fn node(&self) -> &Node {
        &self.node
    }

    fn from_node_unchecked(node: Node) -> Self {
        Self {
            node,
            _element: PhantomData,
        }
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            _element: PhantomData,
        }
    }
}

impl<T> PartialEq for Collection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.node, f)
    }
}

impl<T> AsRef<Node> for Collection<T> {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

impl<T> From<Collection<T>> for Node {
    fn from(value: Collection<T>) -> Self {
        value.node
    }
}
