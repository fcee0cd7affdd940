//! Error types for ddldom library.

use std::io;
use thiserror::Error;

/// Result type alias for ddldom operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, copying or serializing a tree.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the serialization sink or file output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A stored node does not match the type a typed accessor declared.
    #[error("Invalid representation: expected {expected} node, found {found}")]
    InvalidRepresentation {
        /// The declared element type
        expected: &'static str,
        /// The type actually stored
        found: &'static str,
    },

    /// Index is out of range for a collection.
    #[error("Index {index} is out of range (collection has {len} elements)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Collection length
        len: usize,
    },

    /// The node type does not declare a property with this name.
    #[error("Unknown property '{property}' on {node}")]
    UnknownProperty {
        /// Node type name
        node: &'static str,
        /// Requested property name
        property: String,
    },

    /// A property was accessed with a value type it does not hold.
    #[error("Property '{property}' holds {declared} values, not {requested}")]
    ValueTypeMismatch {
        /// Property name
        property: String,
        /// Value type declared by the descriptor
        declared: &'static str,
        /// Value type the caller asked for
        requested: &'static str,
    },

    /// The node is already part of another tree.
    #[error("{0} node already has a parent")]
    AlreadyAttached(&'static str),

    /// The descriptor forbids this generic mutation.
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),

    /// The declared property metadata of a node type is malformed.
    #[error("Invalid descriptor for {node}: {reason}")]
    InvalidMeta {
        /// Node type name
        node: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A unit, color or position literal could not be parsed.
    #[error("Invalid {kind} value: {input}")]
    InvalidValue {
        /// Value type being parsed
        kind: &'static str,
        /// Offending input
        input: String,
    },

    /// A node type name is not known.
    #[error("Unknown node type: {0}")]
    UnknownNodeType(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoding error.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A resolver could not provide the bytes behind a resource path.
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    pub(crate) fn invalid_value(kind: &'static str, input: impl Into<String>) -> Self {
        Error::InvalidValue {
            kind,
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRepresentation {
            expected: "EmbeddedFile",
            found: "PageBreak",
        };
        assert_eq!(
            err.to_string(),
            "Invalid representation: expected EmbeddedFile node, found PageBreak"
        );

        let err = Error::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 3 is out of range (collection has 2 elements)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "sink closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
