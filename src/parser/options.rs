//! Import options and configuration.

use crate::dom::NodeKind;

/// Options for importing JSON trees.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Required kind of the root node (any kind if `None`)
    pub root_kind: Option<NodeKind>,

    /// Maximum nesting depth of nodes
    pub max_depth: usize,
}

impl ImportOptions {
    /// Create new import options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip invalid content).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Require the root node to be of `kind`.
    pub fn with_root_kind(mut self, kind: NodeKind) -> Self {
        self.root_kind = Some(kind);
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            root_kind: None,
            max_depth: 64,
        }
    }
}

/// Error handling mode during import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Skip invalid content and continue
    Lenient,
}
