//! Output options and configuration.

/// Options for writing DDL text.
#[derive(Debug, Clone, PartialEq)]
pub struct DdlOptions {
    /// Spaces per nesting level
    pub indent_width: usize,

    /// Comment written before the document (without the `//` marker)
    pub header_comment: Option<String>,

    /// Leave out collection blocks that have no elements
    pub omit_empty_collections: bool,

    /// Line terminator
    pub line_ending: LineEnding,
}

impl DdlOptions {
    /// Create new DDL options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indent width.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent_width = width.min(16);
        self
    }

    /// Set a header comment.
    pub fn with_header(mut self, comment: impl Into<String>) -> Self {
        self.header_comment = Some(comment.into());
        self
    }

    /// Write empty collection blocks instead of leaving them out.
    pub fn with_empty_collections(mut self, write: bool) -> Self {
        self.omit_empty_collections = !write;
        self
    }

    /// Set the line ending.
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = ending;
        self
    }
}

impl Default for DdlOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            header_comment: None,
            omit_empty_collections: true,
            line_ending: LineEnding::Lf,
        }
    }
}

/// Line terminator for text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator text.
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}
