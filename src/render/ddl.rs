//! DDL text output.
//!
//! A [`Serializer`] is an append-only sink for one depth-first walk of a
//! tree. Nodes write their own fragments through it; the serializer only
//! tracks indentation and line boundaries.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::options::DdlOptions;
use crate::dom::{Node, Value};
use crate::error::{Error, Result};

/// Text sink for one DDL traversal.
///
/// Any write failure of the underlying writer is returned as
/// [`Error::Io`]; the traversal stops there and the output written so far is
/// incomplete.
pub struct Serializer<W: Write = Vec<u8>> {
    out: W,
    options: DdlOptions,
    indent: usize,
    at_line_start: bool,
}

impl Serializer<Vec<u8>> {
    /// Create a serializer writing into memory.
    pub fn new(options: DdlOptions) -> Self {
        Self::with_writer(Vec::new(), options)
    }

    /// The accumulated output.
    pub fn finish(self) -> Result<String> {
        String::from_utf8(self.out).map_err(|e| Error::Encoding(e.to_string()))
    }
}

impl<W: Write> Serializer<W> {
    /// Create a serializer writing into `out`.
    pub fn with_writer(out: W, options: DdlOptions) -> Self {
        Self {
            out,
            options,
            indent: 0,
            at_line_start: true,
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &DdlOptions {
        &self.options
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.indent
    }

    /// Write text without ending the line.
    pub fn write(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if self.at_line_start {
            let width = self.indent * self.options.indent_width;
            write!(self.out, "{:width$}", "", width = width)?;
            self.at_line_start = false;
        }
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// End the current line.
    pub fn end_line(&mut self) -> Result<()> {
        self.out
            .write_all(self.options.line_ending.as_str().as_bytes())?;
        self.at_line_start = true;
        Ok(())
    }

    /// Write a complete line.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.write(line)?;
        self.end_line()
    }

    /// Write a `//` comment line.
    pub fn write_comment(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            self.write_line(&format!("// {}", line))?;
        }
        Ok(())
    }

    /// Open a `{ … }` content block.
    pub fn begin_content(&mut self) -> Result<()> {
        self.open("{")
    }

    /// Close a content block.
    pub fn end_content(&mut self) -> Result<()> {
        self.close("}")
    }

    /// Open a `[ … ]` attribute block.
    pub fn begin_attributes(&mut self) -> Result<()> {
        self.open("[")
    }

    /// Close an attribute block.
    pub fn end_attributes(&mut self) -> Result<()> {
        self.close("]")
    }

    /// Write `Keyword = value` inside an attribute block.
    pub fn write_attribute(&mut self, keyword: &str, value: impl Display) -> Result<()> {
        self.write_line(&format!("{} = {}", keyword, value))
    }

    /// Flush and return the writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }

    fn open(&mut self, delimiter: &str) -> Result<()> {
        if !self.at_line_start {
            self.end_line()?;
        }
        self.write_line(delimiter)?;
        self.indent += 1;
        Ok(())
    }

    fn close(&mut self, delimiter: &str) -> Result<()> {
        if !self.at_line_start {
            self.end_line()?;
        }
        self.indent = self.indent.saturating_sub(1);
        self.write_line(delimiter)
    }
}

/// Write the attribute block of `node`: every set, serializable property in
/// descriptor order. Nothing is written when none is set.
///
/// Returns whether a block was written.
pub fn write_attributes<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<bool> {
    let meta = node.meta();
    let attributes: Vec<(&str, String)> = {
        let values = node.values();
        meta.serializable_properties()
            .filter_map(|(index, property)| {
                values
                    .slot(index)
                    .and_then(|slot| slot.value())
                    .and_then(|value| literal(&value))
                    .map(|text| (property.keyword, text))
            })
            .collect()
    };

    if attributes.is_empty() {
        return Ok(false);
    }

    serializer.begin_attributes()?;
    for (keyword, text) in attributes {
        serializer.write_attribute(keyword, text)?;
    }
    serializer.end_attributes()?;
    Ok(true)
}

/// DDL literal for a scalar value; `None` for node values.
pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(quote(text)),
        other => other.to_text(),
    }
}

/// Quote a string literal, escaping `\` and `"` and writing newlines as `\n`.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '\\' | '"' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Escape paragraph text so braces and backslashes read as text.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Serialize a tree (or subtree) to a DDL string.
pub fn to_ddl(node: impl AsRef<Node>, options: &DdlOptions) -> Result<String> {
    let mut serializer = Serializer::new(options.clone());
    write_tree(node.as_ref(), &mut serializer)?;
    serializer.finish()
}

/// Serialize a tree into any writer.
pub fn write_ddl<W: Write>(node: impl AsRef<Node>, out: W, options: &DdlOptions) -> Result<W> {
    let mut serializer = Serializer::with_writer(out, options.clone());
    write_tree(node.as_ref(), &mut serializer)?;
    serializer.into_inner()
}

/// Serialize a tree into a file.
///
/// The text is produced in memory first, so a failed traversal never leaves
/// a truncated file behind.
pub fn write_ddl_file(
    node: impl AsRef<Node>,
    path: impl AsRef<Path>,
    options: &DdlOptions,
) -> Result<()> {
    let text = to_ddl(node, options)?;
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    log::debug!(
        "Wrote {} bytes of DDL to {}",
        text.len(),
        path.as_ref().display()
    );
    Ok(())
}

fn write_tree<W: Write>(node: &Node, serializer: &mut Serializer<W>) -> Result<()> {
    if let Some(header) = serializer.options().header_comment.clone() {
        serializer.write_comment(&header)?;
    }
    node.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LineEnding;
    use std::io;

    #[test]
    fn test_blocks_indent() {
        let mut s = Serializer::new(DdlOptions::default());
        s.write_line("\\section").unwrap();
        s.begin_content().unwrap();
        s.write_line("\\pagebreak").unwrap();
        s.end_content().unwrap();
        assert_eq!(s.finish().unwrap(), "\\section\n{\n  \\pagebreak\n}\n");
    }

    #[test]
    fn test_write_then_end_line() {
        let mut s = Serializer::new(DdlOptions::default().with_line_ending(LineEnding::CrLf));
        s.write("a").unwrap();
        s.write("b").unwrap();
        s.end_line().unwrap();
        assert_eq!(s.finish().unwrap(), "ab\r\n");
    }

    #[test]
    fn test_quote_and_escape() {
        assert_eq!(quote(r#"a "b" \c"#), r#""a \"b\" \\c""#);
        assert_eq!(quote("one\ntwo"), r#""one\ntwo""#);
        assert_eq!(escape_text("{x}\\"), "\\{x\\}\\\\");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_aborts() {
        let mut s = Serializer::with_writer(BrokenSink, DdlOptions::default());
        let err = s.write_line("\\pagebreak").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
