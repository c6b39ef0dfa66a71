//! Report entries and the diagnostic lines printed in their place

use std::io::{self, Write};

use crate::config::LabelConfig;

/// A file path together with the text read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub content: String,
}

impl Entry {
    /// Create an entry from a path and the text read from it
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Write the labeled block: path header, content header, content, blank line.
    pub fn write_to<W: Write>(&self, out: &mut W, labels: &LabelConfig) -> io::Result<()> {
        out.write_all(self.render(labels).as_bytes())
    }

    /// Render the labeled block into a string
    pub fn render(&self, labels: &LabelConfig) -> String {
        format!(
            "{}{}{}\n{}{}\n{}\n\n",
            labels.path, labels.separator, self.path, labels.content, labels.separator, self.content
        )
    }
}

/// Diagnostic line for a path that does not exist
pub fn write_missing<W: Write>(out: &mut W, labels: &LabelConfig, path: &str) -> io::Result<()> {
    writeln!(out, "{}: {}", labels.missing, path)
}

/// Diagnostic line for a path dropped by the skip policy
pub fn write_skipped<W: Write>(
    out: &mut W,
    labels: &LabelConfig,
    path: &str,
    error: &io::Error,
) -> io::Result<()> {
    writeln!(out, "{}: {} ({})", labels.missing, path, error)
}
