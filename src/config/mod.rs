//! Configuration management for outcode
//!
//! The report configuration is an explicit value: the ordered file list, the
//! aggregate output path, the header labels and the read-error policy. It is
//! assembled by [`OutcodeConfig`] from embedded defaults, config files,
//! environment variables and CLI overrides.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod core;
mod smart_load;

pub use self::core::{CliOverrides, DEFAULT_CONFIG, OutcodeConfig};

/// Typed report configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Files to report on, in report order. Duplicates are reported twice.
    pub files: Vec<String>,

    /// Aggregate output file, truncated on every run
    pub output: PathBuf,

    /// Policy for read failures other than a missing file
    #[serde(default)]
    pub on_error: ErrorPolicy,

    /// Header labels
    #[serde(default)]
    pub labels: LabelConfig,
}

/// How to treat a file that exists but cannot be read as UTF-8 text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the run and report the error
    #[default]
    Abort,
    /// Print a diagnostic and continue with the next file
    Skip,
}

/// Labels used when rendering entries and diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Label in front of the file path
    pub path: String,

    /// Label on the line introducing the content
    pub content: String,

    /// Separator between a label and its value
    pub separator: String,

    /// Label of the diagnostic line printed for a missing file
    pub missing: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            path: "文件名".to_string(),
            content: "文件内容".to_string(),
            separator: "：".to_string(),
            missing: "文件未找到".to_string(),
        }
    }
}

impl ReportConfig {
    /// Build a configuration for an explicit file list with default labels
    pub fn new<I, S>(files: I, output: impl Into<PathBuf>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            output: output.into(),
            on_error: ErrorPolicy::default(),
            labels: LabelConfig::default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.as_os_str().is_empty() {
            bail!("Output path cannot be empty");
        }

        if self.labels.path.is_empty() || self.labels.content.is_empty() {
            bail!("Path and content labels cannot be empty");
        }

        // The output is truncated before any input is read
        let output = resolve(&self.output);
        if let Some(file) = self.files.iter().find(|f| resolve(Path::new(f)) == output) {
            bail!(
                "Output file '{}' is also listed as an input and would be truncated before it is read",
                file
            );
        }

        Ok(())
    }
}

/// Canonical form of `path` when it exists, otherwise its absolute form
fn resolve(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
