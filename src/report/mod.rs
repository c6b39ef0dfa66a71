//! Report generation
//!
//! Reads every configured file once and writes a labeled entry for it to the
//! console and to the aggregate output file. Missing files only produce a
//! console diagnostic; other read failures follow the configured
//! [`ErrorPolicy`].

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

use crate::config::{ErrorPolicy, ReportConfig};

mod entry;

pub use entry::{Entry, write_missing, write_skipped};

/// Outcome of a run, each list in report order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Paths written to both sinks (once per occurrence)
    pub written: Vec<String>,
    /// Paths that did not exist
    pub missing: Vec<String>,
    /// Paths dropped by [`ErrorPolicy::Skip`]
    pub skipped: Vec<String>,
}

/// Writes one entry per readable file in a [`ReportConfig`]
pub struct Reporter<'a> {
    config: &'a ReportConfig,
}

impl<'a> Reporter<'a> {
    /// Create a reporter over `config`
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Report to standard output and the configured output file.
    pub fn run(&self) -> Result<ReportSummary> {
        let stdout = io::stdout();
        let mut console = stdout.lock();
        self.run_to(&mut console)
    }

    /// Report to `console` and the configured output file.
    ///
    /// The output file is truncated up front and stays open for the whole run.
    pub fn run_to<C: Write>(&self, console: &mut C) -> Result<ReportSummary> {
        let output = &self.config.output;
        let file = File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?;
        let mut aggregate = BufWriter::new(file);

        let summary = self.run_with(console, &mut aggregate)?;

        aggregate
            .flush()
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;
        console.flush().context("Failed to flush standard output")?;

        tracing::info!(
            "Wrote {} entries to {} ({} missing, {} skipped)",
            summary.written.len(),
            output.display(),
            summary.missing.len(),
            summary.skipped.len()
        );
        Ok(summary)
    }

    /// Report to two arbitrary sinks.
    pub fn run_with<C: Write, A: Write>(&self, console: &mut C, aggregate: &mut A) -> Result<ReportSummary> {
        let labels = &self.config.labels;
        let mut summary = ReportSummary::default();

        for path in &self.config.files {
            match fs::read_to_string(path) {
                Ok(content) => {
                    tracing::debug!("Read {} ({} bytes)", path, content.len());
                    let entry = Entry::new(path.as_str(), content);
                    entry
                        .write_to(console, labels)
                        .context("Failed to write to standard output")?;
                    entry
                        .write_to(aggregate, labels)
                        .with_context(|| format!("Failed to write entry for {}", path))?;
                    summary.written.push(path.clone());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!("File not found: {}", path);
                    write_missing(console, labels, path).context("Failed to write to standard output")?;
                    summary.missing.push(path.clone());
                }
                Err(e) => match self.config.on_error {
                    ErrorPolicy::Abort => {
                        return Err(e).with_context(|| format!("Failed to read file: {}", path));
                    }
                    ErrorPolicy::Skip => {
                        tracing::warn!("Skipping {}: {}", path, e);
                        write_skipped(console, labels, path, &e).context("Failed to write to standard output")?;
                        summary.skipped.push(path.clone());
                    }
                },
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn path_str(path: &Path) -> String {
        path.to_str().unwrap().to_string()
    }

    fn run_in_memory(config: &ReportConfig) -> (Result<ReportSummary>, String, String) {
        let mut console = Vec::new();
        let mut aggregate = Vec::new();
        let result = Reporter::new(config).run_with(&mut console, &mut aggregate);
        (
            result,
            String::from_utf8(console).unwrap(),
            String::from_utf8(aggregate).unwrap(),
        )
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        fs::write(&a, "hello").unwrap();
        let missing = path_str(&temp_dir.path().join("missing.txt"));
        let a = path_str(&a);

        let config = ReportConfig::new([a.clone(), missing.clone()], temp_dir.path().join("output.txt"));
        let (result, console, aggregate) = run_in_memory(&config);
        let summary = result.unwrap();

        let block = format!("文件名：{}\n文件内容：\nhello\n\n", a);
        assert_eq!(aggregate, block);
        assert_eq!(console, format!("{}文件未找到: {}\n", block, missing));
        assert!(!aggregate.contains(&missing));
        assert_eq!(summary.written, vec![a]);
        assert_eq!(summary.missing, vec![missing]);
        assert!(summary.skipped.is_empty());
    }

    #[test]
    fn test_duplicates_and_order_are_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "first").unwrap();
        fs::write(&b, "second").unwrap();
        let (a, b) = (path_str(&a), path_str(&b));

        let config = ReportConfig::new([b.clone(), a.clone(), b.clone()], temp_dir.path().join("out.txt"));
        let (result, console, aggregate) = run_in_memory(&config);

        assert_eq!(result.unwrap().written, vec![b.clone(), a.clone(), b.clone()]);
        assert_eq!(console, aggregate);

        let block_b = format!("文件名：{}\n文件内容：\nsecond\n\n", b);
        let block_a = format!("文件名：{}\n文件内容：\nfirst\n\n", a);
        assert_eq!(aggregate, format!("{}{}{}", block_b, block_a, block_b));
    }

    #[test]
    fn test_empty_list_creates_empty_output() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("output.txt");
        fs::write(&output, "stale contents").unwrap();

        let config = ReportConfig::new(Vec::<String>::new(), &output);
        let mut console: Vec<u8> = Vec::new();
        let summary = Reporter::new(&config).run_to(&mut console).unwrap();

        assert_eq!(summary, ReportSummary::default());
        assert!(console.is_empty());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        fs::write(&a, "line 1\nline 2\n").unwrap();
        let output = temp_dir.path().join("output.txt");

        let config = ReportConfig::new([path_str(&a), path_str(&temp_dir.path().join("gone.txt"))], &output);

        Reporter::new(&config).run_to(&mut io::sink()).unwrap();
        let first = fs::read(&output).unwrap();
        Reporter::new(&config).run_to(&mut io::sink()).unwrap();
        let second = fs::read(&output).unwrap();

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn test_skip_policy_continues_past_unreadable_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        let binary = temp_dir.path().join("binary.bin");
        fs::write(&binary, b"\xff\xfe\x00\x80").unwrap();
        let a = temp_dir.path().join("a.txt");
        fs::write(&a, "hello").unwrap();
        let (dir, binary, a) = (path_str(&dir), path_str(&binary), path_str(&a));

        let mut config = ReportConfig::new([dir.clone(), binary.clone(), a.clone()], temp_dir.path().join("out.txt"));
        config.on_error = ErrorPolicy::Skip;
        let (result, console, aggregate) = run_in_memory(&config);
        let summary = result.unwrap();

        assert_eq!(summary.written, vec![a.clone()]);
        assert_eq!(summary.skipped, vec![dir.clone(), binary.clone()]);
        assert!(summary.missing.is_empty());
        assert_eq!(aggregate, format!("文件名：{}\n文件内容：\nhello\n\n", a));
        assert!(console.contains(&format!("文件未找到: {} (", dir)));
        assert!(console.contains(&format!("文件未找到: {} (", binary)));
    }

    #[test]
    fn test_abort_policy_stops_after_earlier_entries() {
        let temp_dir = TempDir::new().unwrap();
        let a = temp_dir.path().join("a.txt");
        fs::write(&a, "hello").unwrap();
        let binary = temp_dir.path().join("binary.bin");
        fs::write(&binary, b"\xc3\x28").unwrap();
        let after = temp_dir.path().join("after.txt");
        fs::write(&after, "never reached").unwrap();
        let output = temp_dir.path().join("output.txt");
        let (a, binary) = (path_str(&a), path_str(&binary));

        let config = ReportConfig::new([a.clone(), binary.clone(), path_str(&after)], &output);
        let err = Reporter::new(&config).run_to(&mut io::sink()).unwrap_err();

        assert!(err.to_string().contains(&binary));
        // The writer is dropped on the error path, which flushes what it holds
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            format!("文件名：{}\n文件内容：\nhello\n\n", a)
        );
    }

    #[test]
    fn test_unwritable_output_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = ReportConfig::new(Vec::<String>::new(), temp_dir.path().join("no/such/dir/out.txt"));

        let err = Reporter::new(&config).run_to(&mut io::sink()).unwrap_err();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
