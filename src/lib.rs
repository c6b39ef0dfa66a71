//! # outcode - concatenate source files into one labeled report
//!
//! outcode reads an ordered list of files and, for each one, prints a header
//! naming the path followed by the file's contents. The same blocks are
//! written to an aggregate output file (`output.txt` by default), which is
//! truncated on every run. Missing files are reported on the console and left
//! out of the aggregate file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Report on the configured file list
//! outcode
//!
//! # Report on explicit files into a custom output
//! outcode -o report.txt src/main.rs src/lib.rs
//!
//! # Write an editable outcode.toml
//! outcode config init
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use outcode::config::ReportConfig;
//! use outcode::report::Reporter;
//!
//! let config = ReportConfig::new(["a.txt", "missing.txt"], "output.txt");
//! let summary = Reporter::new(&config).run()?;
//! assert_eq!(summary.missing.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod report;

pub use cli::{Cli, Output};
pub use config::{OutcodeConfig, ReportConfig};
pub use report::{Reporter, ReportSummary};

/// Result type alias for outcode operations
pub type Result<T> = anyhow::Result<T>;
