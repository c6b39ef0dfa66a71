//! Report command implementation
//!
//! Loads the layered configuration, applies command-line overrides and runs
//! the reporter against standard output and the aggregate file.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::{CliOverrides, ErrorPolicy, OutcodeConfig};
use crate::report::Reporter;

/// Arguments of the default report command
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Files to report on, replacing the configured list.
    /// A first path named `config` is read as the subcommand; write `./config` instead.
    #[arg(value_name = "PATHS")]
    pub paths: Vec<String>,

    /// Aggregate output file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// What to do with files that exist but cannot be read
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_error: Option<ErrorPolicy>,
}

impl From<ReportArgs> for CliOverrides {
    fn from(args: ReportArgs) -> Self {
        Self {
            output: args.output,
            on_error: args.on_error,
            files: (!args.paths.is_empty()).then_some(args.paths),
        }
    }
}

/// Execute the report
pub fn execute(args: ReportArgs, custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = OutcodeConfig::load(custom_config, Some(args.into()))?.report()?;
    config.validate()?;

    let summary = Reporter::new(&config).run()?;

    output.verbose_summary("📄", "Entries written", summary.written.len());
    output.verbose_summary("❓", "Files not found", summary.missing.len());
    for path in &summary.missing {
        output.verbose_breakdown(path);
    }
    if !summary.skipped.is_empty() {
        output.warning(&format!("Skipped {} unreadable file(s)", summary.skipped.len()));
        for path in &summary.skipped {
            output.verbose_breakdown(path);
        }
    }

    Ok(())
}
