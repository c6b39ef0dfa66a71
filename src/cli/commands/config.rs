//! Configuration command implementations
//!
//! Commands for initializing, validating, and showing configuration.

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::cli::{ConfigCommands, Output};
use crate::config::{DEFAULT_CONFIG, ErrorPolicy, OutcodeConfig};

const CONFIG_FILE: &str = "outcode.toml";

/// Execute configuration commands
pub fn execute(cmd: ConfigCommands, custom_config: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init { force } => init(force, output),
        ConfigCommands::Validate => validate(custom_config, output),
        ConfigCommands::Show => show(custom_config),
    }
}

/// Write the embedded defaults to outcode.toml
fn init(force: bool, output: &Output) -> Result<()> {
    if Path::new(CONFIG_FILE).exists() && !force {
        bail!("{} already exists (use --force to overwrite)", CONFIG_FILE);
    }

    std::fs::write(CONFIG_FILE, DEFAULT_CONFIG).with_context(|| format!("Failed to write {}", CONFIG_FILE))?;

    output.success(&format!("Created {}", CONFIG_FILE));
    output.info("Edit the files list to choose what goes into the report");
    Ok(())
}

fn validate(custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = OutcodeConfig::load(custom_config, None)?.report()?;
    config.validate()?;

    output.success("Configuration is valid");
    output.key_value("Files:", &config.files.len().to_string());
    output.key_value("Output:", &config.output.display().to_string());
    output.key_value(
        "On error:",
        match config.on_error {
            ErrorPolicy::Abort => "abort",
            ErrorPolicy::Skip => "skip",
        },
    );
    Ok(())
}

/// Print the effective configuration as TOML on stdout
fn show(custom_config: Option<&str>) -> Result<()> {
    let config = OutcodeConfig::load(custom_config, None)?.report()?;
    let rendered = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    print!("{}", rendered);
    Ok(())
}
