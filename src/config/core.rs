use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{ErrorPolicy, ReportConfig, smart_load};

// Embed the default config at compile time
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Values given on the command line, merged with the highest priority.
/// Unset fields are not serialized and leave lower layers untouched.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_error: Option<ErrorPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

pub struct OutcodeConfig {
    figment: Figment,
}

impl OutcodeConfig {
    pub fn load(custom_config: Option<&str>, cli_overrides: Option<CliOverrides>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            if !Path::new(custom_path).exists() {
                tracing::warn!("Config file not found: {}, using defaults", custom_path);
            }
            figment = figment.merge(smart_load::auto(custom_path));
        } else {
            figment = figment
                .merge(Toml::file("outcode.toml"))
                .merge(Json::file("outcode.json"))
                .merge(Yaml::file("outcode.yaml"))
                .merge(Yaml::file("outcode.yml"));
        }

        // Environment variables override files, "__" separates nested keys
        figment = figment.merge(Env::prefixed("OUTCODE_").split("__"));

        if let Some(overrides) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides {:?}", overrides);
            figment = figment.merge(Serialized::defaults(overrides));
        }

        Ok(OutcodeConfig { figment })
    }

    /// Extract the typed report configuration
    pub fn report(&self) -> Result<ReportConfig> {
        let config: ReportConfig = self
            .figment
            .extract()
            .context("Failed to load report configuration")?;
        tracing::debug!(
            "Loaded configuration: {} file(s), output {}",
            config.files.len(),
            config.output.display()
        );
        Ok(config)
    }

    /// Get a nested object/section as JSON
    pub fn get_section(&self, path: &str) -> Result<serde_json::Value> {
        let value = self.figment.extract_inner(path)?;
        Ok(value)
    }

    /// Get the full merged configuration as a structured value
    pub fn get_full_config(&self) -> Result<serde_json::Value> {
        let value = self.figment.extract()?;
        Ok(value)
    }
}
