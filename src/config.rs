//! Configuration file support for nac-compare.
//!
//! Provides YAML-based configuration through `nac-compare.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! flags take precedence over every value read here.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::comparison::policies::CalculationConstants;
use crate::shared::security::read_checked;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nac-compare.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub devices: Option<u64>,
    pub users: Option<u64>,
    pub years: Option<u32>,
    pub industry: Option<String>,
    pub org_size: Option<String>,
    pub region: Option<String>,
    pub vendors: Option<Vec<String>>,
    pub baseline_vendor: Option<String>,
    pub format: Option<String>,
    pub output: Option<String>,
    /// Path to an external vendor dataset, relative to the working directory
    pub dataset: Option<String>,
    /// Field-by-field overrides of the calculation constants
    pub constants: Option<CalculationConstants>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML and that constant names are spelled correctly.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!(path = %path.display(), "config file loaded");

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
///
/// Analysis parameters (devices, years, industry, ...) are checked later,
/// together with the command-line values, so that every problem is listed
/// in the report at once.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: format '{}'. {}\n\n💡 Hint: Use 'markdown' or 'json'.",
                format,
                e
            );
        }
    }

    if let Some(ref vendors) = config.vendors {
        for (i, vendor) in vendors.iter().enumerate() {
            if vendor.trim().is_empty() {
                bail!(
                    "Invalid config: vendors[{}] must not be empty.\n\n\
                     💡 Hint: List vendor ids such as \"portnox\" or \"cisco_ise\"; run with --list-vendors to see them all.",
                    i
                );
            }
        }
    }

    if let Some(ref dataset) = config.dataset {
        if dataset.trim().is_empty() {
            bail!(
                "Invalid config: dataset must not be empty.\n\n\
                 💡 Hint: Remove the field to use the built-in dataset."
            );
        }
    }

    if let Some(ref constants) = config.constants {
        if let Err(reason) = constants.validate() {
            bail!(
                "Invalid config: constants.{}\n\n💡 Hint: Remove the override to use the default value.",
                reason
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
