//! Configuration file support for driver-catalog.
//!
//! Provides YAML-based configuration through `driver-catalog.config.yml`
//! files: the spreadsheet to read, the sheet set and its layouts, header
//! alias overrides and output defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::catalog::domain::{validate_sheet_set, SheetLayout, SheetSpec};
use crate::catalog::policies::FieldAliases;
use crate::shared::security::read_regular_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "driver-catalog.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub spreadsheet_id: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub format: Option<String>,
    pub sheets: Option<Vec<SheetConfig>>,
    pub field_aliases: Option<HashMap<String, Vec<String>>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// One configured sheet.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    pub name: String,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub firmware: bool,
    #[serde(default)]
    pub model_columns: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LayoutConfig {
    #[default]
    Tall,
    Wide,
}

impl SheetConfig {
    fn to_spec(&self) -> Result<SheetSpec> {
        let layout = match self.layout {
            LayoutConfig::Tall => {
                if !self.model_columns.is_empty() {
                    bail!(
                        "Invalid config: sheet '{}' lists model_columns but is not a wide sheet.\n\n\
                         💡 Hint: Add 'layout: wide' or remove 'model_columns'.",
                        self.name
                    );
                }
                SheetLayout::Tall
            }
            LayoutConfig::Wide => SheetLayout::Wide {
                model_columns: self.model_columns.clone(),
            },
        };
        SheetSpec::new(self.name.clone(), layout, self.firmware)
    }
}

impl ConfigFile {
    /// Sheet definitions, if the file configures any
    pub fn sheet_specs(&self) -> Result<Option<Vec<SheetSpec>>> {
        let Some(sheets) = &self.sheets else {
            return Ok(None);
        };

        let specs = sheets
            .iter()
            .map(SheetConfig::to_spec)
            .collect::<Result<Vec<_>>>()?;
        validate_sheet_set(&specs)?;
        Ok(Some(specs))
    }

    /// Default aliases with the file's overrides applied
    pub fn aliases(&self) -> Result<FieldAliases> {
        match &self.field_aliases {
            Some(overrides) => FieldAliases::from_overrides(overrides),
            None => Ok(FieldAliases::default()),
        }
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }

    /// One warning line per unknown top-level key, sorted
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

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
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(id) = &config.spreadsheet_id {
        if id.trim().is_empty() {
            bail!("Invalid config: spreadsheet_id must not be empty.");
        }
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit timeout_secs to use the default of 30 seconds."
        );
    }

    config.output_format()?;
    config.sheet_specs()?;
    config.aliases()?;
    Ok(())
}
