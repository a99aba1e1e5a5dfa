use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lokeyrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the localization catalog JSON file.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Root directory of the Dart sources to scan.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Glob patterns excluded from the scan.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Attribute names whose quoted values are treated as user-visible text.
    #[serde(default = "default_checked_attributes")]
    pub checked_attributes: Vec<String>,
}

fn default_catalog_path() -> String {
    "assets/translations/en.json".to_string()
}

fn default_source_root() -> String {
    "lib".to_string()
}

fn default_checked_attributes() -> Vec<String> {
    crate::extract::DEFAULT_CHECKED_ATTRIBUTES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            source_root: default_source_root(),
            ignores: Vec::new(),
            checked_attributes: default_checked_attributes(),
        }
    }
}

impl Config {
    /// Load configuration from `dir`, falling back to defaults when no
    /// config file exists.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

/// Default config serialized as pretty JSON, for `lokey init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(format!("{}\n", json))
}
