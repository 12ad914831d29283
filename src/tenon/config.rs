use crate::error::{Result, TenonError};
use crate::grid::{SortDirection, SortKey, SortOrder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_INDENT: usize = 2;

/// Configuration for tenon, stored in .tenon/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenonConfig {
    /// Default grid sort key ("name", "type", "complexity", "time")
    #[serde(default = "default_sort_key")]
    pub sort_by: String,

    /// Default grid sort direction ("asc" or "desc")
    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,

    /// Spaces per tree level in grid output
    #[serde(default = "default_indent")]
    pub indent: usize,
}

fn default_sort_key() -> String {
    "name".to_string()
}

fn default_sort_direction() -> String {
    "asc".to_string()
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for TenonConfig {
    fn default() -> Self {
        Self {
            sort_by: default_sort_key(),
            sort_direction: default_sort_direction(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl TenonConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TenonError::Io)?;
        let config: TenonConfig =
            serde_json::from_str(&content).map_err(TenonError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TenonError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TenonError::Serialization)?;
        fs::write(config_path, content).map_err(TenonError::Io)?;
        Ok(())
    }

    /// Get a config value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sort-by" => Some(self.sort_by.clone()),
            "sort-direction" => Some(self.sort_direction.clone()),
            "indent" => Some(self.indent.to_string()),
            _ => None,
        }
    }

    /// Set a config value by key, validating the value
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "sort-by" => {
                SortKey::from_str(value)?;
                self.sort_by = value.to_string();
                Ok(())
            }
            "sort-direction" => {
                SortDirection::from_str(value)?;
                self.sort_direction = value.to_string();
                Ok(())
            }
            "indent" => {
                self.indent = value
                    .parse()
                    .map_err(|_| format!("Invalid indent: {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// The configured default sort; unparseable values fall back to
    /// name ascending rather than erroring.
    pub fn sort_order(&self) -> SortOrder {
        SortOrder {
            key: SortKey::from_str(&self.sort_by).unwrap_or_default(),
            direction: SortDirection::from_str(&self.sort_direction).unwrap_or_default(),
        }
    }
}
