mod loader;
pub use loader::{load_config, load_config_from};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::get_catalog_home;

/// Name of the configuration file inside the catalog folder.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_user() -> String {
    "catalog".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

/// `[store]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Catalog data file; `~/.catalog/catalog.json` when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[audit]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Name written into created/updated audit fields
    #[serde(default = "default_user")]
    pub user: String,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
        }
    }
}

/// `[logging]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String,
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            rotation: default_rotation(),
            dir: None,
        }
    }
}

/// Catalog configuration, deserialized from `~/.catalog/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Resolve the canonical path for the config file.
#[must_use]
pub fn config_path() -> PathBuf {
    get_catalog_home().join(CONFIG_FILE)
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
