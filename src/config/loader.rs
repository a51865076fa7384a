use std::path::Path;

use tracing::debug;

use super::{config_path, CatalogConfig, ConfigError};

/// Load the configuration from `~/.catalog/config.toml`.
///
/// Returns `Ok(CatalogConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    load_config_from(&config_path())
}

/// Load the configuration from an explicit path, with the same missing-file
/// fallback as [`load_config`].
pub fn load_config_from(path: &Path) -> Result<CatalogConfig, ConfigError> {
    if !path.exists() {
        debug!("Config not found at {}; using defaults", path.display());
        return Ok(CatalogConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&content)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}
