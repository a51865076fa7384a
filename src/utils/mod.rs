mod atomic;

pub use atomic::atomic_write;

use std::path::PathBuf;

/// The name of the per-user catalog folder
pub const CATALOG_FOLDER: &str = ".catalog";

/// Default catalog data file name
pub const CATALOG_FILE: &str = "catalog.json";

/// Get the path to the per-user catalog folder (`~/.catalog`), falling back to
/// the working directory when no home directory is known
#[must_use]
pub fn get_catalog_home() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CATALOG_FOLDER)
}

/// Get the default path of the catalog data file
#[must_use]
pub fn default_catalog_path() -> PathBuf {
    get_catalog_home().join(CATALOG_FILE)
}
