// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

use std::process::ExitCode;
use std::sync::Arc;

use catalog_manager::cli::{execute, Cli};
use catalog_manager::config::{load_config, load_config_from, CatalogConfig};
use catalog_manager::logging::{self, init_logging, parse_rotation, LogConfig, LOG_FILENAME};
use catalog_manager::utils::default_catalog_path;
use catalog_manager::{Catalog, JsonFileRepository};
use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Install color-eyre error hooks for colored error output
    color_eyre::install()?;

    // Parse CLI arguments first (before logging, so we can use log config)
    let args = Cli::parse();

    // Config file is optional; a broken one falls back to defaults once logging is up
    let loaded = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (CatalogConfig::default(), Some(e)),
    };

    let mut log_config = LogConfig::from(&config.logging);
    if let Some(dir) = &args.log_dir {
        log_config.log_dir.clone_from(dir);
    }
    if let Some(rotation) = &args.log_rotation {
        log_config.rotation = parse_rotation(rotation);
    }
    log_config.json_format |= args.log_json;

    let log_file = log_config.log_dir.join(LOG_FILENAME);
    logging::set_log_file_path(log_file.to_string_lossy().to_string());

    if let Err(e) = init_logging(log_config) {
        eprintln!("Error: Failed to initialize logging: {e}");
        eprintln!("Logs: {}", log_file.display());
        return Err(e);
    }
    if let Some(e) = config_error {
        warn!("Failed to load config, using defaults: {e}");
    }

    let store_path = args
        .store
        .or(config.store.path)
        .unwrap_or_else(default_catalog_path);
    let user = args.user.unwrap_or(config.audit.user);

    let repository = JsonFileRepository::open(&store_path).await?;
    info!(store = %store_path.display(), %user, "Opened catalog");
    let catalog = Catalog::new(Arc::new(repository), user);

    let outcome = execute(&catalog, args.command).await?;
    println!("{}", outcome.output);
    Ok(if outcome.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
