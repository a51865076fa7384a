use color_eyre::eyre::Result;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use super::{LogConfig, LOG_FILENAME};

/// `RUST_LOG` when set, otherwise this crate at the configured level.
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_manager={level},catalog={level}")))
}

/// Initialize the logging system with the given configuration.
///
/// Installs a rolling file layer and a stderr layer. Stdout stays free for
/// command output.
pub fn init_logging(config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let file_appender = RollingFileAppender::new(config.rotation, &config.log_dir, LOG_FILENAME);
    if config.json_format {
        let json_file_layer = fmt::layer()
            .json()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter(config.log_level));
        let json_stderr_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_target(true)
            .with_filter(env_filter(config.log_level));
        tracing_subscriber::registry()
            .with(json_file_layer)
            .with(json_stderr_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_span_events(FmtSpan::CLOSE)
            .with_target(true)
            .with_ansi(false)
            .with_filter(env_filter(config.log_level));
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_filter(env_filter(config.log_level));
        tracing_subscriber::registry()
            .with(file_layer)
            .with(stderr_layer)
            .with(ErrorLayer::default())
            .try_init()?;
    }
    Ok(())
}

/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

/// Parse a level name, falling back to `INFO`.
#[must_use]
pub fn parse_level(s: &str) -> Level {
    s.parse().unwrap_or(Level::INFO)
}
