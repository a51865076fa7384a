use super::*;
use std::path::Path;

#[test]
fn test_log_config_default() {
    let config = LogConfig::default();
    assert_eq!(config.log_level, Level::INFO);
    assert!(!config.json_format);
    assert!(config.log_dir.ends_with("logs"));
}

#[test]
fn test_log_config_default_log_dir_contains_catalog() {
    let config = LogConfig::default();
    let path_str = config.log_dir.to_string_lossy();
    assert!(path_str.contains(".catalog"));
}

#[test]
fn test_parse_rotation_hourly() {
    let debug = format!("{:?}", parse_rotation("hourly"));
    assert_eq!(debug, format!("{:?}", Rotation::HOURLY));
}

#[test]
fn test_parse_rotation_never_case_insensitive() {
    let debug = format!("{:?}", parse_rotation("Never"));
    assert_eq!(debug, format!("{:?}", Rotation::NEVER));
}

#[test]
fn test_parse_rotation_unknown_defaults_to_daily() {
    let debug = format!("{:?}", parse_rotation("weekly"));
    assert_eq!(debug, format!("{:?}", Rotation::DAILY));
}

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), Level::DEBUG);
    assert_eq!(parse_level("WARN"), Level::WARN);
    assert_eq!(parse_level("loud"), Level::INFO);
}

#[test]
fn test_from_logging_config() {
    let section = LoggingConfig {
        level: "trace".to_string(),
        json: true,
        rotation: "never".to_string(),
        dir: Some("/var/log/catalog".into()),
    };
    let config = LogConfig::from(&section);
    assert_eq!(config.log_level, Level::TRACE);
    assert!(config.json_format);
    assert_eq!(config.log_dir, Path::new("/var/log/catalog"));
    assert_eq!(format!("{:?}", config.rotation), format!("{:?}", Rotation::NEVER));
}

#[test]
fn test_log_filename_constant() {
    assert_eq!(LOG_FILENAME, "catalog.log");
}

#[test]
fn test_log_file_path_first_value_wins() {
    set_log_file_path("/tmp/catalog-first.log".to_string());
    set_log_file_path("/tmp/catalog-second.log".to_string());
    assert_eq!(get_log_file_path(), "/tmp/catalog-first.log");
}
