//! Configuration loading tests.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tictactoe_timeline::{Language, SortOrder};
use tictactoe_timeline_tui::{Cli, TuiConfig};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_from_file() {
    let file = write_config(
        r#"
language = "ru"
initial_sort = "descending"
log_file = "game.log"
log_filter = "debug"
"#,
    );

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.language(), Language::Russian);
    assert_eq!(*config.initial_sort(), SortOrder::Descending);
    assert_eq!(*config.log_file(), PathBuf::from("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_partial_file_uses_defaults() {
    let file = write_config("language = \"english\"\n");
    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.language(), Language::English);
    assert_eq!(*config.initial_sort(), SortOrder::Ascending);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_invalid_file_is_reported() {
    let file = write_config("initial_sort = \"sideways\"\n");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("language = \"en\"\nlog_file = \"from_file.log\"\n");
    let path = file.path().to_string_lossy().to_string();
    let cli = Cli::parse_from([
        "tictactoe",
        "--config",
        &path,
        "--language",
        "ru",
        "--descending",
    ]);

    let config = TuiConfig::resolve(&cli).expect("resolved");
    assert_eq!(*config.language(), Language::Russian);
    assert_eq!(*config.initial_sort(), SortOrder::Descending);
    assert_eq!(*config.log_file(), PathBuf::from("from_file.log"));
}

#[test]
fn test_cli_rejects_unknown_language() {
    let result = Cli::try_parse_from(["tictactoe", "--language", "de"]);
    assert!(result.is_err());
}
