/// Configuration loading tests
/// Tests defaults, file values, environment overrides and validation
use podcastr::{AppConfig, AppError};
use std::path::Path;
use tempfile::TempDir;

fn env(vars: &[(&str, &str)]) -> config::Environment {
    config::Environment::with_prefix("PODCASTR")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("podcastr.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Test defaults when neither file nor environment set anything
#[test]
fn test_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.api.url, "http://localhost:3333");
    assert_eq!(config.home.limit, 12);
    assert_eq!(config.home.latest_count, 2);
    assert_eq!(config.cache.listing_ttl_secs, 28_800);
    assert_eq!(config.cache.episode_ttl_secs, 86_400);
    assert_eq!(config.log.filter, "podcastr=info");
    assert!(config.validate().is_ok());
}

/// Test values read from a TOML file, with missing keys defaulted
#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[api]
url = "https://api.example.com"

[home]
limit = 6

[player]
tick_millis = 100
"#,
    );

    let config = AppConfig::load_with_env(Some(&path), env(&[])).unwrap();

    assert_eq!(config.api.url, "https://api.example.com");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.home.limit, 6);
    assert_eq!(config.home.latest_count, 2);
    assert_eq!(config.tick().as_millis(), 100);
}

/// Test environment variables override the file
#[test]
fn test_environment_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[home]\nlimit = 6\n");

    let config = AppConfig::load_with_env(
        Some(&path),
        env(&[
            ("PODCASTR_HOME__LIMIT", "20"),
            ("PODCASTR_API__URL", "http://10.0.0.2:3333"),
        ]),
    )
    .unwrap();

    assert_eq!(config.home.limit, 20);
    assert_eq!(config.api.url, "http://10.0.0.2:3333");
}

/// Test an explicit config path must exist
#[test]
fn test_missing_explicit_file() {
    let result = AppConfig::load_with_env(Some(Path::new("/nonexistent/podcastr.toml")), env(&[]));

    match result {
        Err(AppError::Config(msg)) => assert!(msg.contains("not found")),
        other => panic!("Expected Config error, got: {:?}", other),
    }
}

/// Test invalid values are rejected
#[test]
fn test_validation() {
    let mut config = AppConfig::default();
    config.api.url = "  ".to_string();
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = AppConfig::default();
    config.home.limit = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));

    let mut config = AppConfig::default();
    config.player.tick_millis = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

/// Test malformed TOML surfaces as a config error
#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[home\nlimit = ");

    let result = AppConfig::load_with_env(Some(&path), env(&[]));
    assert!(matches!(result, Err(AppError::Config(_))));
}
