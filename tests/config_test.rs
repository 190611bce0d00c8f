use timekit::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.humanize.threshold_seconds, 120);
    assert!(!config.report.brief);
    assert_eq!(config.report.shownums, 3);
    assert!(config.report.show_all);
    assert!(config.report.redactions.is_empty());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid logging level should fail
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid threshold
    config.logging.level = "debug".to_string();
    config.humanize.threshold_seconds = 100_000;
    assert!(config.validate().is_err());

    // Reset and test invalid frame count
    config.humanize.threshold_seconds = 60;
    config.report.shownums = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("threshold_seconds = 120"));
    assert!(toml_str.contains("shownums = 3"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[humanize]
threshold_seconds = 30

[report]
brief = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.humanize.threshold_seconds, 30);
    assert!(config.report.brief);

    // Check that unspecified values use defaults
    assert!(config.logging.enabled); // default value
    assert_eq!(config.logging.level, "info"); // default value
    assert_eq!(config.report.shownums, 3); // default value
    assert!(config.report.show_all); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
    assert_eq!(
        config.humanize.threshold_seconds,
        default_config.humanize.threshold_seconds
    );
    assert_eq!(config.report.shownums, default_config.report.shownums);
}

#[test]
fn test_redactions_deserialization() {
    let toml_str = r#"
[report]
brief = true
redactions = [{ from = "/data/data/com.termux/files", to = "/d/d/c/f" }]
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.report.redactions.len(), 1);
    assert_eq!(config.report.redactions[0].to, "/d/d/c/f");

    // An empty 'from' is rejected
    let bad: Config = toml::from_str(
        r#"
[report]
redactions = [{ from = "", to = "x" }]
"#,
    )
    .unwrap();
    assert!(bad.validate().is_err());
}

#[test]
fn test_generate_and_reload_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let reloaded = Config::load_from_file(&path).unwrap();

    assert_eq!(reloaded.humanize.threshold_seconds, 120);
    assert_eq!(reloaded.logging.level, "info");

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Timekit Configuration File"));
}
