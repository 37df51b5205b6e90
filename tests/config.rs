use topicboard::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.server.base_url, "http://localhost:5000");
    assert_eq!(config.ui.card_stagger_ms, 100);
    assert_eq!(config.ui.card_fade_ms, 300);
    assert_eq!(config.ui.notification_seconds, 3);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid base URL should fail
    config.server.base_url = "localhost:5000".to_string();
    assert!(config.validate().is_err());
    config.server.base_url = "".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid timings
    config.server.base_url = "https://topics.example.com".to_string();
    assert!(config.validate().is_ok());
    config.ui.card_fade_ms = 10_000;
    assert!(config.validate().is_err());

    config.ui.card_fade_ms = 300;
    config.ui.notification_seconds = 0;
    assert!(config.validate().is_err());

    config.ui.notification_seconds = 3;
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("base_url = \"http://localhost:5000\""));
    assert!(toml_str.contains("card_fade_ms = 300"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[server]
base_url = "https://topics.example.com"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.server.base_url, "https://topics.example.com");
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.ui.card_stagger_ms, 100);
    assert_eq!(config.ui.notification_seconds, 3);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.server.base_url, default_config.server.base_url);
    assert_eq!(config.ui.card_fade_ms, default_config.ui.card_fade_ms);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}
