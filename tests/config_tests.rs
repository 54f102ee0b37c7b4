use sql_doc_validator::config::{ChecksConfig, Config};

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.checks.disabled.is_empty());
    assert!(config.checks.severity.is_empty());
    assert!(config.render.title.is_none());
}

#[test]
fn test_checks_config_with_disabled() {
    let config = ChecksConfig {
        disabled: vec!["SNIP002".to_string(), "ANCHOR001".to_string()],
        ..Default::default()
    };

    assert_eq!(config.disabled.len(), 2);
    assert!(config.disabled.contains(&"SNIP002".to_string()));
}

#[test]
fn test_checks_config_with_severity() {
    let mut severity = std::collections::HashMap::new();
    severity.insert("SNIP001".to_string(), "error".to_string());

    let config = ChecksConfig {
        disabled: vec![],
        severity
    };

    assert_eq!(config.severity.get("SNIP001").unwrap(), "error");
}

#[test]
fn test_config_from_toml() {
    let toml = r#"
[checks]
disabled = ["SNIP002"]

[checks.severity]
SNIP001 = "error"

[render]
title = "SQL Tips"
"#;
    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.checks.disabled, vec!["SNIP002".to_string()]);
    assert_eq!(config.checks.severity.get("SNIP001").unwrap(), "error");
    assert_eq!(config.render.title.as_deref(), Some("SQL Tips"));
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: Config = toml::from_str("[render]\ntitle = \"x\"\n").unwrap();

    assert!(config.checks.disabled.is_empty());
    assert_eq!(config.render.title.as_deref(), Some("x"));
}
