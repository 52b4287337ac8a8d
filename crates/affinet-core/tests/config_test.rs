use affinet_core::config::*;
use affinet_core::errors::ConfigError;
use affinet_core::AffinetError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AffinetConfig::from_toml("").unwrap();

    // Traversal defaults
    assert_eq!(config.traversal.max_depth, 5);
    assert_eq!(config.traversal.max_nodes, 500);

    // Session defaults
    assert_eq!(config.session.label_field, "name");
    assert_eq!(config.session.cache_capacity, 1_024);
    assert_eq!(config.session.cache_idle_secs, 600);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json_output);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[traversal]
max_nodes = 50

[session]
label_field = "fullName"
"#;
    let config = AffinetConfig::from_toml(toml).unwrap();
    assert_eq!(config.traversal.max_nodes, 50);
    assert_eq!(config.traversal.max_depth, 5); // default
    assert_eq!(config.session.label_field, "fullName");
    assert_eq!(config.session.cache_capacity, 1_024); // default
}

#[test]
fn zero_max_nodes_is_a_legal_budget() {
    let config = AffinetConfig::from_toml("[traversal]\nmax_nodes = 0\n").unwrap();
    assert_eq!(config.traversal.max_nodes, 0);
}

#[test]
fn empty_label_field_is_rejected() {
    let err = AffinetConfig::from_toml("[session]\nlabel_field = \"  \"\n").unwrap_err();
    match err {
        AffinetError::Config(ConfigError::Invalid { field, .. }) => {
            assert_eq!(field, "session.label_field")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_cache_capacity_is_rejected() {
    let err = AffinetConfig::from_toml("[session]\ncache_capacity = 0\n").unwrap_err();
    assert!(err.to_string().contains("session.cache_capacity"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = AffinetConfig::from_toml("[traversal\nmax_depth = ").unwrap_err();
    assert!(matches!(err, AffinetError::Config(ConfigError::Parse(_))));
}

#[test]
fn config_serde_roundtrip() {
    let config = AffinetConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = AffinetConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.traversal.max_depth, config.traversal.max_depth);
    assert_eq!(roundtripped.session.label_field, config.session.label_field);
}
