use employes_demo::config::{Config, DEFAULT_DATABASE};

#[test]
fn test_empty_document_uses_defaults() {
    let cfg = Config::from_yaml("").unwrap();
    assert_eq!(cfg.database, DEFAULT_DATABASE);
    assert!(cfg.show_access_hints);
}

#[test]
fn test_partial_document_keeps_remaining_defaults() {
    let cfg = Config::from_yaml("database: /tmp/employes.db\n").unwrap();
    assert_eq!(cfg.database, "/tmp/employes.db");
    assert!(cfg.show_access_hints);
}

#[test]
fn test_hints_can_be_disabled() {
    let cfg = Config::from_yaml("show_access_hints: false\n").unwrap();
    assert!(!cfg.show_access_hints);
    assert_eq!(cfg.database, DEFAULT_DATABASE);
}

#[test]
fn test_malformed_document_is_rejected() {
    assert!(Config::from_yaml("database: [unterminated").is_err());
}

#[test]
fn test_yaml_roundtrip_keeps_values() {
    let cfg = Config {
        database: "/srv/employes.db".to_string(),
        show_access_hints: false,
    };
    let yaml = cfg.to_yaml().unwrap();
    assert!(yaml.contains("database: /srv/employes.db"));
    assert!(yaml.contains("show_access_hints: false"));
}
