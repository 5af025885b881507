use machups_kit::config::PolicyConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_policy_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
            [deployment]
            base_domain = "staging.machups.com"
            reservation_ttl_minutes = 2

            [content]
            blocked_terms = ["gambling"]
        "#
    )
    .unwrap();

    let policy = PolicyConfig::from_file(file.path()).unwrap();
    assert_eq!(policy.base_domain(), "staging.machups.com");
    assert_eq!(policy.reservation_ttl_minutes(), 2);
    assert_eq!(policy.blocked_terms(), vec!["gambling"]);
}

#[test]
fn test_load_policy_rejects_invalid_domain() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
            [deployment]
            base_domain = "not a domain"
        "#
    )
    .unwrap();

    assert!(PolicyConfig::from_file(file.path()).is_err());
}

#[test]
fn test_load_policy_rejects_malformed_toml() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[deployment\nbase_domain =").unwrap();

    assert!(PolicyConfig::from_file(file.path()).is_err());
}

#[test]
fn test_load_policy_missing_file() {
    assert!(PolicyConfig::from_file("/nonexistent/policy.toml").is_err());
}
