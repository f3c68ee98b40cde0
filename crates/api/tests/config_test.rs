use std::collections::HashMap;

use gymflow_api::config::ApiConfig;
use pretty_assertions::assert_eq;
use tracing::Level;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

const REQUIRED: [(&str, &str); 2] = [
    ("DATABASE_URL", "postgres://localhost/gym"),
    ("JWT_SECRET", "secret"),
];

#[test]
fn test_defaults() {
    let config = ApiConfig::from_lookup(lookup(&REQUIRED)).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.server_addr(), "0.0.0.0:3000");
}

#[test]
fn test_overrides() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "http://localhost:5173, https://gym.example.com,"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
    ]);

    let config = ApiConfig::from_lookup(lookup(&pairs)).unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:5173".to_string(),
            "https://gym.example.com".to_string(),
        ])
    );
    assert_eq!(config.request_timeout, 5);
}

#[test]
fn test_required_values() {
    assert!(ApiConfig::from_lookup(lookup(&[("JWT_SECRET", "secret")])).is_err());
    assert!(ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/gym")])).is_err());
    assert!(ApiConfig::from_lookup(lookup(&[
        ("DATABASE_URL", "postgres://localhost/gym"),
        ("JWT_SECRET", ""),
    ]))
    .is_err());
}

#[test]
fn test_invalid_port() {
    let mut pairs = REQUIRED.to_vec();
    pairs.push(("API_PORT", "not-a-port"));

    assert!(ApiConfig::from_lookup(lookup(&pairs)).is_err());
}
