use std::collections::HashMap;

use hangout_api::config::ApiConfig;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::Level;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = ApiConfig::from_lookup(lookup_from(&[])).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.server_addr(), "0.0.0.0:3000");
}

#[test]
fn test_custom_values() {
    let config = ApiConfig::from_lookup(lookup_from(&[
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "DEBUG"),
        ("API_CORS_ORIGINS", "http://localhost:5173, https://hangout.example.com,"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:5173".to_string(),
            "https://hangout.example.com".to_string(),
        ])
    );
    assert_eq!(config.request_timeout, 5);
}

#[rstest]
#[case("not-a-port")]
#[case("70000")]
#[case("-1")]
fn test_invalid_port(#[case] port: &str) {
    let result = ApiConfig::from_lookup(lookup_from(&[("API_PORT", port)]));

    assert!(result.is_err());
}

#[rstest]
#[case("verbose", Level::INFO)]
#[case("warn", Level::WARN)]
#[case("Error", Level::ERROR)]
#[case("trace", Level::TRACE)]
fn test_log_levels(#[case] value: &str, #[case] expected: Level) {
    let config = ApiConfig::from_lookup(lookup_from(&[("LOG_LEVEL", value)])).unwrap();

    assert_eq!(config.log_level, expected);
}

#[test]
fn test_invalid_timeout_falls_back() {
    let config =
        ApiConfig::from_lookup(lookup_from(&[("API_REQUEST_TIMEOUT_SECONDS", "soon")])).unwrap();

    assert_eq!(config.request_timeout, 30);
}
