use std::collections::HashMap;

use super::*;
use crate::types::errors::AppError;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults_without_env() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.api_base_url, "http://localhost:8000");
    assert_eq!(config.timeout().as_secs(), 30);
}

#[test]
fn test_env_values_applied_and_trailing_slash_trimmed() {
    let config = AppConfig::from_lookup(lookup_from(&[
        (ENV_API_URL, "https://docs.example.com/"),
        (ENV_TIMEOUT_SECS, "5"),
        (ENV_MAX_TREE_DEPTH, "12"),
    ]))
    .unwrap();

    assert_eq!(config.api_base_url, "https://docs.example.com");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.max_tree_depth, 12);
}

#[test]
fn test_invalid_values_rejected() {
    let bad_timeout = AppConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")]));
    assert!(matches!(bad_timeout, Err(AppError::Config(_))));

    let zero_depth = AppConfig::from_lookup(lookup_from(&[(ENV_MAX_TREE_DEPTH, "0")]));
    assert!(matches!(zero_depth, Err(AppError::Config(_))));

}

#[test]
fn test_bad_url_loads_but_fails_validation() {
    let bad_scheme = AppConfig::from_lookup(lookup_from(&[(ENV_API_URL, "ftp://host")])).unwrap();
    assert!(matches!(
        bad_scheme.validated_api_url(),
        Err(AppError::Config(_))
    ));

    let not_a_url =
        AppConfig::from_lookup(lookup_from(&[(ENV_API_URL, "localhost:8000 x")])).unwrap();
    assert!(matches!(
        not_a_url.validated_api_url(),
        Err(AppError::Config(_))
    ));

    let good = AppConfig::default().validated_api_url().unwrap();
    assert_eq!(good.scheme(), "http");
}

#[test]
fn test_overrides_win_over_loaded_values() {
    let loaded = AppConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "5")])).unwrap();

    let config = loaded
        .with_overrides(&ConfigOverrides {
            api_base_url: Some("http://127.0.0.1:9000/".into()),
            timeout_secs: None,
            max_tree_depth: Some(8),
        })
        .unwrap();

    assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.max_tree_depth, 8);
}
