//! Environment configuration test
//!
//! Kept in its own test binary because it mutates process environment.

use generator::{ApiConfig, GeneratorError, API_KEY_ENV, DEFAULT_MODEL, MODEL_ENV};

#[test]
fn test_api_key_is_required() {
    std::env::remove_var(API_KEY_ENV);
    assert!(matches!(ApiConfig::from_env(), Err(GeneratorError::MissingApiKey)));

    std::env::set_var(API_KEY_ENV, "   ");
    assert!(matches!(ApiConfig::from_env(), Err(GeneratorError::MissingApiKey)));

    std::env::set_var(API_KEY_ENV, "sk-live");
    std::env::remove_var(MODEL_ENV);
    let config = ApiConfig::from_env().unwrap();
    assert_eq!(config.api_key, "sk-live");
    assert_eq!(config.model, DEFAULT_MODEL);

    std::env::remove_var(API_KEY_ENV);
}
