//! Environment variable helpers

use crate::errors::{SharedError, SharedResult};

/// Read a variable that must be present and non-empty
pub fn require_env(name: &str) -> SharedResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(SharedError::MissingEnv {
            name: name.to_string(),
        }),
    }
}

/// Read an optional variable, using `default` when unset or empty
pub fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
