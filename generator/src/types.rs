//! Generator-specific data types

use std::path::PathBuf;
use std::time::Duration;
use serde::{Deserialize, Serialize};

use shared::env::{env_or, require_env};
use crate::error::{GeneratorError, GeneratorResult};

pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
pub const API_BASE_ENV: &str = "DEEPSEEK_API_BASE";
pub const MODEL_ENV: &str = "DEEPSEEK_MODEL";

pub const DEFAULT_API_BASE: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Word ceiling applied to every generated post
pub const DEFAULT_MAX_WORDS: usize = 120;

/// Courtesy delay between consecutive completion calls
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(500);

/// Settings for the chat-completion endpoint
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Config with the given key and default endpoint settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 1.0,
            max_tokens: 300,
            timeout: Duration::from_secs(30),
        }
    }

    /// Load from the environment. The key is mandatory and checked before
    /// anything else is built.
    pub fn from_env() -> GeneratorResult<Self> {
        let api_key = require_env(API_KEY_ENV).map_err(|_| GeneratorError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        config.api_base = env_or(API_BASE_ENV, DEFAULT_API_BASE);
        config.model = env_or(MODEL_ENV, DEFAULT_MODEL);
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full chat-completions URL
    pub fn completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

/// Where batch documents are written
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub folder: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("Output"),
        }
    }
}

/// One entry of the batch listing shown on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFile {
    pub name: String,
    pub date: String,
    pub pdf_path: String,
    pub txt_path: Option<String>,
}

/// Paths produced by writing one batch
#[derive(Debug, Clone)]
pub struct WrittenBatch {
    pub pdf_path: PathBuf,
    pub txt_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::new("sk-test");
        assert_eq!(config.model, "deepseek-chat");
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.completions_url(), "https://api.deepseek.com/v1/chat/completions");
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let config = ApiConfig::new("sk-test").with_api_base("http://127.0.0.1:9999/");
        assert_eq!(config.completions_url(), "http://127.0.0.1:9999/v1/chat/completions");
    }
}
