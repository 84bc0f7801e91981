//! DeepSeek chat-completion client

use std::time::Instant;
use async_trait::async_trait;
use reqwest::StatusCode;

use shared::{ApiFailure, ProcessId, process_debug};
use crate::error::GeneratorResult;
use crate::traits::CompletionClient;
use crate::types::ApiConfig;

/// Real completion client backed by reqwest
#[derive(Clone)]
pub struct RealCompletionClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RealCompletionClient {
    /// Build a client with the configured per-request timeout
    pub fn new(config: ApiConfig) -> GeneratorResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request_body(&self, system_prompt: &str, user_prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "stream": false
        })
    }
}

#[async_trait]
impl CompletionClient for RealCompletionClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, ApiFailure> {
        let request_start = Instant::now();

        let response = self
            .client
            .post(self.config.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(system_prompt, user_prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiFailure::Timeout
                } else {
                    ApiFailure::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return match status.as_u16() {
                401 => Err(ApiFailure::AuthenticationFailed),
                429 => Err(ApiFailure::RateLimitExceeded),
                503 => Err(ApiFailure::ServiceUnavailable),
                _ => Err(ApiFailure::ServerError(status.to_string())),
            };
        }

        let response_json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                ApiFailure::Timeout
            } else {
                ApiFailure::InvalidResponse(format!("Failed to parse response: {}", e))
            }
        })?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| ApiFailure::InvalidResponse("No content in response".to_string()))?;

        let total_tokens = response_json
            .get("usage")
            .and_then(|u| u.get("total_tokens"))
            .and_then(|t| t.as_u64())
            .unwrap_or(0);

        process_debug!(
            ProcessId::current(),
            "Completion received in {}ms ({} tokens)",
            request_start.elapsed().as_millis(),
            total_tokens
        );

        Ok(content.trim().to_string())
    }
}
