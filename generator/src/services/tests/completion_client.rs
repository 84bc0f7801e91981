//! Tests for the DeepSeek completion client

use std::time::Duration;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared::ApiFailure;
use crate::services::completion_client::RealCompletionClient;
use crate::traits::CompletionClient;
use crate::types::ApiConfig;

fn client_for(server: &MockServer) -> RealCompletionClient {
    let config = ApiConfig::new("sk-test").with_api_base(server.uri());
    RealCompletionClient::new(config).unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-1",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ],
        "usage": { "prompt_tokens": 120, "completion_tokens": 30, "total_tokens": 150 }
    })
}

#[tokio::test]
async fn test_successful_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer sk-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("  Cut losses early.\n")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let content = client.complete("system", "user").await.unwrap();
    assert_eq!(content, "Cut losses early.");
}

#[tokio::test]
async fn test_request_body_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "model": "deepseek-chat",
            "messages": [
                { "role": "system", "content": "style rules" },
                { "role": "user", "content": "write a post" }
            ],
            "temperature": 1.0,
            "max_tokens": 300,
            "stream": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.complete("style rules", "write a post").await.unwrap(), "ok");
}

#[tokio::test]
async fn test_status_mapping() {
    let cases = [
        (401, ApiFailure::AuthenticationFailed),
        (429, ApiFailure::RateLimitExceeded),
        (503, ApiFailure::ServiceUnavailable),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.complete("s", "u").await.unwrap_err(), expected, "status {status}");
    }
}

#[tokio::test]
async fn test_non_200_success_status_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202).set_body_json(completion("accepted")))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(client.complete("s", "u").await, Err(ApiFailure::ServerError(_))));
}

#[tokio::test]
async fn test_missing_content_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(client.complete("s", "u").await, Err(ApiFailure::InvalidResponse(_))));
}

#[tokio::test]
async fn test_garbage_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(matches!(client.complete("s", "u").await, Err(ApiFailure::InvalidResponse(_))));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion("late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::new("sk-test")
        .with_api_base(server.uri())
        .with_timeout(Duration::from_millis(50));
    let client = RealCompletionClient::new(config).unwrap();

    assert_eq!(client.complete("s", "u").await.unwrap_err(), ApiFailure::Timeout);
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 9 locally
    let config = ApiConfig::new("sk-test").with_api_base("http://127.0.0.1:9");
    let client = RealCompletionClient::new(config).unwrap();

    assert!(matches!(client.complete("s", "u").await, Err(ApiFailure::NetworkError(_))));
}
