//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use persona_chat_proxy::config::{
    ApiKey, CompletionConfig, Config, DEFAULT_MAX_BODY_BYTES, LogFormat,
};
use persona_chat_proxy::routes::build_app;
use persona_chat_proxy::state::AppState;
use serde_json::{Value, json};
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-groq-key";
pub const TEST_MODEL: &str = "llama-3.1-8b-instant";
pub const TEST_PERSONA: &str = "You are a calm, structured assistant.";
pub const COMPLETIONS_PATH: &str = "/openai/v1/chat/completions";

pub fn test_config(endpoint: &str, timeout: Duration) -> Config {
    Config {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        cors_enabled: false,
        max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        log_format: LogFormat::Text,
        completion: CompletionConfig {
            endpoint: endpoint.to_string(),
            api_key: ApiKey::new(TEST_API_KEY),
            model: TEST_MODEL.to_string(),
            temperature: 0.55,
            persona_prompt: TEST_PERSONA.to_string(),
            timeout,
        },
    }
}

pub fn app_for(server: &MockServer) -> Router {
    app_with_config(test_config(
        &format!("{}{}", server.uri(), COMPLETIONS_PATH),
        Duration::from_secs(5),
    ))
}

pub fn app_with_config(config: Config) -> Router {
    let state = Arc::new(AppState::new(config).unwrap());
    build_app(state)
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// Mount a completion stub that must be hit exactly `times` times.
pub async fn mount_completion(server: &MockServer, response: ResponseTemplate, times: u64) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

pub fn chat_request(http_method: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(http_method)
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}
