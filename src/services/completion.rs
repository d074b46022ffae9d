// src/services/completion.rs
use anyhow::Context;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::config::{ApiKey, CompletionConfig};
use crate::error::UpstreamError;
use crate::services::validation::trim_text;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: [PromptMessage<'a>; 2],
}

#[derive(Serialize)]
struct PromptMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Option<Vec<Choice>>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat-completion endpoint (Groq, OpenAI).
pub struct CompletionClient {
    http: Client,
    endpoint: String,
    api_key: ApiKey,
    model: String,
    temperature: f64,
    persona_prompt: String,
}

impl CompletionClient {
    pub fn new(config: &CompletionConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            persona_prompt: config.persona_prompt.clone(),
        })
    }

    /// Send the persona prompt plus `user_message` and return the trimmed reply.
    #[instrument(skip_all, fields(model = %self.model))]
    pub async fn complete(&self, user_message: &str) -> Result<String, UpstreamError> {
        let request = CompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: [
                PromptMessage {
                    role: "system",
                    content: &self.persona_prompt,
                },
                PromptMessage {
                    role: "user",
                    content: user_message,
                },
            ],
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        debug!(%status, body_len = body.len(), "Received completion response");

        let parsed: CompletionResponse = serde_json::from_slice(&body).map_err(|err| {
            error!(%status, error = %err, "Invalid JSON from completion endpoint");
            UpstreamError::InvalidResponse(err.to_string())
        })?;

        if let Some(provider_error) = parsed.error.filter(is_truthy) {
            error!(%status, error = %provider_error, "Completion API error");
            return Err(UpstreamError::Provider(provider_error_message(&provider_error)));
        }

        let content = parsed
            .choices
            .as_deref()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
            .map(trim_text)
            .filter(|content| !content.is_empty());

        match content {
            Some(content) => Ok(content.to_string()),
            None if !status.is_success() => {
                error!(%status, "Completion endpoint returned an error status");
                Err(UpstreamError::Provider(format!("HTTP {status}")))
            }
            None => {
                error!(%status, "No content in LLM reply");
                Err(UpstreamError::EmptyResponse)
            }
        }
    }
}

fn transport_error(err: reqwest::Error) -> UpstreamError {
    if err.is_timeout() {
        error!(error = %err, "Completion request timed out");
        UpstreamError::Timeout
    } else {
        error!(error = %err, "Completion request failed");
        UpstreamError::Unreachable(err)
    }
}

/// `""`, `false` and `0` in the `error` field do not signal a failure.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn provider_error_message(provider_error: &Value) -> String {
    match provider_error {
        Value::String(message) => message.clone(),
        other => other
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("provider returned an error")
            .to_string(),
    }
}
