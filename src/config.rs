// src/config.rs
//! Process configuration, read once from the environment at startup.

use std::{env, fmt, fs, net::IpAddr, time::Duration};

use anyhow::{Context, Result, bail, ensure};

use crate::persona::DEFAULT_PERSONA_PROMPT;

pub const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_TEMPERATURE: f64 = 0.55;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Bearer credential for the upstream provider. Never printed.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

/// Everything needed to talk to the chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub api_key: ApiKey,
    pub model: String,
    pub temperature: f64,
    pub persona_prompt: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_enabled: bool,
    /// Upper bound on a buffered `/api/chat` request body.
    pub max_body_bytes: usize,
    pub log_format: LogFormat,
    pub completion: CompletionConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host: IpAddr = match get("CHAT_PROXY_HOST") {
            Some(raw) => raw.trim().parse().context("Invalid CHAT_PROXY_HOST")?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port: u16 = match get("PORT") {
            Some(raw) => raw.trim().parse().context("Invalid PORT")?,
            None => 3000,
        };

        let api_key = get("GROQ_API_KEY")
            .or_else(|| get("OPENAI_API_KEY"))
            .map(ApiKey::new)
            .context("GROQ_API_KEY or OPENAI_API_KEY must be set")?;

        let temperature: f64 = match get("CHAT_TEMPERATURE") {
            Some(raw) => raw.trim().parse().context("Invalid CHAT_TEMPERATURE")?,
            None => DEFAULT_TEMPERATURE,
        };
        ensure!(
            (0.0..=2.0).contains(&temperature),
            "CHAT_TEMPERATURE must be between 0 and 2, got {temperature}"
        );

        let timeout_secs: u64 = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().context("Invalid UPSTREAM_TIMEOUT_SECS")?,
            None => DEFAULT_TIMEOUT_SECS,
        };
        ensure!(timeout_secs > 0, "UPSTREAM_TIMEOUT_SECS must be greater than 0");

        let persona_prompt = match (get("PERSONA_PROMPT_FILE"), get("PERSONA_PROMPT")) {
            (Some(path), _) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read PERSONA_PROMPT_FILE at {path}"))?,
            (None, Some(inline)) => inline,
            (None, None) => DEFAULT_PERSONA_PROMPT.to_string(),
        };

        let max_body_bytes: usize = match get("MAX_BODY_BYTES") {
            Some(raw) => raw.trim().parse().context("Invalid MAX_BODY_BYTES")?,
            None => DEFAULT_MAX_BODY_BYTES,
        };
        ensure!(max_body_bytes > 0, "MAX_BODY_BYTES must be greater than 0");

        let cors_enabled = match get("CHAT_PROXY_CORS").map(|v| v.trim().to_ascii_lowercase()) {
            None => false,
            Some(v) => match v.as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                _ => bail!("Invalid CHAT_PROXY_CORS {v:?}, expected true or false"),
            },
        };

        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("json") => LogFormat::Json,
            Some("text") => LogFormat::Text,
            Some(other) => bail!("Invalid LOG_FORMAT {other:?}, expected json or text"),
        };

        Ok(Self {
            host,
            port,
            cors_enabled,
            max_body_bytes,
            log_format,
            completion: CompletionConfig {
                endpoint: get("CHAT_API_URL").unwrap_or_else(|| DEFAULT_COMPLETION_URL.to_string()),
                api_key,
                model: get("CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
                persona_prompt,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}
