// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// The inbound body, reduced to the one field the handler reads.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChatRequest {
    pub message: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorReply {
    pub error: String,
}

impl ChatRequest {
    /// Normalise raw request bytes and pull out `message`.
    ///
    /// An absent body or JSON `null` is treated as `{}`. A JSON string is
    /// parsed a second time, since some clients post the body pre-encoded.
    pub fn from_body(raw: &[u8]) -> Result<Self, AppError> {
        let body = normalize_body(raw)?;
        let message = match body {
            Value::Object(mut fields) => fields.remove("message").filter(|v| !v.is_null()),
            _ => None,
        };
        Ok(Self { message })
    }
}

fn normalize_body(raw: &[u8]) -> Result<Value, AppError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let value = match serde_json::from_slice::<Value>(raw) {
        Ok(Value::String(encoded)) => serde_json::from_str::<Value>(&encoded),
        other => other,
    }
    .map_err(|err| {
        tracing::error!(error = %err, "JSON parsing failed");
        AppError::MalformedBody
    })?;

    Ok(match value {
        Value::Null => Value::Object(Map::new()),
        other => other,
    })
}
