// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::{ChatReply, ErrorReply};

/// Reply sent to callers whenever the upstream provider cannot be used.
pub const FALLBACK_REPLY: &str =
    "I am not able to generate a reliable response right now. Please try again in a moment.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message is missing.")]
    Missing,
    #[error("Message must be a string.")]
    NotAString,
    #[error("Message cannot be empty.")]
    Empty,
    #[error("Message is too long.")]
    TooLong,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("failed to reach the completion endpoint: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("completion endpoint did not answer in time")]
    Timeout,

    #[error("invalid response from completion endpoint: {0}")]
    InvalidResponse(String),

    #[error("provider returned an error: {0}")]
    Provider(String),

    #[error("model did not produce a usable response")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid JSON body.")]
    MalformedBody,

    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedBody | AppError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Upstream detail stays in the logs.
            AppError::Upstream(err) => {
                error!(error = %err, "LLM error surfaced");
                (
                    status,
                    Json(ChatReply {
                        reply: FALLBACK_REPLY.to_string(),
                    }),
                )
                    .into_response()
            }
            other => (
                status,
                Json(ErrorReply {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
