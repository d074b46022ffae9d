// src/routes/chat.rs
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{Method, StatusCode},
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    error::{AppError, ValidationError},
    message::{ChatReply, ChatRequest},
    services::validation::validate_message,
    state::SharedState,
};

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatReply>, AppError> {
    info!(method = "POST", "Incoming request");

    let body = body.map_err(body_rejection)?;

    let request = ChatRequest::from_body(&body)?;

    let message = validate_message(request.message.as_ref()).map_err(|err| {
        warn!(reason = %err, "Validation failed");
        err
    })?;
    info!(message_len = message.len(), "Message received");
    debug!(content = message, "Message content");

    let reply = state.completion.complete(message).await?;

    info!(reply_len = reply.len(), "Reply generated successfully");
    Ok(Json(ChatReply { reply }))
}

/// Every method other than POST on the chat route. The body is never read.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn method_not_allowed(method: Method) -> AppError {
    warn!(%method, "Method not allowed");
    AppError::MethodNotAllowed
}

/// An oversized body can only hold an oversized message.
fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(reason = %rejection, "Request body over limit");
        ValidationError::TooLong.into()
    } else {
        warn!(reason = %rejection, "Failed to read request body");
        AppError::MalformedBody
    }
}
