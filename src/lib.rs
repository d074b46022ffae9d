//! HTTP proxy that forwards a chat message, behind a fixed persona prompt,
//! to an OpenAI-compatible chat-completion API and returns the reply.

pub mod config;
pub mod error;
pub mod message;
pub mod persona;
pub mod routes;
pub mod services;
pub mod state;
