// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::CompletionClient;

pub type SharedState = Arc<AppState>;

/// Built once at startup and shared read-only by every request.
pub struct AppState {
    pub config: Config,
    pub completion: CompletionClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let completion = CompletionClient::new(&config.completion)?;
        Ok(Self { config, completion })
    }
}
