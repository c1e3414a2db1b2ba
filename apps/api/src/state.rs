use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend for document critiques. `LlmClient` in production.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
