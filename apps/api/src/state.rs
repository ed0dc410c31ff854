use std::sync::Arc;

use crate::llm_client::GenerativeClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable; nothing is shared between requests except the model client.
#[derive(Clone)]
pub struct AppState {
    /// Gemini in production, a scripted double in tests.
    pub llm: Arc<dyn GenerativeClient>,
}
