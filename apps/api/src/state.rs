use std::sync::Arc;

use crate::catalog::PostRepository;
use crate::config::Config;
use crate::exam::SessionRegistry;
use crate::llm_client::TextModel;
use crate::settings::SettingsRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostRepository,
    pub settings: SettingsRepository,
    /// `None` when no Gemini API key is configured. Chat then answers with its
    /// fallback text and generation fails with `GENERATION_FAILED`.
    pub model: Option<Arc<dyn TextModel>>,
    pub sessions: SessionRegistry,
    pub config: Config,
}
