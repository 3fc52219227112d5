//! Axum route handler for the chat assistant.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::warn;

use crate::assistant::reply;
use crate::models::chat::{ChatMessage, ChatRole};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Posts the user is currently viewing, injected as context.
    #[serde(default)]
    pub context_post_ids: Vec<String>,
}

/// POST /api/v1/chat
///
/// Always answers 200 with a model message; failures become apology text.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatMessage> {
    let mut context_posts = Vec::new();
    for id in &request.context_post_ids {
        match state.posts.by_id(id).await {
            Ok(Some(post)) => context_posts.push(post),
            Ok(None) => {}
            Err(e) => warn!("Skipping chat context post {id}: {e}"),
        }
    }

    let text = reply(state.model.as_deref(), &request.message, &context_posts).await;
    Json(ChatMessage::new(ChatRole::Model, text))
}
