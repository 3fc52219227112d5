//! SarkariBot chat assistant.
//!
//! Chat never fails outward: a missing model, an empty reply and a transport
//! error each map to a fixed apology string.

pub mod handlers;

use tracing::warn;

use crate::llm_client::{LlmError, TextModel};
use crate::models::JobPost;

pub const SYSTEM_INSTRUCTION: &str = "You are \"SarkariBot\", an intelligent assistant for a government job portal called SarkariAI.
Your goal is to help users find jobs, understand eligibility criteria, exam dates, and application fees.
You are polite, concise, and factual.
If a user asks about a specific job type (e.g., \"police jobs\"), summarize common requirements for Indian police jobs generally, or ask them to specify a state.
If the user asks for the \"latest result\", mention that they can check the 'Results' section on the homepage.
Do not invent fake job posts. If you don't know specific current live data, advise the user to check the specific category page on the website.
Answer in short paragraphs or bullet points.";

pub const NOT_CONFIGURED_REPLY: &str =
    "I'm sorry, but I'm not fully configured yet (API Key missing).";
pub const EMPTY_REPLY: &str = "I couldn't generate a response. Please try again.";
pub const UNAVAILABLE_REPLY: &str =
    "Sorry, I'm having trouble connecting to the server right now. Please try again later.";

/// The user's message, prefixed with the posts they are looking at when any.
pub fn build_chat_prompt(message: &str, context_posts: &[JobPost]) -> String {
    if context_posts.is_empty() {
        return message.to_string();
    }
    let jobs = context_posts
        .iter()
        .map(|p| format!("- {} ({})", p.title, p.category.title()))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Context - Here are some jobs the user might be looking at:\n{jobs}\n\nUser Query: {message}"
    )
}

/// Asks the model for a chat reply, degrading to a fixed apology on any failure.
pub async fn reply(model: Option<&dyn TextModel>, message: &str, context_posts: &[JobPost]) -> String {
    let Some(model) = model else {
        return NOT_CONFIGURED_REPLY.to_string();
    };

    let prompt = build_chat_prompt(message, context_posts);
    match model.generate(&prompt, Some(SYSTEM_INSTRUCTION), false).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => EMPTY_REPLY.to_string(),
        Err(LlmError::EmptyContent) => EMPTY_REPLY.to_string(),
        Err(e) => {
            warn!("Chat model call failed: {e}");
            UNAVAILABLE_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobCategory;
    use async_trait::async_trait;

    enum Stub {
        Echo,
        Blank,
        Down,
    }

    #[async_trait]
    impl TextModel for Stub {
        async fn generate(
            &self,
            prompt: &str,
            system: Option<&str>,
            json: bool,
        ) -> Result<String, LlmError> {
            assert_eq!(system, Some(SYSTEM_INSTRUCTION));
            assert!(!json);
            match self {
                Stub::Echo => Ok(format!("echo: {prompt}")),
                Stub::Blank => Err(LlmError::EmptyContent),
                Stub::Down => Err(LlmError::Api {
                    status: 503,
                    message: "unavailable".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_prompt_without_context_is_the_message() {
        assert_eq!(build_chat_prompt("police jobs?", &[]), "police jobs?");
    }

    #[test]
    fn test_prompt_lists_context_posts() {
        let posts = vec![
            JobPost::new("a", "SSC CGL 2024", JobCategory::LatestJob),
            JobPost::new("b", "UP Police Result", JobCategory::Result),
        ];
        assert_eq!(
            build_chat_prompt("last date?", &posts),
            "Context - Here are some jobs the user might be looking at:\n- SSC CGL 2024 (Latest Job)\n- UP Police Result (Result)\n\nUser Query: last date?"
        );
    }

    #[tokio::test]
    async fn test_reply_without_model() {
        assert_eq!(reply(None, "hi", &[]).await, NOT_CONFIGURED_REPLY);
    }

    #[tokio::test]
    async fn test_reply_fallbacks() {
        assert_eq!(reply(Some(&Stub::Echo), "hi", &[]).await, "echo: hi");
        assert_eq!(reply(Some(&Stub::Blank), "hi", &[]).await, EMPTY_REPLY);
        assert_eq!(reply(Some(&Stub::Down), "hi", &[]).await, UNAVAILABLE_REPLY);
    }
}
