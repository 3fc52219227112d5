// Admin content generation: full post, viral keyword post, custom topic,
// notification import and SEO strategy. All model calls go through llm_client.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;

use thiserror::Error;

use crate::llm_client::LlmError;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no language model is configured")]
    NotConfigured,

    #[error("model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("generated content is invalid: {0}")]
    Invalid(String),
}
