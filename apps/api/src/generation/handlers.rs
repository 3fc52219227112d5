//! Axum route handlers for the admin generation tools.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::generation::generator::{
    apply_generated_content, apply_seo_strategy, generate_post_content, generate_seo_strategy,
    PostTask,
};
use crate::generation::models::{DeepAnalysis, GeneratedPostContent, SeoStrategy};
use crate::models::{JobCategory, JobPost};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body shared by the post-writing tasks. `input` is the title, keyword,
/// topic or notification text depending on the route.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub input: String,
    /// The post being edited. A fresh draft is used when absent.
    #[serde(default)]
    pub draft: Option<JobPost>,
}

#[derive(Debug, Deserialize)]
pub struct StrategyRequest {
    pub draft: JobPost,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub post: JobPost,
    pub content: GeneratedPostContent,
    pub seo_strategy: Option<SeoStrategy>,
    pub deep_analysis: Option<DeepAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct StrategyResponse {
    pub post: JobPost,
    pub strategy: SeoStrategy,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/admin/generate/full
pub async fn handle_generate_full(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    run_post_task(&state, PostTask::Full, request).await
}

/// POST /api/v1/admin/generate/viral
pub async fn handle_generate_viral(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    run_post_task(&state, PostTask::Viral, request).await
}

/// POST /api/v1/admin/generate/custom
pub async fn handle_generate_custom(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    run_post_task(&state, PostTask::CustomTopic, request).await
}

/// POST /api/v1/admin/generate/notification
pub async fn handle_generate_notification(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    run_post_task(&state, PostTask::Notification, request).await
}

/// POST /api/v1/admin/generate/notification/pdf
///
/// Multipart form with a `file` part holding the PDF and an optional `draft`
/// part holding the post JSON. Text is extracted, then imported like pasted
/// notification text.
pub async fn handle_generate_notification_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<GenerateResponse>, AppError> {
    let mut pdf: Option<Vec<u8>> = None;
    let mut draft: Option<JobPost> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("could not read part {name}: {e}")))?;
        match name.as_str() {
            "file" => pdf = Some(data.to_vec()),
            "draft" => {
                draft = Some(serde_json::from_slice(&data).map_err(|e| {
                    AppError::Validation(format!("draft is not a valid post: {e}"))
                })?)
            }
            _ => {}
        }
    }

    let pdf = pdf.ok_or_else(|| AppError::Validation("file part is required".to_string()))?;
    let text = extract_pdf_text(pdf).await?;
    info!("Extracted {} characters from notification PDF", text.len());

    run_post_task(
        &state,
        PostTask::Notification,
        GenerateRequest { input: text, draft },
    )
    .await
}

/// POST /api/v1/admin/generate/seo-strategy
///
/// Uses the draft's title and short description (title when blank).
pub async fn handle_generate_strategy(
    State(state): State<AppState>,
    Json(request): Json<StrategyRequest>,
) -> Result<Json<StrategyResponse>, AppError> {
    let draft = request.draft;
    if draft.title.trim().is_empty() {
        return Err(AppError::Validation(
            "enter a post title before generating an SEO strategy".to_string(),
        ));
    }

    let description = if draft.short_description.trim().is_empty() {
        draft.title.clone()
    } else {
        draft.short_description.clone()
    };

    let strategy =
        generate_seo_strategy(state.model.as_deref(), &draft.title, &description).await?;
    let post = apply_seo_strategy(draft, &strategy);

    Ok(Json(StrategyResponse { post, strategy }))
}

async fn run_post_task(
    state: &AppState,
    task: PostTask,
    request: GenerateRequest,
) -> Result<Json<GenerateResponse>, AppError> {
    let input = request.input.trim();
    if input.is_empty() {
        return Err(AppError::Validation("input cannot be empty".to_string()));
    }

    let content = generate_post_content(state.model.as_deref(), task, input).await?;

    let draft = request
        .draft
        .unwrap_or_else(|| JobPost::new("", "", JobCategory::LatestJob));
    let applied = apply_generated_content(draft, &content);

    Ok(Json(GenerateResponse {
        post: applied.post,
        content,
        seo_strategy: applied.seo_strategy,
        deep_analysis: applied.deep_analysis,
    }))
}

/// PDF parsing is CPU-bound, so it runs on the blocking pool.
async fn extract_pdf_text(bytes: Vec<u8>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Validation(format!("could not read text from PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "the PDF contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}
