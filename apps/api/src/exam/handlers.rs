//! Axum route handlers for mock-test sessions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::exam::languages::{Language, LANGUAGES};
use crate::exam::session::{Direction, SessionView, SubmitOutcome};
use crate::state::AppState;

const DEFAULT_TITLE: &str = "Mock Test";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct OpenRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub session: SessionView,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub direction: Direction,
}

#[derive(Debug, Deserialize)]
pub struct JumpRequest {
    pub index: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub option: usize,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: Uuid,
    pub submitted: bool,
    /// Confirmation text when the submit was not confirmed.
    pub confirmation: Option<String>,
    pub session: SessionView,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/mock-tests/languages
pub async fn handle_languages() -> Json<Vec<Language>> {
    Json(LANGUAGES.to_vec())
}

/// POST /api/v1/mock-tests
pub async fn handle_open(
    State(state): State<AppState>,
    body: Option<Json<OpenRequest>>,
) -> (StatusCode, Json<SessionResponse>) {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let title = request
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let (id, session) = state.sessions.open(&title).await;
    (StatusCode::CREATED, Json(SessionResponse { id, session }))
}

/// GET /api/v1/mock-tests/:id
pub async fn handle_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.view(id).await?;
    Ok(Json(SessionResponse { id, session }))
}

/// DELETE /api/v1/mock-tests/:id
pub async fn handle_close(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.close(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Mock test {id} not found")))
    }
}

/// PUT /api/v1/mock-tests/:id/language
pub async fn handle_select_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<LanguageRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (_, session) = state
        .sessions
        .update(id, |s| s.select_language(&request.code))
        .await?;
    Ok(Json(SessionResponse { id, session }))
}

/// POST /api/v1/mock-tests/:id/start
pub async fn handle_start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let (_, session) = state
        .sessions
        .update(id, |s| s.start(&mut rand::thread_rng()))
        .await?;
    Ok(Json(SessionResponse { id, session }))
}

/// POST /api/v1/mock-tests/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (_, session) = state
        .sessions
        .update(id, |s| s.navigate(request.direction))
        .await?;
    Ok(Json(SessionResponse { id, session }))
}

/// POST /api/v1/mock-tests/:id/jump
pub async fn handle_jump(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JumpRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (_, session) = state
        .sessions
        .update(id, |s| s.jump(request.index))
        .await?;
    Ok(Json(SessionResponse { id, session }))
}

/// POST /api/v1/mock-tests/:id/answer
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (_, session) = state
        .sessions
        .update(id, |s| s.answer(request.option))
        .await?;
    Ok(Json(SessionResponse { id, session }))
}

/// POST /api/v1/mock-tests/:id/submit
///
/// Without `confirmed: true` the session stays in test and the response
/// carries the answered count for the client to confirm.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<SubmitRequest>>,
) -> Result<Json<SubmitResponse>, AppError> {
    let confirmed = body.map(|Json(r)| r.confirmed).unwrap_or(false);
    let (outcome, session) = state
        .sessions
        .update(id, |s| s.submit(confirmed))
        .await?;

    let (submitted, confirmation) = match outcome {
        SubmitOutcome::Scored(_) => (true, None),
        SubmitOutcome::NeedsConfirmation { answered, total } => (
            false,
            Some(format!(
                "You have answered {answered} out of {total} questions. Are you sure you want to submit?"
            )),
        ),
    };

    Ok(Json(SubmitResponse {
        id,
        submitted,
        confirmation,
        session,
    }))
}

/// POST /api/v1/mock-tests/:id/retake
pub async fn handle_retake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let (_, session) = state
        .sessions
        .update(id, |s| s.retake(&mut rand::thread_rng()))
        .await?;
    Ok(Json(SessionResponse { id, session }))
}
