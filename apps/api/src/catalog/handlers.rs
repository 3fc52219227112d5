//! Axum route handlers for the public catalog and admin post management.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::repository::{compute_stats, CatalogStats};
use crate::catalog::seed::{categories, states, CategoryInfo, StateInfo};
use crate::errors::AppError;
use crate::models::settings::QuickLink;
use crate::models::{JobCategory, JobPost};
use crate::state::AppState;

const HOME_RESULTS: usize = 8;
const HOME_ADMIT_CARDS: usize = 6;
const HOME_LATEST_JOBS: usize = 6;
const HOME_STATES: usize = 15;
const RELATED_LIMIT: usize = 5;
const DEFAULT_CATEGORY_LIMIT: usize = 20;
/// Upper bound on `?limit`; sparse categories are padded up to the limit.
const MAX_CATEGORY_LIMIT: usize = 50;

#[derive(Debug, Serialize)]
pub struct HomeFeed {
    pub results: Vec<JobPost>,
    pub admit_cards: Vec<JobPost>,
    pub latest_jobs: Vec<JobPost>,
    pub quick_links: Vec<QuickLink>,
    pub categories: Vec<CategoryInfo>,
    pub states: Vec<StateInfo>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: String,
    pub deleted: bool,
}

/// GET /api/v1/home
pub async fn handle_home(State(state): State<AppState>) -> Result<Json<HomeFeed>, AppError> {
    let settings = state.settings.load().await?;

    let feed = HomeFeed {
        results: state
            .posts
            .by_category(JobCategory::Result, HOME_RESULTS)
            .await?,
        admit_cards: state
            .posts
            .by_category(JobCategory::AdmitCard, HOME_ADMIT_CARDS)
            .await?,
        latest_jobs: state
            .posts
            .by_category(JobCategory::LatestJob, HOME_LATEST_JOBS)
            .await?,
        quick_links: settings
            .quick_links
            .into_iter()
            .filter(|l| l.is_active)
            .collect(),
        categories: categories(),
        states: states().into_iter().take(HOME_STATES).collect(),
    };

    Ok(Json(feed))
}

/// GET /api/v1/posts
pub async fn handle_list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPost>>, AppError> {
    Ok(Json(state.posts.all().await?))
}

/// GET /api/v1/posts/:id
pub async fn handle_get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobPost>, AppError> {
    state
        .posts
        .by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))
}

/// GET /api/v1/posts/:id/related
///
/// Other posts from the same category, never including the post itself.
pub async fn handle_related_posts(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<JobPost>>, AppError> {
    let post = state
        .posts
        .by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;

    let related = state
        .posts
        .by_category(post.category, RELATED_LIMIT)
        .await?
        .into_iter()
        .filter(|p| p.id != post.id)
        .collect();

    Ok(Json(related))
}

/// GET /api/v1/categories
pub async fn handle_categories() -> Json<Vec<CategoryInfo>> {
    Json(categories())
}

/// GET /api/v1/categories/:slug/posts?limit=20
pub async fn handle_category_posts(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Vec<JobPost>>, AppError> {
    let category = JobCategory::from_slug(&slug);
    let limit = query
        .limit
        .unwrap_or(DEFAULT_CATEGORY_LIMIT)
        .min(MAX_CATEGORY_LIMIT);
    Ok(Json(state.posts.by_category(category, limit).await?))
}

/// GET /api/v1/states
pub async fn handle_states() -> Json<Vec<StateInfo>> {
    Json(states())
}

/// GET /api/v1/states/:state/posts
pub async fn handle_state_posts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<JobPost>>, AppError> {
    Ok(Json(state.posts.by_state(&name).await?))
}

/// GET /api/v1/admin/overview
pub async fn handle_overview(State(state): State<AppState>) -> Result<Json<CatalogStats>, AppError> {
    let posts = state.posts.all().await?;
    Ok(Json(compute_stats(&posts)))
}

/// POST /api/v1/admin/posts
///
/// Upserts a post. An empty `id` creates a new post with an assigned id.
pub async fn handle_save_post(
    State(state): State<AppState>,
    Json(post): Json<JobPost>,
) -> Result<Json<JobPost>, AppError> {
    if post.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    let saved = state.posts.save(post).await?;
    Ok(Json(saved))
}

/// DELETE /api/v1/admin/posts/:id
pub async fn handle_delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.posts.delete(&id).await?;
    Ok(Json(DeleteResponse { id, deleted }))
}
