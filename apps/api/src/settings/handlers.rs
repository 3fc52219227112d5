//! Axum route handlers for the settings document.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::SiteSettings;
use crate::settings::generate_robots;
use crate::state::AppState;

/// GET /api/v1/admin/settings
pub async fn handle_get_settings(
    State(state): State<AppState>,
) -> Result<Json<SiteSettings>, AppError> {
    Ok(Json(state.settings.load().await?))
}

/// PUT /api/v1/admin/settings
///
/// Replaces the whole document. Sections omitted from the body take defaults.
pub async fn handle_put_settings(
    State(state): State<AppState>,
    Json(settings): Json<SiteSettings>,
) -> Result<Json<SiteSettings>, AppError> {
    state.settings.save(&settings).await?;
    Ok(Json(settings))
}

/// POST /api/v1/admin/settings/robots
///
/// Rewrites the robots content from the configured sitemap URL and saves it.
pub async fn handle_regenerate_robots(
    State(state): State<AppState>,
) -> Result<Json<SiteSettings>, AppError> {
    let settings = state
        .settings
        .update(|s| s.robots.content = generate_robots(s))
        .await?;
    Ok(Json(settings))
}
