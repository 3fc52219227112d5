//! Axum route handlers for sitemap, robots and head metadata.

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::seo::head::{render_head, HeadState, PageMeta};
use crate::seo::sitemap::generate_sitemap_xml;
use crate::settings::robots_txt;
use crate::state::AppState;

/// GET /sitemap.xml
pub async fn handle_sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = state.posts.all().await?;
    let settings = state.settings.load().await?;
    let xml = generate_sitemap_xml(&posts, &settings, Utc::now().date_naive());
    Ok(([(header::CONTENT_TYPE, "text/xml")], xml))
}

/// GET /robots.txt
pub async fn handle_robots(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let settings = state.settings.load().await?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&settings),
    ))
}

#[derive(Debug, Deserialize)]
pub struct HeadQuery {
    #[serde(default = "root_path")]
    pub path: String,
    pub post_id: Option<String>,
}

fn root_path() -> String {
    "/".to_string()
}

#[derive(Debug, Serialize)]
pub struct HeadResponse {
    pub head: HeadState,
    pub html: String,
}

/// GET /api/v1/seo/head?path=/post/ssc-cgl-2024&post_id=ssc-cgl-2024
///
/// Resolves the document head for a page. An unknown `post_id` is a 404.
pub async fn handle_head(
    State(state): State<AppState>,
    Query(query): Query<HeadQuery>,
) -> Result<Json<HeadResponse>, AppError> {
    let settings = state.settings.load().await?;

    let page = match query.post_id.as_deref() {
        Some(id) => {
            let post = state
                .posts
                .by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Post {id} not found")))?;
            PageMeta::for_post(&post)
        }
        None => PageMeta::default(),
    };

    let head = HeadState::resolve(&settings, &page, &query.path);
    let html = render_head(&head);
    Ok(Json(HeadResponse { head, html }))
}
