pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::catalog::handlers as catalog;
use crate::exam::handlers as exam;
use crate::generation::handlers as generation;
use crate::seo::handlers as seo;
use crate::settings::handlers as settings;
use crate::state::AppState;

/// Notification PDFs routinely exceed axum's 2 MB default body limit.
const PDF_UPLOAD_LIMIT: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/sitemap.xml", get(seo::handle_sitemap))
        .route("/robots.txt", get(seo::handle_robots))
        // Public catalog
        .route("/api/v1/home", get(catalog::handle_home))
        .route("/api/v1/posts", get(catalog::handle_list_posts))
        .route("/api/v1/posts/:id", get(catalog::handle_get_post))
        .route(
            "/api/v1/posts/:id/related",
            get(catalog::handle_related_posts),
        )
        .route("/api/v1/categories", get(catalog::handle_categories))
        .route(
            "/api/v1/categories/:slug/posts",
            get(catalog::handle_category_posts),
        )
        .route("/api/v1/states", get(catalog::handle_states))
        .route(
            "/api/v1/states/:state/posts",
            get(catalog::handle_state_posts),
        )
        .route("/api/v1/seo/head", get(seo::handle_head))
        // Assistant
        .route("/api/v1/chat", post(assistant::handle_chat))
        // Mock tests
        .route("/api/v1/mock-tests/languages", get(exam::handle_languages))
        .route("/api/v1/mock-tests", post(exam::handle_open))
        .route(
            "/api/v1/mock-tests/:id",
            get(exam::handle_view).delete(exam::handle_close),
        )
        .route(
            "/api/v1/mock-tests/:id/language",
            put(exam::handle_select_language),
        )
        .route("/api/v1/mock-tests/:id/start", post(exam::handle_start))
        .route(
            "/api/v1/mock-tests/:id/navigate",
            post(exam::handle_navigate),
        )
        .route("/api/v1/mock-tests/:id/jump", post(exam::handle_jump))
        .route("/api/v1/mock-tests/:id/answer", post(exam::handle_answer))
        .route("/api/v1/mock-tests/:id/submit", post(exam::handle_submit))
        .route("/api/v1/mock-tests/:id/retake", post(exam::handle_retake))
        // Admin
        .route("/api/v1/admin/overview", get(catalog::handle_overview))
        .route("/api/v1/admin/posts", post(catalog::handle_save_post))
        .route(
            "/api/v1/admin/posts/:id",
            delete(catalog::handle_delete_post),
        )
        .route(
            "/api/v1/admin/settings",
            get(settings::handle_get_settings).put(settings::handle_put_settings),
        )
        .route(
            "/api/v1/admin/settings/robots",
            post(settings::handle_regenerate_robots),
        )
        .route(
            "/api/v1/admin/generate/full",
            post(generation::handle_generate_full),
        )
        .route(
            "/api/v1/admin/generate/viral",
            post(generation::handle_generate_viral),
        )
        .route(
            "/api/v1/admin/generate/custom",
            post(generation::handle_generate_custom),
        )
        .route(
            "/api/v1/admin/generate/notification",
            post(generation::handle_generate_notification),
        )
        .route(
            "/api/v1/admin/generate/notification/pdf",
            post(generation::handle_generate_notification_pdf)
                .layer(DefaultBodyLimit::max(PDF_UPLOAD_LIMIT)),
        )
        .route(
            "/api/v1/admin/generate/seo-strategy",
            post(generation::handle_generate_strategy),
        )
        .with_state(state)
}
