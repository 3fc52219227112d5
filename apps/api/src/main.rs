mod assistant;
mod catalog;
mod config;
mod db;
mod errors;
mod exam;
mod generation;
mod llm_client;
mod models;
mod routes;
mod seo;
mod settings;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::PostRepository;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::exam::SessionRegistry;
use crate::llm_client::{LlmClient, TextModel};
use crate::routes::build_router;
use crate::settings::SettingsRepository;
use crate::state::AppState;
use crate::storage::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SarkariAI API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn DocumentStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Arc::new(PgDocumentStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; documents are kept in memory only");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    let model: Option<Arc<dyn TextModel>> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone())?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Some(Arc::new(llm))
        }
        None => {
            warn!("GEMINI_API_KEY not set; chat and generation run in fallback mode");
            None
        }
    };

    let state = AppState {
        posts: PostRepository::new(store.clone()),
        settings: SettingsRepository::new(store),
        model,
        sessions: SessionRegistry::default(),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the admin UI has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
