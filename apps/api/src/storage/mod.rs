//! Document store: whole-document key/value persistence.
//!
//! Every document is read and written as a unit. There are no partial updates
//! and no transactions; callers serialize their own read-modify-write cycles.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::debug;

pub const POSTS_KEY: &str = "sarkariai_posts_v6";
pub const SETTINGS_KEY: &str = "sarkariai_settings_v5";

/// Storage backend trait. `AppState` carries it as `Arc<dyn DocumentStore>`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<Value>>;
    async fn save(&self, key: &str, document: &Value) -> Result<()>;
}

/// PostgreSQL-backed store using the `documents` table.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn load(&self, key: &str) -> Result<Option<Value>> {
        let body: Option<Value> = sqlx::query_scalar("SELECT body FROM documents WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(body)
    }

    async fn save(&self, key: &str, document: &Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (key, body, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (key) DO UPDATE SET body = EXCLUDED.body, updated_at = now()
            "#,
        )
        .bind(key)
        .bind(document)
        .execute(&self.pool)
        .await?;
        debug!("Saved document {key}");
        Ok(())
    }
}

/// Process-local store. Contents vanish on restart.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn load(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn save(&self, key: &str, document: &Value) -> Result<()> {
        self.documents
            .write()
            .await
            .insert(key.to_string(), document.clone());
        Ok(())
    }
}
