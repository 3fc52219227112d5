pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tracing::info;

use crate::models::SiteSettings;
use crate::storage::{DocumentStore, SETTINGS_KEY};

/// Reads and writes the settings document.
///
/// Saves and read-modify-write updates share `write_lock`, so a whole-document
/// save cannot interleave with an `update` cycle.
#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn DocumentStore>,
    write_lock: Arc<Mutex<()>>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Stored settings merged over defaults, or plain defaults when nothing is stored.
    pub async fn load(&self) -> Result<SiteSettings> {
        match self.store.load(SETTINGS_KEY).await? {
            Some(doc) => serde_json::from_value(doc).context("settings document is malformed"),
            None => Ok(SiteSettings::default()),
        }
    }

    pub async fn save(&self, settings: &SiteSettings) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.persist(settings).await
    }

    /// Loads, applies `op` and saves while holding the write lock.
    pub async fn update<F>(&self, op: F) -> Result<SiteSettings>
    where
        F: FnOnce(&mut SiteSettings),
    {
        let _guard = self.write_lock.lock().await;
        let mut settings = self.load().await?;
        op(&mut settings);
        self.persist(&settings).await?;
        Ok(settings)
    }

    async fn persist(&self, settings: &SiteSettings) -> Result<()> {
        let doc = serde_json::to_value(settings)?;
        self.store.save(SETTINGS_KEY, &doc).await?;
        info!("Site settings saved");
        Ok(())
    }
}

/// Robots content regenerated from the configured sitemap URL.
pub fn generate_robots(settings: &SiteSettings) -> String {
    format!(
        "User-agent: *\nDisallow: /admin\nDisallow: /private\nAllow: /\n\nSitemap: {}",
        settings.sitemap.sitemap_url
    )
}

/// The robots.txt body served to crawlers: stored content plus any custom rules.
pub fn robots_txt(settings: &SiteSettings) -> String {
    let rules = settings.robots.custom_rules.trim();
    if rules.is_empty() {
        settings.robots.content.clone()
    } else {
        format!("{}\n{}", settings.robots.content, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_without_document_returns_defaults() {
        let repo = SettingsRepository::new(Arc::new(MemoryDocumentStore::new()));
        assert_eq!(repo.load().await.unwrap(), SiteSettings::default());
    }

    #[tokio::test]
    async fn test_load_merges_partial_document() {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .save(SETTINGS_KEY, &json!({"sitemap": {"include_categories": false}}))
            .await
            .unwrap();
        let repo = SettingsRepository::new(store);
        let settings = repo.load().await.unwrap();
        assert!(!settings.sitemap.include_categories);
        assert!(settings.sitemap.auto_generate);
        assert_eq!(settings.general.site_name, "SarkariAI");
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let repo = SettingsRepository::new(Arc::new(MemoryDocumentStore::new()));
        let mut settings = SiteSettings::default();
        settings.google.analytics_id = "G-TEST".to_string();
        repo.save(&settings).await.unwrap();
        assert_eq!(repo.load().await.unwrap().google.analytics_id, "G-TEST");
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let repo = SettingsRepository::new(Arc::new(MemoryDocumentStore::new()));
        let mut tasks = Vec::new();
        for i in 0..20 {
            let repo = repo.clone();
            tasks.push(tokio::spawn(async move {
                repo.update(|s| {
                    let mut link = s.quick_links[0].clone();
                    link.id = format!("ql-{i}");
                    s.quick_links.push(link);
                })
                .await
                .unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        let defaults = SiteSettings::default().quick_links.len();
        assert_eq!(repo.load().await.unwrap().quick_links.len(), defaults + 20);
    }

    #[tokio::test]
    async fn test_update_returns_saved_settings() {
        let repo = SettingsRepository::new(Arc::new(MemoryDocumentStore::new()));
        let updated = repo
            .update(|s| s.robots.content = generate_robots(s))
            .await
            .unwrap();
        assert_eq!(repo.load().await.unwrap(), updated);
    }

    #[test]
    fn test_generate_robots_points_at_sitemap() {
        let settings = SiteSettings::default();
        assert_eq!(
            generate_robots(&settings),
            "User-agent: *\nDisallow: /admin\nDisallow: /private\nAllow: /\n\nSitemap: https://sarkariai.com/sitemap.xml"
        );
    }

    #[test]
    fn test_robots_txt_appends_custom_rules() {
        let mut settings = SiteSettings::default();
        assert_eq!(robots_txt(&settings), "User-agent: *\nDisallow: /admin\nAllow: /");
        settings.robots.custom_rules = "Disallow: /search\n".to_string();
        assert_eq!(
            robots_txt(&settings),
            "User-agent: *\nDisallow: /admin\nAllow: /\nDisallow: /search"
        );
    }
}
