use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use tokio::sync::Mutex;
use tracing::info;

use crate::catalog::seed::initial_posts;
use crate::models::{JobCategory, JobPost, PostStatus};
use crate::storage::{DocumentStore, POSTS_KEY};

/// Categories with fewer stored posts than this are padded with placeholders.
const MIN_CATEGORY_POSTS: usize = 5;
const MIN_VIEWS: u64 = 25_000;
const MAX_VIEWS: u64 = 500_000;

/// Reads and writes the posts document.
///
/// Writes hold `write_lock` across the whole read-modify-write cycle so two
/// concurrent saves cannot drop each other's changes.
#[derive(Clone)]
pub struct PostRepository {
    store: Arc<dyn DocumentStore>,
    write_lock: Arc<Mutex<()>>,
}

impl PostRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns every stored post, seeding the initial set on first run.
    pub async fn all(&self) -> Result<Vec<JobPost>> {
        match self.store.load(POSTS_KEY).await? {
            Some(doc) => serde_json::from_value(doc).context("posts document is malformed"),
            None => {
                let posts = initial_posts();
                self.persist(&posts).await?;
                info!("Seeded {} initial posts", posts.len());
                Ok(posts)
            }
        }
    }

    /// Stored posts in `category`, padded with generated placeholders when the
    /// category holds fewer than five, truncated to `limit`.
    pub async fn by_category(&self, category: JobCategory, limit: usize) -> Result<Vec<JobPost>> {
        let posts = self.all().await?;
        Ok(fill_category(posts, category, limit, &mut rand::thread_rng()))
    }

    pub async fn by_state(&self, state: &str) -> Result<Vec<JobPost>> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|p| {
                p.state
                    .as_deref()
                    .is_some_and(|s| s.eq_ignore_ascii_case(state))
            })
            .collect())
    }

    /// Looks a post up by id. Ids of generated placeholders resolve to a
    /// synthetic post even though nothing is stored under them.
    pub async fn by_id(&self, id: &str) -> Result<Option<JobPost>> {
        let found = self.all().await?.into_iter().find(|p| p.id == id);
        if found.is_some() {
            return Ok(found);
        }
        if id.starts_with("gen-") {
            return Ok(Some(placeholder_for_id(id, &mut rand::thread_rng())));
        }
        Ok(None)
    }

    /// Replaces a post with the same id, or inserts a new one at the front.
    pub async fn save(&self, mut post: JobPost) -> Result<JobPost> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.all().await?;

        if let Some(existing) = posts.iter_mut().find(|p| p.id == post.id && !post.id.is_empty()) {
            *existing = post.clone();
            info!("Updated post {}", post.id);
        } else {
            if post.id.is_empty() {
                post.id = format!("post-{}", Utc::now().timestamp_millis());
            }
            if post.views < MIN_VIEWS {
                post.views = random_views(&mut rand::thread_rng());
            }
            posts.insert(0, post.clone());
            info!("Created post {}", post.id);
        }

        self.persist(&posts).await?;
        Ok(post)
    }

    /// Removes a post. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.all().await?;
        let before = posts.len();
        posts.retain(|p| p.id != id);
        let removed = posts.len() != before;
        self.persist(&posts).await?;
        if removed {
            info!("Deleted post {id}");
        }
        Ok(removed)
    }

    async fn persist(&self, posts: &[JobPost]) -> Result<()> {
        let doc = serde_json::to_value(posts)?;
        self.store.save(POSTS_KEY, &doc).await
    }
}

/// Summary figures for the admin overview.
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct CatalogStats {
    pub total_posts: usize,
    pub published_posts: usize,
    pub total_views: u64,
}

pub fn compute_stats(posts: &[JobPost]) -> CatalogStats {
    CatalogStats {
        total_posts: posts.len(),
        published_posts: posts
            .iter()
            .filter(|p| p.status == PostStatus::Published)
            .count(),
        total_views: posts.iter().map(|p| p.views).sum(),
    }
}

fn fill_category<R: Rng + ?Sized>(
    posts: Vec<JobPost>,
    category: JobCategory,
    limit: usize,
    rng: &mut R,
) -> Vec<JobPost> {
    let mut filtered: Vec<JobPost> = posts.into_iter().filter(|p| p.category == category).collect();

    if filtered.len() < MIN_CATEGORY_POSTS {
        let needed = limit.saturating_sub(filtered.len());
        let stamp = Utc::now().timestamp_millis();
        let today = Utc::now().date_naive();
        for i in 0..needed {
            filtered.push(placeholder_post(category, i, stamp, today, rng));
        }
    }

    filtered.truncate(limit);
    filtered
}

fn placeholder_post<R: Rng + ?Sized>(
    category: JobCategory,
    index: usize,
    stamp: i64,
    today: NaiveDate,
    rng: &mut R,
) -> JobPost {
    let mut post = JobPost::new(
        format!("gen-{}-{}-{}", category.slug(), stamp, index),
        format!("{} Post {} - Recruitment Online Form", category.title(), index + 1),
        category,
    );
    post.status = PostStatus::Published;
    post.state = Some(if index % 3 == 0 { "All India" } else { "Uttar Pradesh" }.to_string());
    post.update_date = random_date_since_2024(today, rng);
    post.short_description = format!("Auto-generated content for {}.", category.title());
    post.total_vacancy = Some("Various".to_string());
    post.views = random_views(rng);
    post.slug = format!("generated-post-{index}");
    post
}

fn placeholder_for_id<R: Rng + ?Sized>(id: &str, rng: &mut R) -> JobPost {
    let mut post = JobPost::new(id, "Generated Post View", JobCategory::LatestJob);
    post.status = PostStatus::Published;
    post.state = Some("All India".to_string());
    post.slug = id.to_string();
    post.update_date = "Recently".to_string();
    post.short_description = "This is a generated post placeholder.".to_string();
    post.views = random_views(rng);
    post.total_vacancy = Some("N/A".to_string());
    post
}

fn random_views<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(MIN_VIEWS..=MAX_VIEWS)
}

/// Formats like "15 May 2024".
fn random_date_since_2024<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(today);
    let span = (today - start).num_days().max(0);
    let date = start + Duration::days(rng.gen_range(0..=span));
    date.format("%-d %b %Y").to_string()
}
