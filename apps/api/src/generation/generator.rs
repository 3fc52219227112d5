//! Generation tasks and how their results land on a post draft.
//!
//! Each task is one model call in JSON mode, parsed into a typed result and
//! validated before anything touches the draft.

use tracing::info;

use crate::generation::models::{
    BacklinkStrategy, DeepAnalysis, GeneratedPostContent, SeoStrategy,
};
use crate::generation::prompts::{
    CUSTOM_TOPIC_PROMPT_TEMPLATE, FULL_POST_PROMPT_TEMPLATE, NOTIFICATION_CHAR_LIMIT,
    NOTIFICATION_PROMPT_TEMPLATE, SEO_STRATEGY_PROMPT_TEMPLATE, VIRAL_POST_PROMPT_TEMPLATE,
};
use crate::generation::GenerationError;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, STUDENT_TONE};
use crate::llm_client::{generate_json, TextModel};
use crate::models::post::{AgeLimit, DateRow, ExamPatternRow, FeeRow, Salary};
use crate::models::JobPost;

const GENERATED_TOTAL_VACANCY: &str = "Various";
const DEFAULT_AGE_MIN: &str = "18";
const DEFAULT_AGE_MAX: &str = "30";
const DEFAULT_AGE_AS_ON: &str = "01/01/2025";
const ESTIMATED_BACKLINKS: &str = "40+ Sources";

/// The generation task a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTask {
    Full,
    Viral,
    CustomTopic,
    Notification,
}

impl PostTask {
    fn label(self) -> &'static str {
        match self {
            PostTask::Full => "full post",
            PostTask::Viral => "viral post",
            PostTask::CustomTopic => "custom topic",
            PostTask::Notification => "notification import",
        }
    }
}

/// Builds the prompt for `task` with `input` (title, keyword, topic or
/// notification text) substituted in.
pub fn build_post_prompt(task: PostTask, input: &str) -> String {
    let (template, placeholder) = match task {
        PostTask::Full => (FULL_POST_PROMPT_TEMPLATE, "{title}"),
        PostTask::Viral => (VIRAL_POST_PROMPT_TEMPLATE, "{keyword}"),
        PostTask::CustomTopic => (CUSTOM_TOPIC_PROMPT_TEMPLATE, "{topic}"),
        PostTask::Notification => (NOTIFICATION_PROMPT_TEMPLATE, "{text}"),
    };
    let input = match task {
        PostTask::Notification => truncate_chars(input, NOTIFICATION_CHAR_LIMIT),
        _ => input,
    };
    // Tone first so user input containing "{tone}" is left alone.
    template
        .replace("{tone}", STUDENT_TONE)
        .replace(placeholder, input)
}

pub fn build_strategy_prompt(title: &str, description: &str) -> String {
    SEO_STRATEGY_PROMPT_TEMPLATE
        .replace("{description}", description)
        .replace("{title}", title)
}

/// Runs one post-writing task.
pub async fn generate_post_content(
    model: Option<&dyn TextModel>,
    task: PostTask,
    input: &str,
) -> Result<GeneratedPostContent, GenerationError> {
    let model = model.ok_or(GenerationError::NotConfigured)?;
    let prompt = build_post_prompt(task, input);

    let content: GeneratedPostContent =
        generate_json(model, &prompt, Some(JSON_ONLY_SYSTEM)).await?;
    content.validate()?;

    info!("Generated {} content: {}", task.label(), content.seo_title);
    Ok(content)
}

/// Asks for a keyword and backlink strategy for a post.
pub async fn generate_seo_strategy(
    model: Option<&dyn TextModel>,
    title: &str,
    description: &str,
) -> Result<SeoStrategy, GenerationError> {
    let model = model.ok_or(GenerationError::NotConfigured)?;
    let prompt = build_strategy_prompt(title, description);

    let strategy: SeoStrategy = generate_json(model, &prompt, Some(JSON_ONLY_SYSTEM)).await?;
    strategy.validate()?;

    info!(
        "Generated SEO strategy with {} keywords",
        strategy.target_keywords.len()
    );
    Ok(strategy)
}

/// A draft after generated content has been applied.
#[derive(Debug, Clone)]
pub struct AppliedContent {
    pub post: JobPost,
    pub seo_strategy: Option<SeoStrategy>,
    pub deep_analysis: Option<DeepAnalysis>,
}

/// Merges generated content onto `draft`. Generated sections replace the
/// draft's; detail sections the content does not cover are kept.
pub fn apply_generated_content(mut draft: JobPost, content: &GeneratedPostContent) -> AppliedContent {
    if !content.seo_title.trim().is_empty() {
        draft.title = content.seo_title.clone();
    }
    if !content.short_description.trim().is_empty() {
        draft.short_description = content.short_description.clone();
    }
    draft.slug = if content.slug.trim().is_empty() {
        slugify(&draft.title)
    } else {
        content.slug.trim().to_string()
    };
    draft.total_vacancy = Some(GENERATED_TOTAL_VACANCY.to_string());
    draft.schema_markup = content.schema_markup_text();

    let details = &mut draft.details;
    details.fee = content
        .fee
        .iter()
        .map(|f| FeeRow {
            category: f.key.clone(),
            amount: f.value.clone(),
        })
        .collect();
    details.dates = content
        .dates
        .iter()
        .map(|d| DateRow {
            label: d.key.clone(),
            date: d.value.clone(),
            note: None,
        })
        .collect();
    details.qualification = if content.eligibility.trim().is_empty() {
        Vec::new()
    } else {
        vec![content.eligibility.clone()]
    };
    details.age_limit = Some(AgeLimit {
        min: Some(DEFAULT_AGE_MIN.to_string()),
        max: Some(DEFAULT_AGE_MAX.to_string()),
        as_on: Some(DEFAULT_AGE_AS_ON.to_string()),
        relaxation: Vec::new(),
    });
    details.introduction = non_empty(&content.introduction);
    details.selection_process = content.selection_steps.clone();
    details.exam_pattern = content
        .exam_pattern
        .iter()
        .map(|p| ExamPatternRow {
            paper_name: p.paper_name.clone(),
            subject: p.subject.clone(),
            questions: p.questions.clone(),
            marks: p.marks.clone(),
            duration: p.duration.clone(),
        })
        .collect();
    details.how_to_apply = content.how_to_apply.clone();
    details.important_documents = content.important_documents.clone();
    details.salary = Some(Salary {
        structure: non_empty(&content.salary_structure),
        ..Salary::default()
    });

    draft.seo.seo_title = non_empty(&content.seo_title);
    draft.seo.seo_description = non_empty(&content.seo_description);
    draft.seo.keywords = non_empty(&content.keywords);

    let seo_strategy = content.seo_advice.as_ref().map(|advice| {
        let plan = advice.backlink_plan.clone().unwrap_or_default();
        SeoStrategy {
            target_keywords: advice.target_keywords.clone(),
            backlink_strategy: BacklinkStrategy {
                sources: plan.sites,
                action_plan: plan.how_to,
                estimated_count: ESTIMATED_BACKLINKS.to_string(),
            },
            optimized_title: content.seo_title.clone(),
            optimized_description: content.seo_description.clone(),
            content_gap: Vec::new(),
        }
    });
    let deep_analysis = content
        .seo_advice
        .as_ref()
        .and_then(|advice| advice.deep_analysis.clone());

    AppliedContent {
        post: draft,
        seo_strategy,
        deep_analysis,
    }
}

/// Copies a strategy's meta fields and keywords onto `draft`.
pub fn apply_seo_strategy(mut draft: JobPost, strategy: &SeoStrategy) -> JobPost {
    draft.seo.seo_title = non_empty(&strategy.optimized_title);
    draft.seo.seo_description = non_empty(&strategy.optimized_description);
    let keywords = strategy
        .target_keywords
        .iter()
        .map(|k| k.term.trim())
        .filter(|term| !term.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    draft.seo.keywords = non_empty(&keywords);
    draft.seo.focus_keyword = strategy
        .target_keywords
        .first()
        .and_then(|k| non_empty(&k.term));
    draft
}

/// Lowercase ASCII alphanumerics joined by single dashes.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
