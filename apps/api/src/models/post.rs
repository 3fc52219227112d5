use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum JobCategory {
    Result,
    #[serde(rename = "Admit Card")]
    AdmitCard,
    #[serde(rename = "Latest Job")]
    LatestJob,
    Syllabus,
    #[serde(rename = "Answer Key")]
    AnswerKey,
    Admission,
    Important,
    #[serde(rename = "Certificate Verification")]
    Certificate,
    Scholarship,
    News,
}

impl JobCategory {
    pub const ALL: [JobCategory; 10] = [
        JobCategory::Result,
        JobCategory::AdmitCard,
        JobCategory::LatestJob,
        JobCategory::Syllabus,
        JobCategory::AnswerKey,
        JobCategory::Admission,
        JobCategory::Important,
        JobCategory::Certificate,
        JobCategory::Scholarship,
        JobCategory::News,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            JobCategory::Result => "Result",
            JobCategory::AdmitCard => "Admit Card",
            JobCategory::LatestJob => "Latest Job",
            JobCategory::Syllabus => "Syllabus",
            JobCategory::AnswerKey => "Answer Key",
            JobCategory::Admission => "Admission",
            JobCategory::Important => "Important",
            JobCategory::Certificate => "Certificate Verification",
            JobCategory::Scholarship => "Scholarship",
            JobCategory::News => "News",
        }
    }

    /// Kebab-case form of the title, e.g. `admit-card`.
    pub fn slug(&self) -> String {
        self.title().to_lowercase().replace(' ', "-")
    }

    /// Resolves a URL slug case-insensitively. Unknown slugs fall back to Latest Job.
    pub fn from_slug(slug: &str) -> JobCategory {
        let wanted = slug.trim().replace('-', " ");
        Self::ALL
            .into_iter()
            .find(|c| c.title().eq_ignore_ascii_case(&wanted))
            .unwrap_or(JobCategory::LatestJob)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Scheduled,
    #[serde(rename = "Under Review")]
    UnderReview,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeoConfig {
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub keywords: Option<String>,
    pub focus_keyword: Option<String>,
    pub tags: Vec<String>,
    pub indexing: Option<bool>,
    pub follow: Option<bool>,
    pub image_alt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FeeRow {
    pub category: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DateRow {
    pub label: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VacancyRow {
    pub post_name: String,
    pub ur: String,
    pub obc: String,
    pub sc: String,
    pub st: String,
    pub ews: String,
    pub total: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AgeRelaxation {
    pub category: String,
    pub years: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgeLimit {
    pub min: Option<String>,
    pub max: Option<String>,
    pub as_on: Option<String>,
    pub relaxation: Vec<AgeRelaxation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LabelValue {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExamPatternRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_name: Option<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub questions: String,
    #[serde(default)]
    pub marks: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Syllabus {
    pub overview: String,
    pub topics: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Salary {
    pub pay_scale: Option<String>,
    pub in_hand: Option<String>,
    pub allowances: Option<String>,
    pub structure: Option<String>,
    pub promotion_growth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomField {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialLinks {
    pub whatsapp: String,
    pub telegram: String,
    pub facebook: String,
}

/// Structured body of a post. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostDetails {
    pub introduction: Option<String>,
    pub fee: Vec<FeeRow>,
    pub dates: Vec<DateRow>,
    pub vacancy: Vec<VacancyRow>,
    pub reservation_text: Option<String>,
    pub age_limit: Option<AgeLimit>,
    pub qualification: Vec<String>,
    pub physical: Vec<LabelValue>,
    pub selection_process: Vec<String>,
    pub exam_pattern: Vec<ExamPatternRow>,
    pub syllabus: Option<Syllabus>,
    pub salary: Option<Salary>,
    pub how_to_apply: Vec<String>,
    pub important_documents: Vec<String>,
    pub faqs: Vec<Faq>,
    pub links: Vec<PostLink>,
    pub custom_fields: Vec<CustomField>,
    pub social_links: Option<SocialLinks>,
}

/// A single job / result / admit-card content item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobPost {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_title: Option<String>,
    #[serde(default)]
    pub slug: String,
    pub category: JobCategory,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub language: Vec<String>,

    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub update_date: String,
    #[serde(default)]
    pub last_date: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub total_vacancy: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_level: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub application_mode: Option<String>,

    #[serde(default)]
    pub official_website_url: Option<String>,
    #[serde(default)]
    pub notification_url: Option<String>,
    #[serde(default)]
    pub apply_url: Option<String>,

    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub full_content: Option<String>,
    #[serde(default)]
    pub details: PostDetails,

    #[serde(default)]
    pub schema_markup: Option<String>,
    #[serde(default)]
    pub enable_schema: bool,
    #[serde(default)]
    pub seo: SeoConfig,

    #[serde(default)]
    pub show_in_home: bool,
    #[serde(default)]
    pub show_in_trending: bool,
    #[serde(default)]
    pub enable_comments: bool,
}

impl JobPost {
    /// A bare post with only the required fields set.
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: JobCategory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_title: None,
            slug: String::new(),
            category,
            sub_category: None,
            state: None,
            department: None,
            language: Vec::new(),
            status: PostStatus::Draft,
            update_date: String::new(),
            last_date: None,
            author: None,
            is_pinned: false,
            views: 0,
            total_vacancy: None,
            location: None,
            job_level: None,
            job_type: None,
            application_mode: None,
            official_website_url: None,
            notification_url: None,
            apply_url: None,
            short_description: String::new(),
            full_content: None,
            details: PostDetails::default(),
            schema_markup: None,
            enable_schema: false,
            seo: SeoConfig::default(),
            show_in_home: false,
            show_in_trending: false,
            enable_comments: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_uses_display_titles() {
        let json = serde_json::to_string(&JobCategory::AdmitCard).unwrap();
        assert_eq!(json, r#""Admit Card""#);
        let parsed: JobCategory = serde_json::from_str(r#""Certificate Verification""#).unwrap();
        assert_eq!(parsed, JobCategory::Certificate);
    }

    #[test]
    fn test_category_from_slug() {
        assert_eq!(JobCategory::from_slug("admit-card"), JobCategory::AdmitCard);
        assert_eq!(JobCategory::from_slug("RESULT"), JobCategory::Result);
        assert_eq!(JobCategory::from_slug("answer-key"), JobCategory::AnswerKey);
    }

    #[test]
    fn test_unknown_slug_falls_back_to_latest_job() {
        assert_eq!(JobCategory::from_slug("latest-jobs"), JobCategory::LatestJob);
        assert_eq!(JobCategory::from_slug("nonsense"), JobCategory::LatestJob);
    }

    #[test]
    fn test_minimal_post_deserializes_with_defaults() {
        let json = r#"{"title": "UPSC CSE 2025", "category": "Latest Job"}"#;
        let post: JobPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "");
        assert_eq!(post.status, PostStatus::Draft);
        assert_eq!(post.views, 0);
        assert!(post.details.fee.is_empty());
    }

    #[test]
    fn test_status_under_review_serde() {
        let parsed: PostStatus = serde_json::from_str(r#""Under Review""#).unwrap();
        assert_eq!(parsed, PostStatus::UnderReview);
    }
}
