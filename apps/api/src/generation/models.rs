//! Typed results of the generation tasks.
//!
//! The model replies in camelCase JSON. Every field defaults so a partial
//! reply still parses; `validate` then rejects replies that lack the fields a
//! draft cannot do without.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::generation::GenerationError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ExamPaper {
    pub paper_name: Option<String>,
    pub subject: String,
    pub questions: String,
    pub marks: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct KeywordTarget {
    pub term: String,
    pub volume: String,
    pub difficulty: String,
    pub intent: String,
    pub rank_potential: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BacklinkPlan {
    pub sites: Vec<String>,
    pub how_to: String,
}

/// Keyword metrics returned by the viral-post task.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DeepAnalysis {
    pub volume: String,
    pub difficulty: String,
    pub competition: String,
    pub intent: String,
    pub score: String,
    #[serde(rename = "highCPC")]
    pub high_cpc: Vec<String>,
    pub long_tail: Vec<String>,
    pub semantic: Vec<String>,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoAdvice {
    pub backlink_plan: Option<BacklinkPlan>,
    pub target_keywords: Vec<KeywordTarget>,
    pub deep_analysis: Option<DeepAnalysis>,
}

/// Structured post content produced by the full, viral, custom-topic and
/// notification tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratedPostContent {
    pub seo_title: String,
    pub seo_description: String,
    pub keywords: String,
    pub slug: String,
    pub short_description: String,
    pub eligibility: String,
    pub age_limit: String,
    pub fee: Vec<KeyValue>,
    pub dates: Vec<KeyValue>,
    pub introduction: String,
    pub selection_steps: Vec<String>,
    pub how_to_apply: Vec<String>,
    pub important_documents: Vec<String>,
    pub salary_structure: String,
    pub exam_pattern: Vec<ExamPaper>,
    /// JSON-LD. Models return it either as a string or as an inline object.
    pub schema_markup: Option<Value>,
    pub seo_advice: Option<SeoAdvice>,
}

impl GeneratedPostContent {
    pub fn validate(&self) -> Result<(), GenerationError> {
        require("seoTitle", &self.seo_title)?;
        require("seoDescription", &self.seo_description)
    }

    /// Schema markup as text, whichever shape the model used.
    pub fn schema_markup_text(&self) -> Option<String> {
        match self.schema_markup.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BacklinkStrategy {
    pub sources: Vec<String>,
    pub action_plan: String,
    pub estimated_count: String,
}

/// Keyword and backlink plan for ranking a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoStrategy {
    pub target_keywords: Vec<KeywordTarget>,
    pub backlink_strategy: BacklinkStrategy,
    pub optimized_title: String,
    pub optimized_description: String,
    pub content_gap: Vec<String>,
}

impl SeoStrategy {
    pub fn validate(&self) -> Result<(), GenerationError> {
        require("optimizedTitle", &self.optimized_title)?;
        require("optimizedDescription", &self.optimized_description)
    }
}

fn require(field: &str, value: &str) -> Result<(), GenerationError> {
    if value.trim().is_empty() {
        Err(GenerationError::Invalid(format!("{field} is missing")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_reply_parses_with_defaults() {
        let content: GeneratedPostContent = serde_json::from_value(json!({
            "seoTitle": "UP Police Constable 2025 Apply Online",
            "seoDescription": "Apply now",
            "howToApply": ["Visit site"],
            "examPattern": [{"paperName": "Paper I", "subject": "GK", "questions": "50", "marks": "100", "duration": "2h"}]
        }))
        .unwrap();
        assert_eq!(content.how_to_apply, vec!["Visit site"]);
        assert_eq!(content.exam_pattern[0].paper_name.as_deref(), Some("Paper I"));
        assert!(content.fee.is_empty());
        assert!(content.seo_advice.is_none());
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_missing_title_is_invalid() {
        let content = GeneratedPostContent {
            seo_description: "desc".to_string(),
            ..GeneratedPostContent::default()
        };
        match content.validate() {
            Err(GenerationError::Invalid(msg)) => assert_eq!(msg, "seoTitle is missing"),
            other => panic!("expected invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_description_is_invalid() {
        let content = GeneratedPostContent {
            seo_title: "Title".to_string(),
            seo_description: "   ".to_string(),
            ..GeneratedPostContent::default()
        };
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_schema_markup_accepts_string_or_object() {
        let as_string: GeneratedPostContent =
            serde_json::from_value(json!({"schemaMarkup": "{\"@type\":\"JobPosting\"}"})).unwrap();
        assert_eq!(
            as_string.schema_markup_text().as_deref(),
            Some("{\"@type\":\"JobPosting\"}")
        );

        let as_object: GeneratedPostContent =
            serde_json::from_value(json!({"schemaMarkup": {"@type": "JobPosting"}})).unwrap();
        assert_eq!(
            as_object.schema_markup_text().as_deref(),
            Some("{\"@type\":\"JobPosting\"}")
        );

        let blank: GeneratedPostContent =
            serde_json::from_value(json!({"schemaMarkup": ""})).unwrap();
        assert!(blank.schema_markup_text().is_none());
    }

    #[test]
    fn test_deep_analysis_high_cpc_key() {
        let advice: SeoAdvice = serde_json::from_value(json!({
            "deepAnalysis": {"score": "95/100", "highCPC": ["govt jobs"], "longTail": ["ssc cgl apply online"]}
        }))
        .unwrap();
        let analysis = advice.deep_analysis.unwrap();
        assert_eq!(analysis.high_cpc, vec!["govt jobs"]);
        assert_eq!(analysis.long_tail.len(), 1);
    }

    #[test]
    fn test_strategy_validation() {
        let strategy: SeoStrategy = serde_json::from_value(json!({
            "targetKeywords": [{"term": "ssc cgl 2025", "rankPotential": "Rank #1"}],
            "optimizedTitle": "SSC CGL 2025",
            "optimizedDescription": "Apply online"
        }))
        .unwrap();
        assert!(strategy.validate().is_ok());
        assert_eq!(strategy.target_keywords[0].rank_potential, "Rank #1");
        assert!(SeoStrategy::default().validate().is_err());
    }
}
