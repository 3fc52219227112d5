// Prompt templates for the generation tasks. Placeholders in braces are
// replaced before sending; the JSON-only rule comes from the system instruction.

/// Notification text beyond this many characters is dropped before prompting.
pub const NOTIFICATION_CHAR_LIMIT: usize = 30_000;

/// Full post from a title. Replace `{title}` and `{tone}`.
pub const FULL_POST_PROMPT_TEMPLATE: &str = r#"Act as an elite SEO content strategist and government job expert.
Goal: create a post about "{title}" that ranks #1 on Google (position zero / featured snippet).

RULES:
1. The "introduction" is a direct 40-50 word answer summarising the job (post name, vacancy, last date) so it can win the answer box.
2. {tone}
3. Produce detailed tables for fee, dates and exam pattern.
4. Produce keyword data (volume, difficulty) and a list of 40 specific Indian backlink sources.

Return a JSON object with this schema:
{
  "seoTitle": "High CTR title including the year and 'Apply Online'",
  "seoDescription": "Meta description with keyword and call to action",
  "keywords": "Primary keyword, LSI keyword 1, LSI keyword 2",
  "slug": "seo-friendly-url-slug",
  "shortDescription": "Engaging summary for the post card",
  "eligibility": "Qualification summary",
  "ageLimit": "Min, max and relaxation",
  "fee": [{"key": "Category", "value": "Amount"}],
  "dates": [{"key": "Event", "value": "Date"}],
  "introduction": "Position-zero summary",
  "selectionSteps": ["Step 1", "Step 2"],
  "howToApply": ["Step 1: Visit the official website", "Step 2: Click 'Apply Online'"],
  "importantDocuments": ["Aadhar Card", "Mark Sheets", "Photo", "Signature"],
  "salaryStructure": "Basic + DA + HRA and in-hand salary",
  "examPattern": [{"paperName": "Paper I", "subject": "Subject", "questions": "No. of Qs", "marks": "Total Marks", "duration": "Time"}],
  "schemaMarkup": "Full JSON-LD JobPosting schema",
  "seoAdvice": {
    "backlinkPlan": {"sites": ["1. PaGaLGuY", "2. Quora"], "howTo": "Action plan to build these links"},
    "targetKeywords": [{"term": "Main keyword", "volume": "200k", "difficulty": "Easy", "intent": "Apply", "rankPotential": "Rank #1"}]
  }
}"#;

/// Viral post from a primary keyword. Replace `{keyword}` and `{tone}`.
pub const VIRAL_POST_PROMPT_TEMPLATE: &str = r#"Keyword: "{keyword}"
Role: viral SEO writer.
Task: generate structured data for a blog post that targets rank #1.
Provide 40 specific backlink sources and detailed keyword metrics.
{tone}

Return a JSON object with this schema:
{
  "seoTitle": "...", "seoDescription": "...", "keywords": "...", "slug": "...",
  "shortDescription": "...",
  "introduction": "Viral hook paragraph",
  "selectionSteps": ["..."],
  "howToApply": ["Step 1", "Step 2"],
  "importantDocuments": ["Doc 1", "Doc 2"],
  "salaryStructure": "Simple salary explanation",
  "examPattern": [{"paperName": "Prelims", "subject": "Sub", "questions": "10", "marks": "10", "duration": "10"}],
  "fee": [], "dates": [], "eligibility": "...", "ageLimit": "...",
  "schemaMarkup": "JSON-LD",
  "seoAdvice": {
    "backlinkPlan": {"sites": ["40 specific Indian sites"], "howTo": "Strategy"},
    "targetKeywords": [{"term": "{keyword}", "volume": "High", "difficulty": "Medium", "intent": "Info", "rankPotential": "Rank #1"}],
    "deepAnalysis": {
      "volume": "100k+", "difficulty": "45", "competition": "High", "intent": "Informational", "score": "95/100",
      "highCPC": ["keyword 1"], "longTail": ["long tail 1"], "semantic": ["LSI 1"], "questions": ["FAQ 1"]
    }
  }
}"#;

/// Free-form topic. Replace `{topic}` and `{tone}`.
pub const CUSTOM_TOPIC_PROMPT_TEMPLATE: &str = r#"Topic: "{topic}"
Task: generate structured content for a post that ranks #1 in India.
{tone}
Include 40 backlink suggestions.

Return a JSON object with this schema:
{
  "seoTitle": "...", "seoDescription": "...", "keywords": "...",
  "introduction": "...",
  "howToApply": ["Step 1", "Step 2"],
  "salaryStructure": "...",
  "importantDocuments": ["..."],
  "examPattern": [{"paperName": "Paper", "subject": "Sub", "questions": "10", "marks": "10", "duration": "1h"}],
  "seoAdvice": {
    "backlinkPlan": {"sites": ["40 specific Indian websites or forums"], "howTo": "Action plan"},
    "targetKeywords": [{"term": "Main keyword", "volume": "Vol", "difficulty": "Diff", "intent": "Intent", "rankPotential": "Rank"}]
  }
}"#;

/// Post extracted from official notification text. Replace `{text}` and `{tone}`.
pub const NOTIFICATION_PROMPT_TEMPLATE: &str = r#"Task: extract the data from the notification text below and build a job post.
Input text: "{text}"

RULES:
1. {tone}
2. Generate SEO keywords and a backlink strategy.

Return a JSON object with these keys:
- seoTitle, seoDescription, keywords, slug
- shortDescription, eligibility, ageLimit
- fee (array of {"key", "value"}), dates (array of {"key", "value"})
- introduction (string)
- selectionSteps, howToApply, importantDocuments (arrays of strings)
- salaryStructure (string)
- examPattern (array of objects with paperName, subject, questions, marks, duration)
- schemaMarkup (string)
- seoAdvice (object with backlinkPlan and targetKeywords)"#;

/// Ranking strategy for an existing post. Replace `{title}` and `{description}`.
pub const SEO_STRATEGY_PROMPT_TEMPLATE: &str = r#"Act as India's top SEO strategist for Sarkari Result websites.
Target: rank #1 to #5 on Google for the topic "{title}".
Post summary: "{description}"

Task 1: keyword research. Find 5-6 keywords with high volume and low difficulty. Keywords must be specific (year, 'Notification PDF', 'Apply Online'). Give each a rank potential.
Task 2: backlink strategy. List 40 specific Indian websites, forums and directories for backlinks.
Task 3: meta optimisation. Write a title and description that drive a high click-through rate.

Return a JSON object with this schema:
{
  "targetKeywords": [{"term": "Keyword 1", "volume": "150K", "difficulty": "Easy (KD 15)", "intent": "Informational", "rankPotential": "Rank #1"}],
  "backlinkStrategy": {
    "sources": ["1. PaGaLGuY - SSC Section", "2. Quora - Topic: Govt Jobs"],
    "actionPlan": "Day 1: ... Day 2: ...",
    "estimatedCount": "Target: 40+ High Authority Links"
  },
  "optimizedTitle": "SEO title (max 60 chars)",
  "optimizedDescription": "Meta description (max 160 chars)",
  "contentGap": ["Missing PDF Link", "Previous Year Cutoff Table"]
}"#;
