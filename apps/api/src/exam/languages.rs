//! Supported exam languages and localized labels.

use serde::Serialize;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// The 22 scheduled languages plus English. Codes are unique.
pub static LANGUAGES: [Language; 23] = [
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "te", name: "Telugu" },
    Language { code: "mr", name: "Marathi" },
    Language { code: "ta", name: "Tamil" },
    Language { code: "ur", name: "Urdu" },
    Language { code: "gu", name: "Gujarati" },
    Language { code: "kn", name: "Kannada" },
    Language { code: "ml", name: "Malayalam" },
    Language { code: "pa", name: "Punjabi" },
    Language { code: "as", name: "Assamese" },
    Language { code: "or", name: "Odia" },
    Language { code: "ma", name: "Maithili" },
    Language { code: "sa", name: "Sanskrit" },
    Language { code: "ne", name: "Nepali" },
    Language { code: "sd", name: "Sindhi" },
    Language { code: "ks", name: "Kashmiri" },
    Language { code: "do", name: "Dogri" },
    Language { code: "ko", name: "Konkani" },
    Language { code: "mn", name: "Manipuri" },
    Language { code: "bo", name: "Bodo" },
    Language { code: "sat", name: "Santali" },
];

/// Resolves a code case-insensitively. Unknown or malformed codes fall back to English.
pub fn resolve(code: &str) -> &'static Language {
    let code = code.trim();
    LANGUAGES
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(code))
        .unwrap_or(&LANGUAGES[0])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Math,
    Series,
    SectionGk,
    SectionMath,
    SectionReasoning,
}

struct LabelSet {
    code: &'static str,
    math: &'static str,
    series: &'static str,
    section_gk: &'static str,
    section_math: &'static str,
    section_reasoning: &'static str,
}

static LABEL_SETS: [LabelSet; 3] = [
    LabelSet {
        code: "en",
        math: "What is",
        series: "Complete the series",
        section_gk: "General Knowledge",
        section_math: "Mathematics",
        section_reasoning: "Reasoning",
    },
    LabelSet {
        code: "hi",
        math: "परिणाम क्या है",
        series: "शृंखला पूरी करें",
        section_gk: "सामान्य ज्ञान",
        section_math: "गणित",
        section_reasoning: "तर्कशक्ति",
    },
    LabelSet {
        code: "bn",
        math: "মান নির্ণয় কর",
        series: "ক্রম সম্পূর্ণ কর",
        section_gk: "সাধারণ জ্ঞান",
        section_math: "গণিত",
        section_reasoning: "রিজনিং",
    },
];

/// Localized label, falling back to English for languages without a label set.
pub fn label(code: &str, key: Label) -> &'static str {
    let set = LABEL_SETS
        .iter()
        .find(|s| s.code == code)
        .unwrap_or(&LABEL_SETS[0]);
    match key {
        Label::Math => set.math,
        Label::Series => set.series,
        Label::SectionGk => set.section_gk,
        Label::SectionMath => set.section_math,
        Label::SectionReasoning => set.section_reasoning,
    }
}
