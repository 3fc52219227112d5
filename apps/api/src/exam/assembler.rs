//! Builds the 100-question paper: 20 general knowledge, 40 arithmetic and
//! 40 pattern-completion questions, in that order.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::exam::bank::{translation, GK_POOL};
use crate::exam::languages::{label, resolve, Label, DEFAULT_LANGUAGE};

pub const GK_COUNT: usize = 20;
pub const ARITHMETIC_COUNT: usize = 40;
pub const PATTERN_COUNT: usize = 40;
pub const TOTAL_QUESTIONS: usize = GK_COUNT + ARITHMETIC_COUNT + PATTERN_COUNT;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    GeneralKnowledge,
    Mathematics,
    Reasoning,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    /// 1-based position in the paper; answers are keyed by it.
    pub display_id: u32,
    pub section: Section,
    pub section_label: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// A question as shown while the test is running, without the answer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuestionView {
    pub id: String,
    pub display_id: u32,
    pub section: Section,
    pub section_label: String,
    pub text: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.clone(),
            display_id: q.display_id,
            section: q.section,
            section_label: q.section_label.clone(),
            text: q.text.clone(),
            options: q.options.clone(),
        }
    }
}

/// Assembles a full paper in `language`. Unknown codes produce English.
pub fn assemble<R: Rng + ?Sized>(language: &str, rng: &mut R) -> Vec<Question> {
    let lang = resolve(language);
    let mut questions = Vec::with_capacity(TOTAL_QUESTIONS);

    let gk_label = label(lang.code, Label::SectionGk);
    let mut pool: Vec<_> = GK_POOL.iter().collect();
    pool.shuffle(rng);
    for (idx, item) in pool.into_iter().enumerate() {
        let (question, options) = match translation(item.id, lang.code) {
            Some(t) => (t.question.to_string(), t.options),
            None if lang.code != DEFAULT_LANGUAGE => {
                (format!("[{}] {}", lang.name, item.question), item.options)
            }
            None => (item.question.to_string(), item.options),
        };
        let display_id = idx as u32 + 1;
        questions.push(Question {
            id: item.id.to_string(),
            display_id,
            section: Section::GeneralKnowledge,
            section_label: gk_label.to_string(),
            text: format!("{display_id}. {question}"),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index: item.answer,
        });
    }

    for i in 0..ARITHMETIC_COUNT {
        let display_id = (GK_COUNT + i) as u32 + 1;
        let a = rng.gen_range(10..=59);
        let b = rng.gen_range(10..=59);
        questions.push(arithmetic_question(display_id, a, b, lang.code, rng));
    }

    for i in 0..PATTERN_COUNT {
        let display_id = (GK_COUNT + ARITHMETIC_COUNT + i) as u32 + 1;
        let base = rng.gen_range(1..=5);
        questions.push(pattern_question(display_id, base, lang.code, rng));
    }

    questions
}

/// Option set for a sum before shuffling.
pub fn arithmetic_options(sum: i32) -> [i32; 4] {
    [sum, sum + 1, sum - 1, sum + 10]
}

/// Option set for a series answer before shuffling.
pub fn pattern_options(answer: i32) -> [i32; 4] {
    [answer, answer + 1, answer - 2, answer + 4]
}

pub(crate) fn arithmetic_question<R: Rng + ?Sized>(
    display_id: u32,
    a: i32,
    b: i32,
    language: &str,
    rng: &mut R,
) -> Question {
    let sum = a + b;
    let (options, correct_index) = shuffled_options(arithmetic_options(sum), sum, rng);
    Question {
        id: format!("math-{display_id}"),
        display_id,
        section: Section::Mathematics,
        section_label: label(language, Label::SectionMath).to_string(),
        text: format!("{display_id}. {} {a} + {b} ?", label(language, Label::Math)),
        options,
        correct_index,
    }
}

pub(crate) fn pattern_question<R: Rng + ?Sized>(
    display_id: u32,
    base: i32,
    language: &str,
    rng: &mut R,
) -> Question {
    let sequence = [base, base + 2, base + 4, base + 6];
    let answer = base + 8;
    let (options, correct_index) = shuffled_options(pattern_options(answer), answer, rng);
    let terms = sequence
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Question {
        id: format!("reasoning-{display_id}"),
        display_id,
        section: Section::Reasoning,
        section_label: label(language, Label::SectionReasoning).to_string(),
        text: format!("{display_id}. {}: {terms}, ?", label(language, Label::Series)),
        options,
        correct_index,
    }
}

/// Shuffles `options` and returns them as text with the index of `answer`.
fn shuffled_options<R: Rng + ?Sized>(
    mut options: [i32; 4],
    answer: i32,
    rng: &mut R,
) -> (Vec<String>, usize) {
    options.shuffle(rng);
    let correct_index = options.iter().position(|&o| o == answer).unwrap_or(0);
    (options.iter().map(|o| o.to_string()).collect(), correct_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exam::languages::LANGUAGES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn option_set(q: &Question) -> BTreeSet<i32> {
        q.options.iter().map(|o| o.parse().unwrap()).collect()
    }

    #[test]
    fn test_every_language_yields_full_paper_in_block_order() {
        for lang in LANGUAGES.iter() {
            let paper = assemble(lang.code, &mut rng());
            assert_eq!(paper.len(), TOTAL_QUESTIONS, "{}", lang.code);
            assert!(paper[..20].iter().all(|q| q.section == Section::GeneralKnowledge));
            assert!(paper[20..60].iter().all(|q| q.section == Section::Mathematics));
            assert!(paper[60..].iter().all(|q| q.section == Section::Reasoning));
            let ids: Vec<u32> = paper.iter().map(|q| q.display_id).collect();
            assert_eq!(ids, (1..=100).collect::<Vec<u32>>());
        }
    }

    #[test]
    fn test_gk_block_uses_each_pool_item_once() {
        let paper = assemble("en", &mut rng());
        let ids: BTreeSet<&str> = paper[..20].iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_arithmetic_answer_is_present_once_and_indexed() {
        let paper = assemble("en", &mut rng());
        for q in &paper[20..60] {
            // "{n}. What is {a} + {b} ?"
            let body = q.text.split("What is ").nth(1).unwrap();
            let mut nums = body.trim_end_matches(" ?").split(" + ");
            let a: i32 = nums.next().unwrap().parse().unwrap();
            let b: i32 = nums.next().unwrap().parse().unwrap();
            assert!((10..=59).contains(&a) && (10..=59).contains(&b));
            let sum = (a + b).to_string();
            assert_eq!(q.options.iter().filter(|o| **o == sum).count(), 1);
            assert_eq!(q.options[q.correct_index], sum);
        }
    }

    #[test]
    fn test_pattern_answer_is_base_plus_eight() {
        let paper = assemble("en", &mut rng());
        for q in &paper[60..] {
            let terms = q.text.split(": ").nth(1).unwrap();
            let base: i32 = terms.split(", ").next().unwrap().parse().unwrap();
            assert!((1..=5).contains(&base));
            assert_eq!(q.options[q.correct_index], (base + 8).to_string());
        }
    }

    #[test]
    fn test_base_three_series() {
        let q = pattern_question(61, 3, "en", &mut rng());
        assert_eq!(q.text, "61. Complete the series: 3, 5, 7, 9, ?");
        assert_eq!(q.options[q.correct_index], "11");
        assert_eq!(option_set(&q), BTreeSet::from([11, 12, 9, 15]));
    }

    #[test]
    fn test_twenty_three_plus_thirty_four() {
        let q = arithmetic_question(21, 23, 34, "en", &mut rng());
        assert_eq!(q.text, "21. What is 23 + 34 ?");
        assert_eq!(q.options[q.correct_index], "57");
        assert_eq!(option_set(&q), BTreeSet::from([57, 58, 56, 67]));
    }

    #[test]
    fn test_translated_and_tagged_gk_text() {
        let paper = assemble("hi", &mut rng());
        let gk2 = paper[..20].iter().find(|q| q.id == "gk2").unwrap();
        assert!(gk2.text.ends_with("भारत की राजधानी क्या है?"));
        assert_eq!(gk2.options[gk2.correct_index], "नई दिल्ली");
        assert_eq!(gk2.section_label, "सामान्य ज्ञान");

        let gk5 = paper[..20].iter().find(|q| q.id == "gk5").unwrap();
        assert!(gk5.text.contains(". [Hindi] Which year did India get independence?"));

        let tamil = assemble("ta", &mut rng());
        let gk1 = tamil[..20].iter().find(|q| q.id == "gk1").unwrap();
        assert!(gk1.text.contains("[Tamil] "));
        assert_eq!(tamil[20].section_label, "Mathematics");
    }

    #[test]
    fn test_unknown_language_is_plain_english() {
        let paper = assemble("zz", &mut rng());
        assert!(paper[..20].iter().all(|q| !q.text.contains('[')));
        assert!(paper[20].text.contains("What is"));
    }

    #[test]
    fn test_gk_numbering_matches_position() {
        let paper = assemble("en", &mut rng());
        assert!(paper[0].text.starts_with("1. "));
        assert!(paper[19].text.starts_with("20. "));
        assert!(paper[99].text.starts_with("100. "));
    }

    #[test]
    fn test_view_hides_answer() {
        let q = arithmetic_question(21, 10, 10, "en", &mut rng());
        let value = serde_json::to_value(QuestionView::from(&q)).unwrap();
        assert!(value.get("correct_index").is_none());
        assert_eq!(value["section"], "mathematics");
    }
}
