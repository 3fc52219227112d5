//! Mock-test session state machine.
//!
//! `instructions` → `test` → `result`, with retake looping back into `test`.
//! The session is plain synchronous state; the registry owns timing.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::exam::assembler::{assemble, Question, QuestionView, TOTAL_QUESTIONS};
use crate::exam::languages::{resolve, Language};

pub const EXAM_DURATION_SECS: u32 = 5400;
pub const MAX_MARKS: f64 = 200.0;
const MARKS_PER_CORRECT: f64 = 2.0;
const PENALTY_PER_WRONG: f64 = 0.5;
const PASS_PERCENTAGE: f64 = 40.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Instructions,
    Test,
    Result,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Prev,
    Next,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} while the session is in the {phase:?} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("question index {index} is out of range (0..{total})")]
    QuestionOutOfRange { index: usize, total: usize },

    #[error("option {option} is out of range for question {display_id}")]
    OptionOutOfRange { display_id: u32, option: usize },
}

/// Score and the derived rank card.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoreOutcome {
    pub score: f64,
    pub total_marks: f64,
    pub answered: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub accuracy: f64,
    pub percentile: f64,
    pub rank: u64,
    pub percentage: f64,
    pub passed: bool,
}

impl ScoreOutcome {
    pub fn compute(questions: &[Question], answers: &BTreeMap<u32, usize>) -> Self {
        let mut correct = 0;
        let mut incorrect = 0;
        for q in questions {
            match answers.get(&q.display_id) {
                Some(&choice) if choice == q.correct_index => correct += 1,
                Some(_) => incorrect += 1,
                None => {}
            }
        }
        Self::from_counts(correct, incorrect)
    }

    pub fn from_counts(correct: usize, incorrect: usize) -> Self {
        let raw = correct as f64 * MARKS_PER_CORRECT - incorrect as f64 * PENALTY_PER_WRONG;
        let score = raw.max(0.0);
        let answered = correct + incorrect;

        let accuracy = if answered > 0 {
            score / (answered as f64 * MARKS_PER_CORRECT) * 100.0
        } else {
            0.0
        };
        let percentile = if score > 50.0 {
            80.0 + score / 10.0
        } else {
            40.0 + score / 5.0
        }
        .min(99.9);
        let rank = (50_000.0 - score * 200.0).floor().max(1.0) as u64;
        let percentage = score / MAX_MARKS * 100.0;

        Self {
            score,
            total_marks: MAX_MARKS,
            answered,
            correct,
            incorrect,
            accuracy,
            percentile,
            rank,
            percentage,
            passed: percentage >= PASS_PERCENTAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Unconfirmed submit: the session stays in `test`.
    NeedsConfirmation { answered: usize, total: usize },
    Scored(ScoreOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    Running { remaining_secs: u32 },
    /// The countdown hit zero and the paper was scored.
    AutoSubmitted(ScoreOutcome),
    /// Not in `test`; nothing to count down.
    Idle,
}

#[derive(Debug, Clone)]
pub struct MockSession {
    title: String,
    language: &'static Language,
    phase: Phase,
    questions: Vec<Question>,
    answers: BTreeMap<u32, usize>,
    remaining_secs: u32,
    current: usize,
    outcome: Option<ScoreOutcome>,
}

impl MockSession {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            language: resolve(""),
            phase: Phase::Instructions,
            questions: Vec::new(),
            answers: BTreeMap::new(),
            remaining_secs: EXAM_DURATION_SECS,
            current: 0,
            outcome: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn language(&self) -> &'static Language {
        self.language
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &BTreeMap<u32, usize> {
        &self.answers
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// The frozen result, once the paper has been scored.
    pub fn outcome(&self) -> Option<&ScoreOutcome> {
        self.outcome.as_ref()
    }

    pub fn select_language(&mut self, code: &str) -> Result<&'static Language, SessionError> {
        self.require(Phase::Instructions, "select a language")?;
        self.language = resolve(code);
        Ok(self.language)
    }

    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.require(Phase::Instructions, "start")?;
        self.begin(rng);
        Ok(())
    }

    /// Regenerates the paper in the same language and starts over.
    pub fn retake<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.require(Phase::Result, "retake")?;
        self.begin(rng);
        Ok(())
    }

    /// Moves one question back or forward, clamped to the paper.
    pub fn navigate(&mut self, direction: Direction) -> Result<usize, SessionError> {
        self.require(Phase::Test, "navigate")?;
        let last = self.questions.len().saturating_sub(1);
        self.current = match direction {
            Direction::Prev => self.current.saturating_sub(1),
            Direction::Next => (self.current + 1).min(last),
        };
        Ok(self.current)
    }

    pub fn jump(&mut self, index: usize) -> Result<usize, SessionError> {
        self.require(Phase::Test, "jump")?;
        if index >= self.questions.len() {
            return Err(SessionError::QuestionOutOfRange {
                index,
                total: self.questions.len(),
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// Records (or overwrites) the answer for the current question.
    pub fn answer(&mut self, option: usize) -> Result<u32, SessionError> {
        self.require(Phase::Test, "answer")?;
        let question = self
            .questions
            .get(self.current)
            .ok_or(SessionError::QuestionOutOfRange {
                index: self.current,
                total: self.questions.len(),
            })?;
        if option >= question.options.len() {
            return Err(SessionError::OptionOutOfRange {
                display_id: question.display_id,
                option,
            });
        }
        let display_id = question.display_id;
        self.answers.insert(display_id, option);
        Ok(display_id)
    }

    pub fn submit(&mut self, confirmed: bool) -> Result<SubmitOutcome, SessionError> {
        self.require(Phase::Test, "submit")?;
        if !confirmed {
            return Ok(SubmitOutcome::NeedsConfirmation {
                answered: self.answers.len(),
                total: TOTAL_QUESTIONS,
            });
        }
        Ok(SubmitOutcome::Scored(self.finish()))
    }

    /// One second of countdown. Reaching zero scores the paper.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Test {
            return TickOutcome::Idle;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            TickOutcome::AutoSubmitted(self.finish())
        } else {
            TickOutcome::Running {
                remaining_secs: self.remaining_secs,
            }
        }
    }

    fn begin<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions = assemble(self.language.code, rng);
        self.answers.clear();
        self.remaining_secs = EXAM_DURATION_SECS;
        self.current = 0;
        self.outcome = None;
        self.phase = Phase::Test;
    }

    fn finish(&mut self) -> ScoreOutcome {
        let outcome = ScoreOutcome::compute(&self.questions, &self.answers);
        self.outcome = Some(outcome.clone());
        self.phase = Phase::Result;
        outcome
    }

    fn require(&self, phase: Phase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }
}

/// What a client sees of a session. The answer key is only included once the
/// paper has been scored.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub title: String,
    pub language: Language,
    pub phase: Phase,
    pub remaining_secs: u32,
    pub current_index: usize,
    pub total_questions: usize,
    pub answered: usize,
    pub answers: BTreeMap<u32, usize>,
    pub current_question: Option<QuestionView>,
    pub result: Option<ScoreOutcome>,
    pub answer_key: Option<BTreeMap<u32, usize>>,
}

impl From<&MockSession> for SessionView {
    fn from(session: &MockSession) -> Self {
        let in_test = session.phase == Phase::Test;
        let scored = session.phase == Phase::Result;
        Self {
            title: session.title.clone(),
            language: *session.language,
            phase: session.phase,
            remaining_secs: session.remaining_secs,
            current_index: session.current,
            total_questions: session.questions.len(),
            answered: session.answers.len(),
            answers: session.answers.clone(),
            current_question: in_test
                .then(|| session.current_question().map(QuestionView::from))
                .flatten(),
            result: session.outcome.clone(),
            answer_key: scored.then(|| {
                session
                    .questions
                    .iter()
                    .map(|q| (q.display_id, q.correct_index))
                    .collect()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn started(lang: &str) -> MockSession {
        let mut session = MockSession::new("SSC CGL Mock Test");
        session.select_language(lang).unwrap();
        session.start(&mut StdRng::seed_from_u64(1)).unwrap();
        session
    }

    /// Answers the first `correct` questions right and the next `wrong` wrong.
    fn answer_pattern(session: &mut MockSession, correct: usize, wrong: usize) {
        for index in 0..correct + wrong {
            session.jump(index).unwrap();
            let right = session.questions()[index].correct_index;
            let choice = if index < correct { right } else { (right + 1) % 4 };
            session.answer(choice).unwrap();
        }
    }

    #[test]
    fn test_start_assembles_and_resets() {
        let session = started("bn");
        assert_eq!(session.phase(), Phase::Test);
        assert_eq!(session.questions().len(), 100);
        assert_eq!(session.remaining_secs(), EXAM_DURATION_SECS);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.language().name, "Bengali");
    }

    #[test]
    fn test_malformed_language_falls_back_to_english() {
        let mut session = MockSession::new("t");
        assert_eq!(session.select_language("??").unwrap().code, "en");
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut session = started("en");
        assert_eq!(session.navigate(Direction::Prev).unwrap(), 0);
        session.jump(99).unwrap();
        assert_eq!(session.navigate(Direction::Next).unwrap(), 99);
        assert_eq!(session.navigate(Direction::Prev).unwrap(), 98);
    }

    #[test]
    fn test_invalid_jump_and_option_leave_state_unchanged() {
        let mut session = started("en");
        session.jump(5).unwrap();
        assert_eq!(
            session.jump(100),
            Err(SessionError::QuestionOutOfRange {
                index: 100,
                total: 100
            })
        );
        assert_eq!(session.current_index(), 5);
        assert_eq!(
            session.answer(4),
            Err(SessionError::OptionOutOfRange {
                display_id: 6,
                option: 4
            })
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn test_answer_overwrites_by_display_id() {
        let mut session = started("en");
        session.jump(20).unwrap();
        assert_eq!(session.answer(1).unwrap(), 21);
        session.answer(3).unwrap();
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.answers()[&21], 3);
    }

    #[test]
    fn test_operations_in_wrong_phase_are_rejected() {
        let mut session = MockSession::new("t");
        assert!(matches!(
            session.answer(0),
            Err(SessionError::WrongPhase {
                phase: Phase::Instructions,
                ..
            })
        ));
        assert!(session.retake(&mut StdRng::seed_from_u64(1)).is_err());
        assert_eq!(session.tick(), TickOutcome::Idle);

        let mut session = started("en");
        assert!(session.select_language("hi").is_err());
        assert!(session.start(&mut StdRng::seed_from_u64(2)).is_err());
    }

    #[test]
    fn test_unconfirmed_submit_stays_in_test() {
        let mut session = started("en");
        answer_pattern(&mut session, 3, 1);
        assert_eq!(
            session.submit(false).unwrap(),
            SubmitOutcome::NeedsConfirmation {
                answered: 4,
                total: 100
            }
        );
        assert_eq!(session.phase(), Phase::Test);
    }

    #[test]
    fn test_score_is_two_per_correct_minus_half_per_wrong() {
        for (correct, wrong) in [(0, 0), (1, 0), (0, 1), (10, 4), (30, 10), (1, 10), (100, 0)] {
            let mut session = started("en");
            answer_pattern(&mut session, correct, wrong);
            let SubmitOutcome::Scored(outcome) = session.submit(true).unwrap() else {
                panic!("expected a score");
            };
            let expected = (2.0 * correct as f64 - 0.5 * wrong as f64).max(0.0);
            assert_eq!(outcome.score, expected, "{correct}/{wrong}");
            assert_eq!(outcome.correct, correct);
            assert_eq!(outcome.incorrect, wrong);
        }
    }

    #[test]
    fn test_thirty_correct_ten_wrong() {
        let outcome = ScoreOutcome::from_counts(30, 10);
        assert_eq!(outcome.score, 55.0);
        assert_eq!(outcome.accuracy, 68.75);
        assert_eq!(outcome.percentile, 85.5);
        assert_eq!(outcome.rank, 39_000);
        assert!(!outcome.passed);
    }

    #[test]
    fn test_no_answers_scores_zero() {
        let mut session = started("en");
        let SubmitOutcome::Scored(outcome) = session.submit(true).unwrap() else {
            panic!("expected a score");
        };
        assert_eq!(outcome.score, 0.0);
        assert_eq!(outcome.accuracy, 0.0);
        assert_eq!(outcome.percentile, 40.0);
        assert_eq!(outcome.rank, 50_000);
        assert!(!outcome.passed);
    }

    #[test]
    fn test_pass_threshold_and_caps() {
        assert!(ScoreOutcome::from_counts(40, 0).passed);
        assert!(!ScoreOutcome::from_counts(39, 1).passed);
        let perfect = ScoreOutcome::from_counts(100, 0);
        assert_eq!(perfect.percentile, 99.9);
        assert_eq!(perfect.rank, 10_000);
        assert_eq!(ScoreOutcome::from_counts(0, 20).score, 0.0);
    }

    #[test]
    fn test_result_is_stable_until_retake() {
        let mut session = started("en");
        answer_pattern(&mut session, 12, 3);
        session.submit(true).unwrap();
        let first = session.outcome().cloned();
        let second = session.outcome().cloned();
        assert_eq!(first, second);
        assert_eq!(first.unwrap().score, 22.5);
        assert!(session.answer(0).is_err());
    }

    #[test]
    fn test_countdown_to_zero_scores_like_submit() {
        let mut manual = started("en");
        answer_pattern(&mut manual, 7, 2);
        let mut timed = manual.clone();

        let SubmitOutcome::Scored(expected) = manual.submit(true).unwrap() else {
            panic!("expected a score");
        };

        for _ in 0..EXAM_DURATION_SECS - 1 {
            assert!(matches!(timed.tick(), TickOutcome::Running { .. }));
        }
        assert_eq!(timed.remaining_secs(), 1);
        assert_eq!(timed.tick(), TickOutcome::AutoSubmitted(expected.clone()));
        assert_eq!(timed.phase(), Phase::Result);
        assert_eq!(timed.outcome(), Some(&expected));
        assert_eq!(timed.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_retake_regenerates_in_same_language() {
        let mut session = started("hi");
        answer_pattern(&mut session, 2, 0);
        session.tick();
        session.submit(true).unwrap();

        session.retake(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(session.phase(), Phase::Test);
        assert_eq!(session.language().code, "hi");
        assert!(session.answers().is_empty());
        assert_eq!(session.remaining_secs(), EXAM_DURATION_SECS);
        assert!(session.outcome().is_none());
        assert_eq!(session.questions().len(), 100);
    }

    #[test]
    fn test_view_hides_key_until_result() {
        let mut session = started("en");
        let view = SessionView::from(&session);
        assert!(view.current_question.is_some());
        assert!(view.answer_key.is_none());

        session.submit(true).unwrap();
        let view = SessionView::from(&session);
        assert!(view.current_question.is_none());
        assert_eq!(view.answer_key.unwrap().len(), 100);
        assert!(view.result.is_some());
    }
}
