use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::difficulty::Difficulty;
use crate::model::question::Question;

/// Log entry for a single submitted answer.
///
/// `coins` is zero whenever `correct` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttemptRecord {
    question: String,
    given: String,
    parsed: i64,
    expected: i64,
    correct: bool,
    coins: u32,
    difficulty: Difficulty,
    answered_at: DateTime<Utc>,
}

impl AttemptRecord {
    /// Records a correct answer paying `coins`.
    #[must_use]
    pub fn correct(
        question: &Question,
        given: impl Into<String>,
        coins: u32,
        difficulty: Difficulty,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question: question.expression(),
            given: given.into(),
            parsed: question.answer(),
            expected: question.answer(),
            correct: true,
            coins,
            difficulty,
            answered_at,
        }
    }

    /// Records a wrong answer. Pays nothing.
    #[must_use]
    pub fn incorrect(
        question: &Question,
        given: impl Into<String>,
        parsed: i64,
        difficulty: Difficulty,
        answered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            question: question.expression(),
            given: given.into(),
            parsed,
            expected: question.answer(),
            correct: false,
            coins: 0,
            difficulty,
            answered_at,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Raw answer text as the user typed it.
    #[must_use]
    pub fn given(&self) -> &str {
        &self.given
    }

    #[must_use]
    pub fn parsed(&self) -> i64 {
        self.parsed
    }

    /// The correct answer, for feedback on a miss.
    #[must_use]
    pub fn expected(&self) -> i64 {
        self.expected
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn answered_at(&self) -> DateTime<Utc> {
        self.answered_at
    }
}
