use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::operator::Operator;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Error returned by the strict `FromStr` parser.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty: {0}")]
pub struct DifficultyParseError(pub String);

//
// ─── TIER CONFIGURATION ────────────────────────────────────────────────────────
//

/// Inclusive operand range for a tier. `lo` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperandRange {
    pub lo: i64,
    pub hi: i64,
}

impl OperandRange {
    #[must_use]
    pub fn contains(&self, value: i64) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

/// Static configuration of one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DifficultyTier {
    pub difficulty: Difficulty,
    pub operators: &'static [Operator],
    pub range: OperandRange,
    pub description: &'static str,
}

/// Read-only tier table, in selector order.
pub static DIFFICULTY_TIERS: [DifficultyTier; Difficulty::COUNT] = [
    DifficultyTier {
        difficulty: Difficulty::Easy,
        operators: &[Operator::Add, Operator::Subtract],
        range: OperandRange { lo: 1, hi: 10 },
        description: "Easy only includes + and -",
    },
    DifficultyTier {
        difficulty: Difficulty::Medium,
        operators: &[Operator::Add, Operator::Subtract, Operator::Multiply],
        range: OperandRange { lo: 2, hi: 12 },
        description: "Medium includes +, - and *",
    },
    DifficultyTier {
        difficulty: Difficulty::Hard,
        operators: &[
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ],
        range: OperandRange { lo: 3, hi: 15 },
        description: "Hard includes +, -, * and /",
    },
];

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// The closed set of difficulty tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const COUNT: usize = 3;
    pub const ALL: [Difficulty; Self::COUNT] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Dense index used by per-tier arrays.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    #[must_use]
    pub fn tier(self) -> &'static DifficultyTier {
        &DIFFICULTY_TIERS[self.index()]
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Resolves a tier by name, falling back to `Easy` for anything unknown.
    ///
    /// Returns the tier and whether the fallback was taken.
    #[must_use]
    pub fn from_name_lenient(name: &str) -> (Self, bool) {
        match name.parse::<Self>() {
            Ok(difficulty) => (difficulty, false),
            Err(_) => (Self::default(), true),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DifficultyParseError(trimmed.to_string()))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
