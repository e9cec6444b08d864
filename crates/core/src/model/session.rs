use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{AttemptRecord, Difficulty};

/// Per-tier slice of the session totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierStats {
    pub attempts: u32,
    pub correct: u32,
    pub coins: u32,
}

impl TierStats {
    fn record(&mut self, record: &AttemptRecord) {
        self.attempts += 1;
        if record.is_correct() {
            self.correct += 1;
        }
        self.coins += record.coins();
    }
}

/// In-memory aggregate of every attempt since start or the last reset.
///
/// Totals, the per-tier breakdown and the history only change together
/// through [`SessionState::record`] or [`SessionState::reset`], so
/// `attempts == history.len() == sum(tier attempts)` and the coin and
/// correct totals agree with the tier slots at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    attempts: u32,
    correct: u32,
    coins: u32,
    history: Vec<AttemptRecord>,
    per_tier: [TierStats; Difficulty::COUNT],
    started_at: DateTime<Utc>,
}

impl SessionState {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            attempts: 0,
            correct: 0,
            coins: 0,
            history: Vec::new(),
            per_tier: [TierStats::default(); Difficulty::COUNT],
            started_at,
        }
    }

    /// Folds one attempt into the totals, its tier slot and the history.
    pub fn record(&mut self, record: AttemptRecord) {
        self.attempts += 1;
        if record.is_correct() {
            self.correct += 1;
        }
        self.coins += record.coins();
        self.per_tier[record.difficulty().index()].record(&record);
        self.history.push(record);
    }

    /// Replaces the whole aggregate with an empty one.
    pub fn reset(&mut self, started_at: DateTime<Utc>) {
        *self = Self::new(started_at);
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    /// The most recent `n` attempts, oldest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> &[AttemptRecord] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    #[must_use]
    pub fn tier(&self, difficulty: Difficulty) -> TierStats {
        self.per_tier[difficulty.index()]
    }

    /// Per-tier breakdown in `Difficulty::ALL` order.
    pub fn tiers(&self) -> impl Iterator<Item = (Difficulty, TierStats)> + '_ {
        Difficulty::ALL.into_iter().map(|d| (d, self.tier(d)))
    }

    /// Percentage of correct attempts, `0.0` before the first attempt.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.attempts) * 100.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attempts == 0
    }
}
