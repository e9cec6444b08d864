//! Weighted random coin payout for correct answers.
//!
//! The distribution is an explicit cumulative table with integer weights in
//! hundredths. A single uniform draw `u` in `0..100` selects the first entry
//! whose cumulative weight `c` satisfies `u < c`, so each entry owns the
//! half-open bucket `[previous, c)`.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

/// Sum every table's weights must reach.
pub const WEIGHT_TOTAL: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RewardTableError {
    #[error("reward table has no outcomes")]
    Empty,

    #[error("reward weight for {coins} coin(s) must be > 0")]
    ZeroWeight { coins: u32 },

    #[error("reward weights sum to {sum}, expected 100")]
    BadTotal { sum: u32 },
}

/// One payout and its weight in hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardOutcome {
    pub coins: u32,
    pub weight: u32,
}

/// Cumulative distribution over coin payouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewardTable {
    outcomes: Vec<RewardOutcome>,
    cumulative: Vec<u32>,
}

impl RewardTable {
    /// Validate a custom table.
    ///
    /// # Errors
    ///
    /// Returns `RewardTableError` if the table is empty, has a zero weight,
    /// or its weights do not sum to [`WEIGHT_TOTAL`].
    pub fn new(outcomes: Vec<RewardOutcome>) -> Result<Self, RewardTableError> {
        if outcomes.is_empty() {
            return Err(RewardTableError::Empty);
        }
        if let Some(outcome) = outcomes.iter().find(|o| o.weight == 0) {
            return Err(RewardTableError::ZeroWeight {
                coins: outcome.coins,
            });
        }

        let mut cumulative = Vec::with_capacity(outcomes.len());
        let mut sum = 0_u32;
        for outcome in &outcomes {
            sum = sum.saturating_add(outcome.weight);
            cumulative.push(sum);
        }
        if sum != WEIGHT_TOTAL {
            return Err(RewardTableError::BadTotal { sum });
        }

        Ok(Self {
            outcomes,
            cumulative,
        })
    }

    /// 1 coin at 50%, 3 coins at 40%, 5 coins at 10%.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            outcomes: vec![
                RewardOutcome { coins: 1, weight: 50 },
                RewardOutcome { coins: 3, weight: 40 },
                RewardOutcome { coins: 5, weight: 10 },
            ],
            cumulative: vec![50, 90, 100],
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[RewardOutcome] {
        &self.outcomes
    }

    /// Payout for a roll in `0..WEIGHT_TOTAL`.
    #[must_use]
    pub fn select(&self, roll: u32) -> u32 {
        let idx = self
            .cumulative
            .iter()
            .position(|&c| roll < c)
            .unwrap_or(self.outcomes.len() - 1);
        self.outcomes[idx].coins
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Draws independent payouts from a [`RewardTable`].
#[derive(Debug, Clone, Default)]
pub struct RewardDrawer {
    table: RewardTable,
}

impl RewardDrawer {
    #[must_use]
    pub fn new(table: RewardTable) -> Self {
        Self { table }
    }

    /// One payout, drawn with replacement.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        self.table.select(rng.random_range(0..WEIGHT_TOTAL))
    }
}
