use aura_core::RewardTable;

use crate::answer::DEFAULT_ANSWER_BOUND;
use crate::error::SettingsError;

/// Number of recent attempts a summary shows by default.
pub const DEFAULT_HISTORY_LIMIT: usize = 15;

/// Knobs for a practice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeSettings {
    seed: Option<u64>,
    answer_bound: Option<i64>,
    history_limit: usize,
    reward_table: RewardTable,
}

impl PracticeSettings {
    /// Creates custom settings.
    ///
    /// `seed: None` seeds the random source from the OS. `answer_bound: None`
    /// disables the magnitude check on typed answers.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if `history_limit` is zero or the bound is negative.
    pub fn new(
        seed: Option<u64>,
        answer_bound: Option<i64>,
        history_limit: usize,
        reward_table: RewardTable,
    ) -> Result<Self, SettingsError> {
        if history_limit == 0 {
            return Err(SettingsError::InvalidHistoryLimit);
        }
        if let Some(bound) = answer_bound.filter(|b| *b < 0) {
            return Err(SettingsError::InvalidAnswerBound(bound));
        }

        Ok(Self {
            seed,
            answer_bound,
            history_limit,
            reward_table,
        })
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn answer_bound(&self) -> Option<i64> {
        self.answer_bound
    }

    #[must_use]
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    #[must_use]
    pub fn reward_table(&self) -> &RewardTable {
        &self.reward_table
    }
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            seed: None,
            answer_bound: Some(DEFAULT_ANSWER_BOUND),
            history_limit: DEFAULT_HISTORY_LIMIT,
            reward_table: RewardTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_standard_policy() {
        let settings = PracticeSettings::default();
        assert_eq!(settings.seed(), None);
        assert_eq!(settings.answer_bound(), Some(998_000));
        assert_eq!(settings.history_limit(), 15);
        assert_eq!(settings.reward_table(), &RewardTable::standard());
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            PracticeSettings::new(None, None, 0, RewardTable::standard()),
            Err(SettingsError::InvalidHistoryLimit)
        );
        assert_eq!(
            PracticeSettings::new(None, Some(-1), 10, RewardTable::standard()),
            Err(SettingsError::InvalidAnswerBound(-1))
        );
        assert!(PracticeSettings::new(Some(1), None, 10, RewardTable::standard()).is_ok());
    }
}
