use rand::Rng;
use tracing::debug;

use aura_core::model::{AttemptRecord, Difficulty, Question, SessionState};
use aura_core::{Clock, RewardDrawer, RewardTable};

use crate::answer::{DEFAULT_ANSWER_BOUND, parse_answer};
use crate::error::InvalidInput;

//
// ─── SESSION TRACKER ───────────────────────────────────────────────────────────
//

/// Owns the session aggregate and applies submitted answers to it.
///
/// `record_attempt` and `reset` are the only ways the state changes; readers
/// get a shared borrow through `snapshot`.
#[derive(Debug, Clone)]
pub struct SessionTracker {
    state: SessionState,
    drawer: RewardDrawer,
    answer_bound: Option<i64>,
    clock: Clock,
}

impl SessionTracker {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            state: SessionState::new(clock.now()),
            drawer: RewardDrawer::default(),
            answer_bound: Some(DEFAULT_ANSWER_BOUND),
            clock,
        }
    }

    #[must_use]
    pub fn with_reward_table(mut self, table: RewardTable) -> Self {
        self.drawer = RewardDrawer::new(table);
        self
    }

    /// `None` accepts any answer that fits in `i64`.
    #[must_use]
    pub fn with_answer_bound(mut self, bound: Option<i64>) -> Self {
        self.answer_bound = bound;
        self
    }

    /// Score a typed answer against `question`.
    ///
    /// Correct answers draw a coin reward; wrong ones pay nothing. Either way
    /// the attempt is counted for `difficulty` and appended to the history.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the text is not an acceptable integer. The
    /// session is not modified in that case.
    pub fn record_attempt<R: Rng + ?Sized>(
        &mut self,
        question: &Question,
        raw_answer: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<AttemptRecord, InvalidInput> {
        let given = parse_answer(raw_answer, self.answer_bound)?;
        let answered_at = self.clock.now();

        let record = if given == question.answer() {
            let coins = self.drawer.draw(rng);
            AttemptRecord::correct(question, raw_answer, coins, difficulty, answered_at)
        } else {
            AttemptRecord::incorrect(question, raw_answer, given, difficulty, answered_at)
        };

        debug!(
            question = %question,
            given,
            correct = record.is_correct(),
            coins = record.coins(),
            %difficulty,
            "attempt recorded"
        );
        self.state.record(record.clone());
        Ok(record)
    }

    /// Clear every total, tier slot and history entry.
    pub fn reset(&mut self) {
        self.state.reset(self.clock.now());
    }

    #[must_use]
    pub fn snapshot(&self) -> &SessionState {
        &self.state
    }

    #[cfg(test)]
    fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::model::Operator;
    use aura_core::time::{fixed_clock, fixed_now};
    use chrono::Duration;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn three_plus_four() -> Question {
        Question::new(3, Operator::Add, 4).unwrap()
    }

    #[test]
    fn correct_answer_pays_and_counts() {
        let mut tracker = SessionTracker::new(fixed_clock());
        let mut rng = StdRng::seed_from_u64(1);

        let record = tracker
            .record_attempt(&three_plus_four(), "7", Difficulty::Easy, &mut rng)
            .unwrap();

        assert!(record.is_correct());
        assert!(matches!(record.coins(), 1 | 3 | 5));
        let state = tracker.snapshot();
        assert_eq!(state.attempts(), 1);
        assert_eq!(state.correct(), 1);
        assert_eq!(state.coins(), record.coins());
        assert_eq!(state.tier(Difficulty::Easy).coins, record.coins());
    }

    #[test]
    fn wrong_answer_counts_without_coins() {
        let mut tracker = SessionTracker::new(fixed_clock());
        let mut rng = StdRng::seed_from_u64(1);

        let record = tracker
            .record_attempt(&three_plus_four(), "8", Difficulty::Easy, &mut rng)
            .unwrap();

        assert!(!record.is_correct());
        assert_eq!(record.coins(), 0);
        assert_eq!(record.expected(), 7);
        let state = tracker.snapshot();
        assert_eq!((state.attempts(), state.correct(), state.coins()), (1, 0, 0));
    }

    #[test]
    fn invalid_text_leaves_state_untouched() {
        let mut tracker = SessionTracker::new(fixed_clock());
        let mut rng = StdRng::seed_from_u64(1);
        tracker
            .record_attempt(&three_plus_four(), "7", Difficulty::Easy, &mut rng)
            .unwrap();
        let before = tracker.snapshot().clone();

        for raw in ["abc", "", "  ", "1e3", "5000000"] {
            let err = tracker
                .record_attempt(&three_plus_four(), raw, Difficulty::Easy, &mut rng)
                .unwrap_err();
            assert!(matches!(
                err,
                InvalidInput::Empty | InvalidInput::NotANumber { .. } | InvalidInput::OutOfRange { .. }
            ));
        }

        assert_eq!(tracker.snapshot(), &before);
    }

    #[test]
    fn bound_can_be_disabled() {
        let mut tracker = SessionTracker::new(fixed_clock()).with_answer_bound(None);
        let mut rng = StdRng::seed_from_u64(1);
        let record = tracker
            .record_attempt(&three_plus_four(), "5000000", Difficulty::Easy, &mut rng)
            .unwrap();
        assert!(!record.is_correct());
        assert_eq!(record.parsed(), 5_000_000);
    }

    #[test]
    fn custom_reward_table_is_used() {
        let table = RewardTable::new(vec![aura_core::RewardOutcome {
            coins: 9,
            weight: 100,
        }])
        .unwrap();
        let mut tracker = SessionTracker::new(fixed_clock()).with_reward_table(table);
        let mut rng = StdRng::seed_from_u64(1);
        let record = tracker
            .record_attempt(&three_plus_four(), "7", Difficulty::Medium, &mut rng)
            .unwrap();
        assert_eq!(record.coins(), 9);
        assert_eq!(tracker.snapshot().tier(Difficulty::Medium).coins, 9);
    }

    #[test]
    fn reset_restamps_start_time() {
        let mut tracker = SessionTracker::new(fixed_clock());
        let mut rng = StdRng::seed_from_u64(1);
        tracker
            .record_attempt(&three_plus_four(), "7", Difficulty::Easy, &mut rng)
            .unwrap();

        tracker.clock_mut().advance(Duration::minutes(5));
        tracker.reset();

        let later = fixed_now() + Duration::minutes(5);
        assert_eq!(tracker.snapshot(), &SessionState::new(later));
    }

    #[test]
    fn attempts_carry_clock_time() {
        let mut tracker = SessionTracker::new(fixed_clock());
        let mut rng = StdRng::seed_from_u64(1);
        tracker.clock_mut().advance(Duration::seconds(42));
        let record = tracker
            .record_attempt(&three_plus_four(), "1", Difficulty::Easy, &mut rng)
            .unwrap();
        assert_eq!(record.answered_at(), fixed_now() + Duration::seconds(42));
    }
}
