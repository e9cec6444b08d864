use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use aura_core::model::{
    AttemptRecord, DIFFICULTY_TIERS, Difficulty, DifficultyTier, Question, SessionState,
};
use aura_core::{Clock, QuestionGenerator};

use super::service::SessionTracker;
use super::view::SessionSummary;
use crate::error::{InvalidInput, SessionError};
use crate::settings::PracticeSettings;

/// Question waiting for an answer, with the tier it was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingQuestion {
    pub question: Question,
    pub difficulty: Difficulty,
}

/// Entry point for a presentation layer: generates questions, scores
/// answers and exposes the session for rendering.
///
/// Owns the random source; a seeded source makes a whole session
/// reproducible.
#[derive(Debug)]
pub struct PracticeService {
    generator: QuestionGenerator,
    tracker: SessionTracker,
    rng: StdRng,
    current: Option<PendingQuestion>,
    history_limit: usize,
}

impl PracticeService {
    #[must_use]
    pub fn new(settings: &PracticeSettings, clock: Clock) -> Self {
        let rng = match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let tracker = SessionTracker::new(clock)
            .with_answer_bound(settings.answer_bound())
            .with_reward_table(settings.reward_table().clone());

        Self {
            generator: QuestionGenerator::new(),
            tracker,
            rng,
            current: None,
            history_limit: settings.history_limit(),
        }
    }

    /// Static tier table for populating a difficulty selector.
    #[must_use]
    pub fn tiers(&self) -> &'static [DifficultyTier] {
        &DIFFICULTY_TIERS
    }

    /// Generate a question and make it the one awaiting an answer.
    pub fn generate_question(&mut self, difficulty: Difficulty) -> Question {
        let question = self.generator.generate(difficulty, &mut self.rng);
        debug!(%difficulty, %question, answer = question.answer(), "question generated");
        self.current = Some(PendingQuestion {
            question,
            difficulty,
        });
        question
    }

    /// Like [`generate_question`](Self::generate_question) with the tier
    /// given by name. Unknown names fall back to `Easy`.
    pub fn generate_question_named(&mut self, name: &str) -> Question {
        let (difficulty, fell_back) = Difficulty::from_name_lenient(name);
        if fell_back {
            warn!(name, "unknown difficulty, using {difficulty}");
        }
        self.generate_question(difficulty)
    }

    #[must_use]
    pub fn current(&self) -> Option<&PendingQuestion> {
        self.current.as_ref()
    }

    /// Score an answer to an explicit question.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` without touching the session when the text is
    /// not an acceptable integer.
    pub fn record_attempt(
        &mut self,
        question: &Question,
        raw_answer: &str,
        difficulty: Difficulty,
    ) -> Result<AttemptRecord, InvalidInput> {
        self.tracker
            .record_attempt(question, raw_answer, difficulty, &mut self.rng)
            .inspect_err(|err| debug!(raw_answer, %err, "answer rejected"))
    }

    /// Answer the pending question.
    ///
    /// A scored answer clears it; rejected text keeps it so the user can
    /// retype.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveQuestion` if nothing is pending and
    /// `SessionError::InvalidInput` for unacceptable text.
    pub fn submit_current(&mut self, raw_answer: &str) -> Result<AttemptRecord, SessionError> {
        let Some(pending) = self.current else {
            return Err(SessionError::NoActiveQuestion);
        };
        let record = self.record_attempt(&pending.question, raw_answer, pending.difficulty)?;
        self.current = None;
        Ok(record)
    }

    /// Drop the pending question without counting an attempt and move on.
    pub fn skip(&mut self, difficulty: Difficulty) -> Question {
        if let Some(pending) = self.current.take() {
            debug!(question = %pending.question, "question skipped");
        }
        self.generate_question(difficulty)
    }

    /// Zero the whole session. Any pending question stays answerable.
    pub fn reset_session(&mut self) {
        let attempts = self.tracker.snapshot().attempts();
        self.tracker.reset();
        info!(attempts, "session reset");
    }

    #[must_use]
    pub fn snapshot(&self) -> &SessionState {
        self.tracker.snapshot()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary::from_state(self.tracker.snapshot(), self.history_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::time::fixed_clock;

    fn service(seed: u64) -> PracticeService {
        let settings =
            PracticeSettings::new(Some(seed), Some(998_000), 15, Default::default()).unwrap();
        PracticeService::new(&settings, fixed_clock())
    }

    #[test]
    fn submit_requires_pending_question() {
        let mut svc = service(1);
        assert_eq!(svc.submit_current("7"), Err(SessionError::NoActiveQuestion));
    }

    #[test]
    fn submit_clears_pending_question() {
        let mut svc = service(1);
        let q = svc.generate_question(Difficulty::Easy);
        let record = svc.submit_current(&q.answer().to_string()).unwrap();
        assert!(record.is_correct());
        assert!(svc.current().is_none());
        assert_eq!(svc.snapshot().attempts(), 1);
    }

    #[test]
    fn rejected_text_keeps_question() {
        let mut svc = service(1);
        let q = svc.generate_question(Difficulty::Medium);
        let err = svc.submit_current("abc").unwrap_err();
        assert!(matches!(err, SessionError::InvalidInput(InvalidInput::NotANumber { .. })));
        assert_eq!(svc.current().map(|p| p.question), Some(q));
        assert_eq!(svc.snapshot().attempts(), 0);
    }

    #[test]
    fn skip_does_not_count() {
        let mut svc = service(2);
        svc.generate_question(Difficulty::Hard);
        let next = svc.skip(Difficulty::Hard);
        assert_eq!(svc.current().map(|p| p.question), Some(next));
        assert!(svc.snapshot().is_empty());
    }

    #[test]
    fn named_generation_falls_back_to_easy() {
        let mut svc = service(3);
        svc.generate_question_named("legendary");
        assert_eq!(svc.current().map(|p| p.difficulty), Some(Difficulty::Easy));
        svc.generate_question_named("HARD");
        assert_eq!(svc.current().map(|p| p.difficulty), Some(Difficulty::Hard));
    }

    #[test]
    fn same_seed_replays_session() {
        let mut a = service(99);
        let mut b = service(99);
        for _ in 0..20 {
            let qa = a.generate_question(Difficulty::Hard);
            let qb = b.generate_question(Difficulty::Hard);
            assert_eq!(qa, qb);
            let ra = a.submit_current(&qa.answer().to_string()).unwrap();
            let rb = b.submit_current(&qb.answer().to_string()).unwrap();
            assert_eq!(ra.coins(), rb.coins());
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn tiers_expose_static_table() {
        let svc = service(1);
        let names: Vec<_> = svc.tiers().iter().map(|t| t.difficulty.name()).collect();
        assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
    }
}
