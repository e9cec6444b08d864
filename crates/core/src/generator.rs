//! Difficulty-parameterized question synthesis.

use rand::Rng;

use crate::model::{Difficulty, DifficultyTier, OperandRange, Operator, Question};

/// Produces random questions for a difficulty tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionGenerator;

impl QuestionGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Generate a question for `difficulty`.
    ///
    /// Operands are drawn uniformly from the tier range and the operator
    /// uniformly from the tier's operator set. For division both draws are
    /// discarded: a fresh divisor and multiplier are drawn from the range and
    /// the dividend is their product, so the quotient is always exact. The
    /// dividend may therefore exceed the tier's upper bound.
    pub fn generate<R: Rng + ?Sized>(&self, difficulty: Difficulty, rng: &mut R) -> Question {
        let tier = difficulty.tier();
        let mut left = draw(tier.range, rng);
        let mut right = draw(tier.range, rng);
        let operator = pick_operator(tier, rng);

        if operator == Operator::Divide {
            right = draw(tier.range, rng);
            let multiplier = draw(tier.range, rng);
            left = multiplier * right;
        }

        Question::generated(left, operator, right)
    }

    /// Like [`generate`](Self::generate), resolving the tier by name.
    ///
    /// Unknown names use `Easy`.
    pub fn generate_named<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Question {
        let (difficulty, _) = Difficulty::from_name_lenient(name);
        self.generate(difficulty, rng)
    }
}

fn draw<R: Rng + ?Sized>(range: OperandRange, rng: &mut R) -> i64 {
    rng.random_range(range.lo..=range.hi)
}

fn pick_operator<R: Rng + ?Sized>(tier: &DifficultyTier, rng: &mut R) -> Operator {
    tier.operators[rng.random_range(0..tier.operators.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const SAMPLES: usize = 5_000;

    #[test]
    fn division_is_always_exact() {
        let generator = QuestionGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        let mut divisions = 0;
        for _ in 0..SAMPLES {
            let q = generator.generate(Difficulty::Hard, &mut rng);
            if q.operator() == Operator::Divide {
                divisions += 1;
                assert_eq!(q.answer() * q.right(), q.left(), "{q}");
                assert_eq!(q.left() % q.right(), 0);
            }
        }
        assert!(divisions > 0);
    }

    #[test]
    fn operands_stay_in_tier_range() {
        let generator = QuestionGenerator::new();
        let mut rng = StdRng::seed_from_u64(11);
        for difficulty in Difficulty::ALL {
            let range = difficulty.tier().range;
            for _ in 0..SAMPLES {
                let q = generator.generate(difficulty, &mut rng);
                assert!(range.contains(q.right()), "{difficulty}: {q}");
                if q.operator() == Operator::Divide {
                    // The dividend is a synthesized multiple and may leave the
                    // range; the divisor and quotient may not.
                    assert!(range.contains(q.answer()), "{difficulty}: {q}");
                    assert!(q.left() >= range.lo * range.lo);
                    assert!(q.left() <= range.hi * range.hi);
                } else {
                    assert!(range.contains(q.left()), "{difficulty}: {q}");
                }
            }
        }
    }

    #[test]
    fn operators_come_from_tier_set() {
        let generator = QuestionGenerator::new();
        let mut rng = StdRng::seed_from_u64(3);
        for difficulty in Difficulty::ALL {
            let allowed = difficulty.tier().operators;
            let seen: HashSet<Operator> = (0..SAMPLES)
                .map(|_| generator.generate(difficulty, &mut rng).operator())
                .collect();
            assert!(seen.iter().all(|op| allowed.contains(op)));
            assert_eq!(seen.len(), allowed.len());
        }
    }

    #[test]
    fn answers_match_operator_semantics() {
        let generator = QuestionGenerator::new();
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..SAMPLES {
            let q = generator.generate(Difficulty::Hard, &mut rng);
            assert_eq!(Some(q.answer()), q.operator().apply(q.left(), q.right()));
        }
    }

    #[test]
    fn unknown_name_uses_easy_tier() {
        let generator = QuestionGenerator::new();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let q = generator.generate_named("Impossible", &mut rng);
            assert!(Difficulty::Easy.tier().operators.contains(&q.operator()));
            assert!(Difficulty::Easy.tier().range.contains(q.left()));
        }
    }

    #[test]
    fn same_seed_same_questions() {
        let generator = QuestionGenerator::new();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(
                generator.generate(Difficulty::Medium, &mut a),
                generator.generate(Difficulty::Medium, &mut b)
            );
        }
    }
}
