mod attempt;
mod difficulty;
mod operator;
mod question;
mod session;

pub use attempt::AttemptRecord;
pub use difficulty::{
    DIFFICULTY_TIERS, Difficulty, DifficultyParseError, DifficultyTier, OperandRange,
};
pub use operator::Operator;
pub use question::{Question, QuestionError};
pub use session::{SessionState, TierStats};
