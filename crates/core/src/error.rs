use thiserror::Error;

use crate::model::{DifficultyParseError, QuestionError};
use crate::reward::RewardTableError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyParseError),
    #[error(transparent)]
    RewardTable(#[from] RewardTableError),
}
