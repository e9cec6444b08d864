#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod model;
pub mod reward;
pub mod time;

pub use error::Error;
pub use generator::QuestionGenerator;
pub use reward::{RewardDrawer, RewardOutcome, RewardTable, RewardTableError};
pub use time::Clock;
