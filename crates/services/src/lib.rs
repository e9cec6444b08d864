#![forbid(unsafe_code)]

pub mod answer;
pub mod error;
pub mod sessions;
pub mod settings;

pub use aura_core::Clock;

pub use answer::{DEFAULT_ANSWER_BOUND, parse_answer};
pub use error::{InvalidInput, SessionError, SettingsError};
pub use settings::{DEFAULT_HISTORY_LIMIT, PracticeSettings};

pub use sessions::{
    HistoryLine, PendingQuestion, PracticeService, SessionSummary, SessionTracker, TierSummary,
    stats_line,
};
