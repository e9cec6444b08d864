mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{InvalidInput, SessionError};
pub use service::SessionTracker;
pub use view::{HistoryLine, SessionSummary, TierSummary, stats_line};
pub use workflow::{PendingQuestion, PracticeService};
