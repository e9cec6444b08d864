use serde::Serialize;
use std::fmt;

use aura_core::model::{AttemptRecord, Difficulty, SessionState, TierStats};

/// One row of the recent-answers list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryLine {
    pub question: String,
    pub given: String,
    pub correct: bool,
    pub coins: u32,
    pub difficulty: Difficulty,
}

impl From<&AttemptRecord> for HistoryLine {
    fn from(record: &AttemptRecord) -> Self {
        Self {
            question: record.question().to_string(),
            given: record.given().trim().to_string(),
            correct: record.is_correct(),
            coins: record.coins(),
            difficulty: record.difficulty(),
        }
    }
}

impl fmt::Display for HistoryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.correct { '✓' } else { '✗' };
        write!(
            f,
            "{} → {} | {} | +{}c",
            self.question, self.given, mark, self.coins
        )
    }
}

/// Per-difficulty row of the summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierSummary {
    pub difficulty: Difficulty,
    #[serde(flatten)]
    pub stats: TierStats,
    pub accuracy: f64,
}

/// Results-screen view of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub coins: u32,
    pub attempts: u32,
    pub correct: u32,
    pub accuracy: f64,
    pub tiers: Vec<TierSummary>,
    pub recent: Vec<HistoryLine>,
}

impl SessionSummary {
    /// Build a summary showing at most `history_limit` recent answers.
    #[must_use]
    pub fn from_state(state: &SessionState, history_limit: usize) -> Self {
        let tiers = state
            .tiers()
            .map(|(difficulty, stats)| TierSummary {
                difficulty,
                stats,
                accuracy: percent(stats.correct, stats.attempts),
            })
            .collect();

        Self {
            coins: state.coins(),
            attempts: state.attempts(),
            correct: state.correct(),
            accuracy: state.accuracy(),
            tiers,
            recent: state
                .recent(history_limit)
                .iter()
                .map(HistoryLine::from)
                .collect(),
        }
    }

    /// Multi-line text block for a results screen.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("Coins: {}", self.coins),
            format!("Attempts: {}", self.attempts),
            format!("Correct: {}", self.correct),
            format!("Accuracy: {:.1}%", self.accuracy),
            String::new(),
        ];
        for tier in self.tiers.iter().filter(|t| t.stats.attempts > 0) {
            lines.push(format!(
                "{}: {}/{} correct, {} coin(s)",
                tier.difficulty, tier.stats.correct, tier.stats.attempts, tier.stats.coins
            ));
        }
        lines.push(String::new());
        lines.push("Recent Answers:".to_string());
        lines.extend(self.recent.iter().map(ToString::to_string));
        lines.join("\n")
    }
}

/// Single-line header stats, e.g. `Coins: 4  |  Attempts: 3  |  Correct: 2  |  Accuracy: 67%`.
#[must_use]
pub fn stats_line(state: &SessionState) -> String {
    format!(
        "Coins: {}  |  Attempts: {}  |  Correct: {}  |  Accuracy: {:.0}%",
        state.coins(),
        state.attempts(),
        state.correct(),
        state.accuracy()
    )
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        f64::from(part) / f64::from(whole) * 100.0
    }
}
