//! Session Report
//!
//! A serializable record of a finished playthrough: which content it ran
//! against, when, what the player did each round, and the closing profile.
//! Timestamps come from the caller; the session itself never reads a clock.

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::content::loader::content_digest;
use crate::content::record::{RoundId, RoundRecord};
use crate::core::stance::Sway;
use crate::game::score::{ResultsSummary, SwayConvention};
use crate::game::session::GameSession;
use crate::report::review::{review_rounds, RoundReview};

/// Current report format version.
pub const REPORT_VERSION: u8 = 1;

/// Outcome of one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// 1-based round number
    pub round_number: usize,
    /// Content id of the round
    pub round_id: RoundId,
    /// Category of the round
    pub category: String,
    /// Technique used
    pub technique: String,
    /// Signed sway
    pub delta: Sway,
}

/// Full report of one playthrough.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Format version.
    pub version: u8,
    /// Session UUID.
    pub session_id: String,
    /// Fingerprint of the dataset played.
    pub content_digest: String,
    /// When the playthrough started.
    pub started_at: DateTime<Utc>,
    /// When the report was built.
    pub finished_at: DateTime<Utc>,
    /// Rounds completed out of the dataset size.
    pub rounds_completed: usize,
    /// Dataset size.
    pub total_rounds: usize,
    /// Convention used for `summary`.
    pub convention: SwayConvention,
    /// Closing profile.
    pub summary: ResultsSummary,
    /// Per-round outcomes, in completion order.
    pub rounds: Vec<RoundOutcome>,
    /// Rounds that moved the player past the review threshold.
    pub reviews: Vec<RoundReview>,
}

impl SessionReport {
    /// Build a report from a session's current scores.
    ///
    /// Works on unfinished sessions too; `rounds_completed` tells them apart.
    pub fn build(
        session: &GameSession,
        convention: SwayConvention,
        review_threshold: Sway,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let rounds: Vec<RoundRecord> = session.rounds().cloned().collect();

        Self {
            version: REPORT_VERSION,
            session_id: session.id_string(),
            content_digest: content_digest(&rounds),
            started_at,
            finished_at,
            rounds_completed: session.scores().len(),
            total_rounds: session.total_rounds(),
            convention,
            summary: session.results_summary_with(convention),
            rounds: session
                .scores()
                .iter()
                .map(|entry| RoundOutcome {
                    round_number: entry.round_id + 1,
                    round_id: entry.data.id.clone(),
                    category: entry.category.clone(),
                    technique: entry.technique.clone(),
                    delta: entry.delta,
                })
                .collect(),
            reviews: review_rounds(session.scores(), review_threshold),
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check if every round was played.
    pub fn is_complete(&self) -> bool {
        self.rounds_completed == self.total_rounds
    }
}
