//! Closing Report
//!
//! What the player sees (or exports) once the last round is scored.
//!
//! - `review.rs`: Rounds that moved the player, trigger located, antidote attached
//! - `transcript.rs`: Serializable report of a whole playthrough

pub mod review;
pub mod transcript;

// Re-export key types
pub use review::{review_rounds, Highlight, RoundReview, DEFAULT_REVIEW_THRESHOLD};
pub use transcript::{RoundOutcome, SessionReport, REPORT_VERSION};
