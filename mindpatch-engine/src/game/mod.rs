//! Game Logic Module
//!
//! The round state machine and sway scoring. Pure in-memory state; nothing
//! here touches the filesystem, the clock or the terminal.
//!
//! ## Module Structure
//!
//! - `session`: Round progression, lock-in and submission
//! - `score`: Score entries and per-category aggregation

pub mod score;
pub mod session;

// Re-export key types
pub use score::{summarize, CategoryStat, ResultsSummary, ScoreEntry, SwayConvention, UnknownConvention};
pub use session::{GameSession, SessionError, SessionId, SessionPhase};
