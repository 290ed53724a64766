//! Game Session
//!
//! Owns all mutable play state for one playthrough: the round cursor, the
//! locked-in stance for the round in progress, and the score history.
//!
//! ```text
//!              lock_value                submit_turn
//! AwaitingLock ──────────▶ AwaitingSubmit ──────────▶ AwaitingLock
//!                                          └────────▶ Finished (last round)
//! ```
//!
//! The phase is never stored; it follows from `locked_value` and the cursor.
//! A session never reads external state. Restarting means dropping the
//! session and building a new one from the same rounds.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::content::record::RoundRecord;
use crate::core::stance::{sway, Stance};
use crate::game::score::{summarize, ResultsSummary, ScoreEntry, SwayConvention};

/// Unique session identifier.
pub type SessionId = [u8; 16];

/// Where a session is in its round cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No stance locked for the current round.
    AwaitingLock,
    /// Stance locked, waiting for the final stance.
    AwaitingSubmit,
    /// Every round has been scored.
    Finished,
}

/// Session errors. All of them are driver sequencing mistakes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// `submit_turn` without a preceding `lock_value`.
    #[error("locked value must be set before submitting")]
    LockedValueUnset,

    /// Operation on a session with no rounds left.
    #[error("game is over")]
    GameOver,
}

/// One playthrough.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Unique session identifier.
    id: SessionId,
    /// Validated rounds, in play order.
    rounds: Vec<Arc<RoundRecord>>,
    /// Cursor into `rounds`.
    current_round_index: usize,
    /// Pre-argument stance for the round in progress.
    locked_value: Option<Stance>,
    /// One entry per completed round, in completion order.
    scores: Vec<ScoreEntry>,
}

impl GameSession {
    /// Create a session over validated rounds.
    pub fn new(rounds: Vec<RoundRecord>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().into_bytes(), rounds)
    }

    /// Create a session with a fixed id.
    pub fn with_id(id: SessionId, rounds: Vec<RoundRecord>) -> Self {
        let rounds: Vec<Arc<RoundRecord>> = rounds.into_iter().map(Arc::new).collect();
        debug!("Session {} created with {} rounds", hex::encode(&id[..4]), rounds.len());

        Self {
            id,
            rounds,
            current_round_index: 0,
            locked_value: None,
            scores: Vec::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Session identifier as a UUID string.
    pub fn id_string(&self) -> String {
        uuid::Uuid::from_bytes(self.id).to_string()
    }

    /// Round at the cursor, or `None` once the game is over.
    pub fn current_round(&self) -> Option<&RoundRecord> {
        self.rounds.get(self.current_round_index).map(Arc::as_ref)
    }

    /// True once every round has been scored.
    pub fn is_game_over(&self) -> bool {
        self.current_round_index >= self.rounds.len()
    }

    /// Current phase of the round cycle.
    pub fn phase(&self) -> SessionPhase {
        if self.is_game_over() {
            SessionPhase::Finished
        } else if self.locked_value.is_some() {
            SessionPhase::AwaitingSubmit
        } else {
            SessionPhase::AwaitingLock
        }
    }

    /// All rounds, in play order.
    pub fn rounds(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter().map(Arc::as_ref)
    }

    /// Number of rounds in the playthrough.
    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Index of the round in progress (equals `total_rounds()` when over).
    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    /// Stance locked for the round in progress.
    pub fn locked_value(&self) -> Option<Stance> {
        self.locked_value
    }

    /// Completed rounds, in completion order.
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    /// Fraction of rounds completed, `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.rounds.is_empty() {
            return 1.0;
        }
        self.current_round_index as f64 / self.rounds.len() as f64
    }

    /// Closing profile using signed deltas.
    pub fn results_summary(&self) -> ResultsSummary {
        self.results_summary_with(SwayConvention::Signed)
    }

    /// Closing profile under a chosen sway convention.
    pub fn results_summary_with(&self, convention: SwayConvention) -> ResultsSummary {
        summarize(&self.scores, convention)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Lock the pre-argument stance for the current round.
    ///
    /// Calling it twice in one round silently replaces the first value.
    pub fn lock_value(&mut self, value: Stance) -> Result<(), SessionError> {
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }

        if let Some(previous) = self.locked_value.replace(value) {
            warn!(
                "Session {}: round {} lock replaced ({} -> {})",
                hex::encode(&self.id[..4]),
                self.current_round_index,
                previous,
                value
            );
        } else {
            debug!(
                "Session {}: round {} locked at {}",
                hex::encode(&self.id[..4]),
                self.current_round_index,
                value
            );
        }

        Ok(())
    }

    /// Submit the post-argument stance, scoring the current round.
    ///
    /// Appends exactly one [`ScoreEntry`], advances the cursor and clears the
    /// lock. On error nothing changes.
    pub fn submit_turn(&mut self, final_value: Stance) -> Result<&ScoreEntry, SessionError> {
        let locked = self.locked_value.ok_or(SessionError::LockedValueUnset)?;
        let round = self
            .rounds
            .get(self.current_round_index)
            .cloned()
            .ok_or(SessionError::GameOver)?;

        let delta = sway(locked, final_value);

        info!(
            "Session {}: round {} [{} / {}] {} -> {} (delta {:+})",
            hex::encode(&self.id[..4]),
            self.current_round_index,
            round.category,
            round.technique,
            locked,
            final_value,
            delta
        );

        self.scores.push(ScoreEntry {
            round_id: self.current_round_index,
            category: round.category.clone(),
            technique: round.technique.clone(),
            delta,
            data: round,
        });

        self.current_round_index += 1;
        self.locked_value = None;

        if self.is_game_over() {
            info!("Session {} finished after {} rounds", hex::encode(&self.id[..4]), self.scores.len());
        }

        Ok(&self.scores[self.scores.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::record::RoundId;

    fn round(id: u64, category: &str) -> RoundRecord {
        RoundRecord {
            id: RoundId::from(id),
            claim: format!("Claim {}", id),
            argument_text: "Everyone already believes this.".to_string(),
            trigger_fragment: "Everyone".to_string(),
            category: category.to_string(),
            technique: format!("T{}", id),
            antidote: "Count the evidence, not the people.".to_string(),
        }
    }

    fn create_test_session(categories: &[&str]) -> GameSession {
        let rounds = categories
            .iter()
            .enumerate()
            .map(|(i, c)| round(i as u64 + 1, c))
            .collect();
        GameSession::with_id([0; 16], rounds)
    }

    #[test]
    fn test_initial_state() {
        let session = create_test_session(&["A", "B"]);
        assert_eq!(session.current_round_index(), 0);
        assert_eq!(session.locked_value(), None);
        assert!(session.scores().is_empty());
        assert!(!session.is_game_over());
        assert_eq!(session.phase(), SessionPhase::AwaitingLock);
        assert_eq!(session.current_round().unwrap().id, RoundId::from(1));
    }

    #[test]
    fn test_lock_then_submit() {
        let mut session = create_test_session(&["PATHOS"]);

        session.lock_value(50).unwrap();
        assert_eq!(session.phase(), SessionPhase::AwaitingSubmit);
        assert_eq!(session.locked_value(), Some(50));

        let entry = session.submit_turn(70).unwrap();
        assert_eq!(entry.delta, 20);
        assert_eq!(entry.round_id, 0);
        assert_eq!(entry.category, "PATHOS");
        assert_eq!(entry.technique, "T1");
        assert_eq!(entry.data.id, RoundId::from(1));

        assert_eq!(session.locked_value(), None);
        assert!(session.is_game_over());
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert!(session.current_round().is_none());

        let summary = session.results_summary();
        assert_eq!(summary.average("PATHOS"), Some(20.0));
        assert_eq!(summary.weakness.as_deref(), Some("PATHOS"));
    }

    #[test]
    fn test_submit_without_lock() {
        let mut session = create_test_session(&["A"]);

        let result = session.submit_turn(40);
        assert!(matches!(result, Err(SessionError::LockedValueUnset)));
        assert!(session.scores().is_empty());
        assert_eq!(session.current_round_index(), 0);
        assert_eq!(
            SessionError::LockedValueUnset.to_string(),
            "locked value must be set before submitting"
        );
    }

    #[test]
    fn test_lock_overwrite_keeps_last_value() {
        let mut session = create_test_session(&["A"]);
        session.lock_value(10).unwrap();
        session.lock_value(30).unwrap();

        let entry = session.submit_turn(35).unwrap();
        assert_eq!(entry.delta, 5);
    }

    #[test]
    fn test_lock_after_game_over() {
        let mut session = create_test_session(&["A"]);
        session.lock_value(1).unwrap();
        session.submit_turn(2).unwrap();

        assert_eq!(session.lock_value(5), Err(SessionError::GameOver));
        assert!(matches!(session.submit_turn(5), Err(SessionError::LockedValueUnset)));
        assert_eq!(session.scores().len(), 1);
    }

    #[test]
    fn test_backfire_scenario() {
        let mut session = create_test_session(&["A", "B"]);

        session.lock_value(80).unwrap();
        session.submit_turn(50).unwrap();
        assert_eq!(session.scores()[0].delta, -30);
        assert!(!session.is_game_over());

        session.lock_value(50).unwrap();
        session.submit_turn(60).unwrap();
        assert_eq!(session.scores()[1].delta, 10);
        assert!(session.is_game_over());

        let summary = session.results_summary();
        assert_eq!(summary.average("A"), Some(-30.0));
        assert_eq!(summary.average("B"), Some(10.0));
        assert_eq!(summary.weakness.as_deref(), Some("B"));
    }

    #[test]
    fn test_absolute_convention_on_same_play() {
        let mut session = create_test_session(&["A", "B"]);
        session.lock_value(80).unwrap();
        session.submit_turn(50).unwrap();
        session.lock_value(50).unwrap();
        session.submit_turn(60).unwrap();

        let summary = session.results_summary_with(SwayConvention::Absolute);
        assert_eq!(summary.weakness.as_deref(), Some("A"));
    }

    #[test]
    fn test_empty_session() {
        let mut session = create_test_session(&[]);
        assert!(session.is_game_over());
        assert_eq!(session.phase(), SessionPhase::Finished);
        assert!(session.current_round().is_none());
        assert_eq!(session.progress(), 1.0);
        assert_eq!(session.lock_value(50), Err(SessionError::GameOver));

        let summary = session.results_summary();
        assert_eq!(summary.weakness, None);
        assert!(summary.stats.is_empty());
    }

    #[test]
    fn test_progress() {
        let mut session = create_test_session(&["A", "B", "C", "D"]);
        assert_eq!(session.progress(), 0.0);

        session.lock_value(50).unwrap();
        assert_eq!(session.progress(), 0.0);
        session.submit_turn(50).unwrap();
        assert_eq!(session.progress(), 0.25);
    }

    #[test]
    fn test_queries_are_idempotent() {
        let mut session = create_test_session(&["A", "B"]);
        session.lock_value(20).unwrap();

        let first = session.current_round().cloned();
        let over = session.is_game_over();
        for _ in 0..5 {
            assert_eq!(session.current_round().cloned(), first);
            assert_eq!(session.is_game_over(), over);
        }
        assert_eq!(session.locked_value(), Some(20));
    }

    #[test]
    fn test_restart_by_rebuilding() {
        let mut session = create_test_session(&["A", "B"]);
        session.lock_value(0).unwrap();
        session.submit_turn(100).unwrap();

        let rounds: Vec<RoundRecord> = session.rounds().cloned().collect();
        let fresh = GameSession::new(rounds);

        assert_eq!(fresh.current_round_index(), 0);
        assert!(fresh.scores().is_empty());
        assert_eq!(fresh.total_rounds(), 2);
        assert_ne!(fresh.id(), session.id());
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = GameSession::new(vec![round(1, "A")]);
        let b = GameSession::new(vec![round(1, "A")]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id_string().len(), 36);
    }

    #[test]
    fn test_extreme_stances_score_exact_delta() {
        let mut session = create_test_session(&["A", "B"]);

        session.lock_value(i32::MIN).unwrap();
        assert_eq!(session.submit_turn(i32::MAX).unwrap().delta, 4_294_967_295);

        session.lock_value(i32::MAX).unwrap();
        assert_eq!(session.submit_turn(i32::MIN).unwrap().delta, -4_294_967_295);

        let summary = session.results_summary();
        assert_eq!(summary.average("A"), Some(4_294_967_295.0));
        assert_eq!(summary.weakness.as_deref(), Some("A"));
    }

    #[test]
    fn test_score_shares_round_record() {
        let mut session = create_test_session(&["A"]);
        session.lock_value(10).unwrap();
        session.submit_turn(15).unwrap();

        let entry = &session.scores()[0];
        assert_eq!(entry.data.trigger_fragment, "Everyone");
        assert_eq!(entry.data.argument_text, "Everyone already believes this.");
    }
}
