//! Property tests for loading and session scoring.

use proptest::prelude::*;

use mindpatch::content::{self, RawRoundRecord, ValidationError};
use mindpatch::{GameSession, RoundId, RoundRecord, SessionError, SessionPhase, Sway, SwayConvention};

const CATEGORIES: [&str; 4] = ["Authority", "Pathos", "Social Proof", "Urgency"];

fn record(id: u64, category: &str) -> RoundRecord {
    RoundRecord {
        id: RoundId::from(id),
        claim: format!("claim {id}"),
        argument_text: format!("argument {id} with a hook"),
        trigger_fragment: "hook".to_string(),
        category: category.to_string(),
        technique: format!("{category} technique"),
        antidote: String::new(),
    }
}

fn raw(id: u64, category: &str) -> RawRoundRecord {
    RawRoundRecord {
        id: RoundId::from(id),
        claim: format!("claim {id}"),
        argument_text: format!("argument {id} with a hook"),
        trigger_fragment: Some("hook".to_string()),
        category: Some(category.to_string()),
        technique: Some(format!("{category} technique")),
        ..Default::default()
    }
}

fn rounds_strategy() -> impl Strategy<Value = Vec<RoundRecord>> {
    prop::collection::vec(0..CATEGORIES.len(), 0..12).prop_map(|cats| {
        cats.into_iter()
            .enumerate()
            .map(|(i, c)| record(i as u64 + 1, CATEGORIES[c]))
            .collect()
    })
}

fn stance() -> impl Strategy<Value = i32> {
    0..=100i32
}

proptest! {
    #[test]
    fn prop_validate_keeps_length_and_order(cats in prop::collection::vec(0..CATEGORIES.len(), 0..20)) {
        let raws: Vec<RawRoundRecord> = cats
            .iter()
            .enumerate()
            .map(|(i, &c)| raw(i as u64 + 1, CATEGORIES[c]))
            .collect();

        let rounds = content::validate(raws).unwrap();
        prop_assert_eq!(rounds.len(), cats.len());
        for (i, round) in rounds.iter().enumerate() {
            prop_assert_eq!(&round.id, &RoundId::from(i as u64 + 1));
            prop_assert_eq!(&round.category, CATEGORIES[cats[i]]);
        }
    }

    #[test]
    fn prop_absent_fragment_always_rejected(len in 1usize..20, bad in 0usize..20) {
        let bad = bad % len;
        let raws: Vec<RawRoundRecord> = (0..len)
            .map(|i| {
                let mut r = raw(i as u64 + 1, "Pathos");
                if i == bad {
                    r.trigger_fragment = Some("not in there".to_string());
                }
                r
            })
            .collect();

        match content::validate(raws) {
            Err(ValidationError::FragmentNotFound { id, .. }) => {
                prop_assert_eq!(id, RoundId::from(bad as u64 + 1));
            }
            other => prop_assert!(false, "expected FragmentNotFound, got {:?}", other),
        }
    }

    #[test]
    fn prop_submit_scores_final_minus_locked(
        rounds in rounds_strategy(),
        v in stance(),
        w in stance(),
    ) {
        prop_assume!(!rounds.is_empty());
        let mut session = GameSession::new(rounds.clone());

        session.lock_value(v).unwrap();
        let entry = session.submit_turn(w).unwrap().clone();

        prop_assert_eq!(entry.delta, Sway::from(w) - Sway::from(v));
        prop_assert_eq!(entry.round_id, 0);
        prop_assert_eq!(&entry.category, &rounds[0].category);
        prop_assert_eq!(session.locked_value(), None);
        prop_assert_eq!(session.current_round_index(), 1);
    }

    #[test]
    fn prop_game_over_after_every_round(
        rounds in rounds_strategy(),
        moves in prop::collection::vec((stance(), stance()), 12),
    ) {
        let total = rounds.len();
        let mut session = GameSession::new(rounds);

        for (v, w) in moves.iter().take(total) {
            prop_assert!(!session.is_game_over());
            session.lock_value(*v).unwrap();
            session.submit_turn(*w).unwrap();
        }

        prop_assert!(session.is_game_over());
        prop_assert_eq!(session.phase(), SessionPhase::Finished);
        prop_assert_eq!(session.scores().len(), total);
        prop_assert!(session.current_round().is_none());
        prop_assert_eq!(session.lock_value(50), Err(SessionError::GameOver));
    }

    #[test]
    fn prop_submit_without_lock_changes_nothing(rounds in rounds_strategy(), w in stance()) {
        let mut session = GameSession::new(rounds);
        let before_index = session.current_round_index();

        prop_assert_eq!(session.submit_turn(w).unwrap_err(), SessionError::LockedValueUnset);
        prop_assert!(session.scores().is_empty());
        prop_assert_eq!(session.current_round_index(), before_index);
    }

    #[test]
    fn prop_queries_are_idempotent(
        rounds in rounds_strategy(),
        moves in prop::collection::vec((stance(), stance()), 0..12),
    ) {
        let mut session = GameSession::new(rounds);
        for (v, w) in moves {
            if session.is_game_over() {
                break;
            }
            session.lock_value(v).unwrap();
            session.submit_turn(w).unwrap();
        }

        prop_assert_eq!(session.current_round(), session.current_round());
        prop_assert_eq!(session.is_game_over(), session.is_game_over());
        prop_assert_eq!(session.results_summary(), session.results_summary());
    }

    #[test]
    fn prop_weakness_has_maximal_average(
        rounds in rounds_strategy(),
        moves in prop::collection::vec((stance(), stance()), 12),
    ) {
        prop_assume!(!rounds.is_empty());
        let mut session = GameSession::new(rounds);
        for (v, w) in moves.iter().take(session.total_rounds()) {
            session.lock_value(*v).unwrap();
            session.submit_turn(*w).unwrap();
        }

        for convention in [SwayConvention::Signed, SwayConvention::Absolute] {
            let summary = session.results_summary_with(convention);
            let weakness = summary.weakness.clone().unwrap();
            let top = summary.average(&weakness).unwrap();
            for stat in &summary.stats {
                prop_assert!(stat.average <= top);
            }
            let played: usize = summary.stats.iter().map(|s| s.rounds).sum();
            prop_assert_eq!(played, session.scores().len());
        }
    }
}

#[test]
fn test_backfire_and_sway_scenario() {
    let mut session = GameSession::new(vec![record(1, "A"), record(2, "B")]);

    session.lock_value(80).unwrap();
    session.submit_turn(50).unwrap();
    session.lock_value(50).unwrap();
    session.submit_turn(60).unwrap();

    let deltas: Vec<Sway> = session.scores().iter().map(|s| s.delta).collect();
    assert_eq!(deltas, vec![-30, 10]);

    let summary = session.results_summary();
    assert_eq!(summary.average("A"), Some(-30.0));
    assert_eq!(summary.average("B"), Some(10.0));
    assert_eq!(summary.weakness.as_deref(), Some("B"));
}

#[test]
fn test_category_average_scenario() {
    let mut session = GameSession::new(vec![record(1, "A"), record(2, "A"), record(3, "B")]);

    for (v, w) in [(50, 70), (50, 60), (50, 55)] {
        session.lock_value(v).unwrap();
        session.submit_turn(w).unwrap();
    }

    let summary = session.results_summary();
    assert_eq!(summary.average("A"), Some(15.0));
    assert_eq!(summary.average("B"), Some(5.0));
    assert_eq!(summary.weakness.as_deref(), Some("A"));
}

#[test]
fn test_empty_session_scenario() {
    let session = GameSession::new(Vec::new());
    assert!(session.is_game_over());
    assert!(session.current_round().is_none());

    let summary = session.results_summary();
    assert!(summary.weakness.is_none());
    assert!(summary.stats.is_empty());
}
