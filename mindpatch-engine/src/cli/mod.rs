//! Terminal Driver
//!
//! Walks a [`GameSession`] through its rounds from line-based input and
//! renders the closing analysis. The session is owned by the caller and
//! passed in explicitly; restarting means building a new one.
//!
//! # Components
//! - `input.rs`: Stance parsing and prompting over any `BufRead`
//! - `display.rs`: Text rendering of rounds, summary and reviews

pub mod display;
pub mod input;

use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

use crate::core::stance::{Sway, STANCE_NEUTRAL};
use crate::game::score::SwayConvention;
use crate::game::session::{GameSession, SessionError};
use crate::report::review::review_rounds;

pub use input::{parse_stance, Prompter, StanceInputError};

/// Driver errors.
#[derive(Debug, Error)]
pub enum DriverError {
    /// Terminal read or write failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The driver called the session out of sequence.
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}

/// How a playthrough ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Every round was scored.
    Finished,
    /// Input ran out mid-game.
    Aborted,
}

/// Play one round: claim, lock-in, argument, final stance.
///
/// Returns `false` when input ends before the round is scored.
pub fn play_round<R: BufRead, W: Write>(
    session: &mut GameSession,
    prompter: &mut Prompter<R, W>,
) -> Result<bool, DriverError> {
    let Some(round) = session.current_round().cloned() else {
        return Ok(false);
    };

    prompter.write(&display::claim_screen(
        &round,
        session.current_round_index(),
        session.total_rounds(),
    ))?;

    let Some(locked) = prompter.ask_stance("Your stance", STANCE_NEUTRAL)? else {
        return Ok(false);
    };
    session.lock_value(locked)?;

    prompter.write(&display::argument_screen(&round, locked))?;

    let Some(final_value) = prompter.ask_stance("Does this change your view?", locked)? else {
        return Ok(false);
    };
    session.submit_turn(final_value)?;

    Ok(true)
}

/// Play rounds until the session is over or input ends.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    prompter: &mut Prompter<R, W>,
) -> Result<PlayOutcome, DriverError> {
    while !session.is_game_over() {
        if !play_round(session, prompter)? {
            debug!("Input ended at round {}", session.current_round_index());
            return Ok(PlayOutcome::Aborted);
        }
    }
    Ok(PlayOutcome::Finished)
}

/// Write the closing analysis: weakness, averages, reviewed rounds.
pub fn show_results<R: BufRead, W: Write>(
    session: &GameSession,
    prompter: &mut Prompter<R, W>,
    convention: SwayConvention,
    review_threshold: Sway,
) -> Result<(), DriverError> {
    let summary = session.results_summary_with(convention);
    prompter.write(&display::summary_block(&summary))?;

    for review in review_rounds(session.scores(), review_threshold) {
        prompter.write(&display::review_block(&review))?;
    }

    Ok(())
}
