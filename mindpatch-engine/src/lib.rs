//! # MindPatch
//!
//! Persuasion-susceptibility exercise. A player states a stance on a claim,
//! reads an argument built around one rhetorical technique, and states a
//! stance again. The engine scores how far each technique moved them and
//! names the category they are most vulnerable to.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        MINDPATCH                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Primitives                               │
//! │  ├── stance.rs   - Stance scale and sway                    │
//! │  └── hash.rs     - Content fingerprinting                   │
//! │                                                             │
//! │  content/        - Round content                            │
//! │  ├── record.rs   - Raw and validated round records          │
//! │  └── loader.rs   - JSON loading and validation              │
//! │                                                             │
//! │  game/           - Game logic (pure, in-memory)             │
//! │  ├── session.rs  - Round state machine                      │
//! │  └── score.rs    - Score entries and aggregation            │
//! │                                                             │
//! │  report/         - Closing analysis                         │
//! │  ├── review.rs   - Trigger highlighting, swaying rounds     │
//! │  └── transcript.rs - Serializable session report            │
//! │                                                             │
//! │  cli/            - Terminal driver                          │
//! │  config.rs       - Environment configuration                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use mindpatch::{content, GameSession};
//!
//! let rounds = content::load("data/game_data.json")?;
//! let mut session = GameSession::new(rounds);
//!
//! while let Some(round) = session.current_round() {
//!     println!("{}", round.claim);
//!     session.lock_value(50)?;
//!     session.submit_turn(60)?;
//! }
//!
//! let summary = session.results_summary();
//! println!("weakness: {:?}", summary.weakness);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod game;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use content::{ContentError, RoundId, RoundRecord, ValidationError};
pub use core::stance::{Stance, Sway};
pub use game::{GameSession, ResultsSummary, ScoreEntry, SessionError, SessionPhase, SwayConvention};
pub use report::SessionReport;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
