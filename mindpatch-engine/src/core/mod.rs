//! Core primitives.
//!
//! The stance scale shared by the session and the driver, and the content
//! hasher used to fingerprint datasets.

pub mod hash;
pub mod stance;

// Re-export core types
pub use hash::{ContentHash, ContentHasher};
pub use stance::{Stance, Sway, STANCE_MIN, STANCE_MAX, STANCE_NEUTRAL};
