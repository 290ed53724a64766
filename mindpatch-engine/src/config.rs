//! Runtime Configuration
//!
//! The only thing the game core needs is where the content lives. The
//! driver adds the review threshold and the sway convention.
//!
//! | Variable                      | Default                              |
//! |-------------------------------|--------------------------------------|
//! | `MINDPATCH_CONTENT`           | `data/game_data.json` in this crate  |
//! | `MINDPATCH_REVIEW_THRESHOLD`  | `10`                                 |
//! | `MINDPATCH_SWAY`              | `signed`                             |

use std::path::PathBuf;
use tracing::warn;

use crate::core::stance::Sway;
use crate::game::score::SwayConvention;
use crate::report::review::DEFAULT_REVIEW_THRESHOLD;

/// Default content location: the sample dataset shipped with this crate,
/// independent of the working directory.
pub const DEFAULT_CONTENT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/game_data.json");

/// Driver configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Round dataset location.
    pub content_path: PathBuf,
    /// Rounds with a signed delta above this are reviewed at the end.
    pub review_threshold: Sway,
    /// How deltas are aggregated for the closing profile.
    pub sway_convention: SwayConvention,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
            review_threshold: DEFAULT_REVIEW_THRESHOLD,
            sway_convention: SwayConvention::Signed,
        }
    }
}

impl Config {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    ///
    /// Values that fail to parse are logged and replaced by the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("MINDPATCH_CONTENT").filter(|p| !p.trim().is_empty()) {
            config.content_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup("MINDPATCH_REVIEW_THRESHOLD") {
            match raw.trim().parse::<Sway>() {
                Ok(threshold) => config.review_threshold = threshold,
                Err(e) => warn!("Ignoring MINDPATCH_REVIEW_THRESHOLD={:?}: {}", raw, e),
            }
        }

        if let Some(raw) = lookup("MINDPATCH_SWAY") {
            match raw.parse::<SwayConvention>() {
                Ok(convention) => config.sway_convention = convention,
                Err(e) => warn!("Ignoring MINDPATCH_SWAY: {}", e),
            }
        }

        config
    }
}
