//! Scoring and Aggregation
//!
//! One [`ScoreEntry`] per completed round; [`summarize`] folds them into
//! per-category averages and picks the category that moved the player most.

use std::sync::Arc;
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::content::record::RoundRecord;
use crate::core::stance::Sway;

/// Result of one completed round. Immutable once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Index of the round this entry resulted from
    pub round_id: usize,
    /// Copied from the round record
    pub category: String,
    /// Copied from the round record
    pub technique: String,
    /// Signed sway, `final - locked`
    pub delta: Sway,
    /// The originating round record
    pub data: Arc<RoundRecord>,
}

impl ScoreEntry {
    /// Size of the sway regardless of direction.
    #[inline]
    pub fn magnitude(&self) -> u64 {
        self.delta.unsigned_abs()
    }

    /// True when the player moved away from the argument.
    #[inline]
    pub fn is_backfire(&self) -> bool {
        self.delta < 0
    }

    /// Delta as counted under the given convention.
    pub fn counted(&self, convention: SwayConvention) -> f64 {
        match convention {
            SwayConvention::Signed => self.delta as f64,
            SwayConvention::Absolute => self.magnitude() as f64,
        }
    }
}

/// How deltas are counted when aggregating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwayConvention {
    /// `final - locked`; backfire lowers a category's average
    #[default]
    Signed,
    /// `|final - locked|`; any movement counts as susceptibility
    Absolute,
}

/// Unrecognized [`SwayConvention`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sway convention '{0}' (expected 'signed' or 'absolute')")]
pub struct UnknownConvention(pub String);

impl std::str::FromStr for SwayConvention {
    type Err = UnknownConvention;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "signed" => Ok(SwayConvention::Signed),
            "absolute" | "abs" => Ok(SwayConvention::Absolute),
            other => Err(UnknownConvention(other.to_string())),
        }
    }
}

/// Average sway for one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    /// Category label
    pub category: String,
    /// Arithmetic mean of counted deltas
    pub average: f64,
    /// Number of rounds in the category
    pub rounds: usize,
}

/// Closing vulnerability profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsSummary {
    /// Category with the highest average, `None` when nothing was scored
    pub weakness: Option<String>,
    /// Per-category averages, in order of first appearance
    pub stats: Vec<CategoryStat>,
}

impl ResultsSummary {
    /// Average for a category, if it was played.
    pub fn average(&self, category: &str) -> Option<f64> {
        self.stats
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.average)
    }

    /// True when no round has been scored.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}

/// Aggregate scores into per-category averages.
///
/// Categories are kept in order of first appearance. The weakness is the
/// highest average; on a tie the category that appeared first wins.
pub fn summarize(scores: &[ScoreEntry], convention: SwayConvention) -> ResultsSummary {
    // (category, sum, count) in first-seen order
    let mut totals: Vec<(&str, f64, usize)> = Vec::new();

    for score in scores {
        let counted = score.counted(convention);
        match totals.iter_mut().find(|t| t.0 == score.category) {
            Some((_, sum, count)) => {
                *sum += counted;
                *count += 1;
            }
            None => totals.push((score.category.as_str(), counted, 1)),
        }
    }

    let stats: Vec<CategoryStat> = totals
        .into_iter()
        .map(|(category, sum, count)| CategoryStat {
            category: category.to_string(),
            average: sum / count as f64,
            rounds: count,
        })
        .collect();

    let mut weakness: Option<&CategoryStat> = None;
    for stat in &stats {
        match weakness {
            Some(best) if stat.average <= best.average => {}
            _ => weakness = Some(stat),
        }
    }

    let weakness = weakness.map(|s| s.category.clone());

    ResultsSummary { weakness, stats }
}
