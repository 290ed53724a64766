//! Round Records
//!
//! One record per round: the claim, the persuasive argument, and the
//! technique it exploits. Records are parsed into [`RawRoundRecord`] and only
//! become [`RoundRecord`] after validation.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::core::hash::ContentHasher;

// =============================================================================
// ROUND ID
// =============================================================================

/// Identifier of a round record.
///
/// Content authors write ids either as numbers or as strings; both are kept
/// verbatim so error messages point at exactly what is in the file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundId {
    /// Any JSON number (`"id": 3`, `"id": -1`, `"id": 2.5`)
    Number(serde_json::Number),
    /// Textual id (`"id": "bandwagon-1"`)
    Text(String),
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundId::Number(n) => write!(f, "{}", n),
            RoundId::Text(s) => f.write_str(s),
        }
    }
}

impl Default for RoundId {
    fn default() -> Self {
        RoundId::Number(0u64.into())
    }
}

impl From<u64> for RoundId {
    fn from(n: u64) -> Self {
        RoundId::Number(n.into())
    }
}

impl From<serde_json::Number> for RoundId {
    fn from(n: serde_json::Number) -> Self {
        RoundId::Number(n)
    }
}

impl From<&str> for RoundId {
    fn from(s: &str) -> Self {
        RoundId::Text(s.to_string())
    }
}

// =============================================================================
// RAW RECORD (as parsed)
// =============================================================================

/// A record exactly as it appears in the content source.
///
/// The fields the loader validates are optional here so that a missing field
/// surfaces as a validation error naming the record, not as a parse error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawRoundRecord {
    /// Record id
    pub id: RoundId,

    /// Assertion under test
    #[serde(default)]
    pub claim: String,

    /// Counter-argument shown after lock-in
    #[serde(default)]
    pub argument_text: String,

    /// Phrase inside `argument_text` that carries the technique
    #[serde(default)]
    pub trigger_fragment: Option<String>,

    /// Aggregation label (bias family)
    #[serde(default)]
    pub category: Option<String>,

    /// Named rhetorical technique
    #[serde(default)]
    pub technique: Option<String>,

    /// Post-hoc explanation countering the technique
    #[serde(default)]
    pub antidote: String,
}

// =============================================================================
// VALIDATED RECORD
// =============================================================================

/// A validated round record.
///
/// Invariant: `trigger_fragment` is non-empty and a literal substring of
/// `argument_text`; `category` and `technique` are non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Record id, unique within its dataset
    pub id: RoundId,
    /// Assertion under test
    pub claim: String,
    /// Counter-argument shown after lock-in
    pub argument_text: String,
    /// Phrase inside `argument_text` that carries the technique
    pub trigger_fragment: String,
    /// Aggregation label
    pub category: String,
    /// Named rhetorical technique
    pub technique: String,
    /// Post-hoc explanation countering the technique
    pub antidote: String,
}

impl RoundRecord {
    /// Feed every field into a content hasher, in declaration order.
    pub fn hash_into(&self, hasher: &mut ContentHasher) {
        match &self.id {
            RoundId::Number(n) => {
                hasher.update_str("n");
                hasher.update_str(&n.to_string());
            }
            RoundId::Text(s) => {
                hasher.update_str("s");
                hasher.update_str(s);
            }
        }
        hasher.update_str(&self.claim);
        hasher.update_str(&self.argument_text);
        hasher.update_str(&self.trigger_fragment);
        hasher.update_str(&self.category);
        hasher.update_str(&self.technique);
        hasher.update_str(&self.antidote);
    }
}
