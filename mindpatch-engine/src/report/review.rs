//! Post-hoc Review
//!
//! After the last round the player is shown every argument that moved them
//! past a threshold, with the trigger fragment marked and the antidote.

use std::ops::Range;
use serde::{Serialize, Deserialize};

use crate::core::stance::Sway;
use crate::game::score::ScoreEntry;

/// Sway (in stance points) a round must exceed to be reviewed.
pub const DEFAULT_REVIEW_THRESHOLD: Sway = 10;

/// Argument text split around its trigger fragment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    /// Text before the fragment
    pub before: String,
    /// The fragment as it appears in the text
    pub trigger: String,
    /// Text after the fragment
    pub after: String,
}

impl Highlight {
    /// Split `text` around the first exact occurrence of `fragment`,
    /// falling back to the first case-insensitive match.
    ///
    /// Without a match the whole text lands in `before`.
    pub fn split(text: &str, fragment: &str) -> Self {
        let exact = text
            .find(fragment)
            .filter(|_| !fragment.is_empty())
            .map(|start| start..start + fragment.len());

        match exact.or_else(|| find_case_insensitive(text, fragment)) {
            Some(range) => Self {
                before: text[..range.start].to_string(),
                trigger: text[range.clone()].to_string(),
                after: text[range.end..].to_string(),
            },
            None => Self {
                before: text.to_string(),
                trigger: String::new(),
                after: String::new(),
            },
        }
    }

    /// True when a fragment was located.
    pub fn is_marked(&self) -> bool {
        !self.trigger.is_empty()
    }
}

/// One reviewed round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundReview {
    /// 1-based round number
    pub round_number: usize,
    /// Category of the round
    pub category: String,
    /// Technique used
    pub technique: String,
    /// Signed sway
    pub delta: Sway,
    /// Argument with the trigger located
    pub highlight: Highlight,
    /// Counter-explanation
    pub antidote: String,
}

impl RoundReview {
    /// Build the review for a score entry.
    pub fn from_entry(entry: &ScoreEntry) -> Self {
        Self {
            round_number: entry.round_id + 1,
            category: entry.category.clone(),
            technique: entry.technique.clone(),
            delta: entry.delta,
            highlight: Highlight::split(&entry.data.argument_text, &entry.data.trigger_fragment),
            antidote: entry.data.antidote.clone(),
        }
    }
}

/// Reviews for every round whose signed delta is strictly above `threshold`.
pub fn review_rounds(scores: &[ScoreEntry], threshold: Sway) -> Vec<RoundReview> {
    scores
        .iter()
        .filter(|entry| entry.delta > threshold)
        .map(RoundReview::from_entry)
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `needle`.
///
/// Compares char by char with Unicode lowercase folding, so the returned
/// range always sits on char boundaries of `haystack`.
pub fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    for (start, _) in haystack.char_indices() {
        let mut end = start;
        let mut hay = haystack[start..].chars();
        let mut matched = true;

        for n in needle.chars() {
            match hay.next() {
                Some(h) if chars_match(h, n) => end += h.len_utf8(),
                _ => {
                    matched = false;
                    break;
                }
            }
        }

        if matched {
            return Some(start..end);
        }
    }

    None
}

fn chars_match(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
