//! Text rendering for the terminal driver
//!
//! Everything here returns a `String`; writing is left to the caller.

use crate::content::record::RoundRecord;
use crate::core::stance::Stance;
use crate::game::score::ResultsSummary;
use crate::report::review::RoundReview;

/// Width of the progress bar in cells.
const PROGRESS_WIDTH: usize = 20;

/// Markers placed around the trigger fragment.
pub const TRIGGER_OPEN: &str = ">>";
/// Closing marker for the trigger fragment.
pub const TRIGGER_CLOSE: &str = "<<";

/// `[#####---------------] 1/4`
pub fn progress_bar(completed: usize, total: usize) -> String {
    let filled = if total == 0 {
        PROGRESS_WIDTH
    } else {
        (completed.min(total) * PROGRESS_WIDTH) / total
    };

    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled),
        completed,
        total
    )
}

/// Claim screen shown before lock-in.
pub fn claim_screen(round: &RoundRecord, completed: usize, total: usize) -> String {
    format!(
        "\n{}\nClaim: {}\n",
        progress_bar(completed, total),
        round.claim
    )
}

/// Argument screen shown after lock-in.
pub fn argument_screen(round: &RoundRecord, locked: Stance) -> String {
    format!(
        "You locked in at: {}\n\n  \"{}\"\n",
        locked, round.argument_text
    )
}

/// Weakness line plus per-category averages.
pub fn summary_block(summary: &ResultsSummary) -> String {
    let mut out = String::from("\n=== X-Ray Analysis ===\n");

    match &summary.weakness {
        Some(weakness) => out.push_str(&format!("Your primary weakness: {}\n", weakness)),
        None => out.push_str("No rounds were played.\n"),
    }

    if !summary.stats.is_empty() {
        out.push_str("\nAverage sway per category:\n");
        let width = summary
            .stats
            .iter()
            .map(|s| s.category.chars().count())
            .max()
            .unwrap_or(0);

        for stat in &summary.stats {
            out.push_str(&format!(
                "  {:<width$}  {:+7.1}  ({} round{})\n",
                stat.category,
                stat.average,
                stat.rounds,
                if stat.rounds == 1 { "" } else { "s" },
                width = width
            ));
        }
    }

    out
}

/// One reviewed round with the trigger marked and the antidote.
pub fn review_block(review: &RoundReview) -> String {
    let h = &review.highlight;
    let argument = if h.is_marked() {
        format!("{}{}{}{}{}", h.before, TRIGGER_OPEN, h.trigger, TRIGGER_CLOSE, h.after)
    } else {
        h.before.clone()
    };

    format!(
        "\nRound {}: {}\nYou were swayed by {} points.\n  {}\n  Technique: {}\n  Antidote: {}\n",
        review.round_number,
        review.category,
        review.delta,
        argument,
        review.technique,
        review.antidote
    )
}
