//! Stance Scale
//!
//! A stance is the user's agreement with a claim, expressed as an integer.
//! The game core accepts any `i32`; the slider scale below is what the
//! interactive driver offers to players.
//!
//! ```text
//! 0 ─────────────── 50 ─────────────── 100
//! disagree        neutral             agree
//! ```

/// A stance value on the agreement scale.
pub type Stance = i32;

/// Signed change between two stances (`final - locked`).
///
/// Wider than [`Stance`] so the difference of any two stances is exact.
pub type Sway = i64;

/// Lowest value the slider offers.
pub const STANCE_MIN: Stance = 0;

/// Highest value the slider offers.
pub const STANCE_MAX: Stance = 100;

/// Slider starting position when the player has not moved it.
pub const STANCE_NEUTRAL: Stance = 50;

/// Check whether a value lies on the slider scale.
#[inline]
pub fn on_scale(value: Stance) -> bool {
    (STANCE_MIN..=STANCE_MAX).contains(&value)
}

/// Signed sway from `locked` to `final_value`.
///
/// Positive = moved toward the argument, negative = backfire.
#[inline]
pub fn sway(locked: Stance, final_value: Stance) -> Sway {
    Sway::from(final_value) - Sway::from(locked)
}
