//! Card state and the bonus-time model.
//!
//! A card carries one glyph, its face/match flags, and a bonus window.
//! While the card is face-up and unmatched the window drains; the drained
//! time is folded into `past_face_up_time` only when the card leaves the
//! face-up state or is matched. Between those points the current reading
//! is derived from the clock sample passed in as `now`.
//!
//! All time arguments are readings of the same `Clock`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Stable card identifier: the card's position at deck construction.
///
/// Survives shuffles. Never reused within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One card in a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    content: String,
    is_face_up: bool,
    is_matched: bool,

    /// Face-up time allotted for full bonus.
    bonus_time_limit: Duration,

    /// Bonus time consumed in the current exposure, up to the last fold.
    past_face_up_time: Duration,

    /// When the card last turned face-up, while the window is draining.
    last_face_up: Option<Duration>,

    /// How many times the card has been turned face-up this game.
    exposures: u32,
}

impl Card {
    /// Create a face-down, unmatched card with a full bonus window.
    #[must_use]
    pub fn new(id: CardId, content: impl Into<String>, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content: content.into(),
            is_face_up: false,
            is_matched: false,
            bonus_time_limit,
            past_face_up_time: Duration::ZERO,
            last_face_up: None,
            exposures: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// When the card last turned face-up, if its window is draining.
    #[must_use]
    pub fn last_face_up(&self) -> Option<Duration> {
        self.last_face_up
    }

    #[must_use]
    pub fn exposures(&self) -> u32 {
        self.exposures
    }

    // === Bonus window ===

    /// Bonus time consumed so far, including any draining exposure.
    #[must_use]
    pub fn face_up_time(&self, now: Duration) -> Duration {
        match self.last_face_up {
            Some(since) => self.past_face_up_time + now.saturating_sub(since),
            None => self.past_face_up_time,
        }
    }

    /// Seconds of bonus window left.
    #[must_use]
    pub fn bonus_time_remaining(&self, now: Duration) -> Duration {
        self.bonus_time_limit.saturating_sub(self.face_up_time(now))
    }

    /// Fraction of the bonus window left, in `0.0..=1.0`.
    #[must_use]
    pub fn bonus_remaining(&self, now: Duration) -> f64 {
        if self.bonus_time_limit.is_zero() {
            return 0.0;
        }
        let used = self.face_up_time(now).as_secs_f64() / self.bonus_time_limit.as_secs_f64();
        (1.0 - used).max(0.0)
    }

    /// Matched before the window ran out.
    #[must_use]
    pub fn has_earned_bonus(&self, now: Duration) -> bool {
        self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Face-up, unmatched, and with bonus left to lose.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, now: Duration) -> bool {
        self.is_face_up && !self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    // === Transitions (driven by the engine) ===

    /// Turn face-up and open a fresh bonus window.
    pub(crate) fn turn_face_up(&mut self, now: Duration) {
        self.is_face_up = true;
        self.exposures += 1;
        self.past_face_up_time = Duration::ZERO;
        self.last_face_up = Some(now);
    }

    /// Fold the draining window and turn face-down.
    pub(crate) fn turn_face_down(&mut self, now: Duration) {
        self.stop_using_bonus_time(now);
        self.is_face_up = false;
    }

    /// Fold the draining window and freeze it as matched.
    pub(crate) fn mark_matched(&mut self, now: Duration) {
        self.stop_using_bonus_time(now);
        self.is_matched = true;
    }

    fn stop_using_bonus_time(&mut self, now: Duration) {
        self.past_face_up_time = self.face_up_time(now);
        self.last_face_up = None;
    }
}
