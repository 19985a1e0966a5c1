//! Game configuration.
//!
//! `GameConfig` holds the tunables of the matching engine: how long the
//! bonus window lasts, how much a match and its bonus are worth, and which
//! mismatch penalty policy applies. The engine never hardcodes these.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// When a mismatched flip costs a point.
///
/// Applied per card: both the pending card and the card just flipped are
/// checked, so one mismatch costs at most 2 points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchPenalty {
    /// Penalize a card only when it has been face-up before in this game.
    /// A first exposure is free, since the player could not have known it.
    #[default]
    RepeatExposure,
    /// Penalize every card in every mismatch.
    EveryMismatch,
    /// Mismatches are free.
    Never,
}

impl MismatchPenalty {
    /// Points deducted for one card with the given face-up exposure count
    /// (including the current exposure).
    #[must_use]
    pub fn points_for(self, exposures: u32) -> i64 {
        match self {
            MismatchPenalty::RepeatExposure if exposures > 1 => 1,
            MismatchPenalty::RepeatExposure => 0,
            MismatchPenalty::EveryMismatch => 1,
            MismatchPenalty::Never => 0,
        }
    }
}

/// Matching engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Face-up time a card is allotted for full bonus (default: 10s).
    pub bonus_time_limit: Duration,

    /// Flat points for every match, before bonuses (default: 2).
    pub match_points: i64,

    /// Bonus points for a card matched instantly. Scaled linearly by the
    /// remaining bonus fraction and floored (default: 10).
    pub bonus_scale: u32,

    /// Mismatch penalty policy.
    pub mismatch_penalty: MismatchPenalty,

    /// Seed for the session RNG. Same seed produces the same decks.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bonus_time_limit: Duration::from_secs(10),
            match_points: 2,
            bonus_scale: 10,
            mismatch_penalty: MismatchPenalty::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the bonus window length.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Set the flat points per match.
    #[must_use]
    pub fn with_match_points(mut self, points: i64) -> Self {
        self.match_points = points;
        self
    }

    /// Set the maximum bonus per card.
    #[must_use]
    pub fn with_bonus_scale(mut self, scale: u32) -> Self {
        self.bonus_scale = scale;
        self
    }

    /// Set the mismatch penalty policy.
    #[must_use]
    pub fn with_mismatch_penalty(mut self, policy: MismatchPenalty) -> Self {
        self.mismatch_penalty = policy;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
