//! The matching engine: one game's deck, score, and selection slot.
//!
//! ## State Machine
//!
//! Each card is face-down or face-up (and, once matched, stays face-up).
//! On top of that the game holds one selection slot, either empty or
//! pointing at the single face-up unmatched card awaiting its pair.
//! `choose` is the only transition:
//!
//! - Face-up or matched target: ignored.
//! - Slot occupied: the target is flipped and compared with the pending
//!   card. Equal glyphs match and score; otherwise both stay face-up, the
//!   mismatch penalty applies, and the slot empties.
//! - Slot empty: every face-up unmatched card turns back down, the target
//!   turns up and becomes pending.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use memorize::core::{GameConfig, GameRng, ManualClock};
//! use memorize::game::{ChooseOutcome, MemoryGame};
//! use memorize::themes::{RgbaColor, Theme, ThemeId};
//!
//! let theme = Theme::new(ThemeId::new(1), "Letters", RgbaColor::RED, 3, "ABCDEF");
//! let mut game = MemoryGame::new(
//!     &theme,
//!     GameConfig::default(),
//!     Arc::new(ManualClock::new()),
//!     GameRng::new(7),
//! );
//!
//! assert_eq!(game.cards().len(), 6);
//!
//! // Cards 2p and 2p+1 share a glyph at construction
//! let first = game.cards()[0].id();
//! let twin = game.cards()[1].id();
//! game.choose(first);
//! assert!(matches!(game.choose(twin), ChooseOutcome::Matched { .. }));
//! ```

use std::sync::Arc;
use std::time::Duration;

use im::Vector;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::core::{Clock, GameConfig, GameRng};
use crate::themes::{Theme, ThemeId};

/// What a call to `choose` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Unknown, face-up, or matched target. Nothing changed.
    Ignored,
    /// The card turned face-up and is now the pending selection.
    Flipped,
    /// The card completed a pair worth `points`.
    Matched { points: i64 },
    /// The card did not match the pending one. `penalty` points were lost.
    Mismatched { penalty: i64 },
}

/// One game session's deck and score.
#[derive(Clone, Debug)]
pub struct MemoryGame {
    cards: Vector<Card>,
    score: i64,
    pending: Option<CardId>,
    theme_id: ThemeId,
    config: GameConfig,
    clock: Arc<dyn Clock>,
    rng: GameRng,
}

impl MemoryGame {
    /// Build a fresh deck from `theme`.
    ///
    /// The glyph pool is shuffled and the first `pair_count` distinct
    /// glyphs are used. Glyph `p` goes on cards `2p` and `2p + 1`, whose IDs
    /// equal those positions. A pair count above the pool size is clamped.
    #[must_use]
    pub fn new(
        theme: &Theme,
        config: GameConfig,
        clock: Arc<dyn Clock>,
        mut rng: GameRng,
    ) -> Self {
        let mut glyphs = theme.glyphs();
        rng.shuffle(&mut glyphs);
        let mut seen = FxHashSet::default();
        glyphs.retain(|g| seen.insert(*g));
        let pairs = theme.pair_count().min(glyphs.len());

        let mut cards = Vector::new();
        for (pair, glyph) in glyphs.iter().take(pairs).enumerate() {
            let pair = pair as u32;
            for id in [2 * pair, 2 * pair + 1] {
                cards.push_back(Card::new(CardId::new(id), *glyph, config.bonus_time_limit));
            }
        }

        log::debug!(
            "Built {} cards ({} pairs) from {} '{}'",
            cards.len(),
            pairs,
            theme.id(),
            theme.name()
        );

        Self {
            cards,
            score: 0,
            pending: None,
            theme_id: theme.id(),
            config,
            clock,
            rng,
        }
    }

    // === Queries ===

    /// The live deck in display order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// An O(1) copy of the deck that later moves do not affect.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// The card awaiting its pair, if any.
    #[must_use]
    pub fn pending_selection(&self) -> Option<CardId> {
        self.pending
    }

    /// The theme this deck was built from.
    #[must_use]
    pub fn theme_id(&self) -> ThemeId {
        self.theme_id
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.position(id).map(|i| &self.cards[i])
    }

    /// Current bonus fraction of a card, sampled now.
    #[must_use]
    pub fn bonus_remaining(&self, id: CardId) -> Option<f64> {
        let now = self.clock.now();
        self.card(id).map(|c| c.bonus_remaining(now))
    }

    /// All cards matched.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    fn bonus_points(&self, index: usize, now: Duration) -> i64 {
        let fraction = self.cards[index].bonus_remaining(now);
        (fraction * f64::from(self.config.bonus_scale)).floor() as i64
    }

    // === Moves ===

    /// Flip the card with `id` and resolve the selection.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let Some(chosen) = self.position(id) else {
            return ChooseOutcome::Ignored;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            return ChooseOutcome::Ignored;
        }

        let now = self.clock.now();
        match self.pending.and_then(|p| self.position(p)) {
            Some(pending) => {
                self.cards[chosen].turn_face_up(now);
                self.pending = None;

                if self.cards[chosen].content() == self.cards[pending].content() {
                    self.cards[pending].mark_matched(now);
                    self.cards[chosen].mark_matched(now);

                    let points = self.config.match_points
                        + self.bonus_points(pending, now)
                        + self.bonus_points(chosen, now);
                    self.score += points;

                    log::debug!(
                        "Matched {} with {} for {} points",
                        id,
                        self.cards[pending].id(),
                        points
                    );
                    ChooseOutcome::Matched { points }
                } else {
                    let policy = self.config.mismatch_penalty;
                    let penalty = policy.points_for(self.cards[pending].exposures())
                        + policy.points_for(self.cards[chosen].exposures());
                    self.score -= penalty;

                    log::debug!(
                        "Mismatch {} vs {}, penalty {}",
                        id,
                        self.cards[pending].id(),
                        penalty
                    );
                    ChooseOutcome::Mismatched { penalty }
                }
            }
            None => {
                let face_up: SmallVec<[usize; 2]> = self
                    .cards
                    .iter()
                    .enumerate()
                    .filter(|(_, c)| c.is_face_up() && !c.is_matched())
                    .map(|(i, _)| i)
                    .collect();
                for i in face_up {
                    self.cards[i].turn_face_down(now);
                }

                self.cards[chosen].turn_face_up(now);
                self.pending = Some(id);
                ChooseOutcome::Flipped
            }
        }
    }

    /// Reorder the deck. Card state, IDs, score and the pending selection
    /// are untouched.
    pub fn shuffle(&mut self) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        self.rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }
}
