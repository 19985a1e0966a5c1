//! # memorize
//!
//! A single-player memory game engine: build a deck of emoji pairs from a
//! theme, flip cards two at a time, and score matches with a bonus that
//! decays while a card sits face-up.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Decks come from an injected, seeded `GameRng`;
//!    bonus decay reads an injected `Clock`. Same seed and same clock
//!    readings give the same game.
//!
//! 2. **Infallible Core**: Bad indices are clamped, stale card IDs are
//!    ignored, oversized pair counts are corrected. Only storage can fail,
//!    and the catalog logs and swallows those failures.
//!
//! 3. **Explicit State**: Every move returns what it did (`ChooseOutcome`);
//!    callers re-read `cards()` and `score()` instead of subscribing.
//!
//! ## Modules
//!
//! - `core`: RNG, clock, configuration, errors
//! - `themes`: Theme records, the catalog, storage collaborators
//! - `cards`: Card state and the bonus-time model
//! - `game`: Matching engine and session controller
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use memorize::{GameConfig, GameSession, ManualClock, ThemeCatalog};
//!
//! let catalog = ThemeCatalog::in_memory("Main");
//! let mut session = GameSession::with_clock(
//!     catalog,
//!     GameConfig::default(),
//!     Arc::new(ManualClock::new()),
//! );
//!
//! let first = session.cards()[0].id();
//! session.choose(first);
//! assert!(session.cards()[0].is_face_up());
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod themes;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameConfig, GameRng, ManualClock, MismatchPenalty, StoreError, SystemClock,
};

pub use crate::cards::{Card, CardId};

pub use crate::themes::{
    FileStorage, MemoryStorage, RgbaColor, Theme, ThemeCatalog, ThemeId, ThemeStorage,
};

pub use crate::game::{ChooseOutcome, GameSession, MemoryGame};
