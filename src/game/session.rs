//! Session controller: couples the theme catalog to the matching engine.
//!
//! The session is the only place where a theme change restarts the game.
//! Everything else is forwarded to `MemoryGame` unchanged.

use std::sync::Arc;

use im::Vector;

use super::memory_game::{ChooseOutcome, MemoryGame};
use crate::cards::{Card, CardId};
use crate::core::{Clock, GameConfig, GameRng, SystemClock};
use crate::themes::{Theme, ThemeCatalog};

/// A catalog plus the game currently being played from it.
#[derive(Debug)]
pub struct GameSession {
    catalog: ThemeCatalog,
    game: MemoryGame,
    theme: Theme,
    config: GameConfig,
    clock: Arc<dyn Clock>,
    rng: GameRng,
}

impl GameSession {
    /// Start a session on the wall clock.
    pub fn new(catalog: ThemeCatalog, config: GameConfig) -> Self {
        Self::with_clock(catalog, config, Arc::new(SystemClock::new()))
    }

    /// Start a session on an injected clock.
    pub fn with_clock(catalog: ThemeCatalog, config: GameConfig, clock: Arc<dyn Clock>) -> Self {
        let mut rng = GameRng::new(config.seed);
        let theme = catalog.current_theme().clone();
        let game = MemoryGame::new(&theme, config.clone(), Arc::clone(&clock), rng.fork());
        Self {
            catalog,
            game,
            theme,
            config,
            clock,
            rng,
        }
    }

    // === Queries ===

    /// An O(1) snapshot of the deck.
    #[must_use]
    pub fn cards(&self) -> Vector<Card> {
        self.game.snapshot()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.game.score()
    }

    #[must_use]
    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    /// The theme as it was when the running game was built.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // === Intents ===

    /// Rebuild the deck from the catalog's current theme. Score resets.
    pub fn new_game(&mut self) {
        self.theme = self.catalog.current_theme().clone();
        self.game = MemoryGame::new(
            &self.theme,
            self.config.clone(),
            Arc::clone(&self.clock),
            self.rng.fork(),
        );
        log::info!("New game with {} '{}'", self.theme.id(), self.theme.name());
    }

    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        self.game.choose(id)
    }

    pub fn shuffle(&mut self) {
        self.game.shuffle();
    }

    /// Select a theme. Starts a new game if the selection changed and
    /// returns whether it did.
    pub fn select_theme(&mut self, index: usize) -> bool {
        self.catalog.select_theme(index);
        self.sync_with_catalog()
    }

    /// Edit the catalog, then validate it and restart if the running
    /// game's theme was changed or deselected.
    ///
    /// Renames and recolors do not restart; content, pair count and
    /// selection changes do.
    pub fn edit_catalog<R>(&mut self, edit: impl FnOnce(&mut ThemeCatalog) -> R) -> R {
        let result = edit(&mut self.catalog);
        self.catalog.check_errors();
        self.sync_with_catalog();
        result
    }

    /// Restart if the catalog's current theme no longer matches the deck
    /// source. Call after any external selection change.
    pub fn sync_with_catalog(&mut self) -> bool {
        let current = self.catalog.current_theme();
        let stale = current.id() != self.theme.id()
            || current.content() != self.theme.content()
            || current.pair_count() != self.theme.pair_count();
        if stale {
            self.new_game();
        } else {
            // Keep the display copy current
            self.theme = current.clone();
        }
        stale
    }
}
