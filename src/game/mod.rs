//! Game logic: the matching engine and the session controller.
//!
//! - `MemoryGame`: deck construction, `choose`, bonus scoring, shuffle
//! - `GameSession`: rebuilds the game from the catalog's current theme

mod memory_game;
mod session;

pub use memory_game::{ChooseOutcome, MemoryGame};
pub use session::GameSession;
