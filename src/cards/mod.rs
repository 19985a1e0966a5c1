//! Cards in a running game.
//!
//! ## Key Types
//!
//! - `CardId`: Stable position index assigned at deck construction
//! - `Card`: Glyph plus face, match and bonus-window state

pub mod card;

pub use card::{Card, CardId};
