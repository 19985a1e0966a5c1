//! Theme catalog: the content decks are built from.
//!
//! ## Key Types
//!
//! - `Theme`: Named glyph pool with color and default pair count
//! - `ThemeCatalog`: Ordered themes, current selection, edit commands
//! - `ThemeStorage`: Persistence collaborator (`MemoryStorage`, `FileStorage`)

pub mod catalog;
pub mod defaults;
pub mod storage;
pub mod theme;

pub use catalog::{ThemeCatalog, MIN_PAIRS};
pub use defaults::DEFAULT_THEMES;
pub use storage::{decode_themes, encode_themes, FileStorage, MemoryStorage, ThemeStorage};
pub use theme::{dedup_glyphs, glyph_count, printable_glyphs, RgbaColor, Theme, ThemeId};
