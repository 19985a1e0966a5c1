//! The theme catalog: ordered themes, a current selection, edit commands.
//!
//! ## Invariants
//!
//! - The catalog is never empty. Removing the last theme is refused, and
//!   `check_errors` reseeds the defaults if validation drops everything.
//! - Index arguments are clamped, never rejected.
//! - Every change to the theme list is handed to the storage collaborator.
//!   Storage failures are logged and otherwise ignored.
//!
//! ## Example
//!
//! ```
//! use memorize::themes::{RgbaColor, ThemeCatalog};
//!
//! let mut catalog = ThemeCatalog::in_memory("Example");
//! let seeded = catalog.len();
//!
//! let id = catalog.insert_theme("Letters", RgbaColor::RED, 3, "ABCDEF");
//! assert_eq!(catalog.len(), seeded + 1);
//!
//! catalog.select_theme(seeded);
//! assert_eq!(catalog.current_theme().id(), id);
//! ```

use super::defaults::DEFAULT_THEMES;
use super::storage::{MemoryStorage, ThemeStorage};
use super::theme::{printable_glyphs, RgbaColor, Theme, ThemeId};

/// Minimum pairs a theme editor may set.
pub const MIN_PAIRS: usize = 2;

/// Ordered collection of themes with a current selection.
#[derive(Debug)]
pub struct ThemeCatalog {
    name: String,
    themes: Vec<Theme>,
    current_index: usize,
    storage: Box<dyn ThemeStorage>,
}

impl ThemeCatalog {
    /// Open the catalog called `name`.
    ///
    /// Adopts the list previously saved under this name if there is one and
    /// it is non-empty. Otherwise seeds the default themes.
    pub fn new(name: impl Into<String>, storage: impl ThemeStorage + 'static) -> Self {
        let mut catalog = Self {
            name: name.into(),
            themes: Vec::new(),
            current_index: 0,
            storage: Box::new(storage),
        };
        catalog.restore();
        if catalog.themes.is_empty() {
            catalog.seed_defaults();
        }
        catalog
    }

    /// Open a catalog backed by a fresh in-process store.
    pub fn in_memory(name: impl Into<String>) -> Self {
        Self::new(name, MemoryStorage::new())
    }

    /// The key this catalog persists under.
    #[must_use]
    pub fn storage_key(&self) -> String {
        format!("ThemeStore:{}", self.name)
    }

    fn restore(&mut self) {
        let key = self.storage_key();
        match self.storage.load(&key) {
            Ok(Some(mut themes)) if !themes.is_empty() => {
                log::info!("Restored {} themes from {}", themes.len(), key);
                // Saved content skips `Theme::new`, so repeated glyphs are dropped here
                for theme in &mut themes {
                    let content = theme.content().to_owned();
                    theme.set_content(&content);
                }
                self.themes = themes;
            }
            Ok(_) => log::debug!("No saved themes under {}", key),
            Err(e) => log::warn!("Failed to load themes from {}: {}", key, e),
        }
    }

    fn persist(&mut self) {
        let key = self.storage_key();
        if let Err(e) = self.storage.save(&key, &self.themes) {
            log::warn!("Failed to save themes to {}: {}", key, e);
        }
    }

    fn seed_defaults(&mut self) {
        log::info!("Seeding default themes into {}", self.storage_key());
        for (name, color, pairs, content) in DEFAULT_THEMES {
            self.insert_theme(*name, *color, *pairs, content);
        }
    }

    // === Queries ===

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All themes in display order.
    #[must_use]
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Always false once constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.themes.len().saturating_sub(1))
    }

    /// The theme at `index`, clamped into range.
    #[must_use]
    pub fn theme_at(&self, index: usize) -> &Theme {
        &self.themes[self.clamp(index)]
    }

    /// The selected index, clamped into range.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.clamp(self.current_index)
    }

    #[must_use]
    pub fn current_theme(&self) -> &Theme {
        self.theme_at(self.current_index)
    }

    /// Position of the theme with `id`.
    #[must_use]
    pub fn index_of(&self, id: ThemeId) -> Option<usize> {
        self.themes.iter().position(|t| t.id() == id)
    }

    // === Commands ===

    /// Select the theme at `index`, clamped into range.
    pub fn select_theme(&mut self, index: usize) {
        self.current_index = self.clamp(index);
    }

    /// Append a new theme and return its fresh ID.
    ///
    /// The ID is one more than the largest ID in the catalog, or 1 when
    /// empty. `pair_count` is not validated here; see `check_errors`.
    pub fn insert_theme(
        &mut self,
        name: impl Into<String>,
        color: RgbaColor,
        pair_count: usize,
        content: &str,
    ) -> ThemeId {
        let next = self.themes.iter().map(|t| t.id().raw()).max().unwrap_or(0) + 1;
        let id = ThemeId::new(next);
        self.themes.push(Theme::new(id, name, color, pair_count, content));
        self.persist();
        id
    }

    /// Remove the theme at `index` and return a suggested new current index.
    ///
    /// Refused when only one theme remains. Out-of-range indices remove
    /// nothing. The current selection is left for the caller to update.
    pub fn remove_theme(&mut self, index: usize) -> usize {
        if self.themes.len() > 1 && index < self.themes.len() {
            let removed = self.themes.remove(index);
            log::debug!("Removed {} ({})", removed.id(), removed.name());
            self.persist();
        }
        index % self.themes.len()
    }

    /// Move the theme at `from` so it ends up at `to`. The current
    /// selection follows the theme it pointed at.
    pub fn move_theme(&mut self, from: usize, to: usize) {
        let from = self.clamp(from);
        let to = self.clamp(to);
        if from == to {
            return;
        }
        let selected = self.current_theme().id();
        let theme = self.themes.remove(from);
        self.themes.insert(to, theme);
        if let Some(index) = self.index_of(selected) {
            self.current_index = index;
        }
        self.persist();
    }

    /// Drop themes that cannot be played and clamp pair counts to content.
    ///
    /// Themes with an empty name or at most one glyph are removed. Run after
    /// user edits and before building a deck from an edited theme.
    pub fn check_errors(&mut self) {
        let before = self.themes.len();
        self.themes.retain(|t| !t.name().is_empty() && t.glyph_count() > 1);
        if self.themes.len() < before {
            log::warn!("Dropped {} invalid themes", before - self.themes.len());
        }

        for theme in &mut self.themes {
            let glyphs = theme.glyph_count();
            if theme.pair_count() > glyphs {
                theme.set_pair_count(glyphs);
            }
        }

        if self.themes.is_empty() {
            self.seed_defaults();
        } else {
            self.persist();
        }
    }

    /// Rename the theme at `index`.
    pub fn rename_theme(&mut self, index: usize, name: impl Into<String>) {
        let index = self.clamp(index);
        self.themes[index].set_name(name.into());
        self.persist();
    }

    /// Recolor the theme at `index`.
    pub fn set_color(&mut self, index: usize, color: RgbaColor) {
        let index = self.clamp(index);
        self.themes[index].set_color(color);
        self.persist();
    }

    /// Replace the glyph pool of the theme at `index`.
    ///
    /// Whitespace and repeated glyphs are dropped. The pair count is
    /// clamped to what the new pool supports.
    pub fn set_content(&mut self, index: usize, content: &str) {
        let index = self.clamp(index);
        let theme = &mut self.themes[index];
        theme.set_content(&printable_glyphs(content));
        let pairs = clamp_pairs(theme.pair_count(), theme.glyph_count());
        theme.set_pair_count(pairs);
        self.persist();
    }

    /// Append glyphs to the pool of the theme at `index`.
    pub fn add_glyphs(&mut self, index: usize, glyphs: &str) {
        let index = self.clamp(index);
        let combined = format!("{}{}", self.themes[index].content(), glyphs);
        self.set_content(index, &combined);
    }

    /// Remove every occurrence of `glyph` from the theme at `index`.
    pub fn remove_glyph(&mut self, index: usize, glyph: &str) {
        let index = self.clamp(index);
        let remaining: String = self.themes[index]
            .glyphs()
            .into_iter()
            .filter(|g| *g != glyph)
            .collect();
        self.set_content(index, &remaining);
    }

    /// Set the pair count of the theme at `index`, clamped to
    /// `MIN_PAIRS..=max(MIN_PAIRS, glyphs)`.
    pub fn set_pair_count(&mut self, index: usize, pair_count: usize) {
        let index = self.clamp(index);
        let theme = &mut self.themes[index];
        let pairs = clamp_pairs(pair_count, theme.glyph_count());
        theme.set_pair_count(pairs);
        self.persist();
    }
}

fn clamp_pairs(pair_count: usize, glyphs: usize) -> usize {
    pair_count.clamp(MIN_PAIRS, glyphs.max(MIN_PAIRS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StoreError;
    use crate::themes::encode_themes;

    fn catalog_with(themes: &[(&str, usize, &str)]) -> ThemeCatalog {
        let storage = MemoryStorage::new();
        let mut seed = storage.clone();
        let list: Vec<Theme> = themes
            .iter()
            .enumerate()
            .map(|(i, (name, pairs, content))| {
                Theme::new(ThemeId::new(i as u32 + 1), *name, RgbaColor::RED, *pairs, content)
            })
            .collect();
        seed.save("ThemeStore:test", &list).unwrap();
        ThemeCatalog::new("test", storage)
    }

    #[test]
    fn test_seeds_defaults_when_storage_empty() {
        let catalog = ThemeCatalog::in_memory("fresh");
        assert_eq!(catalog.len(), DEFAULT_THEMES.len());
        assert_eq!(catalog.theme_at(0).name(), "Vehicles");

        let ids: Vec<_> = catalog.themes().iter().map(|t| t.id().raw()).collect();
        let expected: Vec<_> = (1..=DEFAULT_THEMES.len() as u32).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_adopts_saved_themes() {
        let catalog = catalog_with(&[("A", 2, "ab"), ("B", 2, "cd")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.theme_at(1).name(), "B");
    }

    #[test]
    fn test_restore_drops_repeated_glyphs() {
        let mut value = serde_json::to_value(vec![Theme::new(
            ThemeId::new(1),
            "Doubles",
            RgbaColor::RED,
            2,
            "AB",
        )])
        .unwrap();
        value[0]["content"] = serde_json::Value::from("AAB");
        let themes: Vec<Theme> = serde_json::from_value(value).unwrap();

        let storage = MemoryStorage::new();
        storage.insert_raw("ThemeStore:d", encode_themes(&themes).unwrap());
        let mut catalog = ThemeCatalog::new("d", storage);

        assert_eq!(catalog.theme_at(0).content(), "AB");
        assert_eq!(catalog.theme_at(0).glyph_count(), 2);

        // A pool that collapses to one glyph no longer passes validation
        catalog.insert_theme("Keep", RgbaColor::BLUE, 2, "xyz");
        let mut value = serde_json::to_value(catalog.themes()).unwrap();
        value[0]["content"] = serde_json::Value::from("AA");
        let themes: Vec<Theme> = serde_json::from_value(value).unwrap();

        let storage = MemoryStorage::new();
        storage.insert_raw("ThemeStore:d", encode_themes(&themes).unwrap());
        let mut catalog = ThemeCatalog::new("d", storage);
        catalog.check_errors();

        let names: Vec<_> = catalog.themes().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Keep"]);
    }

    #[test]
    fn test_empty_saved_list_falls_back_to_defaults() {
        let storage = MemoryStorage::new();
        let mut seed = storage.clone();
        seed.save("ThemeStore:x", &[]).unwrap();

        let catalog = ThemeCatalog::new("x", storage);
        assert_eq!(catalog.len(), DEFAULT_THEMES.len());
    }

    #[test]
    fn test_failed_load_falls_back_to_defaults() {
        #[derive(Debug)]
        struct Broken;
        impl ThemeStorage for Broken {
            fn load(&self, _: &str) -> Result<Option<Vec<Theme>>, StoreError> {
                Err(StoreError::Io(std::io::Error::other("disk gone")))
            }
            fn save(&mut self, _: &str, _: &[Theme]) -> Result<(), StoreError> {
                Err(StoreError::Io(std::io::Error::other("disk gone")))
            }
        }

        let mut catalog = ThemeCatalog::new("broken", Broken);
        assert_eq!(catalog.len(), DEFAULT_THEMES.len());

        // Save failures are not reported
        catalog.insert_theme("More", RgbaColor::RED, 2, "xy");
        assert_eq!(catalog.len(), DEFAULT_THEMES.len() + 1);
    }

    #[test]
    fn test_theme_at_clamps() {
        let catalog = catalog_with(&[("A", 2, "ab"), ("B", 2, "cd")]);
        assert_eq!(catalog.theme_at(99).name(), "B");
    }

    #[test]
    fn test_select_theme_clamps() {
        let mut catalog = catalog_with(&[("A", 2, "ab"), ("B", 2, "cd")]);
        catalog.select_theme(7);
        assert_eq!(catalog.current_index(), 1);
        assert_eq!(catalog.current_theme().name(), "B");
    }

    #[test]
    fn test_insert_assigns_max_plus_one() {
        let mut catalog = catalog_with(&[("A", 2, "ab"), ("B", 2, "cd")]);
        catalog.remove_theme(0);
        let id = catalog.insert_theme("C", RgbaColor::BLUE, 2, "ef");
        assert_eq!(id, ThemeId::new(3));
        assert_eq!(catalog.theme_at(1).id(), id);
    }

    #[test]
    fn test_remove_last_theme_is_refused() {
        let mut catalog = catalog_with(&[("A", 2, "ab")]);
        assert_eq!(catalog.remove_theme(0), 0);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_remove_suggests_index() {
        let mut catalog = catalog_with(&[("A", 2, "ab"), ("B", 2, "cd"), ("C", 2, "ef")]);
        catalog.select_theme(2);

        let suggested = catalog.remove_theme(2);
        assert_eq!(catalog.len(), 2);
        assert_eq!(suggested, 0);

        // Selection is not touched by removal, but reads stay in range
        assert_eq!(catalog.current_index(), 1);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut catalog = catalog_with(&[("A", 2, "ab"), ("B", 2, "cd")]);
        assert_eq!(catalog.remove_theme(5), 1);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_check_errors_filters_and_clamps() {
        let mut catalog = catalog_with(&[
            ("", 2, "ab"),
            ("Single", 2, "a"),
            ("Greedy", 9, "abc"),
            ("Fine", 2, "abcd"),
        ]);

        catalog.check_errors();

        let names: Vec<_> = catalog.themes().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Greedy", "Fine"]);
        assert_eq!(catalog.theme_at(0).pair_count(), 3);
        assert_eq!(catalog.theme_at(1).pair_count(), 2);
    }

    #[test]
    fn test_check_errors_never_empties_catalog() {
        let mut catalog = catalog_with(&[("", 2, "ab")]);
        catalog.check_errors();
        assert_eq!(catalog.len(), DEFAULT_THEMES.len());
    }

    #[test]
    fn test_edit_commands_revalidate() {
        let mut catalog = catalog_with(&[("A", 4, "abcd")]);

        catalog.set_content(0, "a b b c");
        assert_eq!(catalog.theme_at(0).content(), "abc");
        assert_eq!(catalog.theme_at(0).pair_count(), 3);

        catalog.add_glyphs(0, "cde");
        assert_eq!(catalog.theme_at(0).content(), "abcde");

        catalog.remove_glyph(0, "b");
        assert_eq!(catalog.theme_at(0).content(), "acde");

        catalog.set_pair_count(0, 1);
        assert_eq!(catalog.theme_at(0).pair_count(), MIN_PAIRS);
        catalog.set_pair_count(0, 40);
        assert_eq!(catalog.theme_at(0).pair_count(), 4);

        catalog.rename_theme(0, "Renamed");
        catalog.set_color(0, RgbaColor::GREEN);
        assert_eq!(catalog.theme_at(0).name(), "Renamed");
        assert_eq!(catalog.theme_at(0).color(), RgbaColor::GREEN);
    }

    #[test]
    fn test_move_theme_keeps_selection() {
        let mut catalog = catalog_with(&[("A", 2, "ab"), ("B", 2, "cd"), ("C", 2, "ef")]);
        catalog.select_theme(0);

        catalog.move_theme(0, 2);

        let names: Vec<_> = catalog.themes().iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(catalog.current_theme().name(), "A");
    }

    #[test]
    fn test_mutations_are_persisted() {
        let storage = MemoryStorage::new();
        let mut catalog = ThemeCatalog::new("p", storage.clone());
        catalog.insert_theme("Letters", RgbaColor::RED, 3, "ABCDEF");
        catalog.rename_theme(0, "Cars");

        let reopened = ThemeCatalog::new("p", storage);
        assert_eq!(reopened.themes(), catalog.themes());
        assert_eq!(reopened.theme_at(0).name(), "Cars");
    }
}
