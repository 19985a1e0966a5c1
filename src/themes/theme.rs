//! Theme records and glyph handling.
//!
//! A `Theme` is a named pool of glyphs plus a color and a default number
//! of pairs. Glyphs are extended grapheme clusters, so `"🐻‍❄️"` (a ZWJ
//! sequence) and `"☀️"` (base + variation selector) each count as one.
//!
//! Themes are only mutated through `ThemeCatalog` commands, which
//! re-validate on every write.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Catalog-unique theme identifier, assigned at insert.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThemeId(pub u32);

impl ThemeId {
    /// Create a new theme ID.
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

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Theme({})", self.0)
    }
}

/// Four normalized color channels.
///
/// Channels are clamped into `0.0..=1.0` on construction; NaN becomes 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl RgbaColor {
    pub const RED: Self = Self::opaque(1.0, 0.231, 0.188);
    pub const GREEN: Self = Self::opaque(0.204, 0.780, 0.349);
    pub const BLUE: Self = Self::opaque(0.0, 0.478, 1.0);
    pub const BROWN: Self = Self::opaque(0.635, 0.518, 0.369);
    pub const CYAN: Self = Self::opaque(0.196, 0.678, 0.902);
    pub const GRAY: Self = Self::opaque(0.557, 0.557, 0.576);
    pub const YELLOW: Self = Self::opaque(1.0, 0.8, 0.0);

    /// Create a color, clamping each channel.
    #[must_use]
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: clamp_channel(alpha),
        }
    }

    const fn opaque(red: f64, green: f64, blue: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    /// The channels as an array, in RGBA order.
    #[must_use]
    pub fn channels(&self) -> [f64; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

fn clamp_channel(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// A named glyph pool from which decks are built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    name: String,
    color: RgbaColor,
    content: String,
    pair_count: usize,
    id: ThemeId,
}

impl Theme {
    /// Create a theme. Duplicate glyphs in `content` are dropped, keeping
    /// the first occurrence.
    ///
    /// `pair_count` is taken as given; `ThemeCatalog::check_errors` clamps
    /// it to the content size.
    #[must_use]
    pub fn new(
        id: ThemeId,
        name: impl Into<String>,
        color: RgbaColor,
        pair_count: usize,
        content: &str,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            content: dedup_glyphs(content),
            pair_count,
            id,
        }
    }

    #[must_use]
    pub fn id(&self) -> ThemeId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> RgbaColor {
        self.color
    }

    /// The glyph pool as one string.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// The glyphs, in order.
    #[must_use]
    pub fn glyphs(&self) -> Vec<&str> {
        self.content.graphemes(true).collect()
    }

    /// Number of glyphs in the pool.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        glyph_count(&self.content)
    }

    /// Can a deck be built from this theme as it stands?
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.glyph_count() > 1 && self.pair_count <= self.glyph_count()
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_color(&mut self, color: RgbaColor) {
        self.color = color;
    }

    pub(crate) fn set_content(&mut self, content: &str) {
        self.content = dedup_glyphs(content);
    }

    pub(crate) fn set_pair_count(&mut self, pair_count: usize) {
        self.pair_count = pair_count;
    }
}

/// Number of glyphs (grapheme clusters) in `text`.
#[must_use]
pub fn glyph_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Remove repeated glyphs, keeping the first occurrence of each.
#[must_use]
pub fn dedup_glyphs(text: &str) -> String {
    let mut seen = FxHashSet::default();
    text.graphemes(true).filter(|g| seen.insert(*g)).collect()
}

/// Drop glyphs that cannot label a card (whitespace and control characters).
#[must_use]
pub fn printable_glyphs(text: &str) -> String {
    text.graphemes(true)
        .filter(|g| !g.chars().all(|c| c.is_whitespace() || c.is_control()))
        .collect()
}
