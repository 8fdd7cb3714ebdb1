//! Color pair table: indexed foreground/background definitions.
//!
//! Attribute words store a pair *index*; the colors behind an index live
//! here and are looked up at render time, every time. Redefining a pair
//! therefore recolors every cell already encoded with it on the next
//! repaint, with no buffer rewrite.

use crate::color::PaletteColor;
use crate::error::{Error, Result};

/// Fixed-size table of foreground/background color pairs.
///
/// All 256 entries exist from construction, initialized to white on black,
/// so any index is resolvable without having been defined first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairTable {
    entries: [(PaletteColor, PaletteColor); Self::PAIR_COUNT],
}

impl PairTable {
    /// Number of pairs in the table.
    pub const PAIR_COUNT: usize = 256;

    /// Largest valid pair index.
    pub const MAX_PAIR: u16 = 255;

    /// Conventional count of low pairs a session driver fixes at startup
    /// and leaves alone afterwards. Not enforced.
    pub const RESERVED_PAIRS: u16 = 3;

    /// Create a table with every pair set to white on black.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: [(PaletteColor::WHITE, PaletteColor::BLACK); Self::PAIR_COUNT],
        }
    }

    /// Define pair `index` as `fg` on `bg`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPairIndex`] for `index > 255`; the table is
    /// left unchanged.
    pub fn define(&mut self, index: u16, fg: PaletteColor, bg: PaletteColor) -> Result<()> {
        if index > Self::MAX_PAIR {
            return Err(Error::InvalidPairIndex { index });
        }
        self.entries[index as usize] = (fg, bg);
        Ok(())
    }

    /// The colors currently behind `index`.
    #[must_use]
    pub const fn resolve(&self, index: u8) -> (PaletteColor, PaletteColor) {
        self.entries[index as usize]
    }

    /// Foreground of pair `index`.
    #[must_use]
    pub const fn fg(&self, index: u8) -> PaletteColor {
        self.entries[index as usize].0
    }

    /// Background of pair `index`.
    #[must_use]
    pub const fn bg(&self, index: u8) -> PaletteColor {
        self.entries[index as usize].1
    }
}

impl Default for PairTable {
    fn default() -> Self {
        Self::new()
    }
}
