//! Declarative pointer-region routing.
//!
//! Pointer hits are routed through an ordered table of `(region, action)`
//! rules instead of coordinate comparisons scattered through the dispatch
//! code. The first rule whose region contains the point wins; a point no
//! rule covers is simply not an action.

use crate::cursor::BlinkSlot;

/// A rectangular screen region in cell coordinates.
///
/// `x`/`y` name the top-left cell; the right and bottom edges are
/// exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Leftmost column.
    pub x: u16,
    /// Topmost row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Region {
    /// Create a region.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the region contains the cell at `(x, y)`.
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width
            && (y - self.y) < self.height
    }
}

/// Geometry of an on-screen color-pair grid.
///
/// The grid shows pairs as fixed-width swatches, `per_row` to a screen row,
/// numbered by absolute row: the swatch at column offset `c` on row `y`
/// is pair `y * per_row + c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PairGrid {
    /// Column of the grid's left edge.
    pub x: u16,
    /// Width of one swatch in columns.
    pub cell_width: u16,
    /// Swatches per screen row.
    pub per_row: u16,
}

impl PairGrid {
    /// The pair index under the cell at `(x, y)`.
    ///
    /// `y` is the absolute screen row, as in the on-screen numbering. The
    /// result may exceed the pair table's range; callers decide what an
    /// out-of-table hit means.
    #[must_use]
    pub const fn pair_at(&self, x: u16, y: u16) -> u16 {
        let cell = if self.cell_width == 0 { 1 } else { self.cell_width };
        let column = x.saturating_sub(self.x) / cell;
        column.saturating_add(y.saturating_mul(self.per_row))
    }
}

/// What a pointer press inside a region does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// Redefine the color pair under the hit, per the grid's numbering.
    RedefinePair(PairGrid),
    /// Advance one cursor blink slot to its next shape.
    CycleCursor(BlinkSlot),
}

/// Ordered table of `(region, action)` rules, first match wins.
#[derive(Clone, Debug, Default)]
pub struct RegionMap {
    rules: Vec<(Region, PointerAction)>,
}

impl RegionMap {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule; earlier rules take precedence.
    pub fn add(&mut self, region: Region, action: PointerAction) {
        self.rules.push((region, action));
    }

    /// The action for a point, if any rule's region contains it.
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Option<&PointerAction> {
        self.rules
            .iter()
            .find(|(region, _)| region.contains(x, y))
            .map(|(_, action)| action)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
