//! Recording sink for session-level tests.
//!
//! Stores every painted cell with its colors resolved against the live
//! pair table, the way a real driver would rasterize, so tests can assert
//! on what would actually reach the screen.

use termattr::{ColorSpec, PairTable, SessionSink, SlkSlot, WideAttr};

/// One recorded cell with colors resolved at paint time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordedCell {
    pub glyph: char,
    /// Foreground palette index; 0xFF marks a direct-color cell.
    pub fg: u8,
    pub bg: u8,
    pub flags: u16,
}

impl Default for RecordedCell {
    fn default() -> Self {
        Self {
            glyph: ' ',
            fg: 7,
            bg: 0,
            flags: 0,
        }
    }
}

/// Marker stored in `fg`/`bg` for direct-color cells.
pub const DIRECT_MARK: u8 = 0xFF;

/// An in-memory screen that records every paint.
pub struct RecordingSink {
    pub columns: u16,
    pub rows: u16,
    cells: Vec<RecordedCell>,
    /// Every soft-label row paint, spliced into a full-width string.
    pub slk_rows: Vec<String>,
    /// The index-line flag of each soft-label paint.
    pub slk_index_flags: Vec<bool>,
    pub relayouts: Vec<(u16, u16)>,
}

impl RecordingSink {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![RecordedCell::default(); usize::from(columns) * usize::from(rows)],
            slk_rows: Vec::new(),
            slk_index_flags: Vec::new(),
            relayouts: Vec::new(),
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> RecordedCell {
        assert!(col < self.columns && row < self.rows, "cell out of bounds");
        self.cells[usize::from(row) * usize::from(self.columns) + usize::from(col)]
    }

    pub fn glyph_at(&self, col: u16, row: u16) -> char {
        self.cell(col, row).glyph
    }

    pub fn fg_at(&self, col: u16, row: u16) -> u8 {
        self.cell(col, row).fg
    }

    /// The most recent soft-label row, right-trimmed.
    pub fn last_slk_row(&self) -> &str {
        self.slk_rows
            .last()
            .map_or("", |row| row.trim_end_matches(' '))
    }
}

impl SessionSink for RecordingSink {
    fn render_cell(&mut self, row: u16, col: u16, glyph: char, attr: WideAttr, pairs: &PairTable) {
        if col >= self.columns || row >= self.rows {
            return;
        }
        let (fg, bg) = match attr.color() {
            ColorSpec::Pair(pair) => {
                let (fg, bg) = pairs.resolve(pair);
                (fg.index(), bg.index())
            }
            ColorSpec::Direct(_) => (DIRECT_MARK, DIRECT_MARK),
        };
        let index = usize::from(row) * usize::from(self.columns) + usize::from(col);
        self.cells[index] = RecordedCell {
            glyph,
            fg,
            bg,
            flags: attr.flags().bits(),
        };
    }

    fn paint_slk_row(&mut self, slots: &[SlkSlot], show_index_line: bool) {
        let mut row = vec![' '; usize::from(self.columns)];
        for slot in slots {
            for (i, ch) in slot.render().chars().enumerate() {
                let col = usize::from(slot.x) + i;
                if col < row.len() {
                    row[col] = ch;
                }
            }
        }
        self.slk_rows.push(row.into_iter().collect());
        self.slk_index_flags.push(show_index_line);
    }

    fn relayout(&mut self, columns: u16, rows: u16) {
        self.columns = columns;
        self.rows = rows;
        self.cells = vec![RecordedCell::default(); usize::from(columns) * usize::from(rows)];
        self.relayouts.push((columns, rows));
    }
}
