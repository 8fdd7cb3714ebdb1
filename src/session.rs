//! The display session context.
//!
//! A [`Session`] owns every piece of mutable display state the components
//! share: the color pair table, the cursor blink shapes, the soft-label
//! row, the blink-enable switch, and the line-color override. There is no
//! ambient global state; callers thread `&mut Session` through component
//! calls, and a session ends when the value drops.

use crate::attr::WideAttr;
use crate::color::PaletteColor;
use crate::cursor::CursorBlink;
use crate::error::Result;
use crate::event::Event;
use crate::pair::PairTable;
use crate::slk::{SlkFormat, SlkManager, SlkSlot};

/// Renderer-side interface the session drives.
///
/// Implementations paint cells and the soft-label row. `render_cell` takes
/// the live pair table so pair-indexed attributes resolve at paint time;
/// a sink must not cache resolved colors across calls.
pub trait SessionSink {
    /// Paint one cell.
    fn render_cell(&mut self, row: u16, col: u16, glyph: char, attr: WideAttr, pairs: &PairTable);

    /// Paint the soft-label row.
    fn paint_slk_row(&mut self, slots: &[SlkSlot], show_index_line: bool);

    /// The terminal changed size; recompute whatever layout the sink keeps.
    fn relayout(&mut self, columns: u16, rows: u16);
}

/// Blocking input-event source.
pub trait EventSource {
    /// Wait for and return the next event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the source fails; that is
    /// the one condition a session loop does not recover from.
    fn poll_event(&mut self) -> Result<Event>;
}

/// Session start-up parameters.
///
/// `format_code` is the integer layout code ([`SlkFormat::from_code`]);
/// `show_index_line` asks for the index-line variant of whatever layout
/// the code names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Terminal width in columns.
    pub columns: u16,
    /// Soft-label layout code.
    pub format_code: i32,
    /// Locale name the session runs under.
    pub locale: String,
    /// Whether the soft-label row exists at all.
    pub slk_enabled: bool,
    /// Whether to show the slot-number line above the labels.
    pub show_index_line: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            format_code: 0xa,
            locale: "C".to_string(),
            slk_enabled: true,
            show_index_line: false,
        }
    }
}

/// Owned display-session state.
#[derive(Clone, Debug)]
pub struct Session {
    pairs: PairTable,
    cursor: CursorBlink,
    slk: SlkManager,
    blink_enabled: bool,
    line_color: Option<PaletteColor>,
    locale: String,
}

impl Session {
    /// Create a session from its start-up parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayoutFormat`](crate::Error::InvalidLayoutFormat)
    /// if `config.format_code` does not decode to a layout.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let mut slk = SlkManager::new(config.columns);
        if config.slk_enabled {
            let format = SlkFormat::from_code(config.format_code)?;
            slk.init_layout(format.with_index_line(
                format.show_index_line() || config.show_index_line,
            ));
        }
        Ok(Self {
            pairs: PairTable::new(),
            cursor: CursorBlink::new(),
            slk,
            blink_enabled: false,
            line_color: None,
            locale: config.locale,
        })
    }

    /// The color pair table.
    #[must_use]
    pub const fn pairs(&self) -> &PairTable {
        &self.pairs
    }

    /// The color pair table, for definition.
    pub fn pairs_mut(&mut self) -> &mut PairTable {
        &mut self.pairs
    }

    /// The cursor blink state.
    #[must_use]
    pub const fn cursor(&self) -> &CursorBlink {
        &self.cursor
    }

    /// The cursor blink state, for cycling.
    pub fn cursor_mut(&mut self) -> &mut CursorBlink {
        &mut self.cursor
    }

    /// The soft-label manager.
    #[must_use]
    pub const fn slk(&self) -> &SlkManager {
        &self.slk
    }

    /// The soft-label manager, for layout and label changes.
    pub fn slk_mut(&mut self) -> &mut SlkManager {
        &mut self.slk
    }

    /// Whether blinking attributes actually blink.
    #[must_use]
    pub const fn blink_enabled(&self) -> bool {
        self.blink_enabled
    }

    /// Switch real blinking on or off.
    pub fn set_blink_enabled(&mut self, enabled: bool) {
        self.blink_enabled = enabled;
    }

    /// The line-decoration color override, if any.
    ///
    /// `None` means decorations use the cell's own foreground.
    #[must_use]
    pub const fn line_color(&self) -> Option<PaletteColor> {
        self.line_color
    }

    /// Set or clear the line-decoration color override.
    pub fn set_line_color(&mut self, color: Option<PaletteColor>) {
        self.line_color = color;
    }

    /// The locale the session was started under.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}
