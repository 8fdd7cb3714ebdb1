//! Soft label keys: the labeled function-key row.
//!
//! [`SlkManager`] owns the label slots of the active layout. Mutations are
//! cheap and invisible until [`flush`](SlkManager::flush) pushes the whole
//! row to a sink in one call, so a driver can batch label changes without
//! intermediate repaints.
//!
//! # Examples
//!
//! ```
//! use termattr::{Justify, SlkFormat, SlkManager};
//!
//! let mut slk = SlkManager::new(80);
//! slk.init_layout(SlkFormat::THREE_TWO_THREE);
//! slk.set_label(1, "Quit", Justify::Left)?;
//! assert_eq!(slk.label(1)?, "Quit");
//! # Ok::<(), termattr::Error>(())
//! ```

mod format;

pub use format::SlkFormat;

use crate::error::{Error, Result};
use crate::session::SessionSink;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Label justification within a slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Justify {
    /// Flush with the slot's left edge.
    #[default]
    Left,
    /// Centered in the slot.
    Center,
    /// Flush with the slot's right edge.
    Right,
}

impl Justify {
    /// Decode the classic numeric convention: 0 left, 1 center, 2 right.
    /// Anything else reads as left.
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Center,
            2 => Self::Right,
            _ => Self::Left,
        }
    }
}

/// One label slot: its text, justification, and row position.
///
/// `text` is always within `width` display columns; the manager truncates
/// at assignment time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlkSlot {
    /// Label text, truncated to fit.
    pub text: String,
    /// Justification within the slot.
    pub justify: Justify,
    /// Column of the slot's left edge.
    pub x: u16,
    /// Slot width in display columns.
    pub width: u16,
}

impl SlkSlot {
    /// The slot's display text: justified and padded to exactly `width`
    /// columns.
    #[must_use]
    pub fn render(&self) -> String {
        let width = usize::from(self.width);
        let text_width = self.text.width();
        let pad = width.saturating_sub(text_width);
        let (left, right) = match self.justify {
            Justify::Left => (0, pad),
            Justify::Center => (pad / 2, pad - pad / 2),
            Justify::Right => (pad, 0),
        };
        let mut out = String::with_capacity(width);
        out.extend(std::iter::repeat_n(' ', left));
        out.push_str(&self.text);
        out.extend(std::iter::repeat_n(' ', right));
        out
    }
}

/// Manager for the soft-label-key row.
///
/// Construction fixes the row width in columns; a terminal resize does not
/// change any label state here, it only obliges the driver to repaint.
/// [`init_layout`](Self::init_layout) with the active format is a no-op
/// that keeps existing labels; with a different format it rebuilds every
/// slot empty.
#[derive(Clone, Debug)]
pub struct SlkManager {
    format: SlkFormat,
    columns: u16,
    slots: Vec<SlkSlot>,
}

impl SlkManager {
    /// Nominal label width in columns, used when the row has room for it.
    pub const FULL_LABEL_WIDTH: usize = 8;

    /// Minimum gap between label groups, in columns.
    const GROUP_GUTTER: usize = 2;

    /// Create a manager for a row `columns` wide, with no label row active.
    #[must_use]
    pub fn new(columns: u16) -> Self {
        Self {
            format: SlkFormat::NONE,
            columns,
            slots: Vec::new(),
        }
    }

    /// Switch the row to `format`.
    ///
    /// Re-initializing with the format already active preserves all labels.
    /// Any other format discards the old slots and lays out new, empty ones.
    pub fn init_layout(&mut self, format: SlkFormat) {
        if format == self.format {
            return;
        }
        self.format = format;
        self.slots = layout_slots(&format, self.columns);
    }

    /// Set the text and justification of slot `index` (1-based).
    ///
    /// Text wider than the slot is truncated to the grapheme prefix that
    /// fits the slot's display width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlotIndex`] if `index` is 0 or beyond the
    /// active layout's slot count; no label changes.
    pub fn set_label(&mut self, index: usize, text: &str, justify: Justify) -> Result<()> {
        let slot = self.slot_mut(index)?;
        slot.text = truncate_to_width(text, usize::from(slot.width));
        slot.justify = justify;
        Ok(())
    }

    /// The stored text of slot `index` (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSlotIndex`] if `index` is out of range.
    pub fn label(&self, index: usize) -> Result<&str> {
        if index == 0 || index > self.slots.len() {
            return Err(Error::InvalidSlotIndex {
                index,
                count: self.slots.len(),
            });
        }
        Ok(&self.slots[index - 1].text)
    }

    /// Push the whole row to the sink.
    ///
    /// Always paints every slot; two flushes with no mutation in between
    /// hand the sink identical data.
    pub fn flush<S: SessionSink + ?Sized>(&self, sink: &mut S) {
        sink.paint_slk_row(&self.slots, self.format.show_index_line());
    }

    /// The active layout format.
    #[must_use]
    pub const fn format(&self) -> SlkFormat {
        self.format
    }

    /// Row width in columns, fixed at construction.
    #[must_use]
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of slots in the active layout.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The slots, left to right.
    #[must_use]
    pub fn slots(&self) -> &[SlkSlot] {
        &self.slots
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut SlkSlot> {
        if index == 0 || index > self.slots.len() {
            return Err(Error::InvalidSlotIndex {
                index,
                count: self.slots.len(),
            });
        }
        Ok(&mut self.slots[index - 1])
    }
}

/// Longest prefix of `text`, on grapheme-cluster boundaries, that fits in
/// `max_width` display columns.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > max_width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out
}

/// Compute slot positions for `format` on a row `columns` wide.
///
/// Labels are [`FULL_LABEL_WIDTH`](SlkManager::FULL_LABEL_WIDTH) columns
/// when the row has room, otherwise they shrink evenly (never below one
/// column). Three groups sit left/center/right, two sit left/right, one is
/// centered; more than three spread with equal gaps.
fn layout_slots(format: &SlkFormat, columns: u16) -> Vec<SlkSlot> {
    let slot_count = format.slot_count();
    if slot_count == 0 {
        return Vec::new();
    }
    let groups = format.groups();
    let columns = usize::from(columns);
    let gutters = (groups.len() - 1) * SlkManager::GROUP_GUTTER;

    let label_width = if slot_count * SlkManager::FULL_LABEL_WIDTH + gutters <= columns {
        SlkManager::FULL_LABEL_WIDTH
    } else {
        (columns.saturating_sub(gutters) / slot_count).clamp(1, SlkManager::FULL_LABEL_WIDTH)
    };

    let group_width = |size: u8| usize::from(size) * label_width;
    let total: usize = groups.iter().map(|&g| group_width(g)).sum();

    // Preferred edge or centered positions, pushed right when a wide
    // neighbor would otherwise run into them.
    let starts: Vec<usize> = match groups {
        [_] => vec![columns.saturating_sub(total) / 2],
        [a, b] => vec![
            0,
            columns
                .saturating_sub(group_width(*b))
                .max(group_width(*a) + SlkManager::GROUP_GUTTER),
        ],
        [a, b, c] => {
            let second = (columns.saturating_sub(group_width(*b)) / 2)
                .max(group_width(*a) + SlkManager::GROUP_GUTTER);
            let third = columns
                .saturating_sub(group_width(*c))
                .max(second + group_width(*b) + SlkManager::GROUP_GUTTER);
            vec![0, second, third]
        }
        _ => {
            let gap = columns.saturating_sub(total) / (groups.len() - 1);
            let mut x = 0;
            let mut starts = Vec::with_capacity(groups.len());
            for &g in groups {
                starts.push(x);
                x += group_width(g) + gap;
            }
            starts
        }
    };

    let mut slots = Vec::with_capacity(slot_count);
    for (start, &size) in starts.iter().zip(groups) {
        for j in 0..usize::from(size) {
            slots.push(SlkSlot {
                text: String::new(),
                justify: Justify::Left,
                x: (start + j * label_width) as u16,
                width: label_width as u16,
            });
        }
    }
    slots
}
