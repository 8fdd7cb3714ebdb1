//! Packed rendering-attribute words.
//!
//! This module provides the attribute codec: a cell's visual state (style
//! flags plus a color specification) packed into a single scalar so buffers
//! can store one word per cell.
//!
//! - [`StyleFlags`]: the twelve independent style bits
//! - [`ColorSpec`]: pair-indexed or direct (packed RGB) color
//! - [`WideAttr`]: 64-bit word carrying every flag and both color sources
//! - [`NarrowAttr`]: 16-bit word for narrow builds, pair-indexed only with
//!   a reduced flag set
//!
//! The two widths are separate types on purpose: nothing converts between
//! them, and the narrow constructor does not accept a direct color at all,
//! so a direct color can never end up in a narrow word.
//!
//! Decoding reads only the fields the color-source discriminant selects;
//! reserved bits and the unused payload region are never interpreted.
//!
//! # Examples
//!
//! ```
//! use termattr::{ColorSpec, StyleFlags, WideAttr};
//!
//! let attr = WideAttr::new(StyleFlags::BOLD | StyleFlags::UNDERLINE, ColorSpec::Pair(3));
//! assert_eq!(attr.flags(), StyleFlags::BOLD | StyleFlags::UNDERLINE);
//! assert_eq!(attr.color(), ColorSpec::Pair(3));
//! ```

use crate::color::DirectColor;
use bitflags::bitflags;

bitflags! {
    /// Style flags carried by an attribute word.
    ///
    /// Flags are independent and combine with bitwise OR. Renderers that
    /// cannot display a flag are free to approximate or drop it.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct StyleFlags: u16 {
        /// Bold/increased intensity.
        const BOLD       = 0x0001;
        /// Italic text.
        const ITALIC     = 0x0002;
        /// Underlined text.
        const UNDERLINE  = 0x0004;
        /// Line above the text.
        const OVERLINE   = 0x0008;
        /// Line through the text.
        const STRIKEOUT  = 0x0010;
        /// Line down the left cell edge.
        const LEFTLINE   = 0x0020;
        /// Line down the right cell edge.
        const RIGHTLINE  = 0x0040;
        /// Swapped foreground/background.
        const REVERSE    = 0x0080;
        /// Blinking text (subject to the session blink-enable switch).
        const BLINK      = 0x0100;
        /// Protected cell (ignored by destructive clears).
        const PROTECT    = 0x0200;
        /// Alternate (line-drawing) character set.
        const ALTCHARSET = 0x0400;
        /// Invisible text.
        const INVISIBLE  = 0x0800;
    }
}

/// Color specification of an attribute word.
///
/// Either an index into the session's [`PairTable`](crate::PairTable),
/// resolved at render time, or a self-contained [`DirectColor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpec {
    /// Index into the 256-entry color pair table.
    Pair(u8),
    /// Packed 5-bit-per-channel RGB, independent of the pair table.
    Direct(DirectColor),
}

impl Default for ColorSpec {
    fn default() -> Self {
        Self::Pair(0)
    }
}

impl From<DirectColor> for ColorSpec {
    fn from(color: DirectColor) -> Self {
        Self::Direct(color)
    }
}

/// 64-bit attribute word: all twelve flags plus either color source.
///
/// # Layout
///
/// | bits    | field                               |
/// |---------|-------------------------------------|
/// | 0..=11  | style flags                         |
/// | 12..=15 | reserved, zero                      |
/// | 16..=50 | color payload (pair uses 16..=23)   |
/// | 51      | color source (set = direct)         |
/// | 52..=63 | reserved, zero                      |
///
/// Words built by [`new`](Self::new) are canonical: reserved bits are zero
/// and a pair-indexed word has nothing above the index in its payload.
/// Decoding such a word loses nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WideAttr(u64);

impl WideAttr {
    /// Mask for the style-flag field.
    pub const FLAGS_MASK: u64 = 0x0FFF;
    /// Bit shift of the color payload.
    pub const COLOR_SHIFT: u32 = 16;
    /// Mask for a pair index within the payload, pre-shift.
    pub const PAIR_MASK: u64 = 0xFF;
    /// Discriminant bit: set when the payload is a packed direct color.
    pub const DIRECT_FLAG: u64 = 1 << 51;

    /// No flags, pair 0.
    pub const NORMAL: Self = Self::new(StyleFlags::empty(), ColorSpec::Pair(0));

    /// Encode flags and a color specification into a word.
    #[must_use]
    pub const fn new(flags: StyleFlags, color: ColorSpec) -> Self {
        let flag_bits = (flags.bits() as u64) & Self::FLAGS_MASK;
        let color_bits = match color {
            ColorSpec::Pair(index) => (index as u64) << Self::COLOR_SHIFT,
            ColorSpec::Direct(direct) => {
                (direct.pack() << Self::COLOR_SHIFT) | Self::DIRECT_FLAG
            }
        };
        Self(flag_bits | color_bits)
    }

    /// Word with the given flags on pair 0.
    #[must_use]
    pub const fn from_flags(flags: StyleFlags) -> Self {
        Self::new(flags, ColorSpec::Pair(0))
    }

    /// Unstyled word on the given pair.
    #[must_use]
    pub const fn from_pair(index: u8) -> Self {
        Self::new(StyleFlags::empty(), ColorSpec::Pair(index))
    }

    /// Unstyled word with a direct color.
    #[must_use]
    pub const fn from_direct(color: DirectColor) -> Self {
        Self::new(StyleFlags::empty(), ColorSpec::Direct(color))
    }

    /// Decode the style flags.
    #[must_use]
    pub const fn flags(self) -> StyleFlags {
        StyleFlags::from_bits_truncate((self.0 & Self::FLAGS_MASK) as u16)
    }

    /// Decode the color specification.
    ///
    /// Reads only the field the discriminant selects: the eight index bits
    /// for a pair word, the 35 packed channel bits for a direct word.
    #[must_use]
    pub const fn color(self) -> ColorSpec {
        if self.0 & Self::DIRECT_FLAG == 0 {
            ColorSpec::Pair(((self.0 >> Self::COLOR_SHIFT) & Self::PAIR_MASK) as u8)
        } else {
            ColorSpec::Direct(DirectColor::unpack(self.0 >> Self::COLOR_SHIFT))
        }
    }

    /// Pair index, when pair-indexed.
    #[must_use]
    pub const fn pair_index(self) -> Option<u8> {
        match self.color() {
            ColorSpec::Pair(index) => Some(index),
            ColorSpec::Direct(_) => None,
        }
    }

    /// Direct color, when direct.
    #[must_use]
    pub const fn direct_color(self) -> Option<DirectColor> {
        match self.color() {
            ColorSpec::Pair(_) => None,
            ColorSpec::Direct(direct) => Some(direct),
        }
    }

    /// Whether the payload is a direct color.
    #[must_use]
    pub const fn is_direct(self) -> bool {
        self.0 & Self::DIRECT_FLAG != 0
    }

    /// Replace the flags, keeping the color.
    #[must_use]
    pub const fn with_flags(self, flags: StyleFlags) -> Self {
        Self::new(flags, self.color())
    }

    /// Replace the color, keeping the flags.
    #[must_use]
    pub const fn with_color(self, color: ColorSpec) -> Self {
        Self::new(self.flags(), color)
    }

    /// Add flags to the word.
    #[must_use]
    pub const fn union_flags(self, flags: StyleFlags) -> Self {
        Self::new(self.flags().union(flags), self.color())
    }

    /// The raw word.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Wrap a raw word without canonicalizing it.
    ///
    /// Decoding accessors mask correctly whatever the reserved bits hold;
    /// re-encoding the decoded fields yields the canonical form.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Canonical form: decoded fields re-encoded, reserved bits cleared.
    #[must_use]
    pub const fn canonical(self) -> Self {
        Self::new(self.flags(), self.color())
    }
}

/// 16-bit attribute word for narrow builds.
///
/// Carries the eight-flag narrow subset in its low byte (see
/// [`SUPPORTED`](Self::SUPPORTED)) and a pair index in its high byte. No
/// direct-color form exists at this width; the constructor takes a pair
/// index only, so the separation holds by type rather than by checking.
///
/// Flags outside the supported subset are dropped at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NarrowAttr(u16);

impl NarrowAttr {
    /// Flags representable at this width.
    pub const SUPPORTED: StyleFlags = StyleFlags::from_bits_retain(
        StyleFlags::ALTCHARSET.bits()
            | StyleFlags::RIGHTLINE.bits()
            | StyleFlags::LEFTLINE.bits()
            | StyleFlags::ITALIC.bits()
            | StyleFlags::UNDERLINE.bits()
            | StyleFlags::REVERSE.bits()
            | StyleFlags::BLINK.bits()
            | StyleFlags::BOLD.bits(),
    );

    /// Bit shift of the pair index.
    pub const PAIR_SHIFT: u32 = 8;

    /// No flags, pair 0.
    pub const NORMAL: Self = Self::new(StyleFlags::empty(), 0);

    /// Encode flags and a pair index into a narrow word.
    ///
    /// Flags outside [`SUPPORTED`](Self::SUPPORTED) are dropped.
    #[must_use]
    pub const fn new(flags: StyleFlags, pair: u8) -> Self {
        Self(Self::narrow_bits(flags) | (pair as u16) << Self::PAIR_SHIFT)
    }

    /// Decode the style flags.
    #[must_use]
    pub const fn flags(self) -> StyleFlags {
        Self::wide_flags(self.0 & 0x00FF)
    }

    /// Decode the pair index.
    #[must_use]
    pub const fn pair(self) -> u8 {
        (self.0 >> Self::PAIR_SHIFT) as u8
    }

    /// The raw word.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wrap a raw word.
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    // Narrow words keep the historical narrow-build bit order, lowest to
    // highest: altcharset, rightline, leftline, italic, underline, reverse,
    // blink, bold.
    const fn narrow_bits(flags: StyleFlags) -> u16 {
        let mut bits = 0;
        if flags.contains(StyleFlags::ALTCHARSET) {
            bits |= 1 << 0;
        }
        if flags.contains(StyleFlags::RIGHTLINE) {
            bits |= 1 << 1;
        }
        if flags.contains(StyleFlags::LEFTLINE) {
            bits |= 1 << 2;
        }
        if flags.contains(StyleFlags::ITALIC) {
            bits |= 1 << 3;
        }
        if flags.contains(StyleFlags::UNDERLINE) {
            bits |= 1 << 4;
        }
        if flags.contains(StyleFlags::REVERSE) {
            bits |= 1 << 5;
        }
        if flags.contains(StyleFlags::BLINK) {
            bits |= 1 << 6;
        }
        if flags.contains(StyleFlags::BOLD) {
            bits |= 1 << 7;
        }
        bits
    }

    const fn wide_flags(bits: u16) -> StyleFlags {
        let mut flags = StyleFlags::empty();
        if bits & 1 << 0 != 0 {
            flags = flags.union(StyleFlags::ALTCHARSET);
        }
        if bits & 1 << 1 != 0 {
            flags = flags.union(StyleFlags::RIGHTLINE);
        }
        if bits & 1 << 2 != 0 {
            flags = flags.union(StyleFlags::LEFTLINE);
        }
        if bits & 1 << 3 != 0 {
            flags = flags.union(StyleFlags::ITALIC);
        }
        if bits & 1 << 4 != 0 {
            flags = flags.union(StyleFlags::UNDERLINE);
        }
        if bits & 1 << 5 != 0 {
            flags = flags.union(StyleFlags::REVERSE);
        }
        if bits & 1 << 6 != 0 {
            flags = flags.union(StyleFlags::BLINK);
        }
        if bits & 1 << 7 != 0 {
            flags = flags.union(StyleFlags::BOLD);
        }
        flags
    }
}
