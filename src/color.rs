//! Color types for attribute encoding.
//!
//! This module provides the color vocabulary used by the attribute codecs:
//!
//! - [`PaletteColor`]: an 8-bit palette index with named constants for the
//!   eight classic low colors
//! - [`Rgb5`]: an RGB triple with 5-bit channels, the precision direct-color
//!   attributes are stored at
//! - [`DirectColor`]: a foreground/background/blend triple packable into a
//!   35-bit field
//!
//! Channel values outside the 5-bit range saturate at construction; nothing
//! in this module returns an error.
//!
//! # Examples
//!
//! ```
//! use termattr::{DirectColor, Rgb5};
//!
//! let fg = Rgb5::new(31, 20, 0);
//! let bg = Rgb5::new(0, 0, 4);
//! let color = DirectColor::new(fg, bg, 0);
//!
//! let packed = color.pack();
//! assert_eq!(DirectColor::unpack(packed), color);
//! ```

/// Width of one direct-color channel in bits.
const CHANNEL_BITS: u32 = 5;

/// Saturate a channel value to the 5-bit range.
const fn clamp5(value: u8) -> u8 {
    if value > Rgb5::MAX_CHANNEL {
        Rgb5::MAX_CHANNEL
    } else {
        value
    }
}

/// An 8-bit palette color index.
///
/// The eight named constants follow the classic terminal palette order
/// (blue at 1, red at 4). Indices 8..=255 are valid but unnamed; what they
/// look like is the renderer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PaletteColor(pub u8);

impl PaletteColor {
    pub const BLACK: Self = Self(0);
    pub const BLUE: Self = Self(1);
    pub const GREEN: Self = Self(2);
    pub const CYAN: Self = Self(3);
    pub const RED: Self = Self(4);
    pub const MAGENTA: Self = Self(5);
    pub const YELLOW: Self = Self(6);
    pub const WHITE: Self = Self(7);

    /// Create a palette color from its index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// The palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Name of one of the eight classic colors, if this is one.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("black"),
            1 => Some("blue"),
            2 => Some("green"),
            3 => Some("cyan"),
            4 => Some("red"),
            5 => Some("magenta"),
            6 => Some("yellow"),
            7 => Some("white"),
            _ => None,
        }
    }
}

impl From<u8> for PaletteColor {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

/// An RGB color with 5-bit channels (each 0..=31).
///
/// This is the storage precision of direct-color attributes. Constructors
/// saturate out-of-range channels instead of rejecting them, so a caller
/// passing 40 gets 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb5 {
    r: u8,
    g: u8,
    b: u8,
}

impl Rgb5 {
    /// Largest representable channel value.
    pub const MAX_CHANNEL: u8 = 31;

    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 31,
        g: 31,
        b: 31,
    };

    /// Create a color, saturating each channel to 0..=31.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: clamp5(r),
            g: clamp5(g),
            b: clamp5(b),
        }
    }

    /// Red channel (0..=31).
    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel (0..=31).
    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel (0..=31).
    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Scale an 8-bit-per-channel color down to 5 bits.
    #[must_use]
    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r >> 3,
            g: g >> 3,
            b: b >> 3,
        }
    }

    /// Interpolate toward another color.
    ///
    /// `blend` is a 5-bit weight: 0 leaves the color unchanged, 31 lands
    /// exactly on `toward`. Out-of-range weights saturate.
    #[must_use]
    pub fn lerp(self, toward: Self, blend: u8) -> Self {
        let blend = i32::from(clamp5(blend));
        let mix = |from: u8, to: u8| -> u8 {
            let from = i32::from(from);
            let to = i32::from(to);
            (from + (to - from) * blend / i32::from(Self::MAX_CHANNEL)) as u8
        };
        Self {
            r: mix(self.r, toward.r),
            g: mix(self.g, toward.g),
            b: mix(self.b, toward.b),
        }
    }
}

/// A direct-color specification: foreground, background, and a blend weight.
///
/// `blend` (0..=31) controls how far line-decoration colors (underlines,
/// overlines, side lines, strikeout rules) are pulled from the foreground
/// toward the background when the cell is painted.
///
/// The whole value packs into 35 bits, blue channel first within each color,
/// foreground before background, blend on top. [`pack`](Self::pack) and
/// [`unpack`](Self::unpack) are exact inverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectColor {
    fg: Rgb5,
    bg: Rgb5,
    blend: u8,
}

impl DirectColor {
    /// Total width of the packed representation in bits.
    pub const PACKED_BITS: u32 = 7 * CHANNEL_BITS;

    /// Mask covering the packed representation.
    pub const PACKED_MASK: u64 = (1 << Self::PACKED_BITS) - 1;

    const FG_G_SHIFT: u32 = CHANNEL_BITS;
    const FG_R_SHIFT: u32 = 2 * CHANNEL_BITS;
    const BG_B_SHIFT: u32 = 3 * CHANNEL_BITS;
    const BG_G_SHIFT: u32 = 4 * CHANNEL_BITS;
    const BG_R_SHIFT: u32 = 5 * CHANNEL_BITS;
    const BLEND_SHIFT: u32 = 6 * CHANNEL_BITS;
    const CHANNEL_MASK: u64 = (1 << CHANNEL_BITS) - 1;

    /// Create a direct color, saturating `blend` to 0..=31.
    #[must_use]
    pub const fn new(fg: Rgb5, bg: Rgb5, blend: u8) -> Self {
        Self {
            fg,
            bg,
            blend: clamp5(blend),
        }
    }

    /// Foreground color.
    #[must_use]
    pub const fn fg(self) -> Rgb5 {
        self.fg
    }

    /// Background color.
    #[must_use]
    pub const fn bg(self) -> Rgb5 {
        self.bg
    }

    /// Blend weight (0..=31).
    #[must_use]
    pub const fn blend(self) -> u8 {
        self.blend
    }

    /// Pack into the 35-bit wire layout.
    #[must_use]
    pub const fn pack(self) -> u64 {
        (self.fg.b as u64)
            | (self.fg.g as u64) << Self::FG_G_SHIFT
            | (self.fg.r as u64) << Self::FG_R_SHIFT
            | (self.bg.b as u64) << Self::BG_B_SHIFT
            | (self.bg.g as u64) << Self::BG_G_SHIFT
            | (self.bg.r as u64) << Self::BG_R_SHIFT
            | (self.blend as u64) << Self::BLEND_SHIFT
    }

    /// Unpack from the 35-bit wire layout. Bits above the payload are ignored.
    #[must_use]
    pub const fn unpack(packed: u64) -> Self {
        const fn channel(packed: u64, shift: u32) -> u8 {
            ((packed >> shift) & DirectColor::CHANNEL_MASK) as u8
        }
        Self {
            fg: Rgb5 {
                b: channel(packed, 0),
                g: channel(packed, Self::FG_G_SHIFT),
                r: channel(packed, Self::FG_R_SHIFT),
            },
            bg: Rgb5 {
                b: channel(packed, Self::BG_B_SHIFT),
                g: channel(packed, Self::BG_G_SHIFT),
                r: channel(packed, Self::BG_R_SHIFT),
            },
            blend: channel(packed, Self::BLEND_SHIFT),
        }
    }

    /// Color for line decorations: the foreground pulled toward the
    /// background by `blend`.
    #[must_use]
    pub fn decoration_rgb(self) -> Rgb5 {
        self.fg.lerp(self.bg, self.blend)
    }
}
