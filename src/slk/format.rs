//! Soft-label layout formats.
//!
//! A format names how many label slots exist and how they are grouped on
//! the label row. Formats come from named constants or from the classic
//! integer code scheme (see [`SlkFormat::from_code`]).

use crate::error::{Error, Result};
use std::fmt;

/// A soft-label row layout: slot group sizes plus the index-line flag.
///
/// Groups read left to right; a `[3, 2, 3]` format is three labels on the
/// left, two in the middle, three on the right. The index-line variant of a
/// layout additionally shows each slot's number on a line above the labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlkFormat {
    groups: [u8; Self::MAX_GROUPS],
    group_count: u8,
    show_index: bool,
}

impl SlkFormat {
    /// Most groups a format can have (one per hex digit of the code).
    pub const MAX_GROUPS: usize = 8;

    /// Most label slots any format may declare.
    pub const MAX_SLOTS: usize = 36;

    /// No label row at all.
    pub const NONE: Self = Self {
        groups: [0; Self::MAX_GROUPS],
        group_count: 0,
        show_index: false,
    };

    /// Classic eight-slot 3-2-3 arrangement.
    pub const THREE_TWO_THREE: Self = Self {
        groups: [3, 2, 3, 0, 0, 0, 0, 0],
        group_count: 3,
        show_index: false,
    };

    /// Classic eight-slot 4-4 arrangement.
    pub const FOUR_FOUR: Self = Self {
        groups: [4, 4, 0, 0, 0, 0, 0, 0],
        group_count: 2,
        show_index: false,
    };

    /// Twelve-slot 4-4-4 arrangement.
    pub const FOUR_FOUR_FOUR: Self = Self {
        groups: [4, 4, 4, 0, 0, 0, 0, 0],
        group_count: 3,
        show_index: false,
    };

    /// Decode an integer format code.
    ///
    /// The low codes select the classic arrangements: 0 is 3-2-3, 1 is 4-4,
    /// 2 is 4-4-4, and 3 is 4-4-4 with the index line. Any other magnitude
    /// is read as hex digits, one group per digit (`0x431` is three groups
    /// of 4, 3, and 1 labels; `0xb` is a single group of 11). A negative
    /// code selects the index-line variant of `-code`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayoutFormat`] if any digit is zero or the
    /// groups total more than [`MAX_SLOTS`](Self::MAX_SLOTS) labels.
    pub fn from_code(code: i32) -> Result<Self> {
        if code < 0 {
            let magnitude = code
                .checked_neg()
                .ok_or(Error::InvalidLayoutFormat { code })?;
            return Ok(Self::from_code(magnitude)?.with_index_line(true));
        }
        match code {
            0 => Ok(Self::THREE_TWO_THREE),
            1 => Ok(Self::FOUR_FOUR),
            2 => Ok(Self::FOUR_FOUR_FOUR),
            3 => Ok(Self::FOUR_FOUR_FOUR.with_index_line(true)),
            _ => Self::from_hex_digits(code),
        }
    }

    /// The same layout with the index line switched on or off.
    #[must_use]
    pub const fn with_index_line(mut self, show_index: bool) -> Self {
        self.show_index = show_index;
        self
    }

    /// Group sizes, left to right. Empty for [`NONE`](Self::NONE).
    #[must_use]
    pub fn groups(&self) -> &[u8] {
        &self.groups[..self.group_count as usize]
    }

    /// Total number of label slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.groups().iter().map(|&g| usize::from(g)).sum()
    }

    /// Whether the layout has no slots.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.group_count == 0
    }

    /// Whether the index line is shown.
    #[must_use]
    pub const fn show_index_line(&self) -> bool {
        self.show_index
    }

    fn from_hex_digits(code: i32) -> Result<Self> {
        debug_assert!(code > 3);
        let mut rest = code as u32;

        let mut digits = [0_u8; Self::MAX_GROUPS];
        let mut n = 0;
        while rest != 0 {
            digits[n] = (rest & 0xF) as u8;
            rest >>= 4;
            n += 1;
        }

        let mut format = Self::NONE;
        let mut total = 0_usize;
        for i in 0..n {
            // Digits were collected low-to-high; groups read high-to-low.
            let digit = digits[n - 1 - i];
            if digit == 0 {
                return Err(Error::InvalidLayoutFormat { code });
            }
            format.groups[i] = digit;
            total += usize::from(digit);
        }
        if total > Self::MAX_SLOTS {
            return Err(Error::InvalidLayoutFormat { code });
        }
        format.group_count = n as u8;
        Ok(format)
    }
}

impl fmt::Display for SlkFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "none");
        }
        for (i, group) in self.groups().iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{group}")?;
        }
        if self.show_index {
            write!(f, "+index")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_layouts() {
        assert_eq!(SlkFormat::THREE_TWO_THREE.groups(), &[3, 2, 3]);
        assert_eq!(SlkFormat::THREE_TWO_THREE.slot_count(), 8);
        assert_eq!(SlkFormat::FOUR_FOUR.slot_count(), 8);
        assert_eq!(SlkFormat::FOUR_FOUR_FOUR.slot_count(), 12);
        assert_eq!(SlkFormat::NONE.slot_count(), 0);
        assert!(SlkFormat::NONE.is_none());
    }

    #[test]
    fn test_classic_codes() {
        assert_eq!(SlkFormat::from_code(0).unwrap(), SlkFormat::THREE_TWO_THREE);
        assert_eq!(SlkFormat::from_code(1).unwrap(), SlkFormat::FOUR_FOUR);
        assert_eq!(SlkFormat::from_code(2).unwrap(), SlkFormat::FOUR_FOUR_FOUR);

        let with_index = SlkFormat::from_code(3).unwrap();
        assert_eq!(with_index.groups(), &[4, 4, 4]);
        assert!(with_index.show_index_line());
    }

    #[test]
    fn test_hex_digit_codes() {
        assert_eq!(SlkFormat::from_code(0x431).unwrap().groups(), &[4, 3, 1]);
        assert_eq!(SlkFormat::from_code(0x55).unwrap().groups(), &[5, 5]);
        assert_eq!(SlkFormat::from_code(0x2134).unwrap().groups(), &[2, 1, 3, 4]);
        assert_eq!(SlkFormat::from_code(0x7).unwrap().groups(), &[7]);
        // A single digit above 9 is one wide group.
        assert_eq!(SlkFormat::from_code(0xb).unwrap().groups(), &[11]);
        assert_eq!(SlkFormat::from_code(0xa).unwrap().slot_count(), 10);
    }

    #[test]
    fn test_negative_code_selects_index_line() {
        let format = SlkFormat::from_code(-0x55).unwrap();
        assert_eq!(format.groups(), &[5, 5]);
        assert!(format.show_index_line());

        let classic = SlkFormat::from_code(-1).unwrap();
        assert_eq!(classic.groups(), &[4, 4]);
        assert!(classic.show_index_line());
    }

    #[test]
    fn test_zero_digit_is_invalid() {
        let err = SlkFormat::from_code(0x105).unwrap_err();
        assert!(matches!(err, Error::InvalidLayoutFormat { code: 0x105 }));
        assert!(SlkFormat::from_code(0x40).is_err());
    }

    #[test]
    fn test_too_many_slots_is_invalid() {
        // 15 + 15 + 15 = 45 slots.
        assert!(SlkFormat::from_code(0xFFF).is_err());
        // 15 + 15 = 30 is fine.
        assert_eq!(SlkFormat::from_code(0xFF).unwrap().slot_count(), 30);
    }

    #[test]
    fn test_extreme_codes_do_not_panic() {
        assert!(SlkFormat::from_code(i32::MIN).is_err());
        // 0x7FFFFFFF: eight digits, 7 + 15 * 7 = 112 slots.
        assert!(SlkFormat::from_code(i32::MAX).is_err());
    }

    #[test]
    fn test_index_line_variant_compares_unequal() {
        let plain = SlkFormat::THREE_TWO_THREE;
        assert_ne!(plain, plain.with_index_line(true));
        assert_eq!(plain.with_index_line(true).with_index_line(false), plain);
    }

    #[test]
    fn test_display() {
        assert_eq!(SlkFormat::THREE_TWO_THREE.to_string(), "3-2-3");
        assert_eq!(
            SlkFormat::FOUR_FOUR.with_index_line(true).to_string(),
            "4-4+index"
        );
        assert_eq!(SlkFormat::NONE.to_string(), "none");
        assert_eq!(SlkFormat::from_code(0xb).unwrap().to_string(), "11");
    }
}
