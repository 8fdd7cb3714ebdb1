//! Error types for termattr.

use std::fmt;
use std::io;

/// Result type alias for termattr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for termattr operations.
///
/// Every variant is recoverable: the operation that produced it leaves the
/// component it was called on unchanged.
#[derive(Debug)]
pub enum Error {
    /// I/O error from an event source or sink.
    Io(io::Error),
    /// Color pair index outside the table (valid range is 0..=255).
    InvalidPairIndex { index: u16 },
    /// Soft-label slot index outside the current layout.
    ///
    /// Slot indices are 1-based; `count` is the number of slots in the
    /// active layout.
    InvalidSlotIndex { index: usize, count: usize },
    /// Layout format code that does not describe a valid label arrangement
    /// (a zero group digit, or more total slots than the manager supports).
    InvalidLayoutFormat { code: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidPairIndex { index } => {
                write!(f, "color pair index {index} out of range (max 255)")
            }
            Self::InvalidSlotIndex { index, count } => {
                write!(f, "soft-label slot {index} out of range (layout has {count} slots)")
            }
            Self::InvalidLayoutFormat { code } => {
                write!(f, "invalid soft-label layout format code {code:#x}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPairIndex { index: 300 };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("max 255"));

        let err = Error::InvalidSlotIndex { index: 9, count: 8 };
        assert!(err.to_string().contains("slot 9"));
        assert!(err.to_string().contains("8 slots"));

        let err = Error::InvalidLayoutFormat { code: 0x105 };
        assert!(err.to_string().contains("0x105"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_non_io_errors_have_no_source() {
        let err = Error::InvalidPairIndex { index: 256 };
        assert!(std::error::Error::source(&err).is_none());
    }
}
