//! `termattr` - Terminal rendering-attribute toolkit
//!
//! Packed display attributes, color-pair management, 5-bit direct color,
//! cursor blink-state cycling, and soft-label key rows, plus the event
//! dispatch that drives them, independent of any concrete terminal
//! backend.

// Crate-level lint configuration
#![warn(unsafe_code)] // No unsafe expected in this crate
#![allow(clippy::cast_possible_truncation)] // Intentional narrowing in packed-field math
#![allow(clippy::cast_sign_loss)] // Intentional in channel blend math
#![allow(clippy::cast_lossless)] // as casts are fine for primitive widening
#![allow(clippy::module_name_repetitions)] // Allow SlkFormat, PairTable etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine
#![allow(clippy::semicolon_if_nothing_returned)] // Style preference
#![allow(clippy::needless_collect)] // Collect for assertions is clear

pub mod attr;
pub mod color;
pub mod cursor;
pub mod diag;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod pair;
pub mod region;
pub mod session;
pub mod slk;

// Re-export core types at crate root
pub use attr::{ColorSpec, NarrowAttr, StyleFlags, WideAttr};
pub use color::{DirectColor, PaletteColor, Rgb5};
pub use cursor::{BlinkSlot, CursorBlink, CursorShape};
pub use diag::{LogLevel, emit_log, set_log_callback};
pub use error::{Error, Result};
pub use pair::PairTable;

// Re-export input types
pub use event::{
    Event, KeyCode, KeyEvent, KeyModifiers, PointerButton, PointerEvent, PointerKind, ResizeEvent,
};

// Re-export session plumbing
pub use dispatch::{Directive, Dispatcher};
pub use region::{PairGrid, PointerAction, Region, RegionMap};
pub use session::{EventSource, Session, SessionConfig, SessionSink};
pub use slk::{Justify, SlkFormat, SlkManager, SlkSlot};
