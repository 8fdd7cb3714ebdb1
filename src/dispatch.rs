//! Event dispatch: input events to session state transitions.
//!
//! [`Dispatcher`] is pure routing configuration — key bindings, the
//! pointer-region table, and the label set to restore after a layout
//! switch. All mutable state lives in the [`Session`] each call receives,
//! so one dispatcher can serve any number of sessions in turn.
//!
//! Component errors raised while handling an event (an out-of-table pair
//! hit, a label that is not a layout code) are logged through
//! [`diag`](crate::diag) and swallowed; only the designated quit signals
//! end the session.

use crate::color::PaletteColor;
use crate::diag::{LogLevel, emit_log};
use crate::event::{Event, KeyCode, KeyEvent, PointerEvent};
use crate::region::{PointerAction, RegionMap};
use crate::session::{Session, SessionSink};
use crate::slk::{Justify, SlkFormat};
use std::ops::RangeInclusive;

/// What the session loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Directive {
    /// Keep polling.
    Continue,
    /// End the session loop.
    Quit,
}

/// Routing configuration for session events.
///
/// Defaults bind F1 and Escape to quit, F2 to the blink toggle, and
/// F3..=F11 to layout switching. A layout-switch key re-reads its own
/// slot's label text as a hex layout code, re-initializes the soft-label
/// row with it, restores the configured label set, and flushes.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    regions: RegionMap,
    labels: Vec<String>,
    label_justify: Justify,
    quit_keys: Vec<KeyCode>,
    blink_key: KeyCode,
    format_keys: RangeInclusive<u8>,
}

impl Dispatcher {
    /// Create a dispatcher with the default key bindings and the given
    /// pointer-region table.
    #[must_use]
    pub fn new(regions: RegionMap) -> Self {
        Self {
            regions,
            labels: Vec::new(),
            label_justify: Justify::Center,
            quit_keys: vec![KeyCode::F(1), KeyCode::Esc],
            blink_key: KeyCode::F(2),
            format_keys: 3..=11,
        }
    }

    /// Set the labels applied (in slot order, from slot 1) after every
    /// layout switch.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I, justify: Justify) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self.label_justify = justify;
        self
    }

    /// Replace the quit bindings.
    #[must_use]
    pub fn with_quit_keys(mut self, keys: Vec<KeyCode>) -> Self {
        self.quit_keys = keys;
        self
    }

    /// Replace the function-key range bound to layout switching.
    #[must_use]
    pub fn with_format_keys(mut self, keys: RangeInclusive<u8>) -> Self {
        self.format_keys = keys;
        self
    }

    /// Route one event.
    pub fn dispatch<S: SessionSink + ?Sized>(
        &self,
        session: &mut Session,
        sink: &mut S,
        event: Event,
    ) -> Directive {
        match event {
            Event::Quit => Directive::Quit,
            Event::Resize(resize) => {
                // Layout is the renderer's problem; no session state moves.
                sink.relayout(resize.width, resize.height);
                Directive::Continue
            }
            Event::Key(key) => self.dispatch_key(session, sink, key),
            Event::Pointer(pointer) => {
                self.dispatch_pointer(session, pointer);
                Directive::Continue
            }
        }
    }

    /// Apply the configured labels to the current layout and flush.
    ///
    /// Called after every layout switch; also useful at session start.
    pub fn apply_labels<S: SessionSink + ?Sized>(&self, session: &mut Session, sink: &mut S) {
        let count = session.slk().slot_count();
        for (i, text) in self.labels.iter().enumerate().take(count) {
            if let Err(e) = session.slk_mut().set_label(i + 1, text, self.label_justify) {
                emit_log(LogLevel::Warn, &format!("label restore failed: {e}"));
            }
        }
        session.slk().flush(sink);
    }

    fn dispatch_key<S: SessionSink + ?Sized>(
        &self,
        session: &mut Session,
        sink: &mut S,
        key: KeyEvent,
    ) -> Directive {
        if self.quit_keys.contains(&key.code) {
            return Directive::Quit;
        }
        if key.code == self.blink_key {
            session.set_blink_enabled(!session.blink_enabled());
            return Directive::Continue;
        }
        if let Some(n) = key.code.function_key() {
            if self.format_keys.contains(&n) {
                self.switch_format(session, sink, n);
            }
        }
        Directive::Continue
    }

    /// Switch the soft-label layout to the code written in slot `n`'s
    /// current label text.
    fn switch_format<S: SessionSink + ?Sized>(&self, session: &mut Session, sink: &mut S, n: u8) {
        let code = match session.slk().label(usize::from(n)) {
            Ok(text) => match i32::from_str_radix(text.trim(), 16) {
                Ok(code) => code,
                Err(_) => {
                    emit_log(
                        LogLevel::Debug,
                        &format!("slot {n} label is not a layout code"),
                    );
                    return;
                }
            },
            Err(e) => {
                emit_log(LogLevel::Debug, &format!("layout switch ignored: {e}"));
                return;
            }
        };

        let keep_index = session.slk().format().show_index_line();
        let format = match SlkFormat::from_code(code) {
            Ok(format) => format,
            Err(e) => {
                emit_log(LogLevel::Warn, &format!("layout switch ignored: {e}"));
                return;
            }
        };
        let format = format.with_index_line(format.show_index_line() || keep_index);

        session.slk_mut().init_layout(format);
        self.apply_labels(session, sink);
    }

    fn dispatch_pointer(&self, session: &mut Session, pointer: PointerEvent) {
        if !pointer.is_press() {
            return;
        }
        match self.regions.hit(pointer.x, pointer.y) {
            Some(PointerAction::RedefinePair(grid)) => {
                let index = grid.pair_at(pointer.x, pointer.y);
                // Grid convention: pair N shows palette color N on black.
                let fg = PaletteColor::new((index & 0xFF) as u8);
                if let Err(e) = session.pairs_mut().define(index, fg, PaletteColor::BLACK) {
                    emit_log(LogLevel::Debug, &format!("pointer hit ignored: {e}"));
                }
            }
            Some(PointerAction::CycleCursor(slot)) => {
                session.cursor_mut().cycle(*slot);
            }
            None => {}
        }
    }
}
