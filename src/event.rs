//! Session input events.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
    }
}

/// A key code from the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Function key (F1-F24).
    F(u8),
    /// A character key (includes space).
    Char(char),
}

impl KeyCode {
    /// Check if this is a function key.
    #[must_use]
    pub const fn is_function_key(&self) -> bool {
        matches!(self, Self::F(_))
    }

    /// Function key number, if this is one.
    #[must_use]
    pub const fn function_key(&self) -> Option<u8> {
        match self {
            Self::F(n) => Some(*n),
            _ => None,
        }
    }
}

/// A key press with its modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Active modifier keys.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create an unmodified key event.
    #[must_use]
    pub const fn code(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create an unmodified character key event.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::code(KeyCode::Char(c))
    }

    /// Create an unmodified function key event.
    #[must_use]
    pub const fn f(n: u8) -> Self {
        Self::code(KeyCode::F(n))
    }
}

/// Pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
}

/// What the pointer did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Button pressed.
    Press,
    /// Button released.
    Release,
    /// Moved with no button change.
    Move,
}

/// A pointer event in cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerEvent {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// Button involved.
    pub button: PointerButton,
    /// Press, release, or move.
    pub kind: PointerKind,
}

impl PointerEvent {
    /// Create a button press event.
    #[must_use]
    pub const fn press(x: u16, y: u16, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button,
            kind: PointerKind::Press,
        }
    }

    /// Create a button release event.
    #[must_use]
    pub const fn release(x: u16, y: u16, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button,
            kind: PointerKind::Release,
        }
    }

    /// Check if this is a press.
    #[must_use]
    pub const fn is_press(&self) -> bool {
        matches!(self.kind, PointerKind::Press)
    }
}

/// Terminal resize notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResizeEvent {
    /// New width in columns.
    pub width: u16,
    /// New height in rows.
    pub height: u16,
}

impl ResizeEvent {
    /// Create a new resize event.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// An input event delivered to the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// Keyboard event.
    Key(KeyEvent),
    /// Pointer event.
    Pointer(PointerEvent),
    /// Terminal resize event.
    Resize(ResizeEvent),
    /// The input source is shutting the session down.
    Quit,
}

impl Event {
    /// Check if this is a key event.
    #[must_use]
    pub const fn is_key(&self) -> bool {
        matches!(self, Self::Key(_))
    }

    /// Check if this is a pointer event.
    #[must_use]
    pub const fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer(_))
    }

    /// Check if this is a resize event.
    #[must_use]
    pub const fn is_resize(&self) -> bool {
        matches!(self, Self::Resize(_))
    }

    /// Get the key event if this is one.
    #[must_use]
    pub const fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(e) => Some(e),
            _ => None,
        }
    }

    /// Get the pointer event if this is one.
    #[must_use]
    pub const fn pointer(&self) -> Option<&PointerEvent> {
        match self {
            Self::Pointer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(e: KeyEvent) -> Self {
        Self::Key(e)
    }
}

impl From<PointerEvent> for Event {
    fn from(e: PointerEvent) -> Self {
        Self::Pointer(e)
    }
}

impl From<ResizeEvent> for Event {
    fn from(e: ResizeEvent) -> Self {
        Self::Resize(e)
    }
}
