//! Cursor shapes and the two-phase blink state.
//!
//! A session's cursor alternates between two shape slots when blinking is
//! active: the primary shape and the alternate shape. Setting the alternate
//! to [`CursorShape::Invisible`] gives an ordinary non-blinking cursor.

/// Cursor shape.
///
/// The nine shapes form a fixed cycle; [`next`](Self::next) steps through
/// them in order and wraps from the last back to the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// No cursor drawn.
    Invisible,
    /// Thin line at the baseline (_).
    #[default]
    Underscore,
    /// Solid block (█).
    Block,
    /// Hollow box around the cell.
    OutlineBox,
    /// Vertical bar at the left edge (|).
    Caret,
    /// Lower half of the cell filled.
    HalfBlock,
    /// Small filled block centered in the cell.
    CenteredBlock,
    /// Crosshair.
    Cross,
    /// Thick hollow box.
    HeavyBox,
}

impl CursorShape {
    /// Number of shapes in the cycle.
    pub const COUNT: usize = 9;

    /// Every shape, in cycle order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Invisible,
        Self::Underscore,
        Self::Block,
        Self::OutlineBox,
        Self::Caret,
        Self::HalfBlock,
        Self::CenteredBlock,
        Self::Cross,
        Self::HeavyBox,
    ];

    /// The shape's position in the cycle.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Shape for a cycle position.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Invisible),
            1 => Some(Self::Underscore),
            2 => Some(Self::Block),
            3 => Some(Self::OutlineBox),
            4 => Some(Self::Caret),
            5 => Some(Self::HalfBlock),
            6 => Some(Self::CenteredBlock),
            7 => Some(Self::Cross),
            8 => Some(Self::HeavyBox),
            _ => None,
        }
    }

    /// The next shape in the cycle, wrapping at the end.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Invisible => Self::Underscore,
            Self::Underscore => Self::Block,
            Self::Block => Self::OutlineBox,
            Self::OutlineBox => Self::Caret,
            Self::Caret => Self::HalfBlock,
            Self::HalfBlock => Self::CenteredBlock,
            Self::CenteredBlock => Self::Cross,
            Self::Cross => Self::HeavyBox,
            Self::HeavyBox => Self::Invisible,
        }
    }

    /// Display name, as shown by drivers that label the cursor states.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Invisible => "Invisible",
            Self::Underscore => "Underscore",
            Self::Block => "Block",
            Self::OutlineBox => "Outline box",
            Self::Caret => "Caret",
            Self::HalfBlock => "Half-block",
            Self::CenteredBlock => "Central block",
            Self::Cross => "Cross",
            Self::HeavyBox => "Heavy box",
        }
    }
}

/// Selector for one of the two blink-phase shape slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlinkSlot {
    /// Shape shown in the first blink phase.
    Primary,
    /// Shape shown in the second blink phase.
    Alternate,
}

/// The cursor's two blink-phase shapes.
///
/// Defaults to an underscore that blinks off
/// (`(Underscore, Invisible)`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CursorBlink {
    primary: CursorShape,
    alternate: CursorShape,
}

impl CursorBlink {
    /// Create the default blink state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primary: CursorShape::Underscore,
            alternate: CursorShape::Invisible,
        }
    }

    /// Both shapes, primary first.
    #[must_use]
    pub const fn shapes(&self) -> (CursorShape, CursorShape) {
        (self.primary, self.alternate)
    }

    /// The shape in one slot.
    #[must_use]
    pub const fn shape(&self, slot: BlinkSlot) -> CursorShape {
        match slot {
            BlinkSlot::Primary => self.primary,
            BlinkSlot::Alternate => self.alternate,
        }
    }

    /// Set one slot to a specific shape.
    pub fn set(&mut self, slot: BlinkSlot, shape: CursorShape) {
        match slot {
            BlinkSlot::Primary => self.primary = shape,
            BlinkSlot::Alternate => self.alternate = shape,
        }
    }

    /// Advance one slot to the next shape in the cycle; the other slot is
    /// untouched. Returns the slot's new shape.
    pub fn cycle(&mut self, slot: BlinkSlot) -> CursorShape {
        let next = self.shape(slot).next();
        self.set(slot, next);
        next
    }

    /// Pack both shapes into the classic `(primary << 8) | alternate`
    /// selector code.
    #[must_use]
    pub const fn to_code(&self) -> u16 {
        ((self.primary.code() as u16) << 8) | self.alternate.code() as u16
    }

    /// Unpack a selector code. Returns `None` if either byte is not a
    /// valid shape.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        let primary = CursorShape::from_code((code >> 8) as u8);
        let alternate = CursorShape::from_code(code as u8);
        match (primary, alternate) {
            (Some(primary), Some(alternate)) => Some(Self { primary, alternate }),
            _ => None,
        }
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}
