//! Input events delivered to components.
//!
//! Window plumbing turns OS events into [`InputEvent`]s. Components report
//! whether they consumed each event; a consumed event goes no further.

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Keyboard key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Space bar.
    Space,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Number key 0 (build hotbar).
    Num0,
    /// Number key 1.
    Num1,
    /// Number key 2.
    Num2,
    /// Number key 3.
    Num3,
    /// Number key 4.
    Num4,
    /// Number key 5.
    Num5,
    /// Number key 6.
    Num6,
    /// Number key 7.
    Num7,
    /// Number key 8.
    Num8,
    /// Number key 9.
    Num9,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Control key is held.
    pub ctrl: bool,
    /// Alt key is held.
    pub alt: bool,
}

/// One input event for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved.
    MouseMove {
        /// Cursor X.
        x: f32,
        /// Cursor Y.
        y: f32,
    },
    /// Mouse button pressed.
    MouseDown {
        /// Which button.
        button: MouseButton,
        /// Cursor X.
        x: f32,
        /// Cursor Y.
        y: f32,
    },
    /// Mouse button released.
    MouseUp {
        /// Which button.
        button: MouseButton,
        /// Cursor X.
        x: f32,
        /// Cursor Y.
        y: f32,
    },
    /// Scroll wheel.
    Scroll {
        /// Horizontal scroll delta.
        dx: f32,
        /// Vertical scroll delta.
        dy: f32,
    },
    /// Key pressed.
    KeyDown {
        /// The key.
        key: Key,
        /// Modifiers held at the time.
        modifiers: Modifiers,
    },
    /// Key released.
    KeyUp {
        /// The key.
        key: Key,
        /// Modifiers held at the time.
        modifiers: Modifiers,
    },
    /// Text entered.
    Text(char),
}

impl InputEvent {
    /// Cursor position carried by pointer events.
    #[must_use]
    pub const fn position(&self) -> Option<(f32, f32)> {
        match *self {
            Self::MouseMove { x, y } | Self::MouseDown { x, y, .. } | Self::MouseUp { x, y, .. } => {
                Some((x, y))
            }
            _ => None,
        }
    }

    /// Left-button press at a point.
    #[must_use]
    pub const fn click(x: f32, y: f32) -> Self {
        Self::MouseDown {
            button: MouseButton::Left,
            x,
            y,
        }
    }

    /// Left-button release at a point.
    #[must_use]
    pub const fn release(x: f32, y: f32) -> Self {
        Self::MouseUp {
            button: MouseButton::Left,
            x,
            y,
        }
    }
}
