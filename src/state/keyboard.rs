//! Keyboard Module - Key event types
//!
//! The events that the surface bubbles through the retained tree.
//! Does NOT own stdin (see the input module for crossterm conversion).
//!
//! A key event is an opaque `(code, produced char)` pair: [`KeyCode`] names
//! the key, [`KeyEvent::rune`] returns the character it typed, if any.
//!
//! # Example
//!
//! ```ignore
//! use termreact::state::{KeyCode, KeyEvent};
//!
//! let event = KeyEvent::char('a');
//! assert_eq!(event.rune(), Some('a'));
//!
//! let arrow = KeyEvent::new(KeyCode::Up);
//! assert!(arrow.code.is_arrow());
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Which key was pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Esc,
    Enter,
    Backspace,
    Tab,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Generic character key
    Char(char),
    /// Anything the backend could not name
    Null,
}

impl KeyCode {
    /// Check if this is one of the four arrow keys.
    pub fn is_arrow(&self) -> bool {
        matches!(self, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right)
    }

    /// Cursor delta for an arrow key.
    pub(crate) fn arrow_delta(&self) -> Option<(i32, i32)> {
        match self {
            KeyCode::Up => Some((0, -1)),
            KeyCode::Down => Some((0, 1)),
            KeyCode::Left => Some((-1, 0)),
            KeyCode::Right => Some((1, 0)),
            _ => None,
        }
    }
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyEvent {
    /// Create a simple key press event
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press for a typed character
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// The character this key produced, if any.
    pub fn rune(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) => Some(c),
            KeyCode::Tab => Some('\t'),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
