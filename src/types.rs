//! Core types for termreact.
//!
//! These types define the foundation that everything builds on.
//! Leaf components fill regions with [`Cell`]s, the compositor copies them
//! into the backend, and the backend is the only place that interprets a
//! [`Style`].

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special values: r=-1 means "terminal default" (let terminal pick),
/// r=-2 marks an ANSI palette color with the index stored in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    // Standard colors
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Create an ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    /// Check if this is an ANSI palette color.
    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Get ANSI palette index (only valid if is_ansi() returns true).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::TERMINAL_DEFAULT
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::ITALIC`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKETHROUGH = 1 << 7;
    }
}

// =============================================================================
// Style - the opaque per-cell style tag
// =============================================================================

/// Per-cell style.
///
/// The engine only copies styles around; the backend decides what they mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Style {
    /// Terminal default colors, no attributes.
    pub const DEFAULT: Self = Self {
        fg: Rgba::TERMINAL_DEFAULT,
        bg: Rgba::TERMINAL_DEFAULT,
        attrs: Attr::NONE,
    };

    pub const fn fg(mut self, fg: Rgba) -> Self {
        self.fg = fg;
        self
    }

    pub const fn bg(mut self, bg: Rgba) -> Self {
        self.bg = bg;
        self
    }

    pub const fn attrs(mut self, attrs: Attr) -> Self {
        self.attrs = attrs;
        self
    }
}

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell.
///
/// This is what the renderer deals with. Nothing more complex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Character shown in the cell (`'\0'` marks the right half of a wide char).
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// Placeholder for the second column of a double-width character.
    pub const CONTINUATION: char = '\0';

    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// Check if this cell is the trailing half of a wide character.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.ch == Self::CONTINUATION
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::DEFAULT,
        }
    }
}

// =============================================================================
// Rect - absolute or parent-local placement
// =============================================================================

/// A rectangle in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Translate a rect given in this rect's local frame into the parent frame.
    ///
    /// Saturates at the edge of the coordinate space rather than wrapping.
    pub fn offset(&self, local: Rect) -> Rect {
        Rect {
            x: self.x.saturating_add(local.x),
            y: self.y.saturating_add(local.y),
            width: local.width,
            height: local.height,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
