//! Output buffering and stateful cell rendering.
//!
//! - Batch every write of a frame into one buffer
//! - Track terminal state to avoid redundant escape codes
//! - Only emit changes (colors, attributes, cursor position)

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};

use crate::types::{Attr, Cell, Rgba};

// =============================================================================
// OutputBuffer
// =============================================================================

/// Accumulates a frame's output so it reaches the terminal in one write.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::with_capacity(16384)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Write everything accumulated to `writer` and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        writer.flush()?;
        self.data.clear();
        Ok(())
    }

    /// The accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(()) // Buffering only - real flush via flush_to
    }
}

// =============================================================================
// StatefulCellRenderer
// =============================================================================

/// Renders cells while tracking terminal state to minimize output.
///
/// Tracks the last cursor position, colors and attributes, and only queues
/// crossterm commands for what changed.
#[derive(Debug)]
pub struct StatefulCellRenderer {
    last_x: i32,
    last_y: i32,
    last_fg: Option<Rgba>,
    last_bg: Option<Rgba>,
    last_attrs: Attr,
}

impl StatefulCellRenderer {
    pub fn new() -> Self {
        Self {
            last_x: -1,
            last_y: -1,
            last_fg: None,
            last_bg: None,
            last_attrs: Attr::NONE,
        }
    }

    /// Reset all tracked state. Call at the start of each frame.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Queue the commands that draw `cell` at `(x, y)`.
    pub fn render_cell<W: Write>(
        &mut self,
        out: &mut W,
        x: u16,
        y: u16,
        cell: &Cell,
    ) -> io::Result<()> {
        // Wide character placeholders are covered by the glyph to their left
        if cell.is_continuation() {
            self.last_x = x as i32;
            self.last_y = y as i32;
            return Ok(());
        }

        if y as i32 != self.last_y || x as i32 != self.last_x + 1 {
            queue!(out, MoveTo(x, y))?;
        }

        let style = cell.style;
        if style.attrs != self.last_attrs {
            queue!(out, SetAttribute(Attribute::Reset))?;
            for attribute in attributes(style.attrs) {
                queue!(out, SetAttribute(attribute))?;
            }
            // Reset dropped the colors too
            self.last_fg = None;
            self.last_bg = None;
            self.last_attrs = style.attrs;
        }

        if self.last_fg != Some(style.fg) {
            queue!(out, SetForegroundColor(to_color(style.fg)))?;
            self.last_fg = Some(style.fg);
        }
        if self.last_bg != Some(style.bg) {
            queue!(out, SetBackgroundColor(to_color(style.bg)))?;
            self.last_bg = Some(style.bg);
        }

        queue!(out, Print(cell.ch))?;

        self.last_x = x as i32;
        self.last_y = y as i32;
        Ok(())
    }
}

impl Default for StatefulCellRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a color to its crossterm equivalent.
pub fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

fn attributes(attrs: Attr) -> impl Iterator<Item = Attribute> {
    const TABLE: [(Attr, Attribute); 8] = [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::BLINK, Attribute::SlowBlink),
        (Attr::INVERSE, Attribute::Reverse),
        (Attr::HIDDEN, Attribute::Hidden),
        (Attr::STRIKETHROUGH, Attribute::CrossedOut),
    ];
    TABLE
        .into_iter()
        .filter(move |(flag, _)| attrs.contains(*flag))
        .map(|(_, attribute)| attribute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn test_color_mapping() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(to_color(Rgba::ansi(5)), Color::AnsiValue(5));
        assert_eq!(to_color(Rgba::RED), Color::Rgb { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_attributes() {
        let list: Vec<_> = attributes(Attr::BOLD | Attr::UNDERLINE).collect();
        assert_eq!(list, vec![Attribute::Bold, Attribute::Underlined]);
        assert_eq!(attributes(Attr::NONE).count(), 0);
    }

    #[test]
    fn test_sequential_cells_skip_move() {
        let mut renderer = StatefulCellRenderer::new();
        let mut out = OutputBuffer::new();
        renderer.render_cell(&mut out, 0, 0, &Cell::new('a', Style::DEFAULT)).unwrap();
        let after_first = out.len();
        renderer.render_cell(&mut out, 1, 0, &Cell::new('b', Style::DEFAULT)).unwrap();

        // Same style, adjacent column: only the glyph itself
        assert_eq!(out.len(), after_first + 1);
        assert!(out.as_str().ends_with("ab"));
    }

    #[test]
    fn test_continuation_is_silent() {
        let mut renderer = StatefulCellRenderer::new();
        let mut out = OutputBuffer::new();
        renderer
            .render_cell(&mut out, 3, 0, &Cell::new(Cell::CONTINUATION, Style::DEFAULT))
            .unwrap();
        assert!(out.is_empty());
    }
}
