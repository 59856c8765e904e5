//! Region - the grid a leaf component draws into.
//!
//! Regions are allocated once per leaf draw and owned by the retained node
//! afterwards. Coordinates are local to the region, `(0, 0)` is its
//! top-left corner.

use unicode_width::UnicodeWidthChar;

use crate::types::{Cell, Style};

/// A `width × height` grid of cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Region {
    /// Create a region filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Fill `len` cells of row `y` starting at `x` with one character.
    pub fn fill_row(&mut self, x: u16, y: u16, len: u16, ch: char, style: Style) {
        for col in x..x.saturating_add(len).min(self.width) {
            self.set(col, y, Cell::new(ch, style));
        }
    }

    /// Draw text at a position, truncated at the right edge.
    ///
    /// Returns the number of cells used (handles wide characters).
    pub fn draw_text(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        if y >= self.height {
            return 0;
        }

        let mut col = x;
        for ch in text.chars() {
            let char_width = ch.width().unwrap_or(0) as u16;
            if char_width == 0 {
                continue; // Skip zero-width characters
            }
            // Never split a wide character at the edge
            if col as u32 + char_width as u32 > self.width as u32 {
                break;
            }

            self.set(col, y, Cell::new(ch, style));
            if char_width == 2 {
                self.set(col + 1, y, Cell::new(Cell::CONTINUATION, style));
            }
            col += char_width;
        }

        col - x
    }

    /// The characters of row `y`, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.is_continuation())
            .map(|cell| cell.ch)
            .collect()
    }
}
