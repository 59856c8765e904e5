//! FrameBuffer - the absolute cell grid a backend shows.
//!
//! Uses flat `Vec<Cell>` storage with row-major indexing. The compositor
//! writes into it through [`Backend::set_cell`](super::Backend::set_cell);
//! the diff renderer compares consecutive frames of it.

use crate::types::Cell;

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
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

    /// Overwrite a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.resize(width as usize * height as usize, Cell::default());
        self.clear();
    }

    /// The characters of row `y`, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.is_continuation())
            .map(|cell| cell.ch)
            .collect()
    }

    /// All rows, right-trimmed. Handy for comparing whole screens in tests.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| self.row_text(y).trim_end().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn test_resize_clears() {
        let mut buffer = FrameBuffer::new(4, 2);
        buffer.set(1, 1, Cell::new('x', Style::DEFAULT));
        buffer.resize(3, 3);
        assert_eq!(buffer.width(), 3);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.lines(), vec!["", "", ""]);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut buffer = FrameBuffer::new(2, 2);
        assert!(!buffer.set(2, 0, Cell::new('x', Style::DEFAULT)));
        assert!(buffer.set(1, 0, Cell::new('x', Style::DEFAULT)));
        assert_eq!(buffer.row_text(0), " x");
    }
}
