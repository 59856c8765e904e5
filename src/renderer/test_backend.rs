//! In-memory backend.

use std::io;

use super::Backend;
use super::buffer::FrameBuffer;
use crate::state::Cursor;
use crate::types::Cell;

/// A backend that keeps the last painted frame in memory.
#[derive(Debug, Clone)]
pub struct TestBackend {
    buffer: FrameBuffer,
    cursor: Cursor,
    flushes: usize,
}

impl TestBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: FrameBuffer::new(width, height),
            cursor: Cursor::default(),
            flushes: 0,
        }
    }

    /// Change the reported size. Content is cleared.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.buffer.resize(width, height);
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn cell(&self, x: u16, y: u16) -> Option<&Cell> {
        self.buffer.get(x, y)
    }

    pub fn row_text(&self, y: u16) -> String {
        self.buffer.row_text(y)
    }

    /// Last cursor position handed over by the compositor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of completed frames.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Backend for TestBackend {
    fn size(&self) -> (u16, u16) {
        (self.buffer.width(), self.buffer.height())
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell) {
        self.buffer.set(x, y, *cell);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Cursor::new(x, y);
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn test_frame_cycle() {
        let mut backend = TestBackend::new(4, 1);
        backend.set_cell(0, 0, &Cell::new('o', Style::DEFAULT));
        backend.set_cell(9, 0, &Cell::new('x', Style::DEFAULT));
        backend.set_cursor(2, 0);
        backend.flush().unwrap();

        assert_eq!(backend.row_text(0), "o   ");
        assert_eq!(backend.cursor(), Cursor::new(2, 0));
        assert_eq!(backend.flushes(), 1);

        backend.clear();
        assert_eq!(backend.row_text(0), "    ");
    }
}
