//! Renderer - the surfaces a screen paints onto.
//!
//! - [`Backend`]: the cell sink the compositor writes to
//! - [`TestBackend`]: in-memory surface for tests
//! - [`CrosstermBackend`]: a real terminal, flushed through [`DiffRenderer`]

mod buffer;
mod diff;
mod output;
mod terminal;
mod test_backend;

use std::io;

use crate::types::Cell;

pub use buffer::FrameBuffer;
pub use diff::DiffRenderer;
pub use output::{OutputBuffer, StatefulCellRenderer, to_color};
pub use terminal::CrosstermBackend;
pub use test_backend::TestBackend;

/// A cell surface.
///
/// Frames are produced as `clear`, any number of `set_cell`, `set_cursor`,
/// then `flush`. Writes outside `size()` are ignored.
pub trait Backend: Send {
    /// Current surface size as `(width, height)`.
    fn size(&self) -> (u16, u16);

    /// Start a new frame: blank every cell, picking up size changes.
    fn clear(&mut self);

    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell);

    fn set_cursor(&mut self, x: u16, y: u16);

    /// Make the frame visible.
    fn flush(&mut self) -> io::Result<()>;
}
