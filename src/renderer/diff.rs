//! Differential renderer.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed.
//!
//! # Algorithm
//!
//! 1. Collect the cells that differ from the previous frame (all of them if
//!    there is none, or the size changed)
//! 2. If nothing changed, write nothing at all
//! 3. Otherwise wrap the changed cells in a synchronized update and render
//!    them with the StatefulCellRenderer
//! 4. Write the output buffer to the terminal in one go
//! 5. Store the current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::queue;
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};

use super::buffer::FrameBuffer;
use super::output::{OutputBuffer, StatefulCellRenderer};

/// Keeps the previous frame so only changed cells are written.
#[derive(Debug, Default)]
pub struct DiffRenderer {
    output: OutputBuffer,
    cell_renderer: StatefulCellRenderer,
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            cell_renderer: StatefulCellRenderer::new(),
            previous: None,
        }
    }

    /// Render a frame to `out`, writing only changed cells.
    ///
    /// Returns true if any cells were changed.
    pub fn render<W: Write>(&mut self, buffer: &FrameBuffer, out: &mut W) -> io::Result<bool> {
        let comparable = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        let mut changed = Vec::new();
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                let same = comparable
                    .and_then(|prev| prev.get(x, y))
                    .is_some_and(|prev_cell| prev_cell == cell);
                if !same {
                    changed.push((x, y, *cell));
                }
            }
        }

        if changed.is_empty() {
            return Ok(false);
        }

        self.output.clear();
        self.cell_renderer.reset();
        queue!(self.output, BeginSynchronizedUpdate)?;
        for (x, y, cell) in &changed {
            self.cell_renderer.render_cell(&mut self.output, *x, *y, cell)?;
        }
        queue!(self.output, EndSynchronizedUpdate)?;
        self.output.flush_to(out)?;

        self.previous = Some(buffer.clone());
        Ok(true)
    }

    /// Invalidate the previous frame.
    ///
    /// Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if we have a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================
