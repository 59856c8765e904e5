//! Crossterm terminal backend.
//!
//! Owns the terminal for its lifetime: raw mode and the alternate screen
//! are entered in [`CrosstermBackend::new`] and undone by
//! [`CrosstermBackend::restore`] (or, best effort, on drop).

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use tracing::debug;

use super::Backend;
use super::buffer::FrameBuffer;
use super::diff::DiffRenderer;
use crate::error::{Error, Result};
use crate::pipeline::ScreenConfig;
use crate::types::Cell;

/// A backend drawing to stdout through crossterm.
pub struct CrosstermBackend {
    out: Stdout,
    buffer: FrameBuffer,
    renderer: DiffRenderer,
    cursor: (u16, u16),
    config: ScreenConfig,
    modes: TerminalModes,
    restored: bool,
}

impl CrosstermBackend {
    /// Take over the terminal as configured.
    ///
    /// If a step fails, the steps already taken are undone before the
    /// error is returned.
    pub fn new(config: ScreenConfig) -> Result<Self> {
        let (width, height) = terminal::size().map_err(Error::BackendInitFailure)?;
        let mut out = io::stdout();

        let mut modes = TerminalModes::default();
        if let Err(err) = modes.enter(&mut out, &config, terminal::enable_raw_mode) {
            if let Err(undo) = modes.leave(&mut out, terminal::disable_raw_mode) {
                debug!(error = %undo, "terminal rollback incomplete");
            }
            return Err(Error::BackendInitFailure(err));
        }
        debug!(width, height, ?config, "terminal backend initialized");

        Ok(Self {
            out,
            buffer: FrameBuffer::new(width, height),
            renderer: DiffRenderer::new(),
            cursor: (0, 0),
            config,
            modes,
            restored: false,
        })
    }

    /// Hand the terminal back in the state it was found.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        self.modes.leave(&mut self.out, terminal::disable_raw_mode)
    }
}

/// Terminal modes currently switched on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TerminalModes {
    raw: bool,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl TerminalModes {
    /// Switch on what `config` asks for, recording each step as it lands.
    fn enter<W: Write>(
        &mut self,
        out: &mut W,
        config: &ScreenConfig,
        enable_raw: impl FnOnce() -> io::Result<()>,
    ) -> io::Result<()> {
        if config.raw_mode {
            enable_raw()?;
            self.raw = true;
        }
        if config.alternate_screen {
            execute!(out, EnterAlternateScreen, Clear(ClearType::All))?;
            self.alternate_screen = true;
        }
        if !config.show_cursor {
            execute!(out, Hide)?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    /// Undo every recorded mode in reverse order.
    ///
    /// Every step is attempted; the first failure is returned.
    fn leave<W: Write>(
        &mut self,
        out: &mut W,
        disable_raw: impl FnOnce() -> io::Result<()>,
    ) -> io::Result<()> {
        let modes = std::mem::take(self);
        let mut outcome = execute!(out, SetAttribute(Attribute::Reset), Show);
        if modes.alternate_screen {
            outcome = outcome.and(execute!(out, LeaveAlternateScreen));
        }
        if modes.raw {
            outcome = outcome.and(disable_raw());
        }
        outcome
    }
}

impl Backend for CrosstermBackend {
    fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((self.buffer.width(), self.buffer.height()))
    }

    fn clear(&mut self) {
        let (width, height) = self.size();
        if (width, height) != (self.buffer.width(), self.buffer.height()) {
            self.buffer.resize(width, height);
            // Terminal contents are unknown after a resize
            self.renderer.invalidate();
        } else {
            self.buffer.clear();
        }
    }

    fn set_cell(&mut self, x: u16, y: u16, cell: &Cell) {
        self.buffer.set(x, y, *cell);
    }

    fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = (x, y);
    }

    fn flush(&mut self) -> io::Result<()> {
        self.renderer.render(&self.buffer, &mut self.out)?;
        let (x, y) = self.cursor;
        if self.config.show_cursor {
            queue!(self.out, MoveTo(x, y), Show)?;
        }
        self.out.flush()
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        // Best effort; the terminal may already be gone
        let _ = self.restore();
    }
}
