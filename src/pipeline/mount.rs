//! Mount API - application lifecycle and event loop.
//!
//! This module provides the entry point for running a component tree on the
//! real terminal.
//!
//! # Example
//!
//! ```ignore
//! use termreact::pipeline::mount;
//! use termreact::{ScreenConfig, label};
//!
//! // Mount the application
//! let handle = mount::mount(label("hello"), ScreenConfig::default())?;
//!
//! // Option 1: Run blocking event loop (Escape quits)
//! mount::run(&handle)?;
//!
//! // Option 2: Tick manually in your own loop
//! while mount::tick(&handle)? {
//!     // Your logic here
//! }
//!
//! // Clean up
//! handle.unmount()?;
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use super::config::ScreenConfig;
use super::screen::Screen;
use crate::engine::Element;
use crate::error::{Error, Result};
use crate::renderer::CrosstermBackend;
use crate::state::{InputEvent, poll_event};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
///
/// Holds:
/// - The screen (shareable with other threads)
/// - The running flag (cleared by the quit callback or `stop`)
pub struct MountHandle {
    screen: Arc<Screen<CrosstermBackend>>,
    running: Arc<AtomicBool>,
    config: ScreenConfig,
}

impl MountHandle {
    pub fn screen(&self) -> &Arc<Screen<CrosstermBackend>> {
        &self.screen
    }

    /// Dismount the tree and restore the terminal.
    ///
    /// The terminal is restored even if a dismount hook fails.
    pub fn unmount(self) -> Result<()> {
        self.running.store(false, Ordering::SeqCst);
        let dismounted = self.screen.teardown();
        self.screen
            .with_backend_mut(CrosstermBackend::restore)
            .map_err(Error::Backend)?;
        debug!("unmounted");
        dismounted
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    /// Use this to trigger graceful shutdown from custom code.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount `root` on the terminal.
///
/// This sets up:
/// 1. The crossterm backend (raw mode, alternate screen)
/// 2. A screen with `root` as its tree
/// 3. A quit callback that stops the event loop on Escape
///
/// Nothing is drawn until the first [`tick`].
pub fn mount(root: Element, config: ScreenConfig) -> Result<MountHandle> {
    let backend = CrosstermBackend::new(config.clone())?;
    let screen = Arc::new(Screen::new(backend));
    let running = Arc::new(AtomicBool::new(true));

    let quit_flag = running.clone();
    screen.init(root, move || {
        quit_flag.store(false, Ordering::SeqCst);
        Ok(())
    })?;

    debug!(root = ?screen.with_tree(|tree| tree.root()), "mounted");
    Ok(MountHandle {
        screen,
        running,
        config,
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) -> Result<()> {
    handle.unmount()
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run one frame: draw, then wait up to `poll_interval` for one event.
///
/// # Returns
///
/// * `Ok(true)` - Continue running
/// * `Ok(false)` - Stop requested (Escape reached the quit callback, or `handle.stop()`)
/// * `Err(e)` - A hook failed or terminal I/O failed
pub fn tick(handle: &MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    handle.screen.draw()?;

    match poll_event(handle.config.poll_interval).map_err(Error::Backend)? {
        Some(InputEvent::Key(event)) => handle.screen.handle_key(&event)?,
        // The next draw picks up the new size
        Some(InputEvent::Resize(width, height)) => debug!(width, height, "terminal resized"),
        Some(InputEvent::None) | None => {}
    }

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
pub fn run(handle: &MountHandle) -> Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}
