//! Screen - the drawable surface and its input entry point.
//!
//! A [`Screen`] owns the retained tree, the owner grid, the logical cursor
//! and a [`Backend`]. All of it sits behind one mutex: `draw` and
//! `handle_key` each hold the lock for their whole pass, so frames and key
//! dispatch never interleave.
//!
//! # Example
//!
//! ```ignore
//! use termreact::{Screen, TestBackend, label};
//!
//! let screen = Screen::new(TestBackend::new(80, 24));
//! screen.init(label("hello"), || Ok(()))?;
//! screen.draw()?;
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use super::paint::compose;
use crate::engine::{Element, NodeId, Propagation, Tree, build, dismount_all, reconcile};
use crate::error::{Error, HookResult, Result};
use crate::renderer::Backend;
use crate::state::{Cursor, KeyCode, KeyEvent, OwnerGrid};
use crate::types::Rect;

/// Invoked when Escape falls through every handler.
pub type QuitCallback = Box<dyn FnMut() -> HookResult<()> + Send>;

/// Key under which the root element is retained.
const ROOT_KEY: &str = "root";

/// Which bubbling pass an event is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    First,
    Redispatch,
}

struct ScreenState<B> {
    backend: B,
    pending_root: Option<Element>,
    tree: Tree,
    owners: OwnerGrid,
    cursor: Cursor,
    quit: Option<QuitCallback>,
}

/// A drawable surface bound to a backend.
pub struct Screen<B: Backend> {
    state: Mutex<ScreenState<B>>,
}

impl<B: Backend> Screen<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: Mutex::new(ScreenState {
                backend,
                pending_root: None,
                tree: Tree::new(),
                owners: OwnerGrid::default(),
                cursor: Cursor::default(),
                quit: None,
            }),
        }
    }

    // A panicking hook leaves the tree partial, which callers must already
    // tolerate after any failed pass.
    fn lock(&self) -> MutexGuard<'_, ScreenState<B>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install the root element and the quit callback.
    ///
    /// The root is built on the next [`draw`](Self::draw). A tree left over
    /// from an earlier root is dismounted first.
    pub fn init<F>(&self, root: Element, quit: F) -> Result<()>
    where
        F: FnMut() -> HookResult<()> + Send + 'static,
    {
        let mut state = self.lock();
        state.pending_root = Some(root);
        state.quit = Some(Box::new(quit));
        state.teardown()
    }

    /// Current backend size as `(width, height)`.
    pub fn size(&self) -> (u16, u16) {
        self.lock().backend.size()
    }

    pub fn cursor(&self) -> Cursor {
        self.lock().cursor
    }

    /// Move the cursor, clamped to the surface.
    pub fn set_cursor(&self, x: i32, y: i32) {
        let mut state = self.lock();
        let (width, height) = state.backend.size();
        state.cursor = Cursor::clamped(x, y, width, height);
    }

    /// Render one frame.
    ///
    /// The first call builds the tree from the root given to
    /// [`init`](Self::init); later calls reconcile it at the current size.
    pub fn draw(&self) -> Result<()> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let (width, height) = state.backend.size();
        let rect = Rect::new(0, 0, width, height);

        match state.tree.root() {
            Some(root) => reconcile(&mut state.tree, root, rect)?,
            None => {
                let element = state.pending_root.clone().ok_or(Error::NotInitialized)?;
                let root = build(&mut state.tree, element, ROOT_KEY.to_string(), None, rect)?;
                state.tree.set_root(Some(root));
                state.pending_root = None;
                debug!(%root, nodes = state.tree.len(), "initial build");
            }
        }

        state.cursor = compose(&state.tree, &mut state.backend, &mut state.owners, state.cursor)?;
        Ok(())
    }

    /// Route a key event from the cell under the cursor up to the root.
    ///
    /// Only presses are dispatched.
    pub fn handle_key(&self, event: &KeyEvent) -> Result<()> {
        if !event.is_press() {
            return Ok(());
        }
        self.lock().dispatch(event, Pass::First)
    }

    /// Dismount the whole tree.
    pub fn teardown(&self) -> Result<()> {
        self.lock().teardown()
    }

    /// Node that painted the cell at `(x, y)` in the last frame.
    pub fn owner_at(&self, x: u16, y: u16) -> Option<NodeId> {
        self.lock().owners.get(x, y)
    }

    pub fn with_backend<R>(&self, f: impl FnOnce(&B) -> R) -> R {
        f(&self.lock().backend)
    }

    pub fn with_backend_mut<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(&mut self.lock().backend)
    }

    pub fn with_tree<R>(&self, f: impl FnOnce(&Tree) -> R) -> R {
        f(&self.lock().tree)
    }
}

impl<B: Backend> ScreenState<B> {
    fn teardown(&mut self) -> Result<()> {
        self.owners.clear();
        match self.tree.root() {
            Some(root) => {
                debug!(%root, nodes = self.tree.len(), "tearing down tree");
                dismount_all(&mut self.tree, &[root])
            }
            None => Ok(()),
        }
    }

    fn dispatch(&mut self, event: &KeyEvent, pass: Pass) -> Result<()> {
        let mut current = self
            .owners
            .get(self.cursor.x, self.cursor.y)
            .filter(|id| self.tree.contains(*id));

        while let Some(id) = current {
            let node = self.tree.get_mut(id).ok_or(Error::StaleNode(id))?;
            match node.element.handle_key(event)? {
                Propagation::Stop => {
                    let component = node.element.name();
                    trace!(component, %id, code = ?event.code, "key consumed");
                    return Ok(());
                }
                Propagation::Continue => current = node.parent,
            }
        }

        self.default_key(event, pass)
    }

    /// Fallback once an event bubbled past the root.
    fn default_key(&mut self, event: &KeyEvent, pass: Pass) -> Result<()> {
        if event.code == KeyCode::Esc {
            debug!("quit requested");
            return match self.quit.as_mut() {
                Some(quit) => quit().map_err(Error::QuitCallbackFailure),
                None => Ok(()),
            };
        }

        if let Some((dx, dy)) = event.code.arrow_delta() {
            let (width, height) = self.backend.size();
            self.cursor = self.cursor.moved_by(dx, dy, width, height);
            trace!(x = self.cursor.x, y = self.cursor.y, "cursor moved");
            return Ok(());
        }

        match pass {
            Pass::First => self.dispatch(event, Pass::Redispatch),
            Pass::Redispatch => {
                trace!(code = ?event.code, "key unhandled");
                Ok(())
            }
        }
    }
}
