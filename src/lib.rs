//! # termreact
//!
//! Retained-mode terminal UI with React-style keyed reconciliation.
//!
//! ## Architecture
//!
//! Components are stateful values implementing [`Component`]. Each frame a
//! component draws either a leaf [`Region`] of cells or a list of keyed,
//! positioned [`Child`]ren. The engine keeps the result as a retained tree
//! and, on later frames, patches it in place:
//!
//! ```text
//! Element → build (first frame) / reconcile (later frames) → Tree
//!         → paint → Backend (+ owner grid) → handle_key bubbles upward
//! ```
//!
//! Children are matched by `(key, component type)`. Matched nodes keep their
//! state and get new props; everything else is mounted fresh, and nodes that
//! disappear are dismounted exactly once.
//!
//! ## Modules
//!
//! - [`types`] - Colors, styles, cells, rectangles
//! - [`engine`] - Component trait, retained tree, build and reconcile
//! - [`renderer`] - Backends and the terminal diff renderer
//! - [`pipeline`] - Screen, compositor, mount/run driver
//! - [`primitives`] - Stock components (label, text entry, layout, ...)
//! - [`state`] - Key events, cursor, owner grid

pub mod engine;
pub mod error;
pub mod pipeline;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::{BoxError, Error, Hook, HookResult, Result};

pub use engine::{
    Child, Component, Content, DrawResult, Element, Key, Node, NodeId, Propagation, Region, Tree,
};

pub use renderer::{Backend, CrosstermBackend, FrameBuffer, TestBackend};

pub use pipeline::{MountHandle, QuitCallback, Screen, ScreenConfig, mount, run, tick, unmount};

pub use primitives::{
    HorizontalLayout, Label, Line, Notification, TextEntry, horizontal_layout, label, line,
    notification, styled_label, text_entry,
};

pub use state::{Cursor, InputEvent, KeyCode, KeyEvent, KeyState, Modifiers};
