//! Pipeline - from retained tree to terminal and back.
//!
//! # Pipeline Architecture
//!
//! ```text
//! Element → build / reconcile → Tree → paint → Backend
//!                                 ↑               │
//!                    handle_key ← owner grid ← ───┘
//! ```
//!
//! ## Data Flow
//!
//! 1. **draw** - Build the tree on the first frame, reconcile it afterwards
//! 2. **paint** - Stamp leaf regions onto the backend, recording cell owners
//! 3. **handle_key** - Start at the owner under the cursor and bubble upward

pub mod config;
pub mod mount;
mod paint;
pub mod screen;

// Re-exports
pub use config::ScreenConfig;
pub use mount::{MountHandle, mount, run, tick, unmount};
pub use screen::{QuitCallback, Screen};
