//! State Module - Runtime input state
//!
//! - **Keyboard** - Key event types
//! - **Input** - crossterm event conversion and polling
//! - **Cursor** - Clamped logical cursor
//! - **Owners** - Cell to retained-node lookup grid

mod cursor;
pub mod input;
mod keyboard;
mod owners;

pub use cursor::Cursor;
pub use input::{InputEvent, convert_event, convert_key_event, poll_event, read_event};
pub use keyboard::*;
pub use owners::OwnerGrid;
