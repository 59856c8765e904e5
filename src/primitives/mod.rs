//! TUI Primitives - stock components.
//!
//! - [`label`] - Static text
//! - [`line`] - Horizontal rule
//! - [`text_entry`] - Single-line input
//! - [`notification`] - Message dismissed by any key
//! - [`horizontal_layout`] - Children stacked one row each
//!
//! Each constructor returns a ready [`Element`](crate::Element). The
//! component and props types are public for callers that want to inspect
//! state or build elements by hand.

mod label;
mod layout;
mod line;
mod notification;
mod text_entry;

pub use label::{Label, LabelProps, label, styled_label};
pub use layout::{HorizontalLayout, LayoutProps, horizontal_layout};
pub use line::{Line, LineProps, line};
pub use notification::{DismissedFn, Notification, NotificationProps, notification};
pub use text_entry::{FinishedFn, TextEntry, TextEntryProps, text_entry};
