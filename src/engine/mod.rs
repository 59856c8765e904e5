//! Engine - retained tree, builder and reconciler.
//!
//! - **Component**: the `Component` trait, `Element` descriptors, draw results
//! - **Region**: the cell grid a leaf draws into
//! - **Arena**: generational node storage for the retained tree
//! - **Build / Reconcile**: first construction and per-frame patching
//!
//! # Architecture
//!
//! Nodes are stored in an arena and refer to each other by [`NodeId`]:
//!
//! ```text
//! Slot 0: Layout  (parent=None, children=[1, 2], rect=0,0 80x24)
//! Slot 1: Label   (parent=0,    region=80x1,     rect=0,0 80x1)
//! Slot 2: Label   (parent=0,    region=80x1,     rect=0,1 80x1)
//! ```
//!
//! Ownership flows downward through the child lists; parent links are
//! plain ids used for event bubbling.

mod arena;
mod build;
mod component;
mod reconcile;
mod region;

pub use arena::{Content, Node, NodeId, Tree};
pub use component::{Child, Component, DrawResult, Element, Key, Propagation};
pub use region::Region;

pub(crate) use build::build;
pub(crate) use reconcile::{dismount_all, reconcile};
