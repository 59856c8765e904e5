//! Compositor - stamp retained leaf regions onto the backend.
//!
//! ```text
//! clear owners + backend → walk tree (draw order) → cursor → flush
//! ```
//!
//! Later nodes overwrite earlier ones where they overlap, and the owner grid
//! records whichever node wrote each cell last.

use tracing::trace;

use crate::engine::{Content, NodeId, Tree};
use crate::error::{Error, Result};
use crate::renderer::Backend;
use crate::state::{Cursor, OwnerGrid};

/// Paint the subtree under `id` at its absolute position.
///
/// Only the overlap of a region and its node's rect is copied, so a region
/// drawn larger than its slot never spills out of it.
pub(crate) fn paint<B: Backend + ?Sized>(
    tree: &Tree,
    id: NodeId,
    backend: &mut B,
    owners: &mut OwnerGrid,
) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let rect = node.rect();

    match node.content() {
        Content::Region(region) => {
            let width = region.width().min(rect.width);
            let height = region.height().min(rect.height);
            for dy in 0..height {
                for dx in 0..width {
                    let (Some(x), Some(y)) = (rect.x.checked_add(dx), rect.y.checked_add(dy)) else {
                        continue;
                    };
                    if let Some(cell) = region.get(dx, dy) {
                        backend.set_cell(x, y, cell);
                        owners.set(x, y, id);
                    }
                }
            }
        }
        Content::Children(children) => {
            for child in children {
                paint(tree, *child, backend, owners);
            }
        }
    }
}

/// Produce one complete frame from the retained tree.
///
/// Returns the cursor clamped to the current surface.
pub(crate) fn compose<B: Backend + ?Sized>(
    tree: &Tree,
    backend: &mut B,
    owners: &mut OwnerGrid,
    cursor: Cursor,
) -> Result<Cursor> {
    let (width, height) = backend.size();
    if owners.size() != (width, height) {
        trace!(width, height, "owner grid resized");
        owners.resize(width, height);
    } else {
        owners.clear();
    }
    backend.clear();

    if let Some(root) = tree.root() {
        paint(tree, root, backend, owners);
    }

    let cursor = cursor.fit(width, height);
    backend.set_cursor(cursor.x, cursor.y);
    backend.flush().map_err(Error::Backend)?;
    Ok(cursor)
}
