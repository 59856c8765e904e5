//! Owner grid - O(1) cell to retained-node lookup.
//!
//! The compositor records which node painted each cell; key dispatch reads
//! the entry under the cursor to find where bubbling starts.

use crate::engine::NodeId;

/// A grid mapping each absolute cell to the node that painted it.
///
/// Each cell contains the owning node, or `None` if nothing was painted there.
#[derive(Debug, Clone)]
pub struct OwnerGrid {
    width: u16,
    height: u16,
    cells: Vec<Option<NodeId>>,
}

impl OwnerGrid {
    /// Create a new owner grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
        }
    }

    /// Grid dimensions as `(width, height)`.
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Resize the grid, clearing all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let size = width as usize * height as usize;
        self.cells.resize(size, None);
        self.clear();
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Record the owner of a single cell. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, owner: NodeId) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells[idx] = Some(owner);
    }

    /// Get the owner at a position.
    pub fn get(&self, x: u16, y: u16) -> Option<NodeId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.cells.get(idx).copied().flatten()
    }
}

impl Default for OwnerGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
