//! Logical cursor position.
//!
//! The cursor selects which cell's owner receives key events first. It is
//! always kept inside the current surface bounds.

/// A cursor position clamped to a `width × height` surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

impl Cursor {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Place the cursor at `(x, y)`, clamped to the surface.
    ///
    /// Coordinates are signed so callers can step past the edges.
    pub fn clamped(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x: clamp_axis(x, width),
            y: clamp_axis(y, height),
        }
    }

    /// Move by a delta, staying inside the surface.
    pub fn moved_by(self, dx: i32, dy: i32, width: u16, height: u16) -> Self {
        Self::clamped(self.x as i32 + dx, self.y as i32 + dy, width, height)
    }

    /// Re-clamp after the surface changed size.
    pub fn fit(self, width: u16, height: u16) -> Self {
        Self::clamped(self.x as i32, self.y as i32, width, height)
    }
}

fn clamp_axis(value: i32, extent: u16) -> u16 {
    let max = (extent as i32 - 1).max(0);
    value.clamp(0, max) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_edges() {
        assert_eq!(Cursor::clamped(-1, -5, 80, 24), Cursor::new(0, 0));
        assert_eq!(Cursor::clamped(80, 24, 80, 24), Cursor::new(79, 23));
        assert_eq!(Cursor::clamped(10, 3, 80, 24), Cursor::new(10, 3));
    }

    #[test]
    fn test_empty_surface() {
        assert_eq!(Cursor::clamped(5, 5, 0, 0), Cursor::new(0, 0));
    }

    #[test]
    fn test_moved_by() {
        let cursor = Cursor::new(0, 0);
        assert_eq!(cursor.moved_by(0, -1, 10, 10), Cursor::new(0, 0));
        assert_eq!(cursor.moved_by(1, 0, 10, 10), Cursor::new(1, 0));
        assert_eq!(Cursor::new(9, 9).moved_by(1, 1, 10, 10), Cursor::new(9, 9));
    }

    #[test]
    fn test_fit_after_shrink() {
        assert_eq!(Cursor::new(50, 20).fit(40, 10), Cursor::new(39, 9));
    }

    proptest! {
        #[test]
        fn clamped_cursor_stays_in_bounds(
            x in -1000i32..1000,
            y in -1000i32..1000,
            width in 1u16..300,
            height in 1u16..300,
        ) {
            let cursor = Cursor::clamped(x, y, width, height);
            prop_assert!(cursor.x < width);
            prop_assert!(cursor.y < height);
        }
    }
}
