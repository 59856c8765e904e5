//! Line Primitive - a horizontal rule.

use crate::engine::{Component, DrawResult, Element, Region};
use crate::error::HookResult;
use crate::types::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineProps {
    pub ch: char,
    /// Cells to fill. 0 (or anything wider than the slot) means the full width.
    pub length: u16,
    pub style: Style,
}

impl Default for LineProps {
    fn default() -> Self {
        Self {
            ch: '─',
            length: 0,
            style: Style::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Line;

impl Component for Line {
    type Props = LineProps;

    fn draw(
        &mut self,
        props: &LineProps,
        max_width: u16,
        _max_height: u16,
    ) -> HookResult<DrawResult> {
        let length = match props.length {
            0 => max_width,
            n => n.min(max_width),
        };
        let mut region = Region::new(max_width, 1);
        region.fill_row(0, 0, length, props.ch, props.style);
        Ok(DrawResult::Region(region))
    }
}

/// A full-width line of `ch`.
pub fn line(ch: char) -> Element {
    Element::new(
        Line,
        LineProps {
            ch,
            ..LineProps::default()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(props: LineProps, width: u16) -> String {
        match Line.draw(&props, width, 5).unwrap() {
            DrawResult::Region(region) => {
                assert_eq!(region.height(), 1);
                region.row_text(0)
            }
            other => panic!("expected a region, got {other:?}"),
        }
    }

    #[test]
    fn test_full_width() {
        let props = LineProps {
            ch: '=',
            ..LineProps::default()
        };
        assert_eq!(row(props, 6), "======");
    }

    #[test]
    fn test_fixed_length() {
        let props = LineProps {
            ch: '-',
            length: 3,
            style: Style::DEFAULT,
        };
        assert_eq!(row(props, 6), "---   ");
    }

    #[test]
    fn test_length_clamped() {
        let props = LineProps {
            ch: '-',
            length: 50,
            style: Style::DEFAULT,
        };
        assert_eq!(row(props, 4), "----");
    }
}
