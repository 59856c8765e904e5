//! Label Primitive - a single line of static text.
//!
//! Fills its whole slot and writes the text on the first row, truncated at
//! the right edge.
//!
//! # Example
//!
//! ```ignore
//! use termreact::primitives::{label, styled_label};
//! use termreact::{Attr, Style};
//!
//! let plain = label("perfect sky");
//! let bold = styled_label("Warning", Style::DEFAULT.attrs(Attr::BOLD));
//! ```

use crate::engine::{Component, DrawResult, Element, Region};
use crate::error::HookResult;
use crate::types::Style;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelProps {
    pub label: String,
    pub style: Style,
}

/// Stateless text display.
#[derive(Debug, Clone, Copy, Default)]
pub struct Label;

impl Component for Label {
    type Props = LabelProps;

    fn draw(
        &mut self,
        props: &LabelProps,
        max_width: u16,
        max_height: u16,
    ) -> HookResult<DrawResult> {
        let mut region = Region::new(max_width, max_height);
        region.draw_text(0, 0, &props.label, props.style);
        Ok(DrawResult::Region(region))
    }
}

/// Create a label with the default style.
pub fn label(text: impl Into<String>) -> Element {
    styled_label(text, Style::DEFAULT)
}

pub fn styled_label(text: impl Into<String>, style: Style) -> Element {
    Element::new(
        Label,
        LabelProps {
            label: text.into(),
            style,
        },
    )
}
