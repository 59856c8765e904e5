//! HorizontalLayout Primitive - stack children one row each.
//!
//! Child `i` gets the slot `(0, i, max_width, 1)`. Children that do not fit
//! in `max_height` rows are dropped. Each child keeps its own key, so
//! reordering the list moves the retained nodes instead of rebuilding them.

use crate::engine::{Child, Component, DrawResult, Element};
use crate::error::HookResult;

#[derive(Debug, Clone, Default)]
pub struct LayoutProps {
    pub children: Vec<Child>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HorizontalLayout;

impl Component for HorizontalLayout {
    type Props = LayoutProps;

    fn draw(
        &mut self,
        props: &LayoutProps,
        max_width: u16,
        max_height: u16,
    ) -> HookResult<DrawResult> {
        let placed = props
            .children
            .iter()
            .take(max_height as usize)
            .zip(0u16..)
            .map(|(child, row)| child.clone().at(0, row).sized(max_width, 1))
            .collect();
        Ok(DrawResult::Children(placed))
    }
}

pub fn horizontal_layout(children: Vec<Child>) -> Element {
    Element::new(HorizontalLayout, LayoutProps { children })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::label;
    use crate::types::Rect;

    fn placed(children: Vec<Child>, width: u16, height: u16) -> Vec<Child> {
        match HorizontalLayout.draw(&LayoutProps { children }, width, height).unwrap() {
            DrawResult::Children(children) => children,
            other => panic!("expected children, got {other:?}"),
        }
    }

    #[test]
    fn test_composite_ordering() {
        let children = placed(
            vec![
                Child::managed("a", label("Wizard of Oz")),
                Child::managed("b", label("God's Plan")),
            ],
            80,
            24,
        );

        assert_eq!(children.len(), 2);
        assert_eq!(children[0].key, "a");
        assert_eq!(children[0].rect(), Rect::new(0, 0, 80, 1));
        assert_eq!(children[1].key, "b");
        assert_eq!(children[1].rect(), Rect::new(0, 1, 80, 1));
        assert!(children.iter().all(|child| child.height == 1));
    }

    #[test]
    fn test_overflow_dropped() {
        let children = placed(
            (0..5).map(|i| Child::managed(i.to_string(), label("row"))).collect(),
            10,
            3,
        );
        assert_eq!(children.len(), 3);
        assert_eq!(children[2].key, "2");
    }
}
