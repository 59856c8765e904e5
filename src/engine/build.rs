//! Builder - first construction of a retained subtree.

use tracing::{debug, trace};

use super::arena::{Content, Node, NodeId, Tree};
use super::component::{DrawResult, Element, Key};
use crate::error::{Error, Result};
use crate::types::Rect;

/// Mount `element`, draw it at `rect`, and retain the result.
///
/// Children are built depth-first in draw order at their absolute
/// rectangles. On failure every node allocated so far for this subtree is
/// released. Nodes that already mounted are not dismounted.
pub(crate) fn build(
    tree: &mut Tree,
    mut element: Element,
    key: Key,
    parent: Option<NodeId>,
    rect: Rect,
) -> Result<NodeId> {
    element.mount()?;
    let drawn = element.draw(rect.width, rect.height)?;
    let name = element.name();

    match drawn {
        DrawResult::Empty => Err(Error::DrawResultInvalid { component: name }),
        DrawResult::Region(region) => {
            let mut node = Node::new(element, key, parent, rect);
            node.content = Content::Region(region);
            let id = tree.allocate(node);
            trace!(component = name, %id, ?rect, "built leaf");
            Ok(id)
        }
        DrawResult::Children(children) => {
            let id = tree.allocate(Node::new(element, key, parent, rect));
            let mut built = Vec::with_capacity(children.len());

            for child in children {
                let child_rect = rect.offset(child.rect());
                match build(tree, child.element, child.key, Some(id), child_rect) {
                    Ok(child_id) => built.push(child_id),
                    Err(err) => {
                        for sibling in built {
                            tree.release_subtree(sibling);
                        }
                        tree.release(id);
                        return Err(err);
                    }
                }
            }

            debug!(component = name, %id, children = built.len(), "built composite");
            if let Some(node) = tree.get_mut(id) {
                node.content = Content::Children(built);
            }
            Ok(id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::component::{Child, Component, Propagation};
    use crate::engine::region::Region;
    use crate::error::{Hook, HookResult};
    use crate::primitives::{horizontal_layout, label};
    use crate::state::KeyEvent;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn two_labels() -> Element {
        horizontal_layout(vec![
            Child::managed("a", label("Wizard of Oz")),
            Child::managed("b", label("God's Plan")),
        ])
    }

    #[test]
    fn test_build_layout_recursion() {
        let mut tree = Tree::new();
        let rect = Rect::new(0, 0, 20, 5);
        let root = build(&mut tree, two_labels(), "root".into(), None, rect).unwrap();

        let children = tree.get(root).unwrap().children().to_vec();
        assert_eq!(children.len(), 2);

        let second = tree.get(children[1]).unwrap();
        assert_eq!(second.rect(), Rect::new(0, 1, 20, 1));
        assert_eq!(second.parent(), Some(root));
        assert_eq!(second.region().unwrap().get(1, 0).unwrap().ch, 'o');
    }

    #[test]
    fn test_child_rect_is_absolute() {
        let mut tree = Tree::new();
        let rect = Rect::new(4, 7, 20, 5);
        let root = build(&mut tree, two_labels(), "root".into(), None, rect).unwrap();
        let first = tree.get(root).unwrap().children()[0];
        assert_eq!(tree.get(first).unwrap().rect(), Rect::new(4, 7, 20, 1));
    }

    #[derive(Clone)]
    struct Hollow;

    impl Component for Hollow {
        type Props = ();
    }

    #[test]
    fn test_empty_draw_is_invalid() {
        let mut tree = Tree::new();
        let hollow = Element::new(Hollow, ());
        let err = build(&mut tree, hollow, "k".into(), None, Rect::new(0, 0, 5, 5)).unwrap_err();
        assert!(matches!(err, Error::DrawResultInvalid { component: "Hollow" }));
        assert!(tree.is_empty());
    }

    #[derive(Clone)]
    struct Fragile {
        mounts: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Component for Fragile {
        type Props = ();

        fn on_mount(&mut self, _: &()) -> HookResult<()> {
            self.mounts.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("refused".into());
            }
            Ok(())
        }

        fn draw(&mut self, _: &(), width: u16, height: u16) -> HookResult<DrawResult> {
            Ok(DrawResult::Region(Region::new(width, height)))
        }

        fn handle_key(&mut self, _: &(), _: &KeyEvent) -> HookResult<Propagation> {
            Ok(Propagation::Stop)
        }
    }

    #[test]
    fn test_failed_child_aborts_and_releases() {
        let mounts = Arc::new(AtomicUsize::new(0));
        let ok = Element::new(Fragile { mounts: mounts.clone(), fail: false }, ());
        let bad = Element::new(Fragile { mounts: mounts.clone(), fail: true }, ());
        let never = Element::new(Fragile { mounts: mounts.clone(), fail: false }, ());

        let root = horizontal_layout(vec![
            Child::managed("ok", ok),
            Child::managed("bad", bad),
            Child::managed("never", never),
        ]);

        let mut tree = Tree::new();
        let err = build(&mut tree, root, "root".into(), None, Rect::new(0, 0, 10, 3)).unwrap_err();

        assert_eq!(err.failed_hook(), Some(Hook::Mount));
        assert_eq!(mounts.load(Ordering::SeqCst), 2);
        assert!(tree.is_empty());
    }
}
