//! Reconciler - patch a retained node against a fresh draw.
//!
//! A node is redrawn at its (possibly new) rectangle and its content is
//! updated in place:
//!
//! ```text
//! draw → Region   → replace region (dismount old children, if any)
//! draw → Children → keyed diff: match (key, type), reconcile kept,
//!                   build new, dismount unmatched last
//! ```
//!
//! Geometry changes take the same path, so a resize never remounts
//! anything and component state survives it.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::arena::{Content, NodeId, Tree};
use super::build::build;
use super::component::{Child, DrawResult};
use crate::error::{Error, Result};
use crate::types::Rect;

/// Redraw `id` at `rect` and bring its subtree up to date.
pub(crate) fn reconcile(tree: &mut Tree, id: NodeId, rect: Rect) -> Result<()> {
    let node = tree.get_mut(id).ok_or(Error::StaleNode(id))?;
    let drawn = node.element.draw(rect.width, rect.height)?;
    let name = node.element.name();
    if node.rect != rect {
        trace!(component = name, %id, from = ?node.rect, to = ?rect, "resized in place");
    }
    node.rect = rect;

    match drawn {
        DrawResult::Empty => Err(Error::DrawResultInvalid { component: name }),
        DrawResult::Region(region) => {
            let previous = std::mem::replace(&mut node.content, Content::Region(region));
            match previous {
                Content::Children(children) if !children.is_empty() => {
                    let removed = children.len();
                    debug!(component = name, %id, removed, "composite became leaf");
                    dismount_all(tree, &children)
                }
                _ => Ok(()),
            }
        }
        DrawResult::Children(children) => {
            let previous = node.children().to_vec();
            diff_children(tree, id, rect, previous, children)
        }
    }
}

fn diff_children(
    tree: &mut Tree,
    id: NodeId,
    rect: Rect,
    previous: Vec<NodeId>,
    incoming: Vec<Child>,
) -> Result<()> {
    // First occurrence of a key wins; later duplicates stay unmatched.
    let mut by_key: HashMap<String, usize> = HashMap::with_capacity(previous.len());
    for (slot, child_id) in previous.iter().enumerate() {
        let Some(child) = tree.get(*child_id) else {
            continue;
        };
        if by_key.contains_key(child.key()) {
            warn!(parent = %id, key = child.key(), "duplicate key among retained children");
            continue;
        }
        by_key.insert(child.key().to_string(), slot);
    }

    let mut unmatched: Vec<Option<NodeId>> = previous.iter().copied().map(Some).collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(incoming.len());
    let mut next: Vec<NodeId> = Vec::with_capacity(incoming.len());
    let mut kept = 0usize;

    for child in incoming {
        let child_rect = rect.offset(child.rect());
        let fresh_key = seen.insert(child.key.clone());
        if !fresh_key {
            warn!(parent = %id, key = %child.key, "duplicate key in draw result");
        }

        let matched = if fresh_key {
            by_key.get(&child.key).copied().filter(|&slot| {
                tree.get(previous[slot]).is_some_and(|old| {
                    old.element.component_type() == child.element.component_type()
                })
            })
        } else {
            None
        };

        let step = match matched {
            Some(slot) => {
                let old_id = previous[slot];
                unmatched[slot] = None;
                next.push(old_id);
                kept += 1;
                update_kept(tree, old_id, child, child_rect)
            }
            None => build(tree, child.element, child.key, Some(id), child_rect).map(|new_id| {
                next.push(new_id);
            }),
        };

        if let Err(err) = step {
            // Leave every node that is still alive reachable from the parent.
            next.extend(unmatched.into_iter().flatten());
            if let Some(node) = tree.get_mut(id) {
                node.content = Content::Children(next);
            }
            return Err(err);
        }
    }

    let removed: Vec<NodeId> = unmatched.into_iter().flatten().collect();
    debug!(
        parent = %id,
        kept,
        built = next.len() - kept,
        removed = removed.len(),
        "children reconciled"
    );
    if let Some(node) = tree.get_mut(id) {
        node.content = Content::Children(next);
    }
    dismount_all(tree, &removed)
}

fn update_kept(tree: &mut Tree, old_id: NodeId, child: Child, rect: Rect) -> Result<()> {
    let node = tree.get_mut(old_id).ok_or(Error::StaleNode(old_id))?;
    node.element.replace_props(child.element)?;
    reconcile(tree, old_id, rect)
}

/// Dismount and release every node under each of `roots`.
///
/// Parents are dismounted before their children. Every node is dismounted
/// and released even if a hook fails; the first failure is returned.
pub(crate) fn dismount_all(tree: &mut Tree, roots: &[NodeId]) -> Result<()> {
    let order: Vec<NodeId> = roots.iter().flat_map(|root| tree.subtree(*root)).collect();
    let mut first_error = None;

    for id in order {
        let Some(mut node) = tree.release(id) else {
            continue;
        };
        trace!(component = node.element.name(), %id, "dismount");
        if let Err(err) = node.element.dismount() {
            first_error.get_or_insert(err);
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::component::{Component, Element, Propagation};
    use crate::engine::region::Region;
    use crate::error::{Hook, HookResult};
    use crate::primitives::label;
    use crate::state::KeyEvent;
    use crate::types::Style;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // -------------------------------------------------------------------------
    // Fixtures
    // -------------------------------------------------------------------------

    #[derive(Default)]
    struct Counters {
        mounts: AtomicUsize,
        dismounts: AtomicUsize,
    }

    impl Counters {
        fn mounts(&self) -> usize {
            self.mounts.load(Ordering::SeqCst)
        }

        fn dismounts(&self) -> usize {
            self.dismounts.load(Ordering::SeqCst)
        }
    }

    /// Leaf that counts lifecycle calls and its own draws.
    #[derive(Clone)]
    struct Tracked {
        counters: Arc<Counters>,
        draws: usize,
    }

    impl Tracked {
        fn element(counters: &Arc<Counters>, text: &str) -> Element {
            Element::new(
                Tracked {
                    counters: counters.clone(),
                    draws: 0,
                },
                text.to_string(),
            )
        }
    }

    impl Component for Tracked {
        type Props = String;

        fn on_mount(&mut self, _: &String) -> HookResult<()> {
            self.counters.mounts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_dismount(&mut self, _: &String) -> HookResult<()> {
            self.counters.dismounts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn draw(&mut self, text: &String, width: u16, height: u16) -> HookResult<DrawResult> {
            self.draws += 1;
            let mut region = Region::new(width, height);
            region.draw_text(0, 0, text, Style::DEFAULT);
            Ok(DrawResult::Region(region))
        }
    }

    /// Same shape as `Tracked`, different type.
    #[derive(Clone)]
    struct OtherTracked {
        counters: Arc<Counters>,
    }

    impl Component for OtherTracked {
        type Props = String;

        fn on_mount(&mut self, _: &String) -> HookResult<()> {
            self.counters.mounts.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn draw(&mut self, _: &String, width: u16, height: u16) -> HookResult<DrawResult> {
            Ok(DrawResult::Region(Region::new(width, height)))
        }
    }

    /// Composite whose children are swapped from outside between frames.
    #[derive(Clone)]
    struct Host {
        children: Arc<Mutex<Vec<Child>>>,
    }

    impl Component for Host {
        type Props = ();

        fn draw(&mut self, _: &(), _: u16, _: u16) -> HookResult<DrawResult> {
            Ok(DrawResult::Children(self.children.lock().unwrap().clone()))
        }

        fn handle_key(&mut self, _: &(), _: &KeyEvent) -> HookResult<Propagation> {
            Ok(Propagation::Continue)
        }
    }

    struct Fixture {
        tree: Tree,
        root: NodeId,
        children: Arc<Mutex<Vec<Child>>>,
    }

    impl Fixture {
        fn new(children: Vec<Child>) -> Self {
            let children = Arc::new(Mutex::new(children));
            let host = Element::new(Host { children: children.clone() }, ());
            let mut tree = Tree::new();
            let root = build(&mut tree, host, "root".into(), None, Rect::new(0, 0, 20, 5)).unwrap();
            Self { tree, root, children }
        }

        fn set(&self, children: Vec<Child>) {
            *self.children.lock().unwrap() = children;
        }

        fn reconcile(&mut self) -> Result<()> {
            reconcile(&mut self.tree, self.root, Rect::new(0, 0, 20, 5))
        }

        fn child(&self, i: usize) -> NodeId {
            self.tree.get(self.root).unwrap().children()[i]
        }

        fn keys(&self) -> Vec<String> {
            self.tree
                .get(self.root)
                .unwrap()
                .children()
                .iter()
                .map(|id| self.tree.get(*id).unwrap().key().to_string())
                .collect()
        }

        fn tracked_draws(&self, i: usize) -> usize {
            self.tree
                .get(self.child(i))
                .unwrap()
                .element()
                .component::<Tracked>()
                .unwrap()
                .draws
        }
    }

    fn row(key: &str, element: Element, y: u16) -> Child {
        Child::new(key, element, 10, 1).at(0, y)
    }

    // -------------------------------------------------------------------------
    // Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_unchanged_draw_is_idempotent() {
        let counters = Arc::new(Counters::default());
        let children = vec![
            row("a", Tracked::element(&counters, "alpha"), 0),
            row("b", Tracked::element(&counters, "beta"), 1),
        ];
        let mut fx = Fixture::new(children.clone());
        let before = (fx.child(0), fx.child(1));

        fx.set(children);
        fx.reconcile().unwrap();
        fx.reconcile().unwrap();

        assert_eq!(counters.mounts(), 2);
        assert_eq!(counters.dismounts(), 0);
        assert_eq!((fx.child(0), fx.child(1)), before);
        // State survived: one build draw plus two redraws
        assert_eq!(fx.tracked_draws(0), 3);
        assert_eq!(fx.tracked_draws(1), 3);
    }

    #[test]
    fn test_props_replaced_on_match() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![row("a", Tracked::element(&counters, "old"), 0)]);

        fx.set(vec![row("a", Tracked::element(&counters, "new"), 0)]);
        fx.reconcile().unwrap();

        let node = fx.tree.get(fx.child(0)).unwrap();
        assert_eq!(node.element().props::<Tracked>().map(String::as_str), Some("new"));
        assert_eq!(node.region().unwrap().row_text(0), "new       ");
        assert_eq!(counters.mounts(), 1);
    }

    #[test]
    fn test_removed_key_dismounts_once() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![
            row("a", Tracked::element(&counters, "alpha"), 0),
            row("b", Tracked::element(&counters, "beta"), 1),
        ]);
        let removed = fx.child(1);

        fx.set(vec![row("a", Tracked::element(&counters, "alpha"), 0)]);
        fx.reconcile().unwrap();
        fx.reconcile().unwrap();

        assert_eq!(counters.dismounts(), 1);
        assert_eq!(fx.keys(), vec!["a"]);
        assert!(!fx.tree.contains(removed));
    }

    #[test]
    fn test_reorder_keeps_nodes() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![
            row("a", Tracked::element(&counters, "alpha"), 0),
            row("b", Tracked::element(&counters, "beta"), 1),
        ]);
        let (a, b) = (fx.child(0), fx.child(1));

        fx.set(vec![
            row("b", Tracked::element(&counters, "beta"), 0),
            row("c", Tracked::element(&counters, "gamma"), 1),
            row("a", Tracked::element(&counters, "alpha"), 2),
        ]);
        fx.reconcile().unwrap();

        assert_eq!(fx.keys(), vec!["b", "c", "a"]);
        assert_eq!(fx.child(0), b);
        assert_eq!(fx.child(2), a);
        assert_eq!(fx.tree.get(a).unwrap().rect(), Rect::new(0, 2, 10, 1));
        assert_eq!(counters.mounts(), 3);
        assert_eq!(counters.dismounts(), 0);
    }

    #[test]
    fn test_type_change_replaces_node() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![row("a", Tracked::element(&counters, "alpha"), 0)]);
        let old = fx.child(0);

        let other = Element::new(
            OtherTracked {
                counters: counters.clone(),
            },
            "alpha".to_string(),
        );
        fx.set(vec![row("a", other, 0)]);
        fx.reconcile().unwrap();

        assert_eq!(counters.mounts(), 2);
        assert_eq!(counters.dismounts(), 1);
        assert!(!fx.tree.contains(old));
        assert!(fx.tree.get(fx.child(0)).unwrap().element().is::<OtherTracked>());
    }

    #[test]
    fn test_removed_composite_dismounts_subtree() {
        let counters = Arc::new(Counters::default());
        let inner = Element::new(
            Host {
                children: Arc::new(Mutex::new(vec![
                    row("x", Tracked::element(&counters, "x"), 0),
                    row("y", Tracked::element(&counters, "y"), 1),
                ])),
            },
            (),
        );
        let mut fx = Fixture::new(vec![Child::new("group", inner, 10, 2)]);
        assert_eq!(fx.tree.len(), 4);

        fx.set(vec![]);
        fx.reconcile().unwrap();

        assert_eq!(counters.dismounts(), 2);
        assert_eq!(fx.tree.len(), 1);
    }

    #[test]
    fn test_duplicate_new_key_builds_fresh() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![row("a", Tracked::element(&counters, "one"), 0)]);
        let original = fx.child(0);

        fx.set(vec![
            row("a", Tracked::element(&counters, "one"), 0),
            row("a", Tracked::element(&counters, "two"), 1),
        ]);
        fx.reconcile().unwrap();

        assert_eq!(fx.child(0), original);
        assert_ne!(fx.child(1), original);
        assert_eq!(counters.mounts(), 2);
    }

    #[test]
    fn test_duplicate_old_key_is_dismounted() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![
            row("a", Tracked::element(&counters, "one"), 0),
            row("a", Tracked::element(&counters, "two"), 1),
        ]);
        let first = fx.child(0);

        fx.set(vec![row("a", Tracked::element(&counters, "one"), 0)]);
        fx.reconcile().unwrap();

        assert_eq!(fx.keys(), vec!["a"]);
        assert_eq!(fx.child(0), first);
        assert_eq!(counters.dismounts(), 1);
    }

    #[test]
    fn test_resize_preserves_state() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![row("a", Tracked::element(&counters, "alpha"), 0)]);
        let child = fx.child(0);

        reconcile(&mut fx.tree, fx.root, Rect::new(2, 3, 40, 10)).unwrap();

        assert_eq!(fx.child(0), child);
        assert_eq!(fx.tree.get(fx.root).unwrap().rect(), Rect::new(2, 3, 40, 10));
        assert_eq!(fx.tree.get(child).unwrap().rect(), Rect::new(2, 3, 10, 1));
        assert_eq!(fx.tracked_draws(0), 2);
        assert_eq!(counters.mounts(), 1);
        assert_eq!(counters.dismounts(), 0);
    }

    #[test]
    fn test_type_change_to_stock_label() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![row("a", Tracked::element(&counters, "alpha"), 0)]);

        // A label child keyed "a" replaces the tracked component (type change)
        fx.set(vec![row("a", label("plain"), 0)]);
        fx.reconcile().unwrap();
        assert_eq!(counters.dismounts(), 1);

        let node = fx.tree.get(fx.child(0)).unwrap();
        assert_eq!(node.region().unwrap().row_text(0), "plain     ");
    }

    #[derive(Clone)]
    struct Stubborn;

    impl Component for Stubborn {
        type Props = ();

        fn on_dismount(&mut self, _: &()) -> HookResult<()> {
            Err("still busy".into())
        }

        fn draw(&mut self, _: &(), w: u16, h: u16) -> HookResult<DrawResult> {
            Ok(DrawResult::Region(Region::new(w, h)))
        }
    }

    #[test]
    fn test_dismount_error_still_dismounts_siblings() {
        let counters = Arc::new(Counters::default());
        let mut fx = Fixture::new(vec![
            row("s", Element::new(Stubborn, ()), 0),
            row("p", Tracked::element(&counters, "p"), 1),
        ]);

        fx.set(vec![]);
        let err = fx.reconcile().unwrap_err();

        assert_eq!(err.failed_hook(), Some(Hook::Dismount));
        assert_eq!(fx.tree.len(), 1);
        // Siblings after the failing one are still dismounted
        assert_eq!(counters.dismounts(), 1);
    }

    #[test]
    fn test_stale_node() {
        let mut tree = Tree::new();
        let err = reconcile(&mut tree, NodeId::from_parts(9, 9), Rect::default()).unwrap_err();
        assert!(matches!(err, Error::StaleNode(_)));
    }
}
