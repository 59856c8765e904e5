//! Retained tree storage.
//!
//! Nodes live in a slot arena addressed by generational [`NodeId`]s:
//! - Free slot pool for O(1) reuse
//! - Generation bump on release, so stale ids never alias a newer node
//! - Parent links are plain ids, so walking up is a lookup, not a borrow

use std::fmt;

use super::component::{Element, Key};
use super::region::Region;
use crate::types::Rect;

// =============================================================================
// NodeId
// =============================================================================

/// Handle to a node in the retained tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub const fn from_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

// =============================================================================
// Node
// =============================================================================

/// What a node currently shows: its own region, or an ordered child list.
#[derive(Debug, Clone)]
pub enum Content {
    Region(Region),
    Children(Vec<NodeId>),
}

impl Content {
    pub fn children(&self) -> &[NodeId] {
        match self {
            Content::Children(children) => children,
            Content::Region(_) => &[],
        }
    }
}

/// A mounted component instance and its last drawn output.
#[derive(Debug)]
pub struct Node {
    pub(crate) element: Element,
    pub(crate) key: Key,
    pub(crate) parent: Option<NodeId>,
    pub(crate) content: Content,
    pub(crate) rect: Rect,
}

impl Node {
    pub(crate) fn new(element: Element, key: Key, parent: Option<NodeId>, rect: Rect) -> Self {
        Self {
            element,
            key,
            parent,
            content: Content::Children(Vec::new()),
            rect,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Absolute screen rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn children(&self) -> &[NodeId] {
        self.content.children()
    }

    pub fn region(&self) -> Option<&Region> {
        match &self.content {
            Content::Region(region) => Some(region),
            Content::Children(_) => None,
        }
    }
}

// =============================================================================
// Tree
// =============================================================================

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena of retained nodes plus the root handle.
#[derive(Debug, Default)]
pub struct Tree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    root: Option<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeId>) {
        self.root = root;
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.node.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Store a node, reusing a free slot if one exists.
    pub(crate) fn allocate(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeId::from_parts(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId::from_parts(index, 0)
    }

    /// Remove a single node and return it. Children are left in place.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        if self.root == Some(id) {
            self.root = None;
        }
        Some(node)
    }

    /// Ids of `id` and all its descendants, parents before children.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let Some(node) = self.get(current) else {
                continue;
            };
            order.push(current);
            stack.extend(node.children().iter().rev().copied());
        }
        order
    }

    /// Drop a node and everything below it without running any hooks.
    pub(crate) fn release_subtree(&mut self, id: NodeId) {
        for node in self.subtree(id) {
            self.release(node);
        }
    }

    /// Walk from `id` up to the root, `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(id).map(|_| id), move |current| {
            self.get(*current)
                .and_then(Node::parent)
                .filter(|parent| self.contains(*parent))
        })
    }
}
