//! Component contract and element descriptors.
//!
//! A component is a stateful value with four optional hooks. Its props are
//! a strongly typed associated type, supplied from outside and replaced
//! wholesale whenever reconciliation matches the instance again. Its state
//! is simply the component's own fields, so it survives every redraw.
//!
//! The engine stores components type-erased inside an [`Element`]; the
//! identity tag used for matching is the component's `TypeId`.
//!
//! # Example
//!
//! ```ignore
//! use termreact::{Component, DrawResult, HookResult, Region, Style};
//!
//! #[derive(Clone, Default)]
//! struct Counter {
//!     draws: usize,
//! }
//!
//! impl Component for Counter {
//!     type Props = ();
//!
//!     fn draw(&mut self, _: &(), width: u16, height: u16) -> HookResult<DrawResult> {
//!         self.draws += 1;
//!         let mut region = Region::new(width, height);
//!         region.draw_text(0, 0, &self.draws.to_string(), Style::DEFAULT);
//!         Ok(DrawResult::Region(region))
//!     }
//! }
//! ```

use std::any::{Any, TypeId, type_name};
use std::fmt;

use super::region::Region;
use crate::error::{Error, Hook, HookResult, Result};
use crate::state::KeyEvent;
use crate::types::Rect;

/// Sibling-scoped identifier used for keyed matching.
pub type Key = String;

// =============================================================================
// Hook results
// =============================================================================

/// What a key handler wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Propagation {
    /// Hand the event to the parent.
    #[default]
    Continue,
    /// The event was consumed.
    Stop,
}

/// Output of a draw step: a leaf region or positioned children.
#[derive(Debug, Clone)]
pub enum DrawResult {
    Region(Region),
    Children(Vec<Child>),
    /// Nothing drawn. The engine rejects this with `DrawResultInvalid`.
    Empty,
}

/// A child descriptor plus its placement in the parent's local frame.
#[derive(Debug, Clone)]
pub struct Child {
    pub key: Key,
    pub element: Element,
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Child {
    /// A child with an explicit size at the parent's origin.
    pub fn new(key: impl Into<Key>, element: Element, width: u16, height: u16) -> Self {
        Self {
            key: key.into(),
            element,
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// A child whose placement is left to a layout component.
    pub fn managed(key: impl Into<Key>, element: Element) -> Self {
        Self::new(key, element, 0, 0)
    }

    pub fn at(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn sized(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Placement in the parent's local frame.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// =============================================================================
// Component trait
// =============================================================================

/// A stateful unit of UI.
///
/// Every hook is optional. `draw` defaults to drawing nothing, which the
/// engine treats as a contract violation; `handle_key` defaults to passing
/// the event on to the parent.
pub trait Component: Clone + Send + 'static {
    /// Externally supplied configuration.
    type Props: Clone + Send + 'static;

    fn on_mount(&mut self, _props: &Self::Props) -> HookResult<()> {
        Ok(())
    }

    fn on_dismount(&mut self, _props: &Self::Props) -> HookResult<()> {
        Ok(())
    }

    fn draw(
        &mut self,
        _props: &Self::Props,
        _max_width: u16,
        _max_height: u16,
    ) -> HookResult<DrawResult> {
        Ok(DrawResult::Empty)
    }

    fn handle_key(&mut self, _props: &Self::Props, _event: &KeyEvent) -> HookResult<Propagation> {
        Ok(Propagation::Continue)
    }

    /// Human-readable name used in errors and logs.
    fn name(&self) -> &'static str {
        short_type_name::<Self>()
    }
}

/// Strip the module path from a type name.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    match base.rfind("::") {
        Some(pos) => &full[pos + 2..],
        None => full,
    }
}

// =============================================================================
// Type erasure
// =============================================================================

trait AnyComponent: Send {
    fn component_type(&self) -> TypeId;
    fn name(&self) -> &'static str;
    fn props_type_name(&self) -> &'static str;
    fn on_mount(&mut self) -> HookResult<()>;
    fn on_dismount(&mut self) -> HookResult<()>;
    fn draw(&mut self, max_width: u16, max_height: u16) -> HookResult<DrawResult>;
    fn handle_key(&mut self, event: &KeyEvent) -> HookResult<Propagation>;
    fn into_props(self: Box<Self>) -> Box<dyn Any + Send>;
    fn replace_props(&mut self, props: Box<dyn Any + Send>) -> std::result::Result<(), ()>;
    fn clone_box(&self) -> Box<dyn AnyComponent>;
    fn as_any(&self) -> &dyn Any;
}

struct Instance<C: Component> {
    component: C,
    props: C::Props,
}

impl<C: Component> AnyComponent for Instance<C> {
    fn component_type(&self) -> TypeId {
        TypeId::of::<C>()
    }

    fn name(&self) -> &'static str {
        self.component.name()
    }

    fn props_type_name(&self) -> &'static str {
        type_name::<C::Props>()
    }

    fn on_mount(&mut self) -> HookResult<()> {
        self.component.on_mount(&self.props)
    }

    fn on_dismount(&mut self) -> HookResult<()> {
        self.component.on_dismount(&self.props)
    }

    fn draw(&mut self, max_width: u16, max_height: u16) -> HookResult<DrawResult> {
        self.component.draw(&self.props, max_width, max_height)
    }

    fn handle_key(&mut self, event: &KeyEvent) -> HookResult<Propagation> {
        self.component.handle_key(&self.props, event)
    }

    fn into_props(self: Box<Self>) -> Box<dyn Any + Send> {
        Box::new(self.props)
    }

    fn replace_props(&mut self, props: Box<dyn Any + Send>) -> std::result::Result<(), ()> {
        let props = props.downcast::<C::Props>().map_err(|_| ())?;
        self.props = *props;
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn AnyComponent> {
        Box::new(Instance::<C> {
            component: self.component.clone(),
            props: self.props.clone(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// =============================================================================
// Element
// =============================================================================

/// A component instance bundled with its current props.
///
/// Elements are cheap descriptors until the engine mounts one; from then on
/// the retained node owns it and keeps its state alive.
pub struct Element {
    inner: Box<dyn AnyComponent>,
}

impl Element {
    pub fn new<C: Component>(component: C, props: C::Props) -> Self {
        Self {
            inner: Box::new(Instance { component, props }),
        }
    }

    /// Identity tag: two elements are the same kind iff this matches.
    pub fn component_type(&self) -> TypeId {
        self.inner.component_type()
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub fn is<C: Component>(&self) -> bool {
        self.component_type() == TypeId::of::<C>()
    }

    /// Borrow the component (and with it, its state).
    pub fn component<C: Component>(&self) -> Option<&C> {
        self.inner
            .as_any()
            .downcast_ref::<Instance<C>>()
            .map(|instance| &instance.component)
    }

    /// Borrow the current props.
    pub fn props<C: Component>(&self) -> Option<&C::Props> {
        self.inner
            .as_any()
            .downcast_ref::<Instance<C>>()
            .map(|instance| &instance.props)
    }

    pub(crate) fn mount(&mut self) -> Result<()> {
        self.inner
            .on_mount()
            .map_err(|source| Error::hook(self.name(), Hook::Mount, source))
    }

    pub(crate) fn dismount(&mut self) -> Result<()> {
        self.inner
            .on_dismount()
            .map_err(|source| Error::hook(self.name(), Hook::Dismount, source))
    }

    pub(crate) fn draw(&mut self, max_width: u16, max_height: u16) -> Result<DrawResult> {
        self.inner
            .draw(max_width, max_height)
            .map_err(|source| Error::hook(self.name(), Hook::Draw, source))
    }

    pub(crate) fn handle_key(&mut self, event: &KeyEvent) -> Result<Propagation> {
        self.inner
            .handle_key(event)
            .map_err(|source| Error::hook(self.name(), Hook::HandleKey, source))
    }

    /// Take over `incoming`'s props, discarding the rest of it.
    pub(crate) fn replace_props(&mut self, incoming: Element) -> Result<()> {
        self.inner
            .replace_props(incoming.inner.into_props())
            .map_err(|()| Error::WrongPropertyType {
                component: self.name(),
                expected: self.inner.props_type_name(),
            })
    }
}

impl Clone for Element {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.name()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
