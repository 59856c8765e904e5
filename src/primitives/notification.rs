//! Notification Primitive - a message dismissed by any key.
//!
//! Composite over a single [`Label`](super::Label) child. The first key
//! press is consumed and reported through `on_finished`; afterwards keys
//! pass through to the parent.

use std::fmt;
use std::sync::Arc;

use super::label::label;
use crate::engine::{Child, Component, DrawResult, Element, Propagation};
use crate::error::HookResult;
use crate::state::KeyEvent;

pub type DismissedFn = Arc<dyn Fn() -> HookResult<()> + Send + Sync>;

#[derive(Clone)]
pub struct NotificationProps {
    pub label: String,
    pub on_finished: DismissedFn,
}

impl fmt::Debug for NotificationProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationProps")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Notification {
    finished: bool,
}

impl Notification {
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Component for Notification {
    type Props = NotificationProps;

    fn draw(
        &mut self,
        props: &NotificationProps,
        max_width: u16,
        max_height: u16,
    ) -> HookResult<DrawResult> {
        let text = label(props.label.clone());
        let child = Child::new(props.label.clone(), text, max_width, max_height);
        Ok(DrawResult::Children(vec![child]))
    }

    fn handle_key(
        &mut self,
        props: &NotificationProps,
        _event: &KeyEvent,
    ) -> HookResult<Propagation> {
        if self.finished {
            return Ok(Propagation::Continue);
        }
        self.finished = true;
        (props.on_finished)()?;
        Ok(Propagation::Stop)
    }
}

pub fn notification<F>(text: impl Into<String>, on_finished: F) -> Element
where
    F: Fn() -> HookResult<()> + Send + Sync + 'static,
{
    Element::new(
        Notification::default(),
        NotificationProps {
            label: text.into(),
            on_finished: Arc::new(on_finished),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Label;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_draws_one_label_child() {
        let props = NotificationProps {
            label: "Saved".into(),
            on_finished: Arc::new(|| -> HookResult<()> { Ok(()) }),
        };
        match Notification::default().draw(&props, 30, 2).unwrap() {
            DrawResult::Children(children) => {
                assert_eq!(children.len(), 1);
                assert_eq!(children[0].key, "Saved");
                assert!(children[0].element.is::<Label>());
                assert_eq!((children[0].width, children[0].height), (30, 2));
            }
            other => panic!("expected children, got {other:?}"),
        }
    }

    #[test]
    fn test_first_key_dismisses() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let props = NotificationProps {
            label: "Saved".into(),
            on_finished: Arc::new(move || -> HookResult<()> {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        };
        let mut note = Notification::default();

        let first = note.handle_key(&props, &KeyEvent::char('a')).unwrap();
        let second = note.handle_key(&props, &KeyEvent::char('b')).unwrap();

        assert_eq!(first, Propagation::Stop);
        assert_eq!(second, Propagation::Continue);
        assert!(note.is_finished());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
