//! TextEntry Primitive - single-line text input.
//!
//! Draws `"label: value"`. Printable keys append to the value, Backspace
//! deletes, Enter finishes the entry and hands the value to `on_finished`.
//! A finished entry lets every key through to its parent.

use std::fmt;
use std::sync::Arc;

use crate::engine::{Component, DrawResult, Element, Propagation, Region};
use crate::error::HookResult;
use crate::state::{KeyCode, KeyEvent};
use crate::types::Style;

/// Called once with the entered text.
pub type FinishedFn = Arc<dyn Fn(String) -> HookResult<()> + Send + Sync>;

#[derive(Clone)]
pub struct TextEntryProps {
    pub label: String,
    pub on_finished: FinishedFn,
}

impl fmt::Debug for TextEntryProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextEntryProps")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextEntry {
    value: String,
    finished: bool,
}

impl TextEntry {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Component for TextEntry {
    type Props = TextEntryProps;

    fn draw(
        &mut self,
        props: &TextEntryProps,
        max_width: u16,
        max_height: u16,
    ) -> HookResult<DrawResult> {
        let mut region = Region::new(max_width, max_height);
        region.draw_text(0, 0, &format!("{}: {}", props.label, self.value), Style::DEFAULT);
        Ok(DrawResult::Region(region))
    }

    fn handle_key(&mut self, props: &TextEntryProps, event: &KeyEvent) -> HookResult<Propagation> {
        if self.finished {
            return Ok(Propagation::Continue);
        }

        match event.code {
            KeyCode::Char(c) => self.value.push(c),
            KeyCode::Backspace => {
                self.value.pop();
            }
            KeyCode::Enter => {
                self.finished = true;
                (props.on_finished)(self.value.clone())?;
            }
            _ => return Ok(Propagation::Continue),
        }
        Ok(Propagation::Stop)
    }
}

pub fn text_entry<F>(label: impl Into<String>, on_finished: F) -> Element
where
    F: Fn(String) -> HookResult<()> + Send + Sync + 'static,
{
    Element::new(
        TextEntry::default(),
        TextEntryProps {
            label: label.into(),
            on_finished: Arc::new(on_finished),
        },
    )
}
