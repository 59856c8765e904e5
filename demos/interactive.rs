//! Interactive Example - a small form on the real terminal
//!
//! Arrow keys move the cursor between rows, typing goes to the entry under
//! the cursor, Enter submits it, and Escape quits.
//!
//! Run with: cargo run --example interactive
//! Logs go to `interactive.log` so they never land on the drawn frame
//! (set RUST_LOG=termreact=debug to fill it).

use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use termreact::{
    Attr, Child, Component, DrawResult, HookResult, ScreenConfig, Style, horizontal_layout, label,
    line, mount, notification, run, styled_label, text_entry,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Form that swaps its entry for a notification once a name is submitted.
#[derive(Clone, Default)]
struct Form {
    submitted: Arc<Mutex<Option<String>>>,
}

impl Component for Form {
    type Props = ();

    fn draw(&mut self, _: &(), width: u16, height: u16) -> HookResult<DrawResult> {
        let submitted = self.submitted.lock().map_err(|_| "form lock poisoned")?.clone();
        let heading = Style::DEFAULT.attrs(Attr::BOLD | Attr::UNDERLINE);

        let mut rows = vec![
            Child::managed("title", styled_label("termreact form", heading)),
            Child::managed("rule", line('─')),
        ];
        match submitted {
            None => {
                let sink = self.submitted.clone();
                rows.push(Child::managed(
                    "name",
                    text_entry("Your name", move |value| {
                        info!(%value, "name submitted");
                        *sink.lock().map_err(|_| "form lock poisoned")? = Some(value);
                        Ok(())
                    }),
                ));
            }
            Some(name) => rows.push(Child::managed(
                "done",
                notification(format!("Thanks, {name}! Press any key."), || Ok(())),
            )),
        }
        rows.push(Child::managed("help", label("arrows: move  esc: quit")));

        Ok(DrawResult::Children(vec![Child::new(
            "rows",
            horizontal_layout(rows),
            width,
            height,
        )]))
    }
}

fn main() -> termreact::Result<()> {
    let log = OpenOptions::new()
        .create(true)
        .append(true)
        .open("interactive.log")
        .map_err(termreact::Error::BackendInitFailure)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(log))
        .init();

    let root = termreact::Element::new(Form::default(), ());
    let handle = mount(root, ScreenConfig::default())?;
    let outcome = run(&handle);
    handle.unmount()?;
    outcome
}
