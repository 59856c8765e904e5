//! Basic Example - build, paint and reconcile without a terminal
//!
//! This example demonstrates:
//! - Composing stock components into a layout
//! - Drawing onto the in-memory test backend
//! - Keyed reconciliation keeping state across frames
//!
//! Run with: cargo run --example basic
//! Add RUST_LOG=termreact=trace to see the engine's decisions.

use std::sync::{Arc, Mutex};

use termreact::{
    Attr, Child, Component, DrawResult, Element, HookResult, KeyEvent, Rgba, Screen, Style,
    TestBackend, horizontal_layout, label, line, styled_label, text_entry,
};
use tracing_subscriber::EnvFilter;

/// Root that draws whatever rows it is currently given.
#[derive(Clone)]
struct Page {
    rows: Arc<Mutex<Vec<Child>>>,
}

impl Component for Page {
    type Props = ();

    fn draw(&mut self, _: &(), width: u16, height: u16) -> HookResult<DrawResult> {
        let rows = self.rows.lock().map_err(|_| "rows lock poisoned")?.clone();
        Ok(DrawResult::Children(vec![Child::new(
            "rows",
            horizontal_layout(rows),
            width,
            height,
        )]))
    }
}

fn print_frame(title: &str, screen: &Screen<TestBackend>) {
    println!("--- {title} ---");
    screen.with_backend(|backend| {
        for row in backend.buffer().lines() {
            println!("|{row}");
        }
    });
    println!();
}

fn main() -> termreact::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== termreact Basic Example ===\n");

    let title = Style::DEFAULT.fg(Rgba::YELLOW).attrs(Attr::BOLD);
    let rows = Arc::new(Mutex::new(vec![
        Child::managed("title", styled_label("Hello, termreact!", title)),
        Child::managed("rule", line('─')),
        Child::managed("name", text_entry("Name", |_| Ok(()))),
    ]));

    let screen = Screen::new(TestBackend::new(32, 5));
    screen.init(Element::new(Page { rows: rows.clone() }, ()), || Ok(()))?;
    screen.draw()?;
    print_frame("first frame", &screen);

    // The cursor starts on the title; step down onto the entry and type
    screen.set_cursor(0, 2);
    for c in "Toto".chars() {
        screen.handle_key(&KeyEvent::char(c))?;
    }
    screen.draw()?;
    print_frame("after typing", &screen);

    // Insert a row above the entry: its typed value follows the key
    if let Ok(mut rows) = rows.lock() {
        rows.insert(2, Child::managed("hint", label("(press Enter when done)")));
    }
    screen.draw()?;
    print_frame("after inserting a row", &screen);

    println!("Retained nodes: {}", screen.with_tree(|tree| tree.len()));
    screen.teardown()
}
