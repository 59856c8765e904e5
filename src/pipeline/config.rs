//! Screen configuration.

use std::time::Duration;

/// How a terminal screen is set up and driven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    /// Draw on the alternate screen buffer, restoring the shell on exit.
    pub alternate_screen: bool,
    /// Put the terminal in raw mode so keys arrive unbuffered.
    pub raw_mode: bool,
    /// Show the terminal cursor at the logical cursor position.
    pub show_cursor: bool,
    /// How long one tick waits for input (~60fps by default).
    pub poll_interval: Duration,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            raw_mode: true,
            show_cursor: true,
            poll_interval: Duration::from_millis(16),
        }
    }
}

impl ScreenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alternate_screen(mut self, enabled: bool) -> Self {
        self.alternate_screen = enabled;
        self
    }

    pub fn raw_mode(mut self, enabled: bool) -> Self {
        self.raw_mode = enabled;
        self
    }

    pub fn show_cursor(mut self, enabled: bool) -> Self {
        self.show_cursor = enabled;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
