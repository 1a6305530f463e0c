//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::{LoadError, Record};
use crate::source::{FileSource, PendingLoad, RecordSource};
use crate::state::AppState;
use crate::view::{TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::num::NonZeroUsize;

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

#[allow(dead_code)] // Not every helper is used by every acceptance module
impl AcceptanceTestHarness {
    /// Load a JSON fixture with default terminal size (100x30) and page size 10.
    ///
    /// The load is performed synchronously and installed with one tick.
    pub fn from_fixture(path: &str) -> Result<Self, TuiError> {
        Self::from_fixture_with(path, 10, 100, 30)
    }

    /// Load a JSON fixture with custom page size and terminal size.
    pub fn from_fixture_with(
        path: &str,
        page_size: usize,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let result = RecordSource::File(FileSource::new(path)).load();
        let mut harness = Self::loading(result, page_size, width, height)?;
        harness.tick();
        Ok(harness)
    }

    /// App still waiting for its load; the result arrives on the next tick.
    pub fn loading(
        result: Result<Vec<Record>, LoadError>,
        page_size: usize,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let page_size = NonZeroUsize::new(page_size).unwrap_or(crate::state::DEFAULT_PAGE_SIZE);

        let app = TuiApp::new_for_test(
            terminal,
            AppState::waiting_for_load(page_size),
            Some(PendingLoad::ready(result)),
            KeyBindings::default(),
        );

        Ok(Self { app, running: true })
    }

    /// One timer tick: install the load result if it has arrived.
    pub fn tick(&mut self) -> bool {
        self.app.poll_load_test()
    }

    /// Whether the load result is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.app.is_load_pending()
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        let mods = match key {
            KeyCode::Char(c) if c.is_ascii_uppercase() => KeyModifiers::SHIFT,
            _ => KeyModifiers::NONE,
        };
        self.send_key_with_mods(key, mods)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early if the app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break;
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Names on the visible page, in order.
    pub fn visible_names(&self) -> Vec<String> {
        self.state()
            .engine()
            .visible()
            .iter()
            .map(|r| r.name().to_string())
            .collect()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
