//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod pagination;
mod search_input;
mod styles;
mod table;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, status_text, ScreenAreas};
pub use pagination::{page_bar_line, page_bar_text};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, TableStyles};
pub use table::truncate;

use crate::config::keybindings::KeyBindings;
use crate::model::KeyAction;
use crate::source::{PendingLoad, RecordSource};
use crate::state::{
    edit_input_handler, handle_table_action, search_input_handler, Action, AppState, EditInput,
    FocusPane,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::num::NonZeroUsize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Event poll timeout. The pending load is checked on every tick.
const TIMER_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    /// Background load, until its result has been installed
    pending_load: Option<PendingLoad>,
    key_bindings: KeyBindings,
    styles: TableStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        pending_load: PendingLoad,
        styles: TableStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            pending_load: Some(pending_load),
            key_bindings: KeyBindings::default(),
            styles,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C).
    /// Redraws on key input, resize, or when the pending load reports.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let event = if event::poll(TIMER_INTERVAL)? {
                Some(event::read()?)
            } else {
                None
            };
            if self.step(event)? {
                return Ok(());
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// One loop iteration: handle `event` (None on a timer tick), then check
    /// the pending load, then redraw if anything changed.
    ///
    /// The load is checked on every iteration, not only on idle ticks.
    /// Returns true when the user quit.
    fn step(&mut self, event: Option<Event>) -> Result<bool, TuiError> {
        let mut redraw = false;
        match event {
            Some(Event::Key(key)) => {
                if self.handle_key(key) {
                    return Ok(true);
                }
                redraw = true;
            }
            Some(Event::Resize(width, height)) => {
                debug!("Handling resize to {}x{}", width, height);
                redraw = true;
            }
            _ => {}
        }

        if self.poll_load() {
            redraw = true;
        }
        if redraw {
            self.draw()?;
        }
        Ok(false)
    }

    /// Install the load result if it has arrived.
    ///
    /// Returns true when state changed and a redraw is due. A failed load
    /// is logged and leaves the table empty.
    fn poll_load(&mut self) -> bool {
        let Some(pending) = self.pending_load.as_mut() else {
            return false;
        };
        let Some(result) = pending.poll() else {
            return false;
        };

        self.pending_load = None;
        self.app_state.loading = false;

        match result {
            Ok(records) => {
                info!(count = records.len(), "Installing records");
                self.app_state.dispatch(Action::Loaded(records));
            }
            Err(e) => {
                error!(error = %e, "Failed to load records");
            }
        }
        true
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even mid-edit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.help_visible {
            return self.handle_help_key(key);
        }

        if self.app_state.focus == FocusPane::Search {
            self.handle_search_key(key);
            return false;
        }

        if self.app_state.is_editing() {
            self.handle_edit_key(key);
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::StartSearch => search_input_handler::activate_search_input(&mut self.app_state),
            other => handle_table_action(&mut self.app_state, other),
        }

        false
    }

    /// While help is open only closing and quitting do anything.
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => true,
            Some(KeyAction::Help) => {
                self.app_state.help_visible = false;
                false
            }
            _ => {
                if key.code == KeyCode::Esc {
                    self.app_state.help_visible = false;
                }
                false
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                search_input_handler::handle_char_input(state, ch);
            }
            KeyCode::Backspace => search_input_handler::handle_backspace(state),
            KeyCode::Left => search_input_handler::handle_cursor_left(state),
            KeyCode::Right => search_input_handler::handle_cursor_right(state),
            KeyCode::Enter => search_input_handler::submit_search(state),
            KeyCode::Esc => search_input_handler::cancel_search(state),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let state = &mut self.app_state;
        let input = match key.code {
            KeyCode::Enter => return edit_input_handler::save_edit(state),
            KeyCode::Esc => return edit_input_handler::cancel_edit(state),
            KeyCode::Tab | KeyCode::BackTab => EditInput::NextField,
            KeyCode::Backspace => EditInput::Backspace,
            KeyCode::Left => EditInput::Left,
            KeyCode::Right => EditInput::Right,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                EditInput::Char(ch)
            }
            _ => return,
        };
        edit_input_handler::handle_edit_input(state, input);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        pending_load: Option<PendingLoad>,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            pending_load,
            key_bindings,
            styles: TableStyles::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Run one timer tick's worth of load polling.
    pub(crate) fn poll_load_test(&mut self) -> bool {
        self.poll_load()
    }

    pub(crate) fn is_load_pending(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// CLI arguments for TUI initialization
///
/// Carries the resolved startup options from `main` into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Rows per page.
    pub page_size: NonZeroUsize,
    /// Query applied before the first frame (`--search`).
    pub search: Option<String>,
    /// Color output (`--no-color`, `NO_COLOR`).
    pub color: ColorConfig,
}

impl CliArgs {
    /// Bundles the resolved startup options.
    pub fn new(page_size: NonZeroUsize, search: Option<String>, color: ColorConfig) -> Self {
        Self {
            page_size,
            search,
            color,
        }
    }

    /// Initial state: empty, loading, with the startup query applied.
    pub fn initial_state(&self) -> AppState {
        let mut state = AppState::waiting_for_load(self.page_size);
        if let Some(query) = self.search.as_deref().filter(|q| !q.is_empty()) {
            state.dispatch(Action::SetQuery(query.to_string()));
        }
        state
    }
}

/// Initialize and run the TUI application with a record source
///
/// Starts the background load, runs the event loop, and ensures terminal
/// cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(source: RecordSource, args: CliArgs) -> Result<(), TuiError> {
    info!(source = %source.describe(), page_size = args.page_size.get(), "Starting load");
    let pending = PendingLoad::spawn(source);
    let styles = TableStyles::with_color_config(args.color);

    let mut app = TuiApp::new(args.initial_state(), pending, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
