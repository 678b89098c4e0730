//! Application lifecycle operations (constructors, loading, raw mode)

use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use postboard_core::{Config, DataStore, Result};
use postboard_providers::Gateway;
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::pin::pin;
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use super::key_handling::is_quit_event;
use super::tui_app::TuiApp;
use crate::ui::event_source::{CrosstermEventSource, InputEventSource};
use crate::ui::input::SearchInput;
use crate::ui::layout;
use crate::ui::renderer::{FocusedPane, Renderer};
use crate::ui::state::{LoadState, UiState};

/// Interval between spinner frames while loading
pub const SPINNER_TICK: Duration = Duration::from_millis(100);

impl TuiApp<CrosstermBackend<io::Stdout>> {
    /// Creates a `TuiApp` drawing to stdout and reading crossterm events
    ///
    /// # Errors
    /// Returns an error if terminal initialization or clearing fails.
    pub fn new(gateway: Gateway, config: Config, config_path: Option<PathBuf>) -> Result<Self> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        Ok(Self::with_backend(terminal, Box::new(CrosstermEventSource), gateway, config)
            .with_config_path(config_path))
    }

    /// Enables raw mode and switches to the alternate screen
    ///
    /// # Errors
    /// Returns an error if the terminal rejects either mode.
    pub fn enable_raw_mode() -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(())
    }

    /// Leaves the alternate screen and disables raw mode
    ///
    /// # Errors
    /// Returns an error if restoring the terminal fails.
    pub fn disable_raw_mode(&mut self) -> Result<()> {
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<B: Backend> TuiApp<B> {
    /// Creates an app over any backend and event source
    pub fn with_backend(
        terminal: Terminal<B>,
        event_source: Box<dyn InputEventSource + Send>,
        gateway: Gateway,
        config: Config,
    ) -> Self {
        let theme = config.ui.theme;
        Self {
            terminal,
            event_source,
            gateway,
            store: DataStore::default(),
            state: UiState::default(),
            search_input: SearchInput::default(),
            renderer: Renderer::new(theme),
            focused_pane: FocusedPane::default(),
            layout_cache: layout::LayoutCache::new(),
            config,
            config_path: None,
        }
    }

    /// Persists theme changes to `path`
    #[must_use]
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Replaces the input event source
    pub fn set_event_source(&mut self, event_source: Box<dyn InputEventSource + Send>) {
        self.event_source = event_source;
    }

    /// Runs the initial load: `Idle -> Loading -> Ready | Failed`.
    ///
    /// The spinner keeps animating until the gateway resolves. Input that
    /// arrives meanwhile is thrown away so no search runs before the data
    /// exists; only the quit keys are honoured. Calling this again after the
    /// first load does nothing.
    ///
    /// Returns `true` when the user asked to quit while loading.
    ///
    /// # Errors
    /// Returns an error if reading input or drawing to the terminal fails.
    /// A failed load is not an error: it ends in [`LoadState::Failed`].
    pub async fn load(&mut self) -> Result<bool> {
        self.state.enter_loading();
        if self.state.load_state() != LoadState::Loading {
            return Ok(false);
        }
        self.render()?;

        let gateway = self.gateway.clone();
        let mut fetch = pin!(gateway.load());
        let mut ticker = interval(SPINNER_TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let outcome = loop {
            tokio::select! {
                outcome = &mut fetch => break outcome,
                _ = ticker.tick() => {
                    if self.drain_pending_input()? {
                        return Ok(true);
                    }
                    self.state.advance_spinner();
                    self.render()?;
                }
            }
        };

        match outcome {
            Ok(store) => {
                self.store = store;
                self.state.enter_ready(&self.store);
            }
            Err(error) => {
                tracing::error!("Showing load failure notification: {error}");
                self.state.enter_failed();
            }
        }

        if self.drain_pending_input()? {
            return Ok(true);
        }
        self.render()?;
        Ok(false)
    }

    /// Drops every queued input event. Returns `true` as soon as a quit key
    /// is found.
    fn drain_pending_input(&mut self) -> Result<bool> {
        let mut discarded = 0usize;
        while self.event_source.poll(Duration::ZERO)? {
            let event = self.event_source.read()?;
            if is_quit_event(&event) {
                tracing::info!("Quit requested while loading");
                return Ok(true);
            }
            discarded += 1;
        }
        if discarded > 0 {
            tracing::debug!("Discarded {discarded} input events received while loading");
        }
        Ok(false)
    }
}
