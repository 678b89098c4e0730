//! Main TUI application struct and read accessors

use postboard_core::{Config, DataStore};
use postboard_providers::Gateway;
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::path::PathBuf;

use crate::ui::event_source::InputEventSource;
use crate::ui::input::SearchInput;
use crate::ui::layout;
use crate::ui::renderer::{FocusedPane, Renderer};
use crate::ui::state::UiState;

/// Main TUI application
pub struct TuiApp<B: Backend> {
    /// Terminal instance used to render the UI
    pub(super) terminal: Terminal<B>,
    /// Source of input events (abstracted for testing)
    pub(super) event_source: Box<dyn InputEventSource + Send>,
    /// Performs the initial load
    pub(super) gateway: Gateway,
    /// Loaded posts and users; empty until the load succeeds
    pub(super) store: DataStore,
    /// Current UI state, including load phase and visibility
    pub(super) state: UiState,
    /// Search box contents
    pub(super) search_input: SearchInput,
    /// Responsible for drawing UI components
    pub(super) renderer: Renderer,
    /// Which pane currently has focus
    pub(super) focused_pane: FocusedPane,
    /// Cache of actual rendered layout dimensions
    pub(super) layout_cache: layout::LayoutCache,
    /// Loaded configuration, updated when the theme changes
    pub(super) config: Config,
    /// Where the theme is persisted, if anywhere
    pub(super) config_path: Option<PathBuf>,
}

impl<B: Backend> TuiApp<B> {
    /// Current UI state
    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Loaded data
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// Pane with keyboard focus
    pub fn focused_pane(&self) -> FocusedPane {
        self.focused_pane
    }

    /// Current search box text
    pub fn search_text(&self) -> &str {
        self.search_input.text()
    }

    /// Active renderer (theme)
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Terminal backend, for inspecting drawn output
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}
