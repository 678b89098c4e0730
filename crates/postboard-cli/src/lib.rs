//! Library interface for postboard-cli
//!
//! Exposes the terminal client so integration tests can drive it with a
//! test backend and scripted input.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

/// Command-line arguments
pub mod cli;
/// Session setup: logging, config and the data gateway
pub mod handlers;
/// Terminal session lifecycle
pub mod interactive;
/// Terminal user interface
pub mod ui;

pub use ui::TuiApp;
pub use ui::event_source::{CrosstermEventSource, InputEventSource, ScriptedEventSource};
pub use ui::renderer::{FocusedPane, Renderer};
pub use ui::state::{LoadState, UiState, Visibility};
pub use ui::theme::{Palette, Theme};
pub use ui::view::{PostCard, PostView};
