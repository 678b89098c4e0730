//! TUI application module
//!
//! Holds the controller: load sequencing, the input loop and key dispatch.

mod event_loop;
mod key_handling;
mod lifecycle;
mod search;
mod tui_app;

pub use tui_app::TuiApp;
