//! Terminal user interface for the post board.
//! Provides rendering, input handling and the load state machine.

// Publicly exposed modules
/// Input event source abstraction (public so tests can inject events)
pub mod event_source;
/// Search text input
pub mod input;
/// Layout calculation utilities
pub mod layout;
/// Rendering components
pub mod renderer;
/// UI state management
pub mod state;
/// Theme definitions
pub mod theme;
/// Card view models
pub mod view;

/// Application controller and event loop (contains sub-modules)
mod app;

// Re-exports
pub use app::TuiApp;
