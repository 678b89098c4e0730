//! Main event loop and rendering

use crossterm::event::{Event, KeyEventKind};
use postboard_core::Result;
use ratatui::backend::Backend;
use std::time::Duration;

use super::tui_app::TuiApp;
use crate::ui::renderer::RenderCtx;

/// How long a single poll waits for input
const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl<B: Backend> TuiApp<B> {
    /// Run the input loop until quit
    ///
    /// # Errors
    /// Returns an error if reading input or rendering fails.
    pub fn run_event_loop(&mut self) -> Result<()> {
        loop {
            if !self.event_source.poll(POLL_INTERVAL)? {
                continue;
            }

            let event = self.event_source.read()?;
            if self.handle_input(&event) {
                tracing::info!("Quit requested");
                break;
            }

            // Render after processing any event
            self.render()?;
        }

        Ok(())
    }

    /// Handle an input event and return true if the app should quit
    pub(super) fn handle_input(&mut self, event: &Event) -> bool {
        if let Event::Key(key) = event
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            return self.handle_key_event(key);
        }
        false
    }

    /// Renders the UI to the terminal
    ///
    /// # Errors
    /// Returns an error if drawing to the terminal fails.
    pub fn render(&mut self) -> Result<()> {
        let layout_cache = &mut self.layout_cache;
        let renderer = &self.renderer;
        let state = &self.state;
        let input = &self.search_input;
        let focused = self.focused_pane;

        self.terminal.draw(|frame| {
            let mut ctx = RenderCtx {
                state,
                input,
                focused,
                layout_cache,
            };
            renderer.render(frame, &mut ctx);
        })?;

        Ok(())
    }
}
