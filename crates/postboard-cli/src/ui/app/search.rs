//! Search and theme operations triggered from the keyboard

use postboard_core::PostFilter;
use ratatui::backend::Backend;

use super::tui_app::TuiApp;
use crate::ui::layout;
use crate::ui::state::LoadState;
use crate::ui::view::render_posts;

impl<B: Backend> TuiApp<B> {
    /// Applies the current search text and author selection and replaces
    /// the rendered view with the result.
    ///
    /// Does nothing until the data is loaded.
    pub(super) fn trigger_search(&mut self) {
        if self.state.load_state() != LoadState::Ready {
            tracing::debug!("Search ignored in {:?}", self.state.load_state());
            return;
        }

        let filter = PostFilter::new(
            self.search_input.text(),
            self.state.selector().selected_filter(),
        );
        let matches = self.store.search(&filter);
        tracing::info!(
            "Search '{}' with {:?} matched {} posts",
            filter.search(),
            filter.user(),
            matches.len()
        );

        let view = render_posts(&matches, self.store.users());
        self.state.show_view(view);
    }

    /// Scrolls the card grid by `delta` rows, clamped to the content
    pub(super) fn scroll_grid(&mut self, delta: isize) {
        let max_scroll = self.max_grid_scroll();
        let current = self.state.grid_scroll.min(max_scroll);
        self.state.grid_scroll = current.saturating_add_signed(delta).min(max_scroll);
    }

    /// Scrolls the card grid to the last page
    pub(super) fn scroll_grid_to_end(&mut self) {
        self.state.grid_scroll = self.max_grid_scroll();
    }

    fn max_grid_scroll(&self) -> usize {
        layout::max_scroll(
            self.state.view().cards().len(),
            self.layout_cache.columns(),
            self.layout_cache.visible_rows(),
        )
    }

    /// Cycles to the next theme and saves it to the config file
    pub(super) fn cycle_theme(&mut self) {
        let new_theme = self.renderer.theme().next();
        self.renderer.set_theme(new_theme);
        self.config.ui.theme = new_theme;

        if let Some(path) = &self.config_path
            && let Err(error) = self.config.save_to_file(path)
        {
            tracing::warn!("Failed to save theme to {}: {error}", path.display());
        }
    }
}
