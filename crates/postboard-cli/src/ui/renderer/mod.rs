//! UI rendering module
//!
//! Organized into focused sub-modules for better maintainability.

mod cards;
mod helpers;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use super::input::SearchInput;
use super::layout::{self, FOOTER_HEIGHT, HEADER_HEIGHT};
use super::state::UiState;
use super::theme::{Palette as _, Theme};

/// Text of the search button
pub const SEARCH_BUTTON_LABEL: &str = "Buscar";
/// Text shown next to the spinner while loading
pub const LOADING_LABEL: &str = "Cargando publicaciones...";
/// Text of the empty-results panel
pub const NO_RESULTS_LABEL: &str = "No se encontraron publicaciones";
/// Title of the blocking notification popup
pub const NOTIFICATION_TITLE: &str = "Aviso";
/// Dismiss hint inside the notification popup
pub const NOTIFICATION_DISMISS_HINT: &str = "[Enter] Aceptar";

const BUTTON_WIDTH: u16 = 12;
const SELECTOR_WIDTH: u16 = 32;
const POPUP_WIDTH: u16 = 60;
const POPUP_HEIGHT: u16 = 7;
const KEY_HINTS: &str =
    " Tab: foco · Enter: buscar · ←/→: autor · ↑/↓: desplazar · Ctrl+P: tema · Ctrl+Q: salir";

/// Handles rendering of the TUI
pub struct Renderer {
    theme: Theme,
}

/// Rendering context with all necessary references
pub struct RenderCtx<'ctx> {
    /// UI state reference
    pub state: &'ctx UiState,
    /// Search input reference
    pub input: &'ctx SearchInput,
    /// Currently focused pane
    pub focused: FocusedPane,
    /// Layout cache to populate with actual rendered dimensions
    pub layout_cache: &'ctx mut layout::LayoutCache,
}

impl Renderer {
    /// Creates a new Renderer with the specified theme
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Gets the current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Renders the entire UI
    pub fn render(&self, frame: &mut Frame, ctx: &mut RenderCtx<'_>) {
        let main_area = frame.area();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(main_area);

        self.render_header(frame, rows[0], ctx);
        self.render_body(frame, rows[1], ctx);
        self.render_footer(frame, rows[2]);

        if let Some(message) = ctx.state.notification() {
            self.render_notification(frame, main_area, message);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, ctx: &RenderCtx<'_>) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(SELECTOR_WIDTH),
            ])
            .split(area);

        self.render_search_input(frame, columns[0], ctx);
        self.render_search_button(frame, columns[1], ctx.focused == FocusedPane::Button);
        self.render_selector(frame, columns[2], ctx);
    }

    fn render_search_input(&self, frame: &mut Frame, area: Rect, ctx: &RenderCtx<'_>) {
        let mut input_area = ctx.input.input_area().clone();
        let is_focused = ctx.focused == FocusedPane::Search;

        let cursor_style = if is_focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };

        input_area.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title("─── Búsqueda ")
                .border_style(helpers::border_style(is_focused, self.theme))
                .padding(Padding::horizontal(1)),
        );
        input_area.set_style(Style::default().fg(self.theme.text()));
        input_area.set_cursor_style(cursor_style);

        frame.render_widget(&input_area, area);
    }

    fn render_search_button(&self, frame: &mut Frame, area: Rect, is_focused: bool) {
        let button = Paragraph::new(SEARCH_BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(helpers::selection_style(is_focused, self.theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(helpers::border_style(is_focused, self.theme)),
            );
        frame.render_widget(button, area);
    }

    fn render_selector(&self, frame: &mut Frame, area: Rect, ctx: &RenderCtx<'_>) {
        let is_focused = ctx.focused == FocusedPane::Filter;
        let selector = ctx.state.selector();
        let arrow_style = Style::default().fg(self.theme.muted());

        let line = Line::from(vec![
            Span::styled("◀ ", arrow_style),
            Span::styled(
                selector.selected_label().to_owned(),
                helpers::selection_style(is_focused, self.theme),
            ),
            Span::styled(" ▶", arrow_style),
        ]);

        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("─── Autor ")
                .border_style(helpers::border_style(is_focused, self.theme)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, ctx: &mut RenderCtx<'_>) {
        let state = ctx.state;
        let visibility = state.visibility();
        let title = if visibility.grid {
            format!("─── Publicaciones ({}) ", state.view().cards().len())
        } else {
            "─── Publicaciones ".to_owned()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(helpers::border_style(
                ctx.focused == FocusedPane::Posts,
                self.theme,
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Cache the actual grid area so scrolling matches what was drawn
        ctx.layout_cache.set_body_area(inner.width, inner.height);

        if visibility.loading {
            let spinner = Line::from(vec![
                Span::styled(
                    helpers::spinner_glyph(state.spinner_frame()),
                    Style::default().fg(self.theme.highlight()),
                ),
                Span::styled(
                    format!(" {LOADING_LABEL}"),
                    Style::default().fg(self.theme.text()),
                ),
            ]);
            helpers::render_centered_line(frame, inner, spinner);
        } else if visibility.grid {
            let cards = state.view().cards();
            let max_scroll = layout::max_scroll(
                cards.len(),
                layout::grid_columns(inner.width),
                layout::visible_card_rows(inner.height),
            );
            cards::render_grid(
                frame,
                inner,
                cards,
                state.grid_scroll.min(max_scroll),
                self.theme,
            );
        } else if visibility.no_results {
            let line = Line::from(Span::styled(
                NO_RESULTS_LABEL,
                Style::default().fg(self.theme.muted()),
            ));
            helpers::render_centered_line(frame, inner, line);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = Paragraph::new(KEY_HINTS).style(Style::default().fg(self.theme.muted()));
        frame.render_widget(hints, area);
    }

    fn render_notification(&self, frame: &mut Frame, area: Rect, message: &str) {
        let popup = helpers::centered_rect(POPUP_WIDTH, POPUP_HEIGHT, area);
        let lines = vec![
            Line::from(Span::styled(
                message.to_owned(),
                Style::default().fg(self.theme.text()),
            )),
            Line::default(),
            Line::from(Span::styled(
                NOTIFICATION_DISMISS_HINT,
                helpers::selection_style(true, self.theme),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {NOTIFICATION_TITLE} "))
                    .border_style(Style::default().fg(self.theme.error()))
                    .padding(Padding::horizontal(1)),
            );

        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }
}

/// Focused pane identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    /// Search text box
    #[default]
    Search,
    /// "Buscar" button
    Button,
    /// Author selector
    Filter,
    /// Post card grid
    Posts,
}

impl FocusedPane {
    /// Next pane in Tab order
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Search => Self::Button,
            Self::Button => Self::Filter,
            Self::Filter => Self::Posts,
            Self::Posts => Self::Search,
        }
    }

    /// Previous pane in Tab order
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Search => Self::Posts,
            Self::Button => Self::Search,
            Self::Filter => Self::Button,
            Self::Posts => Self::Filter,
        }
    }
}
