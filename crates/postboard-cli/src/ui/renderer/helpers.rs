//! Helper utilities for rendering UI components

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::super::theme::{Palette as _, Theme};

/// Braille spinner frames, one per tick
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for `frame`, wrapping around
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// Border style for a pane depending on focus
pub fn border_style(is_focused: bool, theme: Theme) -> Style {
    if is_focused {
        Style::default().fg(theme.focused_border())
    } else {
        Style::default().fg(theme.unfocused_border())
    }
}

/// Style for the selected or pressable element of a pane
pub fn selection_style(is_selected: bool, theme: Theme) -> Style {
    if is_selected {
        Style::default()
            .fg(theme.highlight())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text())
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draws `line` centered horizontally and vertically in `area`
pub fn render_centered_line(frame: &mut Frame, area: Rect, line: Line<'_>) {
    let slot = centered_rect(area.width, 1, area);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), slot);
}
