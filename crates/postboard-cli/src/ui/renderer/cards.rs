//! Post card drawing

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::super::layout::{self, CARD_HEIGHT};
use super::super::theme::{Palette as _, Theme};
use super::super::view::PostCard;

/// Draws the visible window of `cards` into `area`, starting at card row
/// `first_row`.
pub fn render_grid(frame: &mut Frame, area: Rect, cards: &[PostCard], first_row: usize, theme: Theme) {
    let columns = layout::grid_columns(area.width);
    let visible_rows = layout::visible_card_rows(area.height);
    let per_row = usize::from(columns);

    for (row_offset, row_cards) in cards
        .chunks(per_row)
        .skip(first_row)
        .take(visible_rows)
        .enumerate()
    {
        let top = area.y + CARD_HEIGHT * row_offset as u16;
        let row_area = Rect {
            y: top,
            height: CARD_HEIGHT.min(area.bottom().saturating_sub(top)),
            ..area
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, u32::from(columns)); per_row])
            .split(row_area);

        for (card, cell) in row_cards.iter().zip(cells.iter()) {
            render_card(frame, *cell, card, theme);
        }
    }
}

/// Draws a single card
pub fn render_card(frame: &mut Frame, area: Rect, card: &PostCard, theme: Theme) {
    let muted = Style::default().fg(theme.muted());
    let lines = vec![
        Line::from(Span::styled(
            card.author_name.clone(),
            Style::default().fg(theme.highlight()),
        )),
        Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(theme.text())
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            card.preview.clone(),
            Style::default().fg(theme.text()),
        )),
    ];

    let mut footer = vec![Span::styled("Comentarios · Me gusta", muted)];
    if !card.author_email.is_empty() {
        footer.push(Span::styled(format!("  ✉ {}", card.author_email), muted));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", card.id_label))
                .title_bottom(Line::from(footer))
                .border_style(Style::default().fg(theme.unfocused_border()))
                .padding(Padding::horizontal(1)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
