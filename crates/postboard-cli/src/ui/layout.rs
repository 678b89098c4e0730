//! Layout calculation utilities for the card grid
//!
//! The renderer records the real body area here so scrolling uses the
//! same dimensions that were drawn.

/// Narrowest a card may get before the grid drops a column
pub const MIN_CARD_WIDTH: u16 = 36;
/// Most columns the grid will use
pub const MAX_GRID_COLUMNS: u16 = 3;
/// Height of a single card including borders
pub const CARD_HEIGHT: u16 = 11;
/// Height of the header row (search, button, selector)
pub const HEADER_HEIGHT: u16 = 3;
/// Height of the key hint footer
pub const FOOTER_HEIGHT: u16 = 1;

/// Cache of actual rendered layout dimensions
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    /// Body area last drawn, as (width, height)
    pub body_area: Option<(u16, u16)>,
}

impl LayoutCache {
    /// Creates a new empty layout cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the body area used by the last render
    pub fn set_body_area(&mut self, width: u16, height: u16) {
        self.body_area = Some((width, height));
    }

    /// Number of grid columns for the cached body width
    pub fn columns(&self) -> u16 {
        self.body_area.map_or(1, |(width, _)| grid_columns(width))
    }

    /// Number of card rows that fit in the cached body height
    pub fn visible_rows(&self) -> usize {
        self.body_area
            .map_or(1, |(_, height)| visible_card_rows(height))
    }
}

/// Columns that fit in `width`, between 1 and [`MAX_GRID_COLUMNS`]
pub fn grid_columns(width: u16) -> u16 {
    (width / MIN_CARD_WIDTH).clamp(1, MAX_GRID_COLUMNS)
}

/// Card rows that fit in `height`, at least one
pub fn visible_card_rows(height: u16) -> usize {
    usize::from((height / CARD_HEIGHT).max(1))
}

/// Rows needed to lay out `cards` cards in `columns` columns
pub fn total_rows(cards: usize, columns: u16) -> usize {
    cards.div_ceil(usize::from(columns.max(1)))
}

/// Largest first-row index that still fills the viewport
pub fn max_scroll(cards: usize, columns: u16, visible_rows: usize) -> usize {
    total_rows(cards, columns).saturating_sub(visible_rows)
}
