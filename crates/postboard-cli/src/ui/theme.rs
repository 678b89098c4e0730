//! Terminal colours for each configured theme

use ratatui::style::Color;

pub use postboard_core::Theme;

/// Colours a theme draws with
pub trait Palette {
    /// Gets the focused border color
    fn focused_border(self) -> Color;
    /// Gets the unfocused border color
    fn unfocused_border(self) -> Color;
    /// Gets the text color
    fn text(self) -> Color;
    /// Gets the secondary text color (emails, hints)
    fn muted(self) -> Color;
    /// Gets the error color used by the notification popup
    fn error(self) -> Color;
    /// Gets the highlight color
    fn highlight(self) -> Color;
}

impl Palette for Theme {
    fn focused_border(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(136, 192, 208),
            Self::Gruvbox => Color::Rgb(251, 184, 108),
            Self::TokyoNight => Color::Rgb(122, 162, 247),
            Self::Monochrome => Color::Rgb(100, 200, 255),
        }
    }

    fn unfocused_border(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(216, 222, 233),
            Self::Gruvbox => Color::Rgb(168, 153, 132),
            Self::TokyoNight => Color::Rgb(86, 95, 137),
            Self::Monochrome => Color::Rgb(128, 128, 128),
        }
    }

    fn text(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(236, 239, 244),
            Self::Gruvbox => Color::Rgb(235, 219, 178),
            Self::TokyoNight => Color::Rgb(192, 202, 245),
            Self::Monochrome => Color::Rgb(255, 255, 255),
        }
    }

    fn muted(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(129, 161, 193),
            Self::Gruvbox => Color::Rgb(146, 131, 116),
            Self::TokyoNight => Color::Rgb(86, 95, 137),
            Self::Monochrome => Color::DarkGray,
        }
    }

    fn error(self) -> Color {
        match self {
            Self::Nord => Color::Rgb(191, 97, 106),
            Self::Gruvbox => Color::Rgb(251, 73, 52),
            Self::TokyoNight => Color::Rgb(247, 118, 142),
            Self::Monochrome => Color::White,
        }
    }

    fn highlight(self) -> Color {
        self.focused_border()
    }
}
