use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Single-line search box
pub struct SearchInput {
    input_area: TextArea<'static>,
}

impl SearchInput {
    /// Gets a reference to the input area
    pub fn input_area(&self) -> &TextArea<'static> {
        &self.input_area
    }

    /// Current search text
    pub fn text(&self) -> &str {
        self.input_area.lines().first().map_or("", String::as_str)
    }

    /// Feeds a key event to the text area.
    ///
    /// Line breaks are swallowed so the box always holds one line.
    pub fn handle_input(&mut self, key: &KeyEvent) {
        if is_line_break(key) {
            return;
        }
        self.input_area.input(Event::Key(*key));
    }

    /// Clears the search text
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn is_line_break(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Default for SearchInput {
    fn default() -> Self {
        let mut input_area = TextArea::default();
        input_area.set_cursor_line_style(Style::default());
        input_area.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        input_area.set_placeholder_text("Buscar por título o contenido");
        Self { input_area }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut SearchInput, code: KeyCode, modifiers: KeyModifiers) {
        input.handle_input(&KeyEvent::new(code, modifiers));
    }

    #[test]
    fn test_typing_builds_text() {
        let mut input = SearchInput::default();
        for ch in "qui est".chars() {
            press(&mut input, KeyCode::Char(ch), KeyModifiers::NONE);
        }
        press(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.text(), "qui es");
    }

    #[test]
    fn test_line_breaks_are_ignored() {
        let mut input = SearchInput::default();
        press(&mut input, KeyCode::Char('a'), KeyModifiers::NONE);
        press(&mut input, KeyCode::Enter, KeyModifiers::NONE);
        press(&mut input, KeyCode::Char('m'), KeyModifiers::CONTROL);
        press(&mut input, KeyCode::Char('j'), KeyModifiers::CONTROL);
        press(&mut input, KeyCode::Char('b'), KeyModifiers::NONE);

        assert_eq!(input.input_area().lines().len(), 1);
        assert_eq!(input.text(), "ab");
    }

    #[test]
    fn test_clear_empties_text() {
        let mut input = SearchInput::default();
        press(&mut input, KeyCode::Char('x'), KeyModifiers::NONE);
        input.clear();
        assert_eq!(input.text(), "");
    }
}
