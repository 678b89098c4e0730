//! Keyboard input handling and dispatch

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;

use super::tui_app::TuiApp;
use crate::ui::renderer::FocusedPane;

/// Rows moved by PageUp/PageDown
const PAGE_ROWS: isize = 3;

/// Ctrl+C or Ctrl+Q
fn is_quit_key(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('q' | 'c'))
}

/// Whether `event` is a quit key press
pub(super) fn is_quit_event(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key) if key.kind != KeyEventKind::Release && is_quit_key(key)
    )
}

impl<B: Backend> TuiApp<B> {
    /// Handles a single key event and returns true if the app should quit
    pub(super) fn handle_key_event(&mut self, key: &KeyEvent) -> bool {
        if is_quit_key(key) {
            return true;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // The notification blocks everything until it is acknowledged
        if self.state.notification().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notification();
            }
            return false;
        }

        match key.code {
            KeyCode::Char('p') if ctrl => self.cycle_theme(),
            KeyCode::Tab => self.focused_pane = self.focused_pane.next(),
            KeyCode::BackTab => self.focused_pane = self.focused_pane.previous(),
            _ => match self.focused_pane {
                FocusedPane::Search => self.handle_search_pane_key(key),
                FocusedPane::Button => self.handle_button_pane_key(key),
                FocusedPane::Filter => self.handle_filter_pane_key(key),
                FocusedPane::Posts => self.handle_posts_pane_key(key),
            },
        }
        false
    }

    fn handle_search_pane_key(&mut self, key: &KeyEvent) {
        if key.code == KeyCode::Enter {
            self.trigger_search();
        } else {
            self.search_input.handle_input(key);
        }
    }

    fn handle_button_pane_key(&mut self, key: &KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.trigger_search();
        }
    }

    fn handle_filter_pane_key(&mut self, key: &KeyEvent) {
        let selector = self.state.selector_mut();
        let changed = match key.code {
            KeyCode::Right | KeyCode::Down => selector.select_next(),
            KeyCode::Left | KeyCode::Up => selector.select_previous(),
            _ => false,
        };
        // Changing the author searches immediately with the current text
        if changed {
            self.trigger_search();
        }
    }

    fn handle_posts_pane_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Up => self.scroll_grid(-1),
            KeyCode::Down => self.scroll_grid(1),
            KeyCode::PageUp => self.scroll_grid(-PAGE_ROWS),
            KeyCode::PageDown => self.scroll_grid(PAGE_ROWS),
            KeyCode::Home => self.state.grid_scroll = 0,
            KeyCode::End => self.scroll_grid_to_end(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::TuiApp;
    use crate::ui::event_source::ScriptedEventSource;
    use crate::ui::layout::CARD_HEIGHT;
    use crate::ui::renderer::FocusedPane;
    use crate::ui::state::{LOAD_FAILED_MESSAGE, LoadState};
    use super::is_quit_event;
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use postboard_core::{Config, Post, User};
    use postboard_providers::{Gateway, MockSource};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;

    fn posts(count: u64) -> Vec<Post> {
        (1..=count)
            .map(|id| Post {
                id,
                user_id: Some(if id % 2 == 0 { 2 } else { 1 }),
                title: if id == 1 {
                    "Sunt Aut Facere".to_owned()
                } else {
                    format!("post {id}")
                },
                body: "cuerpo".to_owned(),
            })
            .collect()
    }

    fn users() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Leanne Graham".to_owned(),
                email: "Sincere@april.biz".to_owned(),
            },
            User {
                id: 2,
                name: "Ervin Howell".to_owned(),
                email: "Shanna@melissa.tv".to_owned(),
            },
        ]
    }

    fn app(source: MockSource) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(120, CARD_HEIGHT * 2 + 6)).expect("terminal");
        TuiApp::with_backend(
            terminal,
            Box::new(ScriptedEventSource::default()),
            Gateway::new(Arc::new(source)),
            Config::default(),
        )
    }

    async fn loaded_app(count: u64) -> TuiApp<TestBackend> {
        let mut app = app(MockSource::new().with_posts(posts(count)).with_users(users()));
        app.load().await.expect("load");
        app
    }

    fn press(app: &mut TuiApp<TestBackend>, code: KeyCode) -> bool {
        app.handle_input(&ScriptedEventSource::key(code))
    }

    fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
        for event in ScriptedEventSource::typed(text) {
            app.handle_input(&event);
        }
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut app = loaded_app(1).await;
        assert!(app.handle_input(&ScriptedEventSource::ctrl('q')));
        assert!(app.handle_input(&ScriptedEventSource::ctrl('c')));
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_quit_event_detection() {
        assert!(is_quit_event(&ScriptedEventSource::ctrl('q')));
        assert!(is_quit_event(&ScriptedEventSource::ctrl('c')));
        assert!(!is_quit_event(&ScriptedEventSource::ctrl('p')));
        assert!(!is_quit_event(&ScriptedEventSource::key(KeyCode::Char('q'))));

        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
        release.kind = KeyEventKind::Release;
        assert!(!is_quit_event(&Event::Key(release)));
    }

    #[tokio::test]
    async fn test_enter_in_search_box_runs_search() {
        let mut app = loaded_app(4).await;
        type_text(&mut app, "FACERE");
        assert_eq!(app.state().view().cards().len(), 4);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().view().cards().len(), 1);
        assert_eq!(app.search_text(), "FACERE");
    }

    #[tokio::test]
    async fn test_button_runs_search_on_enter_and_space() {
        let mut app = loaded_app(4).await;
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane(), FocusedPane::Button);

        press(&mut app, KeyCode::Char(' '));
        assert!(app.state().visibility().no_results);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::Enter);
        assert!(app.state().visibility().no_results);
    }

    #[tokio::test]
    async fn test_selector_change_searches_immediately() {
        let mut app = loaded_app(4).await;
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane(), FocusedPane::Filter);

        press(&mut app, KeyCode::Right);
        let ids: Vec<&str> = app
            .state()
            .view()
            .cards()
            .iter()
            .map(|card| card.id_label.as_str())
            .collect();
        assert_eq!(ids, vec!["#1", "#3"]);

        press(&mut app, KeyCode::Left);
        assert_eq!(app.state().view().cards().len(), 4);
    }

    #[tokio::test]
    async fn test_selector_at_edge_does_not_search() {
        let mut app = loaded_app(4).await;
        app.focused_pane = FocusedPane::Filter;
        app.state.grid_scroll = 1;

        press(&mut app, KeyCode::Left);
        assert_eq!(app.state().grid_scroll, 1);
    }

    #[tokio::test]
    async fn test_posts_pane_scrolls_within_bounds() {
        let mut app = loaded_app(30).await;
        app.render().expect("render");
        app.focused_pane = FocusedPane::Posts;

        press(&mut app, KeyCode::Up);
        assert_eq!(app.state().grid_scroll, 0);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.state().grid_scroll, 1);

        press(&mut app, KeyCode::End);
        let end = app.state().grid_scroll;
        assert!(end > 1);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.state().grid_scroll, end);

        press(&mut app, KeyCode::Home);
        assert_eq!(app.state().grid_scroll, 0);
    }

    #[tokio::test]
    async fn test_notification_blocks_input_until_dismissed() {
        let mut app = app(MockSource::new().failing_posts("boom"));
        app.load().await.expect("load");
        assert_eq!(app.state().load_state(), LoadState::Failed);
        assert_eq!(app.state().notification(), Some(LOAD_FAILED_MESSAGE));

        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.search_text(), "");
        assert_eq!(app.focused_pane(), FocusedPane::Search);

        press(&mut app, KeyCode::Esc);
        assert!(app.state().notification().is_none());
        assert_eq!(app.state().notifications_raised(), 1);
    }

    #[tokio::test]
    async fn test_search_before_ready_is_ignored() {
        let mut app = app(MockSource::new().failing_users("boom"));
        app.load().await.expect("load");
        // First Enter only dismisses the notification
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert!(app.state().view().is_empty());
        assert!(!app.state().visibility().no_results);
    }

    #[tokio::test]
    async fn test_ctrl_p_cycles_theme() {
        let mut app = loaded_app(1).await;
        let before = app.renderer().theme();
        app.handle_input(&ScriptedEventSource::ctrl('p'));
        assert_eq!(app.renderer().theme(), before.next());
        assert_eq!(app.config().ui.theme, before.next());
    }

    #[tokio::test]
    async fn test_key_release_is_ignored() {
        let mut app = loaded_app(1).await;
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.handle_input(&Event::Key(release));
        assert_eq!(app.search_text(), "");
    }
}
