//! Drives the full controller against a test backend and scripted input.
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        clippy::tests_outside_test_module,
        reason = "Test allows"
    )
)]

use crossterm::event::{Event, KeyCode};
use postboard_cli::{FocusedPane, LoadState, ScriptedEventSource, TuiApp, Visibility};
use postboard_core::{Config, Post, User};
use postboard_providers::{Gateway, MockSource};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

const FAILURE_MESSAGE_START: &str = "Hubo un error al cargar";

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

fn posts() -> Vec<Post> {
    vec![
        Post {
            id: 1,
            user_id: Some(1),
            title: "sunt aut facere".to_owned(),
            body: "quia et suscipit".to_owned(),
        },
        Post {
            id: 2,
            user_id: Some(2),
            title: "qui est esse".to_owned(),
            body: "x".repeat(200),
        },
        Post {
            id: 3,
            user_id: Some(99),
            title: "ea molestias".to_owned(),
            body: "et iusto sed".to_owned(),
        },
    ]
}

fn app_with(source: MockSource, events: Vec<Event>) -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(140, 40)).expect("terminal");
    TuiApp::with_backend(
        terminal,
        Box::new(ScriptedEventSource::new(events)),
        Gateway::new(Arc::new(source)),
        Config::default(),
    )
}

fn healthy_source() -> MockSource {
    MockSource::new().with_posts(posts()).with_users(users())
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();

    for row in area.top()..area.bottom() {
        for col in area.left()..area.right() {
            if let Some(cell) = buffer.cell((col, row)) {
                result.push_str(cell.symbol());
            }
        }
        result.push('\n');
    }

    result
}

fn screen(app: &TuiApp<TestBackend>) -> String {
    buffer_to_string(app.backend().buffer())
}

fn script(mut events: Vec<Event>) -> Box<ScriptedEventSource> {
    events.push(ScriptedEventSource::ctrl('q'));
    Box::new(ScriptedEventSource::new(events))
}

#[tokio::test]
async fn successful_load_renders_every_post() {
    let mut app = app_with(healthy_source(), Vec::new());
    app.load().await.expect("load");

    assert_eq!(app.state().load_state(), LoadState::Ready);
    assert_eq!(
        app.state().visibility(),
        Visibility {
            loading: false,
            grid: true,
            no_results: false,
        }
    );
    assert_eq!(app.state().notifications_raised(), 0);

    let cards = app.state().view().cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].author_name, "Leanne Graham");
    assert_eq!(cards[1].preview, format!("{}...", "x".repeat(150)));
    assert_eq!(cards[2].author_name, "Usuario desconocido");

    let rendered = screen(&app);
    assert!(rendered.contains("Leanne Graham"));
    assert!(rendered.contains("Usuario desconocido"));
    assert!(rendered.contains("#2"));
    assert!(!rendered.contains("Cargando publicaciones"));
}

#[tokio::test]
async fn posts_failure_raises_single_notification() {
    let mut app = app_with(
        MockSource::new().with_users(users()).failing_posts("500"),
        Vec::new(),
    );
    app.load().await.expect("load");

    assert_eq!(app.state().load_state(), LoadState::Failed);
    assert!(!app.state().visibility().loading);
    assert_eq!(app.state().notifications_raised(), 1);
    assert!(screen(&app).contains(FAILURE_MESSAGE_START));
    assert_eq!(app.state().selector().options().len(), 1);
}

#[tokio::test]
async fn users_failure_raises_single_notification() {
    let mut app = app_with(
        MockSource::new().with_posts(posts()).failing_users("timeout"),
        Vec::new(),
    );
    app.load().await.expect("load");

    assert_eq!(app.state().load_state(), LoadState::Failed);
    assert_eq!(app.state().notifications_raised(), 1);
    assert!(app.store().posts().is_empty());
}

#[tokio::test]
async fn both_failing_still_notifies_once() {
    let mut app = app_with(
        MockSource::new().failing_posts("a").failing_users("b"),
        Vec::new(),
    );
    app.load().await.expect("load");
    assert_eq!(app.state().notifications_raised(), 1);

    app.set_event_source(script(vec![ScriptedEventSource::key(KeyCode::Enter)]));
    app.run_event_loop().expect("event loop");

    assert!(app.state().notification().is_none());
    assert_eq!(app.state().notifications_raised(), 1);
    assert!(!screen(&app).contains(FAILURE_MESSAGE_START));
}

#[tokio::test(start_paused = true)]
async fn input_during_load_is_discarded() {
    let mut events = ScriptedEventSource::typed("facere");
    events.push(ScriptedEventSource::key(KeyCode::Enter));
    events.push(ScriptedEventSource::key(KeyCode::Tab));
    let mut app = app_with(
        healthy_source().with_posts_delay(Duration::from_secs(2)),
        events,
    );

    app.load().await.expect("load");

    assert_eq!(app.search_text(), "");
    assert_eq!(app.focused_pane(), FocusedPane::Search);
    assert_eq!(app.state().view().cards().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn quit_key_during_load_ends_session() {
    let mut events = ScriptedEventSource::typed("abc");
    events.push(ScriptedEventSource::ctrl('q'));
    let mut app = app_with(
        healthy_source().with_posts_delay(Duration::from_secs(3600)),
        events,
    );

    let quit = timeout(Duration::from_secs(60), app.load())
        .await
        .expect("Ctrl+Q should end the load before the fetch resolves")
        .expect("load");

    assert!(quit);
    assert_eq!(app.state().load_state(), LoadState::Loading);
    assert_eq!(app.search_text(), "");
    assert_eq!(app.state().notifications_raised(), 0);
}

#[tokio::test]
async fn load_without_quit_keys_reports_no_quit() {
    let mut app = app_with(
        healthy_source(),
        vec![ScriptedEventSource::key(KeyCode::Char('q'))],
    );
    let quit = app.load().await.expect("load");

    assert!(!quit);
    assert_eq!(app.state().load_state(), LoadState::Ready);
}

#[tokio::test]
async fn typed_search_filters_and_empty_result_shows_panel() {
    let mut app = app_with(healthy_source(), Vec::new());
    app.load().await.expect("load");

    let mut events = ScriptedEventSource::typed("ESSE");
    events.push(ScriptedEventSource::key(KeyCode::Enter));
    app.set_event_source(script(events));
    app.run_event_loop().expect("event loop");

    let cards = app.state().view().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id_label, "#2");

    let mut events = ScriptedEventSource::typed("zzz");
    events.push(ScriptedEventSource::key(KeyCode::Enter));
    app.set_event_source(script(events));
    app.run_event_loop().expect("event loop");

    assert!(app.state().visibility().no_results);
    assert!(!app.state().visibility().grid);
    assert!(screen(&app).contains("No se encontraron publicaciones"));
}

#[tokio::test]
async fn author_selection_combines_with_search_text() {
    let mut app = app_with(healthy_source(), Vec::new());
    app.load().await.expect("load");

    let mut events = ScriptedEventSource::typed("e");
    events.extend([
        ScriptedEventSource::key(KeyCode::Tab),
        ScriptedEventSource::key(KeyCode::Tab),
        ScriptedEventSource::key(KeyCode::Right),
        ScriptedEventSource::key(KeyCode::Right),
    ]);
    app.set_event_source(script(events));
    app.run_event_loop().expect("event loop");

    assert_eq!(app.focused_pane(), FocusedPane::Filter);
    assert_eq!(app.state().selector().selected_label(), "Ervin Howell");
    let ids: Vec<&str> = app
        .state()
        .view()
        .cards()
        .iter()
        .map(|card| card.id_label.as_str())
        .collect();
    assert_eq!(ids, vec!["#2"]);
    assert!(screen(&app).contains("Ervin Howell"));
}

#[tokio::test]
async fn load_runs_only_once() {
    let source = healthy_source();
    let mut app = app_with(source.clone(), Vec::new());
    app.load().await.expect("load");
    app.load().await.expect("second load");

    assert_eq!(source.call_count(), 2);
    assert_eq!(app.state().load_state(), LoadState::Ready);
}
