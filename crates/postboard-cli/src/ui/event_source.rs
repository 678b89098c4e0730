use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

/// Abstraction over the input event source used by the TUI.
///
/// Implementations must mirror crossterm's semantics:
/// - `poll(timeout)` waits up to timeout for an event and returns whether one is available.
/// - `read()` blocks until an event is available and returns it.
pub trait InputEventSource: Send {
    /// Wait up to `timeout` for an event to become available.
    ///
    /// # Errors
    /// Returns an error if the event polling operation fails.
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Block until an input `Event` is available and return it.
    ///
    /// # Errors
    /// Returns an error if reading the event fails.
    fn read(&mut self) -> io::Result<Event>;
}

/// Default event source backed by crossterm.
pub struct CrosstermEventSource;

impl InputEventSource for CrosstermEventSource {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Event source that replays a fixed queue of events.
///
/// `poll` reports whether anything is left and never waits, so a loop
/// driven by it ends once the queue runs dry and a quit key is queued last.
#[derive(Debug, Default)]
pub struct ScriptedEventSource {
    events: VecDeque<Event>,
}

impl ScriptedEventSource {
    /// Creates a source replaying `events` in order
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Key press event for `code` with no modifiers
    pub fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Key press event for `Ctrl+<letter>`
    pub fn ctrl(letter: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(letter), KeyModifiers::CONTROL))
    }

    /// One key press per character of `text`
    pub fn typed(text: &str) -> Vec<Event> {
        text.chars().map(|ch| Self::key(KeyCode::Char(ch))).collect()
    }

    /// Events not consumed yet
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputEventSource for ScriptedEventSource {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted events left"))
    }
}
