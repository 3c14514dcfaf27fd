use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use crate::search::SearchIntent;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// A form submission
///
/// Handlers call [`SubmitEvent::prevent_default`] to keep the key press from
/// reaching the input field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Submit the current draft as a query
    ///
    /// Dispatches exactly once, with the draft as typed. Empty and whitespace
    /// drafts are submitted too.
    pub fn handle_submit(&mut self, submit: &mut SubmitEvent) {
        submit.prevent_default();

        let query = self.draft().to_string();
        log::debug!("Submitting query {:?}", query);
        self.dispatcher.dispatch(SearchIntent::Query(query));
    }

    pub fn handle_paste_event(&mut self, text: String) {
        if self.input_disabled() {
            return;
        }

        if self.input.insert_str(&text) {
            self.mark_dirty();
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if handle_global_keys(self, key) {
            return;
        }

        if self.input_disabled() {
            return;
        }

        if key.code == KeyCode::Enter {
            let mut submit = SubmitEvent::new();
            self.handle_submit(&mut submit);
            if submit.default_prevented() {
                return;
            }
        }

        self.input.handle_key(key);
    }
}

/// Keys that work whether or not a query is loading
fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Up => {
            app.results_scroll.scroll_up(1);
            true
        }
        KeyCode::Down => {
            app.results_scroll.scroll_down(1);
            true
        }
        KeyCode::PageUp => {
            app.results_scroll.page_up();
            true
        }
        KeyCode::PageDown => {
            app.results_scroll.page_down();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
