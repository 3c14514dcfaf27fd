//! Shared test utilities for docseek
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::app::App;
    use crate::config::Config;
    use crate::search::{Dispatch, SearchIntent, SearchSnapshot};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Dispatcher that records every intent it receives
    #[derive(Clone, Default)]
    pub struct RecordingDispatcher {
        intents: Rc<RefCell<Vec<SearchIntent>>>,
    }

    impl RecordingDispatcher {
        pub fn dispatched(&self) -> Vec<SearchIntent> {
            self.intents.borrow().clone()
        }
    }

    impl Dispatch for RecordingDispatcher {
        fn dispatch(&self, intent: SearchIntent) {
            self.intents.borrow_mut().push(intent);
        }
    }

    /// Helper to create App with default config, returning the dispatcher it writes to
    pub fn test_app(snapshot: &SearchSnapshot) -> (App, RecordingDispatcher) {
        let dispatcher = RecordingDispatcher::default();
        let app = App::new(snapshot, dispatcher.clone(), &Config::default());
        (app, dispatcher)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
