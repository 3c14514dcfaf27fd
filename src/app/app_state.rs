use std::sync::mpsc::{Receiver, channel};

use crate::config::Config;
use crate::input::InputState;
use crate::results::{CardPreview, PreviewRenderer};
use crate::scroll::ScrollState;
use crate::search::{Dispatch, SearchSnapshot, SearchStore, SubscriptionId};

/// The search page: query field on top, results below
///
/// Holds no reference to the store. It reads the snapshot it was last given
/// and writes only through its dispatcher.
pub struct App {
    pub input: InputState,
    pub snapshot: SearchSnapshot,
    pub(super) dispatcher: Box<dyn Dispatch>,
    snapshot_rx: Option<Receiver<SearchSnapshot>>,
    pub results_scroll: ScrollState,
    pub(super) preview: Box<dyn PreviewRenderer>,
    pub should_quit: bool,
    needs_render: bool,
}

impl App {
    /// Build the page from the current state and a way to change it
    ///
    /// The query field starts with the snapshot's last query. Later snapshots
    /// never overwrite what the user is typing.
    pub fn new(snapshot: &SearchSnapshot, dispatcher: impl Dispatch + 'static, config: &Config) -> Self {
        Self {
            input: InputState::new(&snapshot.query),
            snapshot: snapshot.clone(),
            dispatcher: Box::new(dispatcher),
            snapshot_rx: None,
            results_scroll: ScrollState::new(),
            preview: Box::new(CardPreview::new(&config.preview)),
            should_quit: false,
            needs_render: true,
        }
    }

    /// Swap the document preview renderer
    pub fn with_preview(mut self, preview: impl PreviewRenderer + 'static) -> Self {
        self.preview = Box::new(preview);
        self
    }

    pub fn draft(&self) -> &str {
        self.input.draft()
    }

    /// The query field is read-only while a query is loading
    pub fn input_disabled(&self) -> bool {
        self.snapshot.loading
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Subscribe to store updates
    ///
    /// Snapshots are queued and picked up by [`App::poll_snapshots`].
    pub fn attach(&mut self, store: &mut SearchStore) -> SubscriptionId {
        let (tx, rx) = channel();
        self.snapshot_rx = Some(rx);
        store.subscribe(move |snapshot| {
            let _ = tx.send(snapshot.clone());
        })
    }

    /// Apply queued snapshots, returning whether any arrived
    pub fn poll_snapshots(&mut self) -> bool {
        let Some(rx) = &self.snapshot_rx else {
            return false;
        };

        let latest = rx.try_iter().last();
        match latest {
            Some(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
            None => false,
        }
    }

    /// Replace the state the page renders from
    pub fn apply_snapshot(&mut self, snapshot: SearchSnapshot) {
        self.snapshot = snapshot;
        self.mark_dirty();
    }
}
