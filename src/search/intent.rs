use std::sync::mpsc::Sender;

/// A request to change the shared search state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    /// Run a query with the given text, exactly as typed
    Query(String),
}

/// Capability to send intents to the shared search state
///
/// Fire-and-forget: callers get no completion or failure signal. The outcome
/// shows up later as a new snapshot.
pub trait Dispatch {
    fn dispatch(&self, intent: SearchIntent);
}

/// Channel-backed dispatcher handed out by [`SearchStore::new`](super::SearchStore::new)
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: Sender<SearchIntent>,
}

impl IntentSender {
    pub(crate) fn new(tx: Sender<SearchIntent>) -> Self {
        Self { tx }
    }
}

impl Dispatch for IntentSender {
    fn dispatch(&self, intent: SearchIntent) {
        log::debug!("Dispatching {:?}", intent);
        if self.tx.send(intent).is_err() {
            log::warn!("Search store is gone, intent dropped");
        }
    }
}
