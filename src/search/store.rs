use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

use super::intent::{IntentSender, SearchIntent};
use super::search_state::{SearchSnapshot, StoreAction, reduce};
use crate::query::worker::{QueryRequest, QueryResponse};

type Listener = Box<dyn FnMut(&SearchSnapshot)>;

/// Handle returned by [`SearchStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of the shared search state
///
/// Intents arrive through the [`IntentSender`] returned by [`SearchStore::new`];
/// query results arrive from the query worker. Both are applied on [`poll`],
/// which runs on the UI thread, and every transition is pushed to subscribers.
///
/// [`poll`]: SearchStore::poll
pub struct SearchStore {
    state: SearchSnapshot,
    intent_rx: Receiver<SearchIntent>,
    request_tx: Option<Sender<QueryRequest>>,
    response_rx: Option<Receiver<QueryResponse>>,
    /// Starts at 1
    next_request_id: u64,
    subscribers: Vec<(SubscriptionId, Listener)>,
    next_subscription_id: u64,
}

impl SearchStore {
    /// Create a store seeded with the last submitted query
    ///
    /// `request_tx` and `response_rx` connect to a query worker
    /// (see [`spawn_worker`](crate::query::worker::spawn_worker)).
    pub fn new(
        initial_query: impl Into<String>,
        request_tx: Sender<QueryRequest>,
        response_rx: Receiver<QueryResponse>,
    ) -> (Self, IntentSender) {
        let (intent_tx, intent_rx) = channel();
        let store = Self {
            state: SearchSnapshot::new(initial_query),
            intent_rx,
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            next_request_id: 1,
            subscribers: Vec::new(),
            next_subscription_id: 0,
        };
        (store, IntentSender::new(intent_tx))
    }

    pub fn snapshot(&self) -> &SearchSnapshot {
        &self.state
    }

    /// Register a listener called with the new snapshot after every transition
    pub fn subscribe(&mut self, listener: impl FnMut(&SearchSnapshot) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    /// Apply pending intents and query responses
    ///
    /// Returns true if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;

        while let Ok(intent) = self.intent_rx.try_recv() {
            self.handle_intent(intent);
            changed = true;
        }

        // Take the receiver temporarily so responses can mutate self
        let Some(rx) = self.response_rx.take() else {
            return changed;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => {
                    self.handle_response(response);
                    changed = true;
                }
                Err(TryRecvError::Empty) => {
                    self.response_rx = Some(rx);
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("Query worker disconnected");
                    self.request_tx = None;
                    if self.state.loading {
                        self.apply(StoreAction::QueryFailed);
                        changed = true;
                    }
                    break;
                }
            }
        }

        changed
    }

    fn handle_intent(&mut self, intent: SearchIntent) {
        match intent {
            SearchIntent::Query(query) => {
                self.apply(StoreAction::QueryStarted(query.clone()));
                self.send_request(query);
            }
        }
    }

    fn send_request(&mut self, query: String) {
        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let Some(tx) = &self.request_tx else {
            log::warn!("No query worker, request {} dropped", request_id);
            self.apply(StoreAction::QueryFailed);
            return;
        };

        log::debug!("Sending request {}: {:?}", request_id, query);
        if tx.send(QueryRequest { query, request_id }).is_err() {
            log::error!("Query worker hung up, request {} dropped", request_id);
            self.request_tx = None;
            self.apply(StoreAction::QueryFailed);
        }
    }

    fn handle_response(&mut self, response: QueryResponse) {
        match response {
            QueryResponse::Success {
                documents,
                query,
                request_id,
            } => {
                log::debug!(
                    "Request {} ({:?}) returned {} documents",
                    request_id,
                    query,
                    documents.len()
                );
                self.apply(StoreAction::QueryCompleted(documents));
            }
            QueryResponse::Error {
                message,
                query,
                request_id,
            } => {
                log::warn!("Request {} ({:?}) failed: {}", request_id, query, message);
                self.apply(StoreAction::QueryFailed);
            }
        }
    }

    fn apply(&mut self, action: StoreAction) {
        self.state = reduce(&self.state, action);
        for (_, listener) in &mut self.subscribers {
            listener(&self.state);
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
