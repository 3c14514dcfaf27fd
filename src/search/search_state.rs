use std::sync::Arc;

use super::Document;

/// Read-only view of the shared search state
///
/// Snapshots are immutable; every state transition produces a new one.
/// Cloning is cheap since the documents are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSnapshot {
    /// Text of the most recently submitted query
    pub query: String,
    /// True while a submitted query has not produced a result yet
    pub loading: bool,
    /// Documents of the most recently completed query, in backend order
    pub documents: Arc<[Document]>,
}

impl SearchSnapshot {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            loading: false,
            documents: Arc::from(Vec::new()),
        }
    }

    pub fn with_documents(mut self, documents: Vec<Document>) -> Self {
        self.documents = Arc::from(documents);
        self
    }

    pub fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl Default for SearchSnapshot {
    fn default() -> Self {
        Self::new("")
    }
}

/// State transitions applied by the store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// A query was submitted
    QueryStarted(String),
    /// A query finished with these documents
    QueryCompleted(Vec<Document>),
    /// A query finished without documents
    QueryFailed,
}

/// Compute the snapshot that follows `state` after `action`
///
/// Starting a query keeps the previous documents visible until the result
/// arrives. A failed query only clears the loading flag.
pub fn reduce(state: &SearchSnapshot, action: StoreAction) -> SearchSnapshot {
    match action {
        StoreAction::QueryStarted(query) => SearchSnapshot {
            query,
            loading: true,
            documents: Arc::clone(&state.documents),
        },
        StoreAction::QueryCompleted(documents) => SearchSnapshot {
            query: state.query.clone(),
            loading: false,
            documents: Arc::from(documents),
        },
        StoreAction::QueryFailed => SearchSnapshot {
            query: state.query.clone(),
            loading: false,
            documents: Arc::clone(&state.documents),
        },
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
