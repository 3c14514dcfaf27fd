//! Query Worker Types
//!
//! Messages exchanged between the search store and the query worker thread.

use crate::search::Document;

/// Request to run a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    /// Query text exactly as submitted
    pub query: String,
    /// Unique ID for tracking this request
    pub request_id: u64,
}

/// Response from query execution
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResponse {
    /// Query succeeded
    Success {
        /// Matching documents in backend order
        documents: Vec<Document>,
        /// The query that produced these documents
        query: String,
        /// Request ID this response belongs to
        request_id: u64,
    },
    /// Query failed
    Error {
        message: String,
        query: String,
        /// Request ID this response belongs to
        request_id: u64,
    },
}

/// Error types for query execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The backend could not run the query
    BackendFailed(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::BackendFailed(e) => write!(f, "Search backend failed: {}", e),
        }
    }
}

impl std::error::Error for QueryError {}
