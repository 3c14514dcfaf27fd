//! Query execution
//!
//! The store forwards each submitted query to a background worker, which runs
//! it against a [`SearchBackend`] and sends the matching documents back.

pub mod backend;
pub mod corpus;
pub mod worker;

pub use backend::{DocumentIndex, SearchBackend};
pub use corpus::{load_documents, load_documents_from_reader};
