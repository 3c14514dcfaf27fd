//! Query Worker Module
//!
//! Runs queries in a background thread so the UI never blocks on a search.
//! Receives requests via channel, runs them against a [`SearchBackend`], and
//! sends responses back to the main thread.
//!
//! ## Architecture
//!
//! - Single background thread with std::sync::mpsc channels
//! - Blocking recv() in dedicated thread (not async)
//! - Panic hook to prevent TUI corruption
//! - No cancellation: every request gets exactly one response, in order
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::mpsc::channel;
//! use docseek::query::worker::{spawn_worker, QueryRequest, QueryResponse};
//!
//! let (request_tx, request_rx) = channel();
//! let (response_tx, response_rx) = channel();
//!
//! spawn_worker(Box::new(index), request_rx, response_tx);
//!
//! request_tx.send(QueryRequest { query: "cats".to_string(), request_id: 1 }).unwrap();
//!
//! match response_rx.recv().unwrap() {
//!     QueryResponse::Success { documents, .. } => println!("{} hits", documents.len()),
//!     QueryResponse::Error { message, .. } => eprintln!("{}", message),
//! }
//! ```
//!
//! [`SearchBackend`]: crate::query::SearchBackend

pub mod thread;
pub mod types;

pub use thread::spawn_worker;
pub use types::{QueryError, QueryRequest, QueryResponse};
