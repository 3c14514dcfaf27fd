//! Query Worker Thread
//!
//! Receives requests via channel, runs them against the backend and sends
//! one response per request back to the main thread.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use super::types::{QueryRequest, QueryResponse};
use crate::query::backend::SearchBackend;

const WORKER_THREAD_NAME: &str = "query-worker";

static INSTALL_PANIC_HOOK: Once = Once::new();

/// Spawn the query worker thread
///
/// The thread lives until `request_rx` is closed. A panic inside the backend
/// becomes an error response for the request that caused it, and the worker
/// keeps serving later requests.
pub fn spawn_worker(
    backend: Box<dyn SearchBackend>,
    request_rx: Receiver<QueryRequest>,
    response_tx: Sender<QueryResponse>,
) {
    install_panic_hook();

    let spawned = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || worker_loop(backend.as_ref(), request_rx, response_tx));

    if let Err(e) = spawned {
        // request_rx is dropped with the closure, so the store sees a hung-up worker
        log::error!("Failed to spawn query worker: {}", e);
    }
}

/// Keep worker panics off the terminal
///
/// Panics on the worker thread are logged instead of printed; any other
/// thread still goes through the previously installed hook.
fn install_panic_hook() {
    INSTALL_PANIC_HOOK.call_once(|| {
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            if thread::current().name() == Some(WORKER_THREAD_NAME) {
                log::error!(
                    "Query worker panic: {} at {:?}",
                    panic_message(panic_info.payload()),
                    panic_info.location()
                );
            } else {
                prev_hook(panic_info);
            }
        }));
    });
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic in query worker".to_string()
    }
}

/// Main worker loop - processes requests until channel closes
///
/// Uses blocking recv() which is fine in dedicated thread.
fn worker_loop(
    backend: &dyn SearchBackend,
    request_rx: Receiver<QueryRequest>,
    response_tx: Sender<QueryResponse>,
) {
    log::debug!("Query worker thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Worker received request {}: {:?}",
            request.request_id,
            request.query
        );
        let response = handle_request(backend, request);
        if response_tx.send(response).is_err() {
            break;
        }
    }

    log::debug!("Query worker thread shutting down");
}

/// Handle a single query request
fn handle_request(backend: &dyn SearchBackend, request: QueryRequest) -> QueryResponse {
    let result = panic::catch_unwind(AssertUnwindSafe(|| backend.search(&request.query)));

    match result {
        Ok(Ok(documents)) => {
            log::debug!(
                "Query {} matched {} documents",
                request.request_id,
                documents.len()
            );
            QueryResponse::Success {
                documents,
                query: request.query,
                request_id: request.request_id,
            }
        }
        Ok(Err(e)) => {
            log::debug!("Query {} failed: {}", request.request_id, e);
            QueryResponse::Error {
                message: e.to_string(),
                query: request.query,
                request_id: request.request_id,
            }
        }
        Err(payload) => QueryResponse::Error {
            message: format!("Query worker crashed: {}", panic_message(&*payload)),
            query: request.query,
            request_id: request.request_id,
        },
    }
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
