//! Shared search state
//!
//! Holds the state every view reads from (last query, loading flag, documents)
//! and the only way to change it: dispatching a [`SearchIntent`]. Views never
//! reach into the store directly; they receive a [`SearchSnapshot`] and a
//! [`Dispatch`] capability, and subscribe to snapshot changes.

mod document;
mod intent;
mod search_state;
mod store;

pub use document::Document;
pub use intent::{Dispatch, IntentSender, SearchIntent};
pub use search_state::{SearchSnapshot, StoreAction, reduce};
pub use store::{SearchStore, SubscriptionId};
