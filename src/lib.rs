//! docseek library - Interactive document search
//!
//! This library exposes the core functionality of docseek for testing purposes.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod query;
pub mod results;
pub mod scroll;
pub mod search;

#[cfg(test)]
pub mod test_utils;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, SubmitEvent};
pub use config::Config;
