// src/search/error.rs
// Errors that end a whole search. Per-topic fetch failures never show up
// here on their own; the engine drops them batch by batch.

use thiserror::Error;

use crate::wiki::{FetchError, TARGET_TOPIC};

#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier ran dry before the target turned up
    #[error("Could not find {}, current topic is {topic} at depth {depth}", TARGET_TOPIC)]
    NotFound { topic: String, depth: usize },

    /// Every fetch at a depth failed, so the dead end can't be trusted
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Aborted")]
    Aborted,
}
