// src/wiki/mod.rs
// =============================================================================
// Everything that knows about the encyclopedia itself.
//
// Submodules:
// - topic: turns URLs, paths and titles into one canonical topic identifier
// - links: pulls article links out of a page's content area
// - fetch: downloads pages (PageFetcher trait + the reqwest implementation)
// =============================================================================

mod fetch;
mod links;
mod topic;

pub use fetch::{FetchError, HttpFetcher, Page, PageFetcher};
pub use links::extract_topic_links;
pub use topic::{normalize_topic, TARGET_TOPIC, WIKI_URL_PREFIX};
