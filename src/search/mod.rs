// src/search/mod.rs
// =============================================================================
// The frontier search engine: breadth-first search over article links,
// one depth at a time, fetching in fixed-size concurrent batches.
//
// Submodules:
// - frontier: the engine itself (FrontierSearch) and what it reports
// - error: the ways a whole search can fail
// =============================================================================

mod error;
mod frontier;

pub use frontier::{FrontierSearch, SearchStats};
