// src/search/frontier.rs
// =============================================================================
// This module implements the breadth-first search for Kevin Bacon.
//
// How it works:
// 1. The frontier starts as just the starting topic (depth 0)
// 2. If the target is the starting topic, we are done without any fetch
// 3. Otherwise the frontier is cut into batches of `batch_size` topics
// 4. Each batch is fetched concurrently; results are merged only once the
//    whole batch has settled
// 5. Links not seen before join the visited set right away, so later
//    batches at the same depth don't announce them again
// 6. If a batch discovers the target we stop: the answer is depth + 1
// 7. Otherwise all new links become the next frontier, and depth goes up
// 8. An empty next frontier is a dead end
//
// Batches run strictly one after another, so at most one batch worth of
// requests is ever in flight.
//
// Rust concepts:
// - HashSet / HashMap: visited set and "who linked here first" for the trail
// - chunks(): slicing the frontier into fixed-size batches
// - buffered(): bounded concurrency over a stream of futures
// - tokio::select!: racing a batch against the cancellation token
// =============================================================================

use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::error::SearchError;
use crate::config::SearchConfig;
use crate::wiki::{extract_topic_links, FetchError, Page, PageFetcher, TARGET_TOPIC};

// A successful search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Number of link hops from the start topic to the target
    pub depth: usize,
    /// Start topic, every page that led on, then the target
    pub trail: Vec<String>,
}

// Bookkeeping for diagnostics; available after success or failure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Size of the visited set
    pub explored: usize,
    /// Topics a fetch was issued for, in issue order
    pub loaded: Vec<String>,
}

// The result of fetching one topic in a batch
enum FetchOutcome {
    Links { topic: String, links: Vec<String> },
    Failed(FetchError),
}

// State for one call to search(); replaced at the start of every call
#[derive(Default)]
struct SearchState {
    visited: HashSet<String>,
    loaded: Vec<String>,
    // topic -> the topic whose page first linked to it
    parents: HashMap<String, String>,
}

pub struct FrontierSearch {
    fetcher: Arc<dyn PageFetcher>,
    batch_size: usize,
    cancel: CancellationToken,
    state: SearchState,
}

impl FrontierSearch {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        config: &SearchConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            fetcher,
            batch_size: config.batch_size.max(1),
            cancel,
            state: SearchState::default(),
        }
    }

    // Runs the search from an already-normalized topic
    //
    // Returns: the depth (and trail) at which the target was first found
    //
    // Errors:
    //   NotFound - the frontier emptied out (dead end)
    //   Fetch    - every fetch at some depth failed
    //   Aborted  - the cancellation token fired
    pub async fn search(&mut self, start: &str) -> Result<SearchOutcome, SearchError> {
        self.state = SearchState::default();
        self.state.visited.insert(start.to_string());

        if start == TARGET_TOPIC {
            return Ok(self.outcome(0));
        }

        let mut frontier = vec![start.to_string()];
        let mut depth = 0;

        loop {
            if self.cancel.is_cancelled() {
                return Err(SearchError::Aborted);
            }

            info!(depth, topics = frontier.len(), "expanding frontier");

            let mut next_frontier = Vec::new();
            let mut fetched_ok = 0;
            let mut last_failure = None;

            for batch in frontier.chunks(self.batch_size) {
                if self.cancel.is_cancelled() {
                    return Err(SearchError::Aborted);
                }

                self.state.loaded.extend(batch.iter().cloned());

                let results = tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => return Err(SearchError::Aborted),
                    results = fetch_batch(self.fetcher.as_ref(), batch) => results,
                };

                // Failed fetches are dropped here; only their count matters
                let mut discovered = Vec::new();
                for result in results {
                    match result {
                        FetchOutcome::Links { topic, links } => {
                            fetched_ok += 1;
                            for link in links {
                                if self.state.visited.insert(link.clone()) {
                                    self.state.parents.insert(link.clone(), topic.clone());
                                    discovered.push(link);
                                }
                            }
                        }
                        FetchOutcome::Failed(err) => {
                            debug!(topic = err.topic(), error = %err, "dropping failed fetch");
                            last_failure = Some(err);
                        }
                    }
                }

                debug!(
                    depth,
                    batch = batch.len(),
                    discovered = discovered.len(),
                    "batch settled"
                );

                if discovered.iter().any(|topic| topic == TARGET_TOPIC) {
                    return Ok(self.outcome(depth + 1));
                }

                next_frontier.extend(discovered);
            }

            if next_frontier.is_empty() {
                // Nothing came back at all: report the transport, not a dead end
                if fetched_ok == 0 {
                    if let Some(err) = last_failure {
                        return Err(SearchError::Fetch(err));
                    }
                }

                let topic = frontier.last().cloned().unwrap_or_default();
                return Err(SearchError::NotFound { topic, depth });
            }

            frontier = next_frontier;
            depth += 1;
        }
    }

    // Stats for the most recent search
    pub fn stats(&self) -> SearchStats {
        SearchStats {
            explored: self.state.visited.len(),
            loaded: self.state.loaded.clone(),
        }
    }

    fn outcome(&self, depth: usize) -> SearchOutcome {
        SearchOutcome {
            depth,
            trail: self.trail_to(TARGET_TOPIC),
        }
    }

    // Walks the first-discovery links back from `topic` to the start
    fn trail_to(&self, topic: &str) -> Vec<String> {
        let mut trail = vec![topic.to_string()];
        let mut current = topic;
        while let Some(parent) = self.state.parents.get(current) {
            trail.push(parent.clone());
            current = parent.as_str();
        }
        trail.reverse();
        trail
    }
}

// Fetches every topic in a batch concurrently and extracts its links
//
// The batch is fully settled before this returns. Results come back in the
// same order as the batch, which keeps discovery order deterministic.
async fn fetch_batch(fetcher: &dyn PageFetcher, batch: &[String]) -> Vec<FetchOutcome> {
    stream::iter(batch)
        .map(|topic| async move {
            match fetcher.fetch(topic).await {
                Ok(Page::Found(html)) => FetchOutcome::Links {
                    topic: topic.clone(),
                    links: extract_topic_links(&html),
                },
                Ok(Page::Missing) => FetchOutcome::Links {
                    topic: topic.clone(),
                    links: Vec::new(),
                },
                Err(err) => FetchOutcome::Failed(err),
            }
        })
        .buffered(batch.len().max(1))
        .collect()
        .await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a loop and not recursion?
//    - Each depth is one pass of the loop, so the call stack never grows
//    - Cancellation checks and batching are just lines in the loop body
//
// 2. What does buffered(n) do?
//    - Runs up to n futures at once, like buffer_unordered(n)
//    - Unlike buffer_unordered, results come out in input order
//
// 3. Why no Mutex around the visited set?
//    - The fetches only return links; they never touch the set
//    - Merging happens afterwards, in this one function, one batch at a time
//
// 4. What does `biased;` mean in select!?
//    - Branches are polled top to bottom instead of in random order
//    - A cancelled token always wins over a batch that is still running
// -----------------------------------------------------------------------------
