// src/config.rs
// =============================================================================
// Fixed settings for a search.
//
// There is no config file and no environment variables: the defaults below
// are what the CLI runs with. Tests build their own SearchConfig to point the
// fetcher at a local mock server or to shrink the batch size.
// =============================================================================

use std::time::Duration;

use crate::wiki::WIKI_URL_PREFIX;

// Number of topics fetched concurrently; batches run one after another
pub const DEFAULT_BATCH_SIZE: usize = 20;

#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL that normalized topics are appended to
    pub base_url: String,
    /// Frontier slice width, and the max number of in-flight fetches
    pub batch_size: usize,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Max redirects followed per request
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: WIKI_URL_PREFIX.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            request_timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: format!(
                "{}/{} (Bacon number finder)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl SearchConfig {
    // Same settings, different base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    // Same settings, different batch width (at least 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "https://en.wikipedia.org/wiki/");
        assert_eq!(config.batch_size, 20);
        assert!(config.user_agent.starts_with("bacon-number/"));
    }

    #[test]
    fn test_batch_size_is_at_least_one() {
        let config = SearchConfig::default().with_batch_size(0);
        assert_eq!(config.batch_size, 1);
    }
}
