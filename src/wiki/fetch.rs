// src/wiki/fetch.rs
// =============================================================================
// This module fetches article pages over HTTP.
//
// The search engine does not talk to reqwest directly. It asks a PageFetcher
// for a topic, and gets back either the page markup or "this article does
// not exist". That lets tests swap in an in-memory link graph.
//
// Status handling:
// - 200: the page markup
// - 404: Page::Missing (zero links, not an error)
// - anything else: FetchError::Status
// =============================================================================

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::SearchConfig;

// What a fetch produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Raw HTML of the article
    Found(String),
    /// The article does not exist (HTTP 404)
    Missing,
}

#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Could not retrieve topic {topic}, got status code {status}.")]
    Status { topic: String, status: u16 },

    #[error("Could not retrieve topic {topic}: {message}")]
    Transport { topic: String, message: String },

    #[error("Invalid URL for topic {topic}: {message}")]
    InvalidUrl { topic: String, message: String },
}

impl FetchError {
    pub fn topic(&self) -> &str {
        match self {
            FetchError::Status { topic, .. }
            | FetchError::Transport { topic, .. }
            | FetchError::InvalidUrl { topic, .. } => topic,
        }
    }
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page for an already-normalized topic identifier.
    async fn fetch(&self, topic: &str) -> Result<Page, FetchError>;
}

// Fetches pages from a Wikipedia-style site with reqwest
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    // Builds the HTTP client once; it is reused for every request
    // (connection pooling)
    pub fn new(config: &SearchConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    // Joins the base URL and the topic, e.g.
    //   "https://en.wikipedia.org/wiki/" + "Kevin_Bacon"
    fn topic_url(&self, topic: &str) -> Result<Url, FetchError> {
        Url::parse(&format!("{}{}", self.base_url, topic)).map_err(|e| FetchError::InvalidUrl {
            topic: topic.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, topic: &str) -> Result<Page, FetchError> {
        let url = self.topic_url(topic)?;
        let transport = |e: reqwest::Error| FetchError::Transport {
            topic: topic.to_string(),
            message: e.to_string(),
        };

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "text/html")
            .send()
            .await
            .map_err(transport)?;

        match response.status() {
            StatusCode::OK => {
                let html = response.text().await.map_err(transport)?;
                Ok(Page::Found(html))
            }
            StatusCode::NOT_FOUND => Ok(Page::Missing),
            status => Err(FetchError::Status {
                topic: topic.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> HttpFetcher {
        let config = SearchConfig::default().with_base_url(format!("{}/wiki/", server.uri()));
        HttpFetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_ok_returns_markup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Footloose"))
            .and(header("accept", "text/html"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Footloose</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let page = fetcher_for(&server).fetch("Footloose").await.unwrap();
        assert_eq!(page, Page::Found("<p>Footloose</p>".to_string()));
    }

    #[tokio::test]
    async fn test_not_found_is_missing_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Nonexistent"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let page = fetcher_for(&server).fetch("Nonexistent").await.unwrap();
        assert_eq!(page, Page::Missing);
    }

    #[tokio::test]
    async fn test_other_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wiki/Flaky"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetcher_for(&server).fetch("Flaky").await.unwrap_err();
        match err {
            FetchError::Status { ref topic, status } => {
                assert_eq!(topic, "Flaky");
                assert_eq!(status, 503);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Could not retrieve topic Flaky, got status code 503."
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1
        let config = SearchConfig::default().with_base_url("http://127.0.0.1:1/wiki/");
        let fetcher = HttpFetcher::new(&config).unwrap();

        let err = fetcher.fetch("Kevin_Bacon").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert_eq!(err.topic(), "Kevin_Bacon");
    }

    #[tokio::test]
    async fn test_invalid_base_url() {
        let config = SearchConfig::default().with_base_url("not a url/");
        let fetcher = HttpFetcher::new(&config).unwrap();

        let err = fetcher.fetch("Kevin_Bacon").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
