//! HTTP acquisition for category feeds.
//!
//! One GET per selection, bounded by a caller-configured deadline. No
//! retries: a failed fetch is reported once and the session re-prompts,
//! so the human is the retry mechanism.

use std::time::Duration;

use thiserror::Error;

use crate::config::Config;
use crate::feed::parser::{parse_feed, Feed, ParseError};

/// Errors that can occur while acquiring a feed.
///
/// Every variant is recoverable from the session's point of view: the
/// loop prints the message and returns to the prompt.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured deadline elapsed before the response was read.
    #[error("request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The server answered with a status the pipeline cannot use. The
    /// body is discarded. Followable redirects were already followed by
    /// the client, so a surfaced 3xx is terminal.
    #[error("unexpected status {code}: {reason}")]
    HttpStatus { code: u16, reason: String },

    /// The body was not a structurally sound RSS document.
    #[error("malformed feed document: {0}")]
    Malformed(#[from] ParseError),
}

/// HTTP client with a bounded per-request deadline.
///
/// Built once at startup and shared by reference; holds no mutable state.
pub struct FeedClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl FeedClient {
    /// Builds the underlying `reqwest` client with the configured
    /// `User-Agent`.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            timeout: Duration::from_secs(config.request_timeout_secs),
        })
    }

    /// Downloads and decodes one RSS feed.
    ///
    /// The entire exchange (connect, send, status check, body read,
    /// decode) runs under a single deadline. Expiry cancels the
    /// in-flight request (dropping the future releases the connection
    /// and body) and no partial [`Feed`] is ever observable.
    pub async fn fetch(&self, url: &str) -> Result<Feed, FetchError> {
        tokio::time::timeout(self.timeout, self.fetch_inner(url))
            .await
            .map_err(|_| FetchError::Timeout(self.timeout))?
    }

    async fn fetch_inner(&self, url: &str) -> Result<Feed, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status.as_u16() >= 300 {
            return Err(FetchError::HttpStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(parse_feed(&body)?)
    }
}
