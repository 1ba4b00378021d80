//! Single-page access to the adaptive search endpoint.
//!
//! This module contains the [`SearchClient`] and the low-level request building
//! and response decoding for one page of results.

use log::{debug, error, info};
use reqwest::{header, Client, StatusCode};
use std::collections::BTreeMap;

use crate::auth::build_bearer_auth_header;
use crate::config::ClientConfig;
use crate::error::SearchError;

use super::model::{Adaptive, ErrorResponse};
use super::query::SearchQuery;

/// Path of the search endpoint below the configured base URL.
pub const SEARCH_PATH: &str = "/i/api/2/search/adaptive.json";

/// Number of results requested per page.
pub const PAGE_SIZE: u32 = 40;

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum length in bytes before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.len() > max_len {
        let mut cut = max_len;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... [truncated, {} total bytes]",
            &sanitized[..cut],
            text.len()
        )
    } else {
        sanitized
    }
}

/// Builds the query string for one page request.
///
/// Parameters come out in lexicographic key order so the URL for a given query
/// and cursor is always the same. `q` is inserted as produced by
/// [`SearchQuery::encode`]; every other value is percent-encoded here. `cursor`
/// and `since_id` are only present when non-empty.
pub(crate) fn build_query_string(query: &SearchQuery, since_id: &str, cursor: &str) -> String {
    let page_size = PAGE_SIZE.to_string();
    let mut params: BTreeMap<&str, String> = BTreeMap::new();

    for (key, value) in [
        ("count", page_size.as_str()),
        ("include_quote_count", "true"),
        ("include_reply_count", "1"),
        ("query_source", "typed_query"),
        ("tweet_mode", "extended"),
        ("tweet_search_mode", "live"),
        ("cursor", cursor),
        ("since_id", since_id),
    ] {
        if !value.is_empty() {
            params.insert(key, urlencoding::encode(value).into_owned());
        }
    }
    params.insert("q", query.encode());

    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Client for the adaptive search endpoint.
///
/// Holds one `reqwest::Client`, so connections are kept alive across the page
/// fetches of a pagination run. Cloning is cheap and shares that pool; each
/// clone has no other state.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    config: ClientConfig,
}

impl SearchClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Uses an existing `reqwest::Client`, e.g. one with a proxy or timeouts configured.
    pub fn with_http_client(http: Client, config: ClientConfig) -> Self {
        SearchClient { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for one page request.
    pub fn search_url(&self, query: &SearchQuery, since_id: &str, cursor: &str) -> String {
        format!(
            "{}{}?{}",
            self.config.base_url,
            SEARCH_PATH,
            build_query_string(query, since_id, cursor)
        )
    }

    /// Fetches a single page of search results.
    ///
    /// Exactly one HTTP request is made; there is no retry and no timeout policy
    /// beyond what the underlying `reqwest::Client` was built with.
    ///
    /// # Parameters
    ///
    /// - `query`: The search query, which must not be empty
    /// - `since_id`: Minimum tweet id filter, sent as `since_id` when non-empty
    /// - `cursor`: Continuation token from a previous page, or `""` for the first page
    ///
    /// # Returns
    ///
    /// - `Ok(Adaptive)`: The decoded page on a 2xx response
    /// - `Err(SearchError::Api)`: A non-2xx response with a structured error body
    /// - `Err(SearchError::Decode)`: A body that does not match the expected shape
    /// - `Err(SearchError::Transport)`: The request could not be completed
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use oldtweets::{ClientConfig, SearchClient, SearchQuery};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = SearchClient::new(ClientConfig::default());
    ///     match client.search(&SearchQuery::new("rust"), "", "").await {
    ///         Ok(page) => println!("{} tweets", page.tweet_count()),
    ///         Err(e) => eprintln!("Search failed: {}", e),
    ///     }
    /// }
    /// ```
    pub async fn search(
        &self,
        query: &SearchQuery,
        since_id: &str,
        cursor: &str,
    ) -> Result<Adaptive, SearchError> {
        let url = self.search_url(query, since_id, cursor);

        debug!("Request URL: {}", url);
        debug!(
            "Request headers: User-Agent: {}, Authorization: Bearer [REDACTED]",
            self.config.user_agent
        );

        let response = self
            .http
            .get(&url)
            .header(header::USER_AGENT, &self.config.user_agent)
            .header(
                header::AUTHORIZATION,
                build_bearer_auth_header(&self.config.auth_token),
            )
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        info!(
            "Received response with status: {} ({} bytes)",
            status,
            body.len()
        );

        decode_response(status, &body)
    }
}

/// Decodes a response body according to its status class.
///
/// The raw bytes go straight to `serde_json`, so a body that is not valid UTF-8
/// is a decode error rather than text with replacement characters.
pub(crate) fn decode_response(status: StatusCode, body: &[u8]) -> Result<Adaptive, SearchError> {
    if status.is_success() {
        return serde_json::from_slice::<Adaptive>(body).map_err(|source| {
            error!("Failed to decode search response: {}", source);
            debug!(
                "Undecodable body: {}",
                sanitize_for_logging(&String::from_utf8_lossy(body), 200)
            );
            SearchError::Decode { status, source }
        });
    }

    error!("Search request failed - Status: {}", status);
    debug!(
        "Error response: {}",
        sanitize_for_logging(&String::from_utf8_lossy(body), 200)
    );

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(response) => Err(SearchError::Api { status, response }),
        Err(source) => Err(SearchError::Decode { status, source }),
    }
}
