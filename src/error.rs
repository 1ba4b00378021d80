//! Error types for the search client.
//!
//! Callers of [`crate::SearchClient::search`] get a [`SearchError`] that tells
//! transport failures, undecodable bodies and errors reported by the Twitter API
//! apart, so rate limiting or forbidden responses can be handled specifically.

use reqwest::StatusCode;
use thiserror::Error;

use crate::twitter::{ApiError, ErrorResponse};

/// Everything that can go wrong while fetching a single page of search results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The HTTP request itself failed (network, DNS, TLS, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the shape expected for its status class.
    #[error("failed to decode response body (status {status}): {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a non-success status and a structured error body.
    #[error("Twitter API error ({status}): {response}")]
    Api {
        status: StatusCode,
        response: ErrorResponse,
    },
}

impl SearchError {
    /// Returns the `{code, message}` list reported by the API, if this is an API error.
    pub fn api_errors(&self) -> Option<&[ApiError]> {
        match self {
            SearchError::Api { response, .. } => Some(&response.errors),
            _ => None,
        }
    }

    /// Returns the HTTP status attached to the error, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SearchError::Transport(e) => e.status(),
            SearchError::Decode { status, .. } | SearchError::Api { status, .. } => Some(*status),
        }
    }
}

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {var} is set but empty")]
    EmptyValue { var: &'static str },
}
