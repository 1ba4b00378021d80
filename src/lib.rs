//! # Oldtweets Library
//!
//! A client for the Twitter/X adaptive search endpoint (`/i/api/2/search/adaptive.json`).
//! It builds the search query, fetches single pages of results and follows the
//! Bottom cursor of each page to stream the whole result set.
//!
//! ## Features
//!
//! - Query building with `since:`/`until:` date bounds ([`SearchQuery`])
//! - Single-page search with structured API errors ([`SearchClient::search`])
//! - Lazy, ordered streaming of every page ([`SearchClient::search_all`])
//! - Structured logging through the `log` facade
//!
//! ## Configuration
//!
//! [`ClientConfig`] carries the user agent, bearer token and endpoint origin.
//! All of them have defaults and can be overridden in code or, through
//! [`ClientConfig::from_env`], with:
//! - `OLDTWEETS_USER_AGENT`
//! - `OLDTWEETS_AUTH_TOKEN`
//! - `OLDTWEETS_BASE_URL`

pub mod auth;
pub mod config;
pub mod error;
pub mod twitter;

// Re-export commonly used types and functions
pub use auth::build_bearer_auth_header;
pub use config::{ClientConfig, DEFAULT_AUTH_TOKEN};
pub use error::{ConfigError, SearchError};
pub use twitter::{Adaptive, ApiError, ErrorResponse, SearchClient, SearchQuery, Tweet, User};
