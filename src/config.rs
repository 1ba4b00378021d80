//! Configuration module for the search client.
//!
//! This module contains the configuration structure and environment variable
//! handling for talking to the Twitter/X adaptive search endpoint.

use log::{debug, info};
use std::env;

use crate::error::ConfigError;

/// Public bearer token shipped with the Twitter web client.
///
/// It is the default value of [`ClientConfig::auth_token`] and can be replaced
/// with [`ClientConfig::with_auth_token`] or the `OLDTWEETS_AUTH_TOKEN`
/// environment variable.
pub const DEFAULT_AUTH_TOKEN: &str =
    "AAAAAAAAAAAAAAAAAAAAANRILgAAAAAAnNwIzUejRCOuH5E6I8xnZz4puTs%3D1Zv7ttfk8LF81IUq16cHjhLTvJu4FA33AGWWjCpTnA";

/// Origin the search endpoint is served from.
pub const DEFAULT_BASE_URL: &str = "https://twitter.com";

/// Environment variable overriding the user agent.
pub const USER_AGENT_VAR: &str = "OLDTWEETS_USER_AGENT";
/// Environment variable overriding the bearer token.
pub const AUTH_TOKEN_VAR: &str = "OLDTWEETS_AUTH_TOKEN";
/// Environment variable overriding the endpoint origin.
pub const BASE_URL_VAR: &str = "OLDTWEETS_BASE_URL";

/// Returns the user agent this crate identifies itself with by default.
///
/// The format is `<client-name>/<version>`, e.g. `oldtweets/0.1.0`.
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Configuration for a [`crate::SearchClient`].
///
/// Every field is injectable. Nothing is read from the process environment unless
/// [`ClientConfig::from_env`] is called explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Sent as the `User-Agent` header on every request
    pub user_agent: String,
    /// Bearer token sent in the `Authorization` header
    pub auth_token: String,
    /// Scheme and host of the search endpoint, without a trailing slash
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            user_agent: default_user_agent(),
            auth_token: DEFAULT_AUTH_TOKEN.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = auth_token.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Creates a `ClientConfig` from the defaults, overridden by environment variables.
    ///
    /// # Optional Environment Variables
    ///
    /// - `OLDTWEETS_USER_AGENT`: replaces the `oldtweets/<version>` user agent
    /// - `OLDTWEETS_AUTH_TOKEN`: replaces [`DEFAULT_AUTH_TOKEN`]
    /// - `OLDTWEETS_BASE_URL`: replaces [`DEFAULT_BASE_URL`]
    ///
    /// # Returns
    ///
    /// - `Ok(ClientConfig)`: The resolved configuration
    /// - `Err(ConfigError)`: If one of the variables is set to an empty string
    ///
    /// # Example
    ///
    /// ```rust
    /// use oldtweets::ClientConfig;
    ///
    /// let config = ClientConfig::from_env().unwrap();
    /// assert!(!config.auth_token.is_empty());
    /// ```
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading search client configuration from environment variables");
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ClientConfig::default();

        if let Some(user_agent) = non_empty(&lookup, USER_AGENT_VAR)? {
            info!("Using user agent from {}: {}", USER_AGENT_VAR, user_agent);
            config.user_agent = user_agent;
        }

        if let Some(token) = non_empty(&lookup, AUTH_TOKEN_VAR)? {
            info!(
                "Found {} environment variable with length: {}",
                AUTH_TOKEN_VAR,
                token.len()
            );
            debug!("Auth token (masked): {}", mask_token(&token));
            config.auth_token = token;
        } else {
            debug!("No {} set, using the default web client token", AUTH_TOKEN_VAR);
        }

        if let Some(base_url) = non_empty(&lookup, BASE_URL_VAR)? {
            info!("Using base URL from {}: {}", BASE_URL_VAR, base_url);
            config = config.with_base_url(base_url);
        }

        Ok(config)
    }
}

fn non_empty<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if value.is_empty() => Err(ConfigError::EmptyValue { var }),
        other => Ok(other),
    }
}

/// Masks a secret for logging, keeping at most eight characters at each end.
pub(crate) fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();

    let prefix: String = chars.iter().take(8.min(len)).collect();
    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}
