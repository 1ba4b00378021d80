//! Authorization header construction for the search endpoint.

/// Builds the Authorization header for OAuth 2.0 Bearer Token authentication.
///
/// The adaptive search endpoint accepts the same application-only bearer token
/// the Twitter web client uses.
///
/// # Parameters
///
/// - `bearer_token`: The bearer token, see [`crate::config::DEFAULT_AUTH_TOKEN`]
///
/// # Format
///
/// ```text
/// Bearer YOUR_BEARER_TOKEN_HERE
/// ```
///
/// # Example
///
/// ```rust
/// use oldtweets::build_bearer_auth_header;
///
/// let header = build_bearer_auth_header("your_bearer_token");
/// assert_eq!(header, "Bearer your_bearer_token");
/// ```
pub fn build_bearer_auth_header(bearer_token: &str) -> String {
    format!("Bearer {}", bearer_token)
}
