//! Search query construction.
//!
//! Turns free text plus optional date bounds into the single escaped `q` value
//! the adaptive search endpoint expects.

/// Escaped single space joining the query components.
const SEPARATOR: &str = "%20";

/// A structured search query.
///
/// Dates are opaque strings at this layer (`YYYY-MM-DD` is what the endpoint
/// understands); validating them is up to whoever builds the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free text, escaped as a whole
    pub text: String,
    /// Lower date bound, rendered as `since:<date>`
    pub since: Option<String>,
    /// Upper date bound, rendered as `until:<date>`
    pub until: Option<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn since(mut self, date: impl Into<String>) -> Self {
        self.since = Some(date.into());
        self
    }

    pub fn until(mut self, date: impl Into<String>) -> Self {
        self.until = Some(date.into());
        self
    }

    /// Encodes the query into the value of the `q` request parameter.
    ///
    /// Components are emitted in the order text, `since:`, `until:` and joined by
    /// an escaped space. Only the text is escaped; dates are appended as given.
    /// Empty components are left out entirely, so a query with nothing set
    /// encodes to the empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oldtweets::SearchQuery;
    ///
    /// let query = SearchQuery::new("rust lang").since("2022-01-01");
    /// assert_eq!(query.encode(), "rust%20lang%20since:2022-01-01");
    /// ```
    pub fn encode(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(3);

        if !self.text.is_empty() {
            parts.push(urlencoding::encode(&self.text).into_owned());
        }

        for (operator, date) in [("since", &self.since), ("until", &self.until)] {
            if let Some(date) = date.as_deref().filter(|d| !d.is_empty()) {
                parts.push(format!("{}:{}", operator, date));
            }
        }

        parts.join(SEPARATOR)
    }

    /// Returns `true` when the query encodes to nothing and must not be sent.
    pub fn is_empty(&self) -> bool {
        self.encode().is_empty()
    }
}
