//! Pagination over the whole result set of a search.
//!
//! [`SearchClient::search_all`] threads the Bottom cursor of each page into the
//! request for the next one and hands the pages out as a lazy stream.

use futures::stream::{self, Stream};
use log::{error, info, warn};

use crate::error::SearchError;

use super::api::SearchClient;
use super::model::Adaptive;
use super::query::SearchQuery;

/// Loop state of one pagination run. Owned by the stream, never shared.
struct Pagination {
    query: SearchQuery,
    /// Cursor for the next request; `None` once the run is over
    cursor: Option<String>,
    page: usize,
}

/// Picks the cursor to request after `page`, or `None` when pagination is over.
///
/// Ends when the page carries no Bottom cursor, or when the server hands back
/// the cursor that was just used.
pub(crate) fn next_cursor(page: &Adaptive, used: &str) -> Option<String> {
    match page.bottom_cursor() {
        None => None,
        Some(cursor) if cursor == used => {
            warn!(
                "Server returned the cursor that was just used ({}), stopping pagination",
                cursor
            );
            None
        }
        Some(cursor) => Some(cursor.to_string()),
    }
}

impl SearchClient {
    /// Streams every page of results for `query`.
    ///
    /// Pages are fetched one at a time and only when the consumer polls for the
    /// next item, in strict request order. The stream ends (`None`) after the first
    /// page that has no Bottom cursor, including pages without any timeline. Pages
    /// with no tweets but a cursor do not end it.
    ///
    /// A failed page fetch is yielded as a final `Err` item and the stream ends
    /// after it. Dropping the stream early cancels the request in flight, if any.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use futures::StreamExt;
    /// use oldtweets::{ClientConfig, SearchClient, SearchQuery};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let client = SearchClient::new(ClientConfig::default());
    ///     let pages = client.search_all(SearchQuery::new("rust").since("2022-01-01"));
    ///     futures::pin_mut!(pages);
    ///     while let Some(page) = pages.next().await {
    ///         match page {
    ///             Ok(page) => println!("{} tweets", page.tweet_count()),
    ///             Err(e) => eprintln!("Search failed: {}", e),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn search_all(
        &self,
        query: SearchQuery,
    ) -> impl Stream<Item = Result<Adaptive, SearchError>> + '_ {
        let state = Pagination {
            query,
            cursor: Some(String::new()),
            page: 0,
        };

        stream::unfold(state, move |mut state| async move {
            let cursor = state.cursor.take()?;
            state.page += 1;
            info!("Fetching page {} of search results", state.page);

            match self.search(&state.query, "", &cursor).await {
                Ok(page) => {
                    info!(
                        "Page {} contained {} tweets",
                        state.page,
                        page.tweet_count()
                    );
                    state.cursor = next_cursor(&page, &cursor);
                    if state.cursor.is_none() {
                        info!("No further pages after page {}", state.page);
                    }
                    Some((Ok(page), state))
                }
                Err(e) => {
                    error!("Fetching page {} failed: {}", state.page, e);
                    Some((Err(e), state))
                }
            }
        })
    }
}
