//! Twitter/X adaptive search integration module.
//!
//! This module contains the query builder, the response model, the single-page
//! search operation and the pagination stream built on top of it.

mod api;
mod model;
mod pagination;
mod query;
mod ruby_date;

// Re-export public API
pub use api::{SearchClient, PAGE_SIZE, SEARCH_PATH};
pub use model::{
    AddEntries, Adaptive, ApiError, Content, Cursor, CursorType, Entry, ErrorResponse,
    GlobalObjects, Instruction, Operation, Timeline, Tweet, User,
};
pub use query::SearchQuery;
pub use ruby_date::{RubyDate, RUBY_DATE_FORMAT};

// Crate-internal re-exports (used by tests)
#[allow(unused_imports)]
pub(crate) use api::{build_query_string, decode_response, sanitize_for_logging};
#[allow(unused_imports)]
pub(crate) use pagination::next_cursor;
