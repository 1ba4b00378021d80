//! JSON model of the adaptive search endpoint.
//!
//! Only the parts of the response the client relies on are typed; unknown fields
//! are ignored. Absent objects and arrays decode to their empty value, so a page
//! without tweets is still a fully formed [`Adaptive`]. Optional nodes on the way
//! to a pagination cursor are `Option`s: a missing node anywhere on that path just
//! means the entry carries no cursor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::ruby_date::RubyDate;

/// A successful response: one page of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adaptive {
    #[serde(default)]
    pub global_objects: GlobalObjects,
    #[serde(default)]
    pub timeline: Timeline,
}

impl Adaptive {
    /// Returns the continuation token for the next page, if this page has one.
    ///
    /// Instructions and their entries are scanned in document order and the last
    /// `Bottom` cursor wins. `Top` cursors are for polling newer results and are
    /// never returned.
    pub fn bottom_cursor(&self) -> Option<&str> {
        self.timeline
            .instructions
            .iter()
            .filter_map(|instruction| instruction.add_entries.as_ref())
            .flat_map(|add_entries| add_entries.entries.iter())
            .filter_map(Entry::cursor)
            .filter(|cursor| cursor.cursor_type == CursorType::Bottom)
            .last()
            .map(|cursor| cursor.value.as_str())
    }

    pub fn tweet_count(&self) -> usize {
        self.global_objects.tweets.len()
    }
}

/// Tweets and users referenced by the page, keyed by their string id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalObjects {
    #[serde(default)]
    pub tweets: BTreeMap<String, Tweet>,
    #[serde(default)]
    pub users: BTreeMap<String, User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweet {
    pub id: u64,
    pub id_str: String,
    pub full_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<RubyDate>,
    pub user_id_str: String,
    pub conversation_id_str: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_status_id_str: Option<String>,
    pub lang: String,
    pub reply_count: u64,
    pub retweet_count: u64,
    pub favorite_count: u64,
    pub quote_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub id_str: String,
    pub name: String,
    pub screen_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<RubyDate>,
    pub followers_count: u64,
    pub friends_count: u64,
    pub statuses_count: u64,
    pub verified: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

/// One timeline instruction. Only `addEntries` matters for pagination; other
/// instruction kinds decode with `add_entries` unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_entries: Option<AddEntries>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddEntries {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default)]
    pub entry_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

impl Entry {
    /// The cursor carried by this entry, if every node on the way to it exists.
    pub fn cursor(&self) -> Option<&Cursor> {
        self.content
            .as_ref()?
            .operation
            .as_ref()?
            .cursor
            .as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<Operation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

/// An opaque continuation token.
///
/// A cursor without a `cursorType` decodes as [`CursorType::Other`] and is
/// never used for pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cursor {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub cursor_type: CursorType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorType {
    /// Points at newer results
    Top,
    /// Points at the next (older) page
    Bottom,
    #[default]
    #[serde(other)]
    Other,
}

/// The body returned alongside a non-success status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return write!(f, "no error details");
        }
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}
