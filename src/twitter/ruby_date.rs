//! Timestamps in the format the v1.1-style JSON uses, e.g. `Wed Oct 10 20:19:24 +0000 2018`.

use chrono::{DateTime, FixedOffset};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `Mon Jan 02 15:04:05 -0700 2006`
pub const RUBY_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A timestamp decoded strictly from [`RUBY_DATE_FORMAT`].
///
/// Any other textual form is rejected, which fails the decode of the whole
/// response it is part of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RubyDate(pub DateTime<FixedOffset>);

impl RubyDate {
    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }
}

impl FromStr for RubyDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse_from_str(s, RUBY_DATE_FORMAT).map(RubyDate)
    }
}

impl fmt::Display for RubyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RUBY_DATE_FORMAT))
    }
}

impl From<RubyDate> for DateTime<FixedOffset> {
    fn from(date: RubyDate) -> Self {
        date.0
    }
}

impl Serialize for RubyDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RubyDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|e| {
            de::Error::custom(format!(
                "invalid timestamp '{}', expected format '{}': {}",
                raw, RUBY_DATE_FORMAT, e
            ))
        })
    }
}
