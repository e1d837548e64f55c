use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Default pattern for textual dates (`YYYY-MM-DD`).
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date as supplied by the caller: text to be parsed, or an epoch timestamp
/// in milliseconds that is already date-like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Timestamp(i64),
    Text(String),
}

impl DateInput {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value.timestamp_millis())
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Timestamp(millis) => match DateTime::<Utc>::from_timestamp_millis(*millis) {
                Some(time) => write!(f, "{}", time.format(DEFAULT_DATE_FORMAT)),
                None => write!(f, "{millis}"),
            },
        }
    }
}

/// Parses a caller date into UTC.
///
/// Text must match `format` completely; date-time patterns are tried before
/// date-only patterns so `%Y-%m-%d %H:%M` and `%Y-%m-%d` both work.
/// Returns `None` when the text does not parse or the timestamp is out of range.
#[must_use]
pub fn parse_date(input: &DateInput, format: &str) -> Option<DateTime<Utc>> {
    match input {
        DateInput::Timestamp(millis) => DateTime::<Utc>::from_timestamp_millis(*millis),
        DateInput::Text(text) => {
            if let Ok(time) = NaiveDateTime::parse_from_str(text, format) {
                return Some(time.and_utc());
            }
            NaiveDate::parse_from_str(text, format)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        }
    }
}

#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}
