//! Record schema and input validation.
//!
//! A [`Record`] is the single entity reclog tracks. Its serialized form uses
//! the camelCase field names of the persisted JSON layout so that exported
//! files and the stored blob share one shape.
//!
//! ```rust
//! use reclog::libs::record::{parse_duration, RecordInput};
//!
//! let input = RecordInput::new("Read chapter 3", "2025-03-10").duration("1.5").tag("study");
//! assert!(input.validate().is_ok());
//! assert_eq!(parse_duration(Some("abc")), 0.0);
//! ```

use super::error::{RecordError, RecordResult};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Calendar date in `YYYY-MM-DD` form.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    /// Hours spent; always finite and non-negative for records created through the store.
    #[serde(deserialize_with = "null_as_default")]
    pub duration: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
}

// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }

    /// Parsed calendar date, `None` when the stored text is not `YYYY-MM-DD`.
    ///
    /// Imported records are kept verbatim, so the date may not parse.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    pub(crate) fn apply(&mut self, fields: RecordFields) {
        self.title = fields.title;
        self.date = fields.date;
        self.duration = fields.duration;
        self.tag = fields.tag;
        self.status = fields.status;
    }
}

/// Raw form input for create and edit, before validation.
///
/// `duration` stays textual so that unparsable input can be coerced the same
/// way on every path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordInput {
    pub title: String,
    pub date: String,
    pub duration: Option<String>,
    pub tag: String,
    pub status: String,
}

impl RecordInput {
    pub fn new(title: &str, date: &str) -> Self {
        Self {
            title: title.to_string(),
            date: date.to_string(),
            duration: None,
            tag: String::new(),
            status: STATUS_PENDING.to_string(),
        }
    }

    pub fn duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Pre-fills an input from an existing record, as the edit form does.
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            date: record.date.clone(),
            duration: Some(record.duration.to_string()),
            tag: record.tag.clone(),
            status: record.status.clone(),
        }
    }

    /// Checks required fields and normalizes the input into storable values.
    pub fn validate(&self) -> RecordResult<RecordFields> {
        let title = self.title.trim();
        let date = self.date.trim();

        if title.is_empty() || date.is_empty() {
            return Err(RecordError::MissingRequiredFields);
        }

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| RecordError::InvalidDate(date.to_string()))?;

        Ok(RecordFields {
            title: title.to_string(),
            date: date.format(DATE_FORMAT).to_string(),
            duration: parse_duration(self.duration.as_deref()),
            tag: self.tag.trim().to_string(),
            status: self.status.trim().to_string(),
        })
    }
}

/// Validated mutable fields of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub title: String,
    pub date: String,
    pub duration: f64,
    pub tag: String,
    pub status: String,
}

/// Parses a duration the lenient way: the longest numeric prefix wins,
/// anything unparsable, negative or non-finite becomes `0`.
pub fn parse_duration(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let text = raw.trim_start();
    let value = numeric_prefix(text).and_then(|prefix| prefix.parse::<f64>().ok()).unwrap_or(0.0);

    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&text[..end])
}

/// Parses a persisted or imported JSON document into records.
///
/// The top-level value must be an array. Elements are trusted as-is: missing
/// fields take their defaults and no record invariant is re-checked.
pub fn parse_records(text: &str) -> RecordResult<Vec<Record>> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(RecordError::InvalidJson)?;
    if !value.is_array() {
        return Err(RecordError::ImportFormat);
    }
    serde_json::from_value(value).map_err(RecordError::InvalidJson)
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Returns a timestamp that is never earlier than `previous`.
pub(crate) fn advance_timestamp(previous: &str) -> String {
    let now = now_timestamp();
    match (DateTime::parse_from_rfc3339(previous), DateTime::parse_from_rfc3339(&now)) {
        (Ok(prev), Ok(current)) if prev > current => previous.to_string(),
        _ => now,
    }
}
