//! Read-only projections over the record collection: search and sort.
//!
//! Both operate on a borrowed slice and return a new vector, leaving the
//! store's insertion order untouched.

use super::error::RecordResult;
use super::record::Record;
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A compiled, case-insensitive search pattern.
///
/// A record matches when the pattern matches its title, tag or date.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
}

impl SearchPattern {
    /// Compiles `pattern`. Malformed patterns return [`RecordError::InvalidPattern`](super::error::RecordError::InvalidPattern).
    pub fn compile(pattern: &str) -> RecordResult<Self> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.regex.is_match(&record.title) || self.regex.is_match(&record.tag) || self.regex.is_match(&record.date)
    }

    /// Records of `records` that match, in their original order.
    pub fn filter(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// Convenience wrapper: compile `pattern` and filter the full collection.
pub fn filter_records(records: &[Record], pattern: &str) -> RecordResult<Vec<Record>> {
    Ok(SearchPattern::compile(pattern)?.filter(records))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SortKey {
    /// Chronological, oldest first
    Date,
    /// Alphabetical, ignoring case and accents
    Title,
    /// Shortest first
    Duration,
}

impl SortKey {
    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortKey::Date => compare_dates(a, b),
            SortKey::Title => compare_titles(&a.title, &b.title),
            SortKey::Duration => a.duration.total_cmp(&b.duration),
        }
    }
}

/// Returns a sorted copy of `records`. The sort is stable, so equal keys keep
/// their insertion order.
pub fn sort_records(records: &[Record], key: SortKey) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| key.compare(a, b));
    sorted
}

// Records whose date does not parse (only possible through import) go last.
fn compare_dates(a: &Record, b: &Record) -> Ordering {
    match (a.naive_date(), b.naive_date()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Primary strength ignores accents and case, so "Éclair" sorts among the e's.
// Unaccented before accented, then lowercase before uppercase on ties.
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn collation_key(title: &str) -> String {
    title.nfkd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}
