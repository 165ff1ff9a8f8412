//! Aggregate statistics over the record collection.
//!
//! [`Dashboard::compute`] is a pure function of the records passed in and is
//! recomputed whenever the dashboard is shown. The weekly target check compares
//! the total duration against a user-supplied capacity.
//!
//! ```rust
//! use reclog::libs::dashboard::{check_weekly_target, CapacityStatus, Dashboard};
//!
//! let stats = Dashboard::compute(&[]);
//! assert_eq!(stats.top_tag, "None");
//! assert_eq!(check_weekly_target(Some(5.0), 5.0), Some(CapacityStatus::Remaining(0.0)));
//! ```

use super::record::Record;

/// Shown as the top tag when no record carries a tag.
pub const NO_TAG: &str = "None";

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub total_records: usize,
    pub total_duration: f64,
    pub top_tag: String,
    /// Percentage of records with status `completed`, rounded to a whole number.
    pub completion_rate: u32,
}

impl Dashboard {
    pub fn compute(records: &[Record]) -> Self {
        let total_records = records.len();
        let total_duration = total_duration(records);
        let completed = records.iter().filter(|r| r.is_completed()).count();

        let completion_rate = if total_records > 0 {
            (completed as f64 / total_records as f64 * 100.0).round() as u32
        } else {
            0
        };

        Self {
            total_records,
            total_duration,
            top_tag: top_tag(records).unwrap_or_else(|| NO_TAG.to_string()),
            completion_rate,
        }
    }
}

pub fn total_duration(records: &[Record]) -> f64 {
    records.iter().map(|r| r.duration).sum()
}

/// Most frequent non-empty tag. On a tie the tag seen first wins.
pub fn top_tag(records: &[Record]) -> Option<String> {
    // Tally kept in first-seen order; a Vec is enough at this scale.
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for record in records.iter().filter(|r| r.has_tag()) {
        match tally.iter().position(|(tag, _)| *tag == record.tag) {
            Some(index) => tally[index].1 += 1,
            None => tally.push((record.tag.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (tag, count) in tally {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((tag, count));
        }
    }
    best.map(|(tag, _)| tag.to_string())
}

/// How urgently a capacity status should be announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    /// Informational, can wait.
    Polite,
    /// Needs the user's attention now.
    Assertive,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapacityStatus {
    /// Hours left before the target is reached. Zero still counts as within target.
    Remaining(f64),
    /// Hours over the target, as a positive number.
    Exceeded(f64),
}

impl CapacityStatus {
    pub fn priority(&self) -> Priority {
        match self {
            CapacityStatus::Remaining(_) => Priority::Polite,
            CapacityStatus::Exceeded(_) => Priority::Assertive,
        }
    }
}

/// Compares `total_hours` with the weekly `cap`.
///
/// Returns `None` when no cap is set. A cap of `0` counts as unset.
pub fn check_weekly_target(cap: Option<f64>, total_hours: f64) -> Option<CapacityStatus> {
    let cap = cap.filter(|c| c.is_finite() && *c != 0.0)?;
    let remaining = cap - total_hours;

    if remaining >= 0.0 {
        Some(CapacityStatus::Remaining(remaining))
    } else {
        Some(CapacityStatus::Exceeded(remaining.abs()))
    }
}
