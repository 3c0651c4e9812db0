//! Date-range presets and the concrete windows they resolve to.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Named, anchor-relative date-range shorthand offered by filter bars.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum DatePreset {
    #[default]
    #[serde(rename = "thisMonth")]
    ThisMonth,
    #[serde(rename = "lastMonth")]
    LastMonth,
    #[serde(rename = "last3Months")]
    Last3Months,
    #[serde(rename = "all")]
    All,
}

impl DatePreset {
    pub const ALL: [DatePreset; 4] = [
        DatePreset::ThisMonth,
        DatePreset::LastMonth,
        DatePreset::Last3Months,
        DatePreset::All,
    ];

    /// Wire key, identical to the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            DatePreset::ThisMonth => "thisMonth",
            DatePreset::LastMonth => "lastMonth",
            DatePreset::Last3Months => "last3Months",
            DatePreset::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatePreset::ThisMonth => "This Month",
            DatePreset::LastMonth => "Last Month",
            DatePreset::Last3Months => "Last 3 Months",
            DatePreset::All => "All Time",
        }
    }
}

impl fmt::Display for DatePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DatePreset {
    type Err = ParsePresetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DatePreset::ALL
            .into_iter()
            .find(|preset| preset.key() == value.trim())
            .ok_or_else(|| ParsePresetError(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePresetError(pub String);

impl fmt::Display for ParsePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown date preset `{}`", self.0)
    }
}

impl std::error::Error for ParsePresetError {}

/// Concrete filter window. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DateRange {
    Bounded { start: NaiveDate, end: NaiveDate },
    /// No date constraint; callers must not filter by date.
    Unbounded,
}

impl DateRange {
    /// Validating constructor; building `Bounded` directly skips the `start <= end` check.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(DateRange::Bounded { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            DateRange::Bounded { start, end } => date >= *start && date <= *end,
            DateRange::Unbounded => true,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match self {
            DateRange::Bounded { start, .. } => Some(*start),
            DateRange::Unbounded => None,
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match self {
            DateRange::Bounded { end, .. } => Some(*end),
            DateRange::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, DateRange::Unbounded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateRange`] values.
pub enum DateRangeError {
    InvalidRange,
}

impl fmt::Display for DateRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateRangeError::InvalidRange => f.write_str("date range end must not precede start"),
        }
    }
}

impl std::error::Error for DateRangeError {}
