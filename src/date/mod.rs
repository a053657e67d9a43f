//! Calendar date handling.
//!
//! # Data Flow
//! ```text
//! date picker / typed digits
//!     → mask.rs (progressive DD/MM/YYYY masking, completion check)
//!     → normalize.rs (to canonical YYYY-MM-DD)
//!     → persistence collaborator (opaque string)
//!     → normalize.rs (back to DD/MM/YYYY for display)
//! ```
//!
//! # Design Decisions
//! - Dates carry no time of day and no zone, so they never drift
//! - Malformed input never errors out of the normalizers: `None` or "N/A"
//! - Years are limited to 1..=9999 so every date fits four digits

pub mod mask;
pub mod normalize;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use mask::{format_progressive_input, parse_masked_input, MaskProgress};
pub use normalize::{
    is_past_or_today, is_past_or_today_at, to_display_date, to_storage_string, DateInput,
    DISPLAY_SENTINEL,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a calendar date in YYYY-MM-DD form")]
pub struct InvalidDate(pub String);

static STORAGE_SHAPE: OnceLock<Regex> = OnceLock::new();

/// True if `s` looks like `YYYY-MM-DD` (ASCII digits only, no range check).
pub fn is_storage_shaped(s: &str) -> bool {
    STORAGE_SHAPE
        .get_or_init(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap())
        .is_match(s)
}

/// A date with no time-of-day or zone component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    /// Build a date, rejecting impossible days and years outside 1..=9999.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn from_naive(date: NaiveDate) -> Option<Self> {
        Self::from_ymd(date.year(), date.month(), date.day())
    }

    /// Parse a canonical storage string.
    pub fn parse_storage(s: &str) -> Option<Self> {
        if !is_storage_shaped(s) {
            return None;
        }
        let year = s[0..4].parse().ok()?;
        let month = s[5..7].parse().ok()?;
        let day = s[8..10].parse().ok()?;
        Self::from_ymd(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// `YYYY-MM-DD`
    pub fn to_storage_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }

    /// `DD/MM/YYYY`
    pub fn to_display_string(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_storage_string())
    }
}

impl FromStr for CalendarDate {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_storage(s).ok_or_else(|| InvalidDate(s.to_string()))
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_storage_string()
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = InvalidDate;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
