//! Conversion between user-local dates, storage strings and display strings.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::date::{is_storage_shaped, CalendarDate};

/// Display value for missing or unreadable dates.
pub const DISPLAY_SENTINEL: &str = "N/A";

const ZONED_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%Y-%m-%d"];

/// Anything a date can be normalized from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DateInput<'a> {
    /// A picked calendar date.
    Calendar(CalendarDate),
    /// An instant carrying the user's own offset; its wall-clock date is used.
    Timestamp(DateTime<FixedOffset>),
    /// Free text: canonical, or any recognizable timestamp.
    Text(&'a str),
}

impl From<CalendarDate> for DateInput<'_> {
    fn from(date: CalendarDate) -> Self {
        DateInput::Calendar(date)
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(ts: DateTime<Tz>) -> Self {
        DateInput::Timestamp(ts.fixed_offset())
    }
}

/// Calendar date of a free-form timestamp, read in the process-local zone.
///
/// Zoned timestamps are shifted to local time first; naive ones are already
/// local wall time.
fn parse_local_date(text: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.with_timezone(&Local).date_naive());
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(text) {
        return Some(ts.with_timezone(&Local).date_naive());
    }
    if let Some(ts) = ZONED_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
    {
        return Some(ts.with_timezone(&Local).date_naive());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|ndt| ndt.date())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}

/// Normalize any date-like input to `YYYY-MM-DD`.
///
/// Already canonical text is returned untouched, so the function is
/// idempotent. Missing, empty or unreadable input yields `None`.
pub fn to_storage_string(input: Option<DateInput<'_>>) -> Option<String> {
    match input? {
        DateInput::Calendar(date) => Some(date.to_storage_string()),
        DateInput::Timestamp(ts) => {
            CalendarDate::from_naive(ts.date_naive()).map(|d| d.to_storage_string())
        }
        DateInput::Text("") => None,
        DateInput::Text(text) if is_storage_shaped(text) => Some(text.to_string()),
        DateInput::Text(text) => parse_local_date(text)
            .and_then(CalendarDate::from_naive)
            .map(|d| d.to_storage_string()),
    }
}

/// Render a stored date as `DD/MM/YYYY`, or [`DISPLAY_SENTINEL`].
///
/// Canonical strings are built field by field as a local calendar date, so
/// a date never moves across midnight. Impossible dates such as
/// `2023-02-30` show the sentinel instead of rolling into the next month.
pub fn to_display_date(input: Option<&str>) -> String {
    let date = match input {
        None | Some("") => None,
        Some(text) if is_storage_shaped(text) => CalendarDate::parse_storage(text),
        Some(text) => parse_local_date(text).and_then(CalendarDate::from_naive),
    };

    match date {
        Some(date) => date.to_display_string(),
        None => {
            if let Some(text) = input.filter(|t| !t.is_empty()) {
                tracing::debug!(input = %text, "Unreadable date, showing sentinel");
            }
            DISPLAY_SENTINEL.to_string()
        }
    }
}

fn split_ymd(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// True if the stored date is not after today's UTC date.
///
/// Impossible dates such as `2023-02-30` are `false`, never rolled over.
pub fn is_past_or_today(input: Option<&str>) -> bool {
    is_past_or_today_at(input, Utc::now().date_naive())
}

/// [`is_past_or_today`] against an explicit "today".
pub fn is_past_or_today_at(input: Option<&str>, today: NaiveDate) -> bool {
    match input {
        None | Some("") => false,
        Some(text) => split_ymd(text).is_some_and(|date| date <= today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    /// Local calendar date of a UTC wall time, as `YYYY-MM-DD`.
    fn local_storage(y: i32, m: u32, d: u32, h: u32) -> String {
        let utc = NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
        Local.from_utc_datetime(&utc).date_naive().format("%Y-%m-%d").to_string()
    }

    fn local_display(y: i32, m: u32, d: u32, h: u32) -> String {
        let utc = NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
        Local.from_utc_datetime(&utc).date_naive().format("%d/%m/%Y").to_string()
    }

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_storage_from_calendar() {
        assert_eq!(to_storage_string(Some(ymd(1990, 3, 5).into())).as_deref(), Some("1990-03-05"));
    }

    #[test]
    fn test_storage_canonical_unchanged() {
        assert_eq!(
            to_storage_string(Some(DateInput::Text("2024-02-29"))).as_deref(),
            Some("2024-02-29")
        );
    }

    #[test]
    fn test_storage_uses_own_offset() {
        // 23:30 at -05:00 is already the next day in UTC.
        let ts = DateTime::parse_from_rfc3339("2024-03-01T23:30:00-05:00").unwrap();
        assert_eq!(to_storage_string(Some(ts.into())).as_deref(), Some("2024-03-01"));

        let ts = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 15, 0)
            .unwrap();
        assert_eq!(to_storage_string(Some(ts.into())).as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_storage_from_naive_text() {
        assert_eq!(
            to_storage_string(Some("2024-03-01T10:30:00".into())).as_deref(),
            Some("2024-03-01")
        );
        assert_eq!(
            to_storage_string(Some("2024-03-01 23:59".into())).as_deref(),
            Some("2024-03-01")
        );
        assert_eq!(to_storage_string(Some("2024/7/4".into())).as_deref(), Some("2024-07-04"));
    }

    #[test]
    fn test_storage_from_zoned_text_uses_local_zone() {
        let expected = local_storage(2024, 3, 2, 1);

        for text in [
            "2024-03-02T01:00:00Z",
            "2024-03-01T20:00:00-05:00",
            "2024-03-02T10:00:00+09:00",
            "2024-03-02T01:00:00+0000",
            "2024-03-02 06:30:00+0530",
            "Sat, 02 Mar 2024 01:00:00 +0000",
        ] {
            assert_eq!(to_storage_string(Some(text.into())), Some(expected.clone()), "{text}");
        }
    }

    #[test]
    fn test_display_from_zoned_text_uses_local_zone() {
        let expected = local_display(2024, 3, 2, 1);

        assert_eq!(to_display_date(Some("2024-03-02T01:00:00Z")), expected);
        assert_eq!(to_display_date(Some("2024-03-01T20:00:00-05:00")), expected);
        assert_eq!(to_display_date(Some("2024-03-02T01:00:00+0000")), expected);
        assert_eq!(to_display_date(Some("Sat, 02 Mar 2024 01:00:00 +0000")), expected);
    }

    #[test]
    fn test_storage_missing_or_garbage() {
        assert_eq!(to_storage_string(None), None);
        assert_eq!(to_storage_string(Some("".into())), None);
        assert_eq!(to_storage_string(Some("not a date".into())), None);
    }

    #[test]
    fn test_storage_idempotent() {
        let once = to_storage_string(Some("2024-03-01T10:30:00".into())).unwrap();
        let twice = to_storage_string(Some(once.as_str().into())).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_display() {
        assert_eq!(to_display_date(Some("1990-03-15")), "15/03/1990");
        assert_eq!(to_display_date(Some("2024-03-01T10:30:00")), "01/03/2024");
    }

    #[test]
    fn test_display_sentinel() {
        assert_eq!(to_display_date(None), "N/A");
        assert_eq!(to_display_date(Some("")), "N/A");
        assert_eq!(to_display_date(Some("garbage")), "N/A");
        assert_eq!(to_display_date(Some("2023-02-30")), "N/A");
    }

    #[test]
    fn test_past_or_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        assert!(is_past_or_today_at(Some("2024-06-10"), today));
        assert!(is_past_or_today_at(Some("1990-01-01"), today));
        assert!(!is_past_or_today_at(Some("2024-06-11"), today));
        assert!(!is_past_or_today_at(None, today));
        assert!(!is_past_or_today_at(Some(""), today));
        assert!(!is_past_or_today_at(Some("yesterday"), today));
        assert!(!is_past_or_today_at(Some("2023-02-30"), today));
    }

    #[test]
    fn test_past_or_today_against_clock() {
        let today = Utc::now().date_naive();
        let tomorrow = today + Duration::days(1);

        assert!(is_past_or_today(Some(today.format("%Y-%m-%d").to_string().as_str())));
        assert!(!is_past_or_today(Some(tomorrow.format("%Y-%m-%d").to_string().as_str())));
    }
}
