//! Progressive `DD/MM/YYYY` masking for typed date entry.
//!
//! Each keystroke re-runs [`format_progressive_input`] over the whole field.
//! Non-digits are dropped, never rejected. Calendar validation happens only
//! once all eight digits are present, in [`parse_masked_input`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::date::CalendarDate;

const MAX_DIGITS: usize = 8;

/// How far the user has typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskProgress {
    Empty,
    /// 1-2 digits.
    Day,
    /// 3-4 digits.
    Month,
    /// 5-7 digits.
    Year,
    /// All 8 digits.
    Complete,
}

impl MaskProgress {
    /// State after `digits` admitted digits.
    pub fn from_digit_count(digits: usize) -> Self {
        match digits {
            0 => MaskProgress::Empty,
            1..=2 => MaskProgress::Day,
            3..=4 => MaskProgress::Month,
            5..=7 => MaskProgress::Year,
            _ => MaskProgress::Complete,
        }
    }

    /// State of a raw or already masked input.
    pub fn of(input: &str) -> Self {
        Self::from_digit_count(input.chars().filter(char::is_ascii_digit).count())
    }
}

/// Mask raw keystrokes: digits only, at most 8, `/` after the 2nd and 4th.
pub fn format_progressive_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

/// Turn a completely typed date into a calendar date.
///
/// Accepts raw or masked input. Returns `None` until all eight digits are
/// present, and for impossible dates or dates after `today`.
pub fn parse_masked_input(input: &str, today: NaiveDate) -> Option<CalendarDate> {
    let masked = format_progressive_input(input);
    if MaskProgress::of(&masked) != MaskProgress::Complete {
        return None;
    }

    let mut parts = masked.split('/');
    let day: u32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let year: i32 = parts.next()?.parse().ok()?;
    if day == 0 || month == 0 || day > 31 || month > 12 {
        return None;
    }

    CalendarDate::from_ymd(year, month, day).filter(|date| date.as_naive() <= today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_full_mask() {
        assert_eq!(format_progressive_input("15031990"), "15/03/1990");
    }

    #[test]
    fn test_partial_masks() {
        assert_eq!(format_progressive_input(""), "");
        assert_eq!(format_progressive_input("1"), "1");
        assert_eq!(format_progressive_input("15"), "15");
        assert_eq!(format_progressive_input("150"), "15/0");
        assert_eq!(format_progressive_input("1503"), "15/03");
        assert_eq!(format_progressive_input("15031"), "15/03/1");
    }

    #[test]
    fn test_non_digits_filtered_and_truncated() {
        assert_eq!(format_progressive_input("15/03/1990"), "15/03/1990");
        assert_eq!(format_progressive_input("ab15-03.1990xyz"), "15/03/1990");
        assert_eq!(format_progressive_input("1503199012"), "15/03/1990");
        assert_eq!(format_progressive_input("15/"), "15");
    }

    #[test]
    fn test_progress() {
        assert_eq!(MaskProgress::of(""), MaskProgress::Empty);
        assert_eq!(MaskProgress::of("1"), MaskProgress::Day);
        assert_eq!(MaskProgress::of("15/0"), MaskProgress::Month);
        assert_eq!(MaskProgress::of("15/03/199"), MaskProgress::Year);
        assert_eq!(MaskProgress::of("15/03/1990"), MaskProgress::Complete);
    }

    #[test]
    fn test_parse_complete() {
        let date = parse_masked_input("15/03/1990", today()).unwrap();
        assert_eq!(date.to_storage_string(), "1990-03-15");
        assert_eq!(parse_masked_input("15031990", today()), Some(date));
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(parse_masked_input("15/03/199", today()), None);
        assert_eq!(parse_masked_input("32/01/1990", today()), None);
        assert_eq!(parse_masked_input("01/13/1990", today()), None);
        assert_eq!(parse_masked_input("30/02/1990", today()), None);
        assert_eq!(parse_masked_input("00/01/1990", today()), None);
        assert_eq!(parse_masked_input("11/06/2024", today()), None);
        assert!(parse_masked_input("10/06/2024", today()).is_some());
    }
}
