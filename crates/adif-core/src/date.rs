//! ADIF date utilities.
//!
//! ADIF stores `QSO_DATE` as eight digits, `YYYYMMDD`, with no separators.
//! Logbook software and operators produce many looser spellings; this module
//! validates the strict form and repairs the common hyphen/slash variants.
//!
//! - Strict: `20250102`
//! - Lenient: `2025-01-02`, `2025/01/02`, `2025-0102`, surrounding whitespace
//!
//! Calendar checks follow the proleptic Gregorian calendar (via `chrono`), so
//! `20000229` is valid and `20010229` is not.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::Regex;
use tracing::debug;

/// Returned by [`format_date`] when the input cannot be displayed.
pub const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

const ADIF_DATE_FORMAT: &str = "%Y%m%d";

/// `YYYY[-/]MM[-/]DD` with either separator, or none, between each part.
static SEPARATED_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})[-/]?([0-9]{2})[-/]?([0-9]{2})$").expect("Invalid date regex")
});

/// Formats a raw `YYYYMMDD` value for display as `YYYY-MM-DD`.
///
/// Anything that is not exactly 8 ASCII characters yields
/// [`DATE_PLACEHOLDER`]. No calendar validation is performed.
///
/// ```
/// use adif_core::date::format_date;
///
/// assert_eq!(format_date("20250102"), "2025-01-02");
/// assert_eq!(format_date("2025"), "YYYY-MM-DD");
/// ```
pub fn format_date(raw: &str) -> String {
    if raw.len() != 8 || !raw.is_ascii() {
        return DATE_PLACEHOLDER.to_string();
    }
    format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..])
}

/// Parses a strict ADIF date into a calendar date.
///
/// Surrounding whitespace is ignored. Returns `None` unless the value is
/// exactly 8 digits, not all zeros, and names a real day.
pub fn parse_adif_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if trimmed == "00000000" {
        return None;
    }
    let year: i32 = trimmed[..4].parse().ok()?;
    let month: u32 = trimmed[4..6].parse().ok()?;
    let day: u32 = trimmed[6..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Returns true if `value` is a strict `YYYYMMDD` ADIF date.
pub fn is_valid_date_yyyymmdd(value: &str) -> bool {
    parse_adif_date(value).is_some()
}

/// Converts `YYYY-MM-DD`, `YYYY/MM/DD`, or `YYYYMMDD` into `YYYYMMDD`.
///
/// Returns an empty string when the input cannot be turned into a valid
/// date; this function never fails loudly.
pub fn sanitize_date_to_yyyymmdd(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if is_valid_date_yyyymmdd(trimmed) {
        return trimmed.to_string();
    }
    if let Some(caps) = SEPARATED_DATE_REGEX.captures(trimmed) {
        let candidate = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
        if is_valid_date_yyyymmdd(&candidate) {
            return candidate;
        }
    }
    debug!(value = trimmed, "date cannot be sanitized to YYYYMMDD");
    String::new()
}

/// Formats an instant as its UTC calendar date, `YYYYMMDD`.
pub fn generate_date_yyyymmdd<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .format(ADIF_DATE_FORMAT)
        .to_string()
}

/// Today's UTC date as `YYYYMMDD`.
pub fn date_now_as_yyyymmdd() -> String {
    generate_date_yyyymmdd(&Utc::now())
}
