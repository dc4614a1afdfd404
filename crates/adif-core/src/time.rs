//! ADIF time utilities.
//!
//! ADIF times (`TIME_ON`, `TIME_OFF`) are `HHMM` or `HHMMSS` in UTC, digits
//! only. Input from operators often carries colons, dots, dashes, or
//! unpadded components (`9:3`), which [`sanitize_time_to_adif`] repairs.

use chrono::NaiveTime;
use tracing::debug;

/// Returned by [`format_time`] when the input cannot be displayed.
pub const TIME_PLACEHOLDER: &str = "HH:MM";

/// Formats a raw `HHMM` value for display as `HH:MM`.
///
/// Anything that is not exactly 4 ASCII characters yields
/// [`TIME_PLACEHOLDER`]. No range validation is performed.
pub fn format_time(raw: &str) -> String {
    if raw.len() != 4 || !raw.is_ascii() {
        return TIME_PLACEHOLDER.to_string();
    }
    format!("{}:{}", &raw[..2], &raw[2..])
}

/// Parses a strict ADIF time (`HHMM` or `HHMMSS`) into a time of day.
///
/// Surrounding whitespace is ignored; any other non-digit rejects the value.
pub fn parse_adif_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    if trimmed.len() != 4 && trimmed.len() != 6 {
        return None;
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = trimmed[..2].parse().ok()?;
    let minute: u32 = trimmed[2..4].parse().ok()?;
    let second: u32 = match trimmed.get(4..) {
        Some(rest) if !rest.is_empty() => rest.parse().ok()?,
        _ => 0,
    };
    // chrono accepts second = 60 as a leap second; ADIF does not.
    if second > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, second)
}

/// Returns true if `value` is a valid `HHMM` or `HHMMSS` ADIF time.
pub fn is_valid_time_adif(value: &str) -> bool {
    parse_adif_time(value).is_some()
}

/// Converts a loosely formatted time into `HHMM` or `HHMMSS`.
///
/// Accepts `HH:MM`, `H:MM`, `HH:MM:SS`, `H:M:S`, plain digits, and any run of
/// non-digit separators between parts. Returns an empty string when the
/// result would not be a valid time.
pub fn sanitize_time_to_adif(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if is_valid_time_adif(trimmed) {
        return trimmed.to_string();
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() == 2 || parts.len() == 3 {
        let candidate: String = parts.iter().map(|part| pad2(part)).collect();
        if is_valid_time_adif(&candidate) {
            return candidate;
        }
        debug!(value = trimmed, candidate = %candidate, "time out of range");
        return String::new();
    }

    // No usable separators: keep the digits and hope for HHMM or HHMMSS.
    let compact: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if (compact.len() == 4 || compact.len() == 6) && is_valid_time_adif(&compact) {
        return compact;
    }
    debug!(value = trimmed, "time cannot be sanitized to HHMM[SS]");
    String::new()
}

/// Left-pads single-digit parts; wider parts are kept as-is.
fn pad2(part: &str) -> String {
    if part.len() == 1 {
        format!("0{part}")
    } else {
        part.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_inserts_colon_without_validation() {
        assert_eq!(format_time("0930"), "09:30");
        assert_eq!(format_time("9999"), "99:99");
        assert_eq!(format_time("093000"), TIME_PLACEHOLDER);
    }

    #[test]
    fn parse_adif_time_reads_seconds() {
        assert_eq!(parse_adif_time("123045"), NaiveTime::from_hms_opt(12, 30, 45));
        assert_eq!(parse_adif_time(" 0000 "), NaiveTime::from_hms_opt(0, 0, 0));
        assert_eq!(parse_adif_time("235960"), None);
    }

    #[test]
    fn wide_parts_are_not_truncated() {
        assert_eq!(sanitize_time_to_adif("123:45"), "");
        assert_eq!(sanitize_time_to_adif("12:345"), "");
    }

    #[test]
    fn fallback_strips_everything_but_digits() {
        assert_eq!(sanitize_time_to_adif("T1230Z"), "1230");
        assert_eq!(sanitize_time_to_adif("h123045"), "123045");
        // Four parts skip the padding path and fall back to the bare digits.
        assert_eq!(sanitize_time_to_adif("1:2:3:4"), "1234");
        assert_eq!(sanitize_time_to_adif("1:2:3:45"), "");
    }
}
