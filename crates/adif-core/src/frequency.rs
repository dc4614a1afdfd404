//! Frequency formatting, validation, and band lookup.
//!
//! Three representations meet here:
//!
//! - Raw rig readouts: nine characters, one ignored leading digit, then two
//!   MHz, three kHz, and three Hz digits (`014074000`).
//! - Dotted kHz: `MHz.kHz.Hz` (`14.074.000`).
//! - ADIF `FREQ`: decimal MHz with up to six fractional digits (`14.074`).
//!
//! Band lookup works on the leading `MHz.` prefix of a dotted value. The
//! prefix table is ordered and its prefixes never overlap, so the first
//! match is the only match.

use std::sync::LazyLock;

use adif_model::{AdifError, Band, Result};
use regex::Regex;
use tracing::debug;

/// Length of a raw rig frequency readout.
pub const RAW_FREQUENCY_LEN: usize = 9;

/// ADIF `FREQ`: 1-4 integer digits, optional dot and 1-6 fractional digits.
static FREQUENCY_MHZ_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,4}(?:\.[0-9]{1,6})?$").expect("Invalid frequency regex")
});

/// One row of the band lookup table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPrefix {
    /// Leading `MHz.` text a dotted frequency must start with.
    pub prefix: &'static str,
    pub band: Band,
}

impl BandPrefix {
    const fn new(prefix: &'static str, band: Band) -> Self {
        Self { prefix, band }
    }

    /// Legal `(min, max)` MHz range for frequencies under this prefix.
    pub fn range(&self) -> (f64, f64) {
        self.band.range()
    }
}

const BAND_PREFIXES: &[BandPrefix] = &[
    BandPrefix::new("54.", Band::M6),
    BandPrefix::new("53.", Band::M6),
    BandPrefix::new("52.", Band::M6),
    BandPrefix::new("51.", Band::M6),
    BandPrefix::new("50.", Band::M6),
    BandPrefix::new("29.", Band::M10),
    BandPrefix::new("28.", Band::M10),
    BandPrefix::new("24.", Band::M12),
    BandPrefix::new("21.", Band::M15),
    BandPrefix::new("18.", Band::M17),
    BandPrefix::new("14.", Band::M20),
    BandPrefix::new("10.", Band::M30),
    BandPrefix::new("7.", Band::M40),
    BandPrefix::new("5.", Band::M60),
    BandPrefix::new("3.", Band::M80),
    BandPrefix::new("2.", Band::M160),
    BandPrefix::new("1.", Band::M160),
];

/// Returns the full band prefix table.
pub fn band_table() -> &'static [BandPrefix] {
    BAND_PREFIXES
}

/// Finds the table row whose prefix `freq` starts with.
pub fn lookup_band_prefix(freq: &str) -> Option<&'static BandPrefix> {
    BAND_PREFIXES
        .iter()
        .find(|entry| freq.starts_with(entry.prefix))
}

/// Returns the legal `(min, max)` MHz range of the band `freq` falls on,
/// or `(0.0, 0.0)` when no prefix matches.
pub fn get_frequency_range(freq: &str) -> (f64, f64) {
    lookup_band_prefix(freq).map_or((0.0, 0.0), BandPrefix::range)
}

/// Returns the band for a dotted frequency such as `14.074`.
pub fn frequency_to_band(freq: &str) -> Option<Band> {
    lookup_band_prefix(freq).map(|entry| entry.band)
}

/// Formats a nine-character raw readout as `MHz.kHz.Hz`.
///
/// Leading zeros of the MHz part are dropped, so `000137000` becomes
/// `.137.000`.
///
/// ```
/// use adif_core::frequency::format_frequency_to_khz;
///
/// assert_eq!(format_frequency_to_khz("014074000").unwrap(), "14.074.000");
/// assert!(format_frequency_to_khz("01407400").is_err());
/// ```
pub fn format_frequency_to_khz(raw: &str) -> Result<String> {
    let actual = raw.chars().count();
    if actual != RAW_FREQUENCY_LEN {
        return Err(AdifError::InvalidLength {
            expected: RAW_FREQUENCY_LEN,
            actual,
        });
    }
    if !raw.is_ascii() {
        return Err(AdifError::syntax(
            "raw frequency must contain only ASCII characters",
        ));
    }
    let mhz = raw[1..3].trim_start_matches('0');
    let khz = &raw[3..6];
    let hz = &raw[6..];
    Ok(format!("{mhz}.{khz}.{hz}"))
}

/// Formats a dotted frequency (`014.074.000` or `14.074`) as `MHz.kHz`.
///
/// Empty input is passed through. A value without any dot is a syntax error
/// because the decimal position cannot be inferred. With three or more parts
/// the Hz part and anything after it is dropped.
pub fn format_frequency_to_mhz(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }
    let mut parts = raw.split('.');
    let mhz = parts.next().unwrap_or_default();
    let Some(fraction) = parts.next() else {
        return Err(AdifError::syntax(
            "frequency has no decimal point; cannot infer MHz",
        ));
    };
    Ok(format!("{}.{}", mhz.trim_start_matches('0'), fraction))
}

/// Returns true if `value` is a valid ADIF `FREQ` in MHz.
///
/// Rules: one to four integer digits, optional dot with one to six digits,
/// no sign, no thousands separators, no trailing dot, and a value above zero.
pub fn is_valid_frequency_mhz(value: &str) -> bool {
    let trimmed = value.trim();
    if !FREQUENCY_MHZ_REGEX.is_match(trimmed) {
        return false;
    }
    trimmed.parse::<f64>().is_ok_and(|mhz| mhz > 0.0)
}

/// Drops leading zeros of the integer MHz part, keeping at least one digit.
///
/// `014.074` becomes `14.074` and `00.137` becomes `0.137`, so the result
/// starts with the prefix the band table expects.
pub fn strip_leading_mhz_zeros(value: &str) -> &str {
    let stripped = value.trim_start_matches('0');
    if stripped.len() < value.len() && !stripped.starts_with(|c: char| c.is_ascii_digit()) {
        &value[value.len() - stripped.len() - 1..]
    } else {
        stripped
    }
}

/// Converts a raw readout or dotted frequency into an ADIF `FREQ` value.
///
/// Raw nine-digit readouts go through [`format_frequency_to_khz`] first;
/// dotted values are reduced with [`format_frequency_to_mhz`]; plain integer
/// MHz values are kept. Returns an empty string if the result is not a valid
/// frequency.
pub fn sanitize_frequency_mhz(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if is_valid_frequency_mhz(trimmed) {
        return strip_leading_mhz_zeros(trimmed).to_string();
    }

    let is_raw_readout =
        trimmed.len() == RAW_FREQUENCY_LEN && trimmed.bytes().all(|b| b.is_ascii_digit());
    let dotted = if is_raw_readout {
        match format_frequency_to_khz(trimmed) {
            Ok(dotted) => dotted,
            Err(error) => {
                debug!(value = trimmed, %error, "raw frequency rejected");
                return String::new();
            }
        }
    } else {
        trimmed.to_string()
    };

    match format_frequency_to_mhz(&dotted) {
        Ok(candidate) if is_valid_frequency_mhz(&candidate) => candidate,
        Ok(candidate) => {
            debug!(value = trimmed, candidate = %candidate, "frequency out of range");
            String::new()
        }
        Err(error) => {
            debug!(value = trimmed, %error, "frequency cannot be sanitized");
            String::new()
        }
    }
}
