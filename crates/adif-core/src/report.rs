//! Batch normalization of ADIF fields.
//!
//! Runs the date, time, frequency, and coordinate engines over raw values and
//! records one [`FieldOutcome`] per value, so callers can show or serialize
//! what was accepted, what it became, and why anything was rejected.

use adif_model::{Axis, Band, NormalizeOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coordinate::{convert_to_xdddmmm_for_axis, parse_xdddmmm};
use crate::date::{format_date, is_valid_date_yyyymmdd, sanitize_date_to_yyyymmdd};
use crate::frequency::{
    frequency_to_band, is_valid_frequency_mhz, sanitize_frequency_mhz, strip_leading_mhz_zeros,
};
use crate::time::{format_time, is_valid_time_adif, sanitize_time_to_adif};

const MAX_LATITUDE: f64 = 90.0;

/// Which ADIF field a raw value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Date,
    Time,
    Frequency,
    /// Signed decimal degrees to be encoded as `N`/`S`.
    Latitude,
    /// Signed decimal degrees to be encoded as `E`/`W`.
    Longitude,
    /// An already encoded `XDDD MM.MMM` value.
    CoordinateCode,
}

impl FieldKind {
    /// ADIF field name the kind is written to.
    pub fn adif_name(&self) -> &'static str {
        match self {
            FieldKind::Date => "QSO_DATE",
            FieldKind::Time => "TIME_ON",
            FieldKind::Frequency => "FREQ",
            FieldKind::Latitude => "LAT",
            FieldKind::Longitude => "LON",
            FieldKind::CoordinateCode => "LAT/LON",
        }
    }

    /// Maps a CSV header to a field kind (case-insensitive).
    pub fn from_header(header: &str) -> Option<Self> {
        match header.trim().to_ascii_lowercase().as_str() {
            "qso_date" | "date" | "qso_date_off" => Some(FieldKind::Date),
            "time_on" | "time_off" | "time" => Some(FieldKind::Time),
            "freq" | "freq_rx" | "frequency" => Some(FieldKind::Frequency),
            "lat" | "my_lat" | "latitude" => Some(FieldKind::Latitude),
            "lon" | "my_lon" | "longitude" => Some(FieldKind::Longitude),
            _ => None,
        }
    }
}

/// Result of normalizing one raw value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldOutcome {
    pub kind: FieldKind,
    pub input: String,
    /// Canonical ADIF value, `None` when rejected.
    pub canonical: Option<String>,
    /// Human-readable rendering of the canonical value.
    pub display: Option<String>,
    /// Band, for accepted frequencies on a known band.
    pub band: Option<Band>,
    /// Why the value was rejected.
    pub reason: Option<String>,
}

impl FieldOutcome {
    fn accepted(kind: FieldKind, input: &str, canonical: String, display: String) -> Self {
        Self {
            kind,
            input: input.to_string(),
            canonical: Some(canonical),
            display: Some(display),
            band: None,
            reason: None,
        }
    }

    fn rejected(kind: FieldKind, input: &str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        debug!(field = kind.adif_name(), input, reason = %reason, "value rejected");
        Self {
            kind,
            input: input.to_string(),
            canonical: None,
            display: None,
            band: None,
            reason: Some(reason),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.canonical.is_some()
    }
}

/// Normalizes one raw value for the given field.
pub fn normalize_field(kind: FieldKind, raw: &str, options: &NormalizeOptions) -> FieldOutcome {
    match kind {
        FieldKind::Date => normalize_date(raw, options),
        FieldKind::Time => normalize_time(raw, options),
        FieldKind::Frequency => normalize_frequency(raw, options),
        FieldKind::Latitude => normalize_coordinate(kind, raw, Axis::Latitude, options),
        FieldKind::Longitude => normalize_coordinate(kind, raw, Axis::Longitude, options),
        FieldKind::CoordinateCode => check_coordinate_code(raw, options),
    }
}

fn normalize_date(raw: &str, options: &NormalizeOptions) -> FieldOutcome {
    let canonical = if options.is_strict() {
        if is_valid_date_yyyymmdd(raw) {
            raw.trim().to_string()
        } else {
            String::new()
        }
    } else {
        sanitize_date_to_yyyymmdd(raw)
    };
    if canonical.is_empty() {
        return FieldOutcome::rejected(FieldKind::Date, raw, "not a valid YYYYMMDD date");
    }
    let display = format_date(&canonical);
    FieldOutcome::accepted(FieldKind::Date, raw, canonical, display)
}

fn normalize_time(raw: &str, options: &NormalizeOptions) -> FieldOutcome {
    let canonical = if options.is_strict() {
        if is_valid_time_adif(raw) {
            raw.trim().to_string()
        } else {
            String::new()
        }
    } else {
        sanitize_time_to_adif(raw)
    };
    if canonical.is_empty() {
        return FieldOutcome::rejected(FieldKind::Time, raw, "not a valid HHMM or HHMMSS time");
    }
    let display = match canonical.split_at_checked(4) {
        Some((hhmm, seconds)) if !seconds.is_empty() => {
            format!("{}:{}", format_time(hhmm), seconds)
        }
        _ => format_time(&canonical),
    };
    FieldOutcome::accepted(FieldKind::Time, raw, canonical, display)
}

fn normalize_frequency(raw: &str, options: &NormalizeOptions) -> FieldOutcome {
    let canonical = if options.is_strict() {
        if is_valid_frequency_mhz(raw) {
            raw.trim().to_string()
        } else {
            String::new()
        }
    } else {
        sanitize_frequency_mhz(raw)
    };
    if canonical.is_empty() {
        return FieldOutcome::rejected(FieldKind::Frequency, raw, "not a valid MHz frequency");
    }
    let band = frequency_to_band(strip_leading_mhz_zeros(&canonical));
    if options.require_band {
        let Some(band) = band else {
            return FieldOutcome::rejected(
                FieldKind::Frequency,
                raw,
                "frequency is not on a known band",
            );
        };
        let in_range = canonical.parse::<f64>().is_ok_and(|mhz| band.contains(mhz));
        if !in_range {
            return FieldOutcome::rejected(
                FieldKind::Frequency,
                raw,
                format!("frequency is outside the {band} band"),
            );
        }
    }
    let display = band.map_or_else(|| "-".to_string(), |band| band.to_string());
    let mut outcome = FieldOutcome::accepted(FieldKind::Frequency, raw, canonical, display);
    outcome.band = band;
    outcome
}

fn normalize_coordinate(
    kind: FieldKind,
    raw: &str,
    axis: Axis,
    options: &NormalizeOptions,
) -> FieldOutcome {
    let input = if options.is_strict() { raw } else { raw.trim() };
    let code = match convert_to_xdddmmm_for_axis(input, axis) {
        Ok(code) => code,
        Err(error) => return FieldOutcome::rejected(kind, raw, error.to_string()),
    };
    let Some(parsed) = parse_xdddmmm(&code) else {
        return FieldOutcome::rejected(kind, raw, format!("{code} is out of range"));
    };
    if axis == Axis::Latitude && parsed.to_decimal_degrees().abs() > MAX_LATITUDE {
        return FieldOutcome::rejected(kind, raw, format!("latitude {code} exceeds 90 degrees"));
    }
    let display = format!("{:.6}", parsed.to_decimal_degrees());
    FieldOutcome::accepted(kind, raw, code, display)
}

fn check_coordinate_code(raw: &str, options: &NormalizeOptions) -> FieldOutcome {
    let input = if options.is_strict() { raw } else { raw.trim() };
    match parse_xdddmmm(input) {
        Some(parsed) => FieldOutcome::accepted(
            FieldKind::CoordinateCode,
            raw,
            input.to_string(),
            format!("{:.6}", parsed.to_decimal_degrees()),
        ),
        None => FieldOutcome::rejected(
            FieldKind::CoordinateCode,
            raw,
            "not a valid XDDD MM.MMM coordinate",
        ),
    }
}

/// Outcomes for a batch of values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldReport {
    pub outcomes: Vec<FieldOutcome>,
}

impl FieldReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: FieldOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes.len() - self.accepted_count()
    }

    pub fn has_rejections(&self) -> bool {
        self.outcomes.iter().any(|o| !o.is_accepted())
    }
}

/// Normalizes every value as `kind`.
pub fn normalize_all<I, S>(kind: FieldKind, values: I, options: &NormalizeOptions) -> FieldReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let outcomes = values
        .into_iter()
        .map(|value| normalize_field(kind, value.as_ref(), options))
        .collect();
    FieldReport { outcomes }
}
