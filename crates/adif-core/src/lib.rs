//! Normalization and validation of ADIF logbook fields.
//!
//! Each engine is a set of pure functions over strings:
//!
//! - [`date`]: `QSO_DATE` as `YYYYMMDD`
//! - [`time`]: `TIME_ON`/`TIME_OFF` as `HHMM` or `HHMMSS`
//! - [`frequency`]: `FREQ` in MHz, raw rig readouts, and band lookup
//! - [`coordinate`]: `LAT`/`LON` as `XDDD MM.MMM`
//! - [`dxcc`]: ISO country code to DXCC entity
//!
//! Validators return `bool`, sanitizers return an empty string when a value
//! cannot be repaired, display formatters fall back to a placeholder, and
//! converters return [`adif_model::AdifError`].

pub mod coordinate;
pub mod date;
pub mod dxcc;
pub mod frequency;
pub mod report;
pub mod time;

pub use coordinate::{
    CoordinateCode, convert_to_xdddmmm, convert_to_xdddmmm_for_axis, format_coordinate_code,
    is_xdddmmm, parse_xdddmmm,
};
pub use date::{
    DATE_PLACEHOLDER, date_now_as_yyyymmdd, format_date, generate_date_yyyymmdd,
    is_valid_date_yyyymmdd, parse_adif_date, sanitize_date_to_yyyymmdd,
};
pub use dxcc::dxcc_from_iso2;
pub use frequency::{
    BandPrefix, band_table, format_frequency_to_khz, format_frequency_to_mhz,
    frequency_to_band, get_frequency_range, is_valid_frequency_mhz, lookup_band_prefix,
    sanitize_frequency_mhz, strip_leading_mhz_zeros,
};
pub use report::{FieldKind, FieldOutcome, FieldReport, normalize_all, normalize_field};
pub use time::{
    TIME_PLACEHOLDER, format_time, is_valid_time_adif, parse_adif_time, sanitize_time_to_adif,
};
