//! ADIF location codes (`LAT`, `LON`, `MY_LAT`, `MY_LON`).
//!
//! ADIF writes a coordinate as `XDDD MM.MMM`: a hemisphere letter, three
//! zero-padded degree digits, a space, and minutes with exactly three
//! decimals. `12.3456` becomes `N012 20.736`.
//!
//! [`convert_to_xdddmmm`] only knows the sign of its input, so it always
//! answers with `N` or `S`. Longitude callers use
//! [`convert_to_xdddmmm_for_axis`] with [`Axis::Longitude`] to get `E`/`W`.

use std::fmt;
use std::sync::LazyLock;

use adif_model::{AdifError, Axis, Hemisphere, Result};
use regex::Regex;

static COORDINATE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[NSEW][0-9]{3} [0-9]{2}\.[0-9]{3}$").expect("Invalid coordinate regex")
});

const MAX_DEGREES: u16 = 180;
const MINUTES_PER_DEGREE: f64 = 60.0;

/// A validated `XDDD MM.MMM` code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateCode {
    pub hemisphere: Hemisphere,
    /// Whole degrees, 0-180.
    pub degrees: u16,
    /// Minutes in `[0, 60)`, three decimals.
    pub minutes: f64,
}

impl CoordinateCode {
    /// Signed decimal degrees; south and west are negative.
    pub fn to_decimal_degrees(&self) -> f64 {
        let magnitude = f64::from(self.degrees) + self.minutes / MINUTES_PER_DEGREE;
        match self.hemisphere {
            Hemisphere::South | Hemisphere::West => -magnitude,
            Hemisphere::North | Hemisphere::East => magnitude,
        }
    }
}

impl fmt::Display for CoordinateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_coordinate_code(self.hemisphere, u64::from(self.degrees), self.minutes)
        )
    }
}

/// Renders the fixed-width code: letter, `DDD`, space, `MM.MMM`.
pub fn format_coordinate_code(hemisphere: Hemisphere, degrees: u64, minutes: f64) -> String {
    format!("{}{:03} {:06.3}", hemisphere.as_char(), degrees, minutes)
}

/// Converts a signed decimal-degree string to `XDDD MM.MMM` with an `N`/`S`
/// letter.
///
/// Minutes are rounded half away from zero to three decimals; a result of
/// `60.000` carries into the degrees. Degrees are not range-checked here
/// (see [`parse_xdddmmm`]), but magnitudes of 2^64 and above are a `Parse`
/// error.
///
/// ```
/// use adif_core::coordinate::convert_to_xdddmmm;
///
/// assert_eq!(convert_to_xdddmmm("12.3456").unwrap(), "N012 20.736");
/// assert_eq!(convert_to_xdddmmm("-7.5").unwrap(), "S007 30.000");
/// assert_eq!(convert_to_xdddmmm("10.9999917").unwrap(), "N011 00.000");
/// ```
pub fn convert_to_xdddmmm(input: &str) -> Result<String> {
    convert_to_xdddmmm_for_axis(input, Axis::Latitude)
}

/// Same as [`convert_to_xdddmmm`], picking the hemisphere letter for `axis`.
pub fn convert_to_xdddmmm_for_axis(input: &str, axis: Axis) -> Result<String> {
    let coord: f64 = input.parse().map_err(|_| AdifError::parse(input))?;
    // Whole degrees must fit the `u64` the code is rendered from.
    if !coord.is_finite() || coord.abs() >= u64::MAX as f64 {
        return Err(AdifError::parse(input));
    }
    let hemisphere = axis.hemisphere(coord < 0.0);
    let (degrees, minutes) = split_degrees(coord.abs());
    Ok(format_coordinate_code(hemisphere, degrees, minutes))
}

/// Splits a non-negative value into whole degrees and rounded minutes.
fn split_degrees(coord: f64) -> (u64, f64) {
    let mut degrees = coord.trunc();
    let mut minutes = ((coord - degrees) * MINUTES_PER_DEGREE * 1000.0).round() / 1000.0;
    if minutes >= MINUTES_PER_DEGREE {
        degrees += 1.0;
        minutes = 0.0;
    }
    (degrees as u64, minutes)
}

/// Parses and range-checks an `XDDD MM.MMM` code.
///
/// Degrees must be 0-180 and minutes below 60; at 180 degrees the minutes
/// must be exactly zero.
pub fn parse_xdddmmm(value: &str) -> Option<CoordinateCode> {
    if !COORDINATE_CODE_REGEX.is_match(value) {
        return None;
    }
    let hemisphere = value.chars().next().and_then(Hemisphere::from_char)?;
    let degrees: u16 = value[1..4].parse().ok()?;
    let minutes: f64 = value[5..].parse().ok()?;

    if degrees > MAX_DEGREES {
        return None;
    }
    if !(0.0..MINUTES_PER_DEGREE).contains(&minutes) {
        return None;
    }
    if degrees == MAX_DEGREES && minutes != 0.0 {
        return None;
    }
    Some(CoordinateCode {
        hemisphere,
        degrees,
        minutes,
    })
}

/// Returns true if `value` is a valid `XDDD MM.MMM` code.
pub fn is_xdddmmm(value: &str) -> bool {
    parse_xdddmmm(value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adif_model::ErrorKind;

    #[test]
    fn zero_is_north() {
        assert_eq!(convert_to_xdddmmm("0").as_deref(), Ok("N000 00.000"));
        assert_eq!(convert_to_xdddmmm("-0").as_deref(), Ok("N000 00.000"));
    }

    #[test]
    fn longitude_axis_uses_east_west() {
        assert_eq!(
            convert_to_xdddmmm_for_axis("-122.4194", Axis::Longitude).as_deref(),
            Ok("W122 25.164")
        );
        assert_eq!(
            convert_to_xdddmmm_for_axis("8.5417", Axis::Longitude).as_deref(),
            Ok("E008 32.502")
        );
    }

    #[test]
    fn rejects_non_numeric_and_non_finite() {
        for input in ["abc", "", "12,5", "NaN", "inf", " 12.5"] {
            let err = convert_to_xdddmmm(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseError, "{input:?}");
        }
    }

    #[test]
    fn rejects_magnitudes_beyond_whole_degree_range() {
        for input in ["1e300", "-1e300", "18446744073709551616"] {
            let err = convert_to_xdddmmm(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ParseError, "{input:?}");
        }
        assert_eq!(convert_to_xdddmmm("1e6").as_deref(), Ok("N1000000 00.000"));
    }

    #[test]
    fn carry_reaches_next_degree() {
        assert_eq!(convert_to_xdddmmm("-89.999995").as_deref(), Ok("S090 00.000"));
        assert_eq!(convert_to_xdddmmm("179.9999999").as_deref(), Ok("N180 00.000"));
    }

    #[test]
    fn parsed_code_converts_back() {
        let code = parse_xdddmmm("S007 30.000").expect("valid code");
        assert_eq!(code.hemisphere, Hemisphere::South);
        assert_eq!(code.degrees, 7);
        assert!((code.to_decimal_degrees() + 7.5).abs() < 1e-9);
        assert_eq!(code.to_string(), "S007 30.000");
    }
}
