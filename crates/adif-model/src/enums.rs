//! Type-safe enumerations for ADIF values.
//!
//! These enums give compile-time names to concepts that travel as plain
//! strings in ADIF logs: band names and hemisphere letters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amateur-radio band covered by the frequency lookup tables.
///
/// Serialized with its ADIF band name (`"20m"`, `"160m"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    #[serde(rename = "160m")]
    M160,
    #[serde(rename = "80m")]
    M80,
    /// 60 m channelized allocation (WARC-15).
    #[serde(rename = "60m")]
    M60,
    #[serde(rename = "40m")]
    M40,
    /// 30 m WARC band.
    #[serde(rename = "30m")]
    M30,
    #[serde(rename = "20m")]
    M20,
    /// 17 m WARC band.
    #[serde(rename = "17m")]
    M17,
    #[serde(rename = "15m")]
    M15,
    /// 12 m WARC band.
    #[serde(rename = "12m")]
    M12,
    #[serde(rename = "10m")]
    M10,
    #[serde(rename = "6m")]
    M6,
}

impl Band {
    /// Every band, ordered from the lowest frequency up.
    pub const ALL: [Band; 11] = [
        Band::M160,
        Band::M80,
        Band::M60,
        Band::M40,
        Band::M30,
        Band::M20,
        Band::M17,
        Band::M15,
        Band::M12,
        Band::M10,
        Band::M6,
    ];

    /// Returns the ADIF band name.
    pub fn name(&self) -> &'static str {
        match self {
            Band::M160 => "160m",
            Band::M80 => "80m",
            Band::M60 => "60m",
            Band::M40 => "40m",
            Band::M30 => "30m",
            Band::M20 => "20m",
            Band::M17 => "17m",
            Band::M15 => "15m",
            Band::M12 => "12m",
            Band::M10 => "10m",
            Band::M6 => "6m",
        }
    }

    /// Returns the legal `(min, max)` range of the band in MHz.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Band::M160 => (1.810000, 2.000000),
            Band::M80 => (3.500000, 3.800000),
            Band::M60 => (5.351500, 5.366500),
            Band::M40 => (7.000000, 7.200000),
            Band::M30 => (10.100000, 10.150000),
            Band::M20 => (14.000000, 14.350000),
            Band::M17 => (18.068000, 18.168000),
            Band::M15 => (21.000000, 21.450000),
            Band::M12 => (24.890000, 24.990000),
            Band::M10 => (28.000000, 29.700000),
            Band::M6 => (50.000000, 54.000000),
        }
    }

    /// Returns true if `mhz` lies within the band's legal range (inclusive).
    pub fn contains(&self, mhz: f64) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&mhz)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Band {
    type Err = String;

    /// Parse a band name case-insensitively (`"20m"`, `"20M"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Band::ALL
            .iter()
            .copied()
            .find(|band| band.name() == normalized)
            .ok_or_else(|| format!("Unknown band: {s}"))
    }
}

/// Hemisphere letter leading a coordinate code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    pub fn as_char(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            'E' => Some(Hemisphere::East),
            'W' => Some(Hemisphere::West),
            _ => None,
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which coordinate a decimal-degree value represents.
///
/// The coordinate formatter itself only knows N/S; the axis is context the
/// caller supplies to get E/W letters for longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Latitude,
    Longitude,
}

impl Axis {
    /// Hemisphere for a value with the given sign on this axis.
    pub fn hemisphere(&self, negative: bool) -> Hemisphere {
        match (self, negative) {
            (Axis::Latitude, false) => Hemisphere::North,
            (Axis::Latitude, true) => Hemisphere::South,
            (Axis::Longitude, false) => Hemisphere::East,
            (Axis::Longitude, true) => Hemisphere::West,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Latitude => "latitude",
            Axis::Longitude => "longitude",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Axis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lat" | "latitude" => Ok(Axis::Latitude),
            "lon" | "long" | "longitude" => Ok(Axis::Longitude),
            _ => Err(format!("Unknown axis: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_names_round_trip_through_from_str() {
        for band in Band::ALL {
            assert_eq!(band.name().parse::<Band>(), Ok(band));
        }
        assert_eq!("20M".parse::<Band>(), Ok(Band::M20));
        assert!("2m".parse::<Band>().is_err());
    }

    #[test]
    fn band_ranges_are_ordered() {
        for band in Band::ALL {
            let (min, max) = band.range();
            assert!(min < max, "{band} has an empty range");
        }
        for pair in Band::ALL.windows(2) {
            assert!(pair[0].range().1 < pair[1].range().0);
        }
    }

    #[test]
    fn axis_picks_hemisphere() {
        assert_eq!(Axis::Latitude.hemisphere(false), Hemisphere::North);
        assert_eq!(Axis::Latitude.hemisphere(true), Hemisphere::South);
        assert_eq!(Axis::Longitude.hemisphere(false), Hemisphere::East);
        assert_eq!(Axis::Longitude.hemisphere(true), Hemisphere::West);
    }
}
