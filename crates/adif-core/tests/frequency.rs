//! Tests for the frequency module.

use adif_core::frequency::{
    band_table, format_frequency_to_khz, format_frequency_to_mhz, frequency_to_band,
    get_frequency_range, is_valid_frequency_mhz,
};
use adif_model::{AdifError, Band, ErrorKind};

#[test]
fn test_format_frequency_to_khz() {
    assert_eq!(
        format_frequency_to_khz("014074000"),
        Ok("14.074.000".to_string())
    );
    assert_eq!(
        format_frequency_to_khz("01407400"),
        Err(AdifError::InvalidLength {
            expected: 9,
            actual: 8
        })
    );
    for input in ["", "0140740000", "14.074"] {
        let err = format_frequency_to_khz(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength, "input {input:?}");
    }
}

#[test]
fn test_frequency_to_band() {
    let cases = [
        ("14.074", Some(Band::M20)),
        ("7.050", Some(Band::M40)),
        ("50.313", Some(Band::M6)),
        ("1.900", Some(Band::M160)),
        ("5.357", Some(Band::M60)),
        ("24.915", Some(Band::M12)),
        ("10.136", Some(Band::M30)),
        ("999.999", None),
        ("144.390", None),
        ("", None),
    ];
    for (input, want) in cases {
        assert_eq!(frequency_to_band(input), want, "input {input:?}");
    }
}

#[test]
fn test_get_frequency_range() {
    assert_eq!(get_frequency_range("14.074"), (14.0, 14.35));
    assert_eq!(get_frequency_range("2.000"), (1.81, 2.0));
    assert_eq!(get_frequency_range("999.999"), (0.0, 0.0));
}

#[test]
fn test_range_and_band_tables_agree() {
    for entry in band_table() {
        let probe = format!("{}000", entry.prefix);
        assert_eq!(frequency_to_band(&probe), Some(entry.band));
        assert_eq!(get_frequency_range(&probe), entry.band.range());
    }
}

#[test]
fn test_format_frequency_to_mhz() {
    let cases = [
        ("7.050.000", "7.050"),
        ("14.074", "14.074"),
        ("144.390", "144.390"),
        ("014.074.000", "14.074"),
        ("", ""),
    ];
    for (input, want) in cases {
        assert_eq!(
            format_frequency_to_mhz(input).as_deref(),
            Ok(want),
            "input {input:?}"
        );
    }
    let err = format_frequency_to_mhz("7050000").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
}

#[test]
fn test_valid_frequency_mhz() {
    for value in [
        "7", "7.0", "7.050", "14.074", "144.390000", "1296.2", " 14.074 ", "0.137",
    ] {
        assert!(is_valid_frequency_mhz(value), "expected valid: {value:?}");
    }
}

#[test]
fn test_invalid_frequency_mhz() {
    for value in [
        "",
        "   ",
        "0",
        "0.000000",
        "00000000",
        "07074000",
        "7074000",
        "14.",
        ".5",
        "-7.074",
        "+7.074",
        "7,074",
        "14.074.000",
        "14.0740001",
        "10368.1",
        "14ABC",
    ] {
        assert!(!is_valid_frequency_mhz(value), "expected invalid: {value:?}");
    }
}
