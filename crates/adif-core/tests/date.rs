//! Tests for the date module.

use adif_core::date::{
    DATE_PLACEHOLDER, format_date, is_valid_date_yyyymmdd, sanitize_date_to_yyyymmdd,
};

#[test]
fn test_format_date() {
    assert_eq!(format_date("20250102"), "2025-01-02");
    assert_eq!(format_date(""), DATE_PLACEHOLDER);
    assert_eq!(format_date("2025"), "YYYY-MM-DD");
}

#[test]
fn test_valid_dates() {
    for value in ["20250101", "19990228", "20000229", " 20250101 "] {
        assert!(is_valid_date_yyyymmdd(value), "expected valid date: {value:?}");
    }
}

#[test]
fn test_invalid_dates() {
    for value in [
        "",
        "2025-01-01",
        "2025011",
        "202501011",
        "20251301",
        "20250230",
        "20010229",
        "abcdefgh",
        "00000000",
        "20250100",
    ] {
        assert!(!is_valid_date_yyyymmdd(value), "expected invalid date: {value:?}");
    }
}

#[test]
fn test_sanitize_date() {
    let cases = [
        ("2025-01-02", "20250102"),
        ("2025/01/02", "20250102"),
        ("20250102", "20250102"),
        (" 2025-01-02 ", "20250102"),
        ("2025-01/02", "20250102"),
        ("2025-13-01", ""),
        ("2025/02/30", ""),
        ("2025.01.02", ""),
        ("25-01-02", ""),
        ("", ""),
        ("   ", ""),
    ];
    for (input, want) in cases {
        assert_eq!(sanitize_date_to_yyyymmdd(input), want, "input {input:?}");
    }
}

#[test]
fn test_sanitize_date_rejects_unicode_digits() {
    // Arabic-Indic digits are not ASCII and must not match the separator pattern.
    assert_eq!(sanitize_date_to_yyyymmdd("٢٠٢٥-٠١-٠٢"), "");
}
