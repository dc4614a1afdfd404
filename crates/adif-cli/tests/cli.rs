//! Integration tests for the CLI library components.

use adif_cli::batch::normalize_csv;
use adif_cli::summary::{band_rows, dxcc_rows, report_table};
use adif_core::{FieldKind, normalize_all};
use adif_model::{NormalizeOptions, SanitizeMode};

fn run_batch(input: &str, options: &NormalizeOptions) -> (String, adif_cli::batch::BatchSummary) {
    let mut out = Vec::new();
    let summary = normalize_csv(input.as_bytes(), &mut out, options).expect("normalize csv");
    (String::from_utf8(out).expect("utf8 output"), summary)
}

#[test]
fn batch_normalizes_adif_columns() {
    let input = "call,qso_date,time_on,freq,lat,lon\n\
                 DL1ABC,2025-01-02,9:3,014074000,12.3456,-7.5\n\
                 W1AW,2025/02/30,24:00,14.074,abc,\n";
    let (output, summary) = run_batch(input, &NormalizeOptions::new());

    insta::assert_snapshot!(output.trim_end(), @r"
    call,qso_date,time_on,freq,lat,lon
    DL1ABC,20250102,0903,14.074,N012 20.736,W007 30.000
    W1AW,,,14.074,,
    ");
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.columns.len(), 5);
    assert_eq!(summary.rejected_count(), 3);
    let lon = &summary.columns[4];
    assert_eq!((lon.accepted, lon.rejected, lon.empty), (1, 0, 1));
}

#[test]
fn batch_strict_mode_only_keeps_canonical_values() {
    let input = "QSO_DATE,TIME_ON\n20250102,0903\n2025-01-02,9:03\n";
    let options = NormalizeOptions::new().with_mode(SanitizeMode::Strict);
    let (output, summary) = run_batch(input, &options);

    insta::assert_snapshot!(output.trim_end(), @r"
    QSO_DATE,TIME_ON
    20250102,0903
    ,
    ");
    assert_eq!(summary.rejected_count(), 2);
}

#[test]
fn batch_require_band_rejects_out_of_band() {
    let input = "call,freq\nK1ABC,144.390\nK1ABC,7.074\n";
    let options = NormalizeOptions::new().with_require_band(true);
    let (output, summary) = run_batch(input, &options);

    assert_eq!(output, "call,freq\nK1ABC,\nK1ABC,7.074\n");
    assert!(summary.has_rejections());
}

#[test]
fn band_rows_follow_lookup_order() {
    let text: Vec<String> = band_rows()
        .iter()
        .map(|row| {
            format!(
                "{} {} {:.4}-{:.4}",
                row.prefix, row.band, row.min_mhz, row.max_mhz
            )
        })
        .collect();

    insta::assert_snapshot!(text.join("\n"), @r"
    54. 6m 50.0000-54.0000
    53. 6m 50.0000-54.0000
    52. 6m 50.0000-54.0000
    51. 6m 50.0000-54.0000
    50. 6m 50.0000-54.0000
    29. 10m 28.0000-29.7000
    28. 10m 28.0000-29.7000
    24. 12m 24.8900-24.9900
    21. 15m 21.0000-21.4500
    18. 17m 18.0680-18.1680
    14. 20m 14.0000-14.3500
    10. 30m 10.1000-10.1500
    7. 40m 7.0000-7.2000
    5. 60m 5.3515-5.3665
    3. 80m 3.5000-3.8000
    2. 160m 1.8100-2.0000
    1. 160m 1.8100-2.0000
    ");
}

#[test]
fn dxcc_rows_keep_input_and_resolve_case_insensitively() {
    let rows = dxcc_rows(["us", " DE ", "GB"].as_slice());
    assert_eq!(rows[0].iso2, "us");
    assert_eq!(rows[0].dxcc, Some("291"));
    assert_eq!(rows[1].dxcc, Some("230"));
    assert_eq!(rows[2].dxcc, None);

    let json = serde_json::to_value(&rows[0]).expect("serialize row");
    assert_eq!(json, serde_json::json!({"iso2": "us", "dxcc": "291"}));
}

#[test]
fn report_table_lists_every_value() {
    let report = normalize_all(
        FieldKind::Date,
        ["2025-01-02", "not a date"],
        &NormalizeOptions::new(),
    );
    let rendered = report_table(&report).to_string();
    assert!(rendered.contains("20250102"));
    assert!(rendered.contains("2025-01-02"));
    assert!(rendered.contains("not a valid YYYYMMDD date"));
}
