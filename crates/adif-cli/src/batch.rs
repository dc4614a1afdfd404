//! CSV batch normalization.
//!
//! Columns whose header names an ADIF field (`qso_date`, `time_on`, `freq`,
//! `lat`, `lon`, and a few aliases) are normalized in place; every other
//! column is copied through untouched. Rejected cells become empty, the same
//! sentinel the sanitizers use.

use std::io::{Read, Write};

use adif_core::{FieldKind, normalize_field};
use adif_model::NormalizeOptions;
use anyhow::{Context, Result, bail};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;
use tracing::{debug, info};

/// Per-column counts for one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSummary {
    pub header: String,
    pub kind: FieldKind,
    pub accepted: usize,
    pub rejected: usize,
    /// Empty cells, left as they are.
    pub empty: usize,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl BatchSummary {
    pub fn rejected_count(&self) -> usize {
        self.columns.iter().map(|c| c.rejected).sum()
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected_count() > 0
    }
}

/// Reads CSV from `reader`, normalizes ADIF columns, and writes CSV to `writer`.
///
/// # Errors
///
/// Fails when the CSV cannot be read or written, or when no header names an
/// ADIF field.
pub fn normalize_csv<R: Read, W: Write>(
    reader: R,
    writer: W,
    options: &NormalizeOptions,
) -> Result<BatchSummary> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = reader.headers().context("read csv header")?.clone();

    let kinds: Vec<Option<FieldKind>> = headers
        .iter()
        .map(|header| FieldKind::from_header(header.trim_matches('\u{feff}')))
        .collect();
    let mut columns: Vec<ColumnSummary> = headers
        .iter()
        .zip(&kinds)
        .filter_map(|(header, kind)| {
            kind.map(|kind| ColumnSummary {
                header: header.to_string(),
                kind,
                accepted: 0,
                rejected: 0,
                empty: 0,
            })
        })
        .collect();
    if columns.is_empty() {
        bail!("no ADIF columns found (expected qso_date, time_on, freq, lat, or lon)");
    }
    debug!(columns = columns.len(), "ADIF columns detected");

    let mut writer = WriterBuilder::new().flexible(true).from_writer(writer);
    writer.write_record(&headers).context("write csv header")?;

    let mut rows = 0usize;
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("read csv row {}", index + 1))?;
        let mut normalized = StringRecord::with_capacity(record.as_slice().len(), record.len());
        let mut column_index = 0usize;
        for (cell, kind) in record.iter().zip(kinds.iter().chain(std::iter::repeat(&None))) {
            let Some(kind) = kind else {
                normalized.push_field(cell);
                continue;
            };
            let summary = &mut columns[column_index];
            column_index += 1;
            if cell.trim().is_empty() {
                summary.empty += 1;
                normalized.push_field("");
                continue;
            }
            let outcome = normalize_field(*kind, cell, options);
            match outcome.canonical {
                Some(canonical) => {
                    summary.accepted += 1;
                    normalized.push_field(&canonical);
                }
                None => {
                    summary.rejected += 1;
                    normalized.push_field("");
                }
            }
        }
        writer
            .write_record(&normalized)
            .with_context(|| format!("write csv row {}", index + 1))?;
        rows += 1;
    }
    writer.flush().context("flush csv output")?;

    let summary = BatchSummary { rows, columns };
    info!(
        rows = summary.rows,
        rejected = summary.rejected_count(),
        "batch normalized"
    );
    Ok(summary)
}
