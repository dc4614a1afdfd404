//! Table and row rendering for command results.

use adif_core::{FieldReport, band_table, dxcc_from_iso2};
use adif_model::Band;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::batch::BatchSummary;

/// One row of the band prefix listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandRow {
    pub prefix: &'static str,
    pub band: Band,
    pub min_mhz: f64,
    pub max_mhz: f64,
}

/// Rows for every entry of the band prefix table, in lookup order.
pub fn band_rows() -> Vec<BandRow> {
    band_table()
        .iter()
        .map(|entry| {
            let (min_mhz, max_mhz) = entry.range();
            BandRow {
                prefix: entry.prefix,
                band: entry.band,
                min_mhz,
                max_mhz,
            }
        })
        .collect()
}

/// Result of one DXCC lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DxccRow {
    pub iso2: String,
    pub dxcc: Option<&'static str>,
}

pub fn dxcc_rows<S: AsRef<str>>(codes: &[S]) -> Vec<DxccRow> {
    codes
        .iter()
        .map(|code| DxccRow {
            iso2: code.as_ref().to_string(),
            dxcc: dxcc_from_iso2(code.as_ref()),
        })
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn report_table(report: &FieldReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Input"),
        header_cell("Canonical"),
        header_cell("Display"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for outcome in &report.outcomes {
        let status = match &outcome.reason {
            None => Cell::new("ok").fg(Color::Green),
            Some(reason) => Cell::new(reason).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(outcome.kind.adif_name()),
            Cell::new(&outcome.input),
            optional_cell(outcome.canonical.as_deref()),
            optional_cell(outcome.display.as_deref()),
            status,
        ]);
    }
    table
}

pub fn bands_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Prefix"),
        header_cell("Band"),
        header_cell("Min MHz"),
        header_cell("Max MHz"),
    ]);
    apply_table_style(&mut table);
    for row in band_rows() {
        table.add_row(vec![
            Cell::new(row.prefix),
            Cell::new(row.band).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.6}", row.min_mhz)),
            Cell::new(format!("{:.6}", row.max_mhz)),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

pub fn dxcc_table(rows: &[DxccRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("ISO2"), header_cell("DXCC")]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![Cell::new(&row.iso2), optional_cell(row.dxcc)]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    table
}

pub fn batch_table(summary: &BatchSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Field"),
        header_cell("Accepted"),
        header_cell("Rejected"),
        header_cell("Empty"),
    ]);
    apply_table_style(&mut table);
    for column in &summary.columns {
        table.add_row(vec![
            Cell::new(&column.header),
            Cell::new(column.kind.adif_name()),
            Cell::new(column.accepted),
            count_cell(column.rejected, Color::Red),
            Cell::new(column.empty).fg(Color::DarkGrey),
        ]);
    }
    for index in 2..=4 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
