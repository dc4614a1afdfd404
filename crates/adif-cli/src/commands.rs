use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use adif_cli::batch::normalize_csv;
use adif_cli::summary::{band_rows, bands_table, batch_table, dxcc_rows, dxcc_table, report_table};
use adif_core::{FieldKind, FieldReport, normalize_all};
use adif_model::{Axis, NormalizeOptions};

use crate::cli::{BatchArgs, CoordArgs, DxccArgs, FreqArgs, OutputFormatArg, ValuesArgs};

/// Normalizes every value as `kind` and prints the outcomes.
///
/// Returns whether any value was rejected.
pub fn run_values(kind: FieldKind, args: &ValuesArgs, format: OutputFormatArg) -> Result<bool> {
    run_report(kind, &args.values, &args.flags.options(), format)
}

pub fn run_freq(args: &FreqArgs, format: OutputFormatArg) -> Result<bool> {
    let options = args.flags.options().with_require_band(args.require_band);
    run_report(FieldKind::Frequency, &args.values, &options, format)
}

pub fn run_coord(args: &CoordArgs, format: OutputFormatArg) -> Result<bool> {
    let kind = match Axis::from(args.axis) {
        Axis::Latitude => FieldKind::Latitude,
        Axis::Longitude => FieldKind::Longitude,
    };
    run_report(kind, &args.values, &args.flags.options(), format)
}

fn run_report(
    kind: FieldKind,
    values: &[String],
    options: &NormalizeOptions,
    format: OutputFormatArg,
) -> Result<bool> {
    let span = info_span!("normalize", field = kind.adif_name());
    let _guard = span.enter();
    let report = normalize_all(kind, values, options);
    info!(
        accepted = report.accepted_count(),
        rejected = report.rejected_count(),
        "values normalized"
    );
    print_report(&report, format)?;
    Ok(report.has_rejections())
}

fn print_report(report: &FieldReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => println!("{}", report_table(report)),
        OutputFormatArg::Json => print_json(report)?,
    }
    Ok(())
}

pub fn run_bands(format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => println!("{}", bands_table()),
        OutputFormatArg::Json => print_json(&band_rows())?,
    }
    Ok(())
}

/// Prints DXCC lookups; returns whether any code was unknown.
pub fn run_dxcc(args: &DxccArgs, format: OutputFormatArg) -> Result<bool> {
    let rows = dxcc_rows(args.codes.as_slice());
    match format {
        OutputFormatArg::Table => println!("{}", dxcc_table(&rows)),
        OutputFormatArg::Json => print_json(&rows)?,
    }
    Ok(rows.iter().any(|row| row.dxcc.is_none()))
}

/// Normalizes a CSV file. The CSV goes to `--output` or stdout, the summary
/// to stderr.
pub fn run_batch(args: &BatchArgs, format: OutputFormatArg) -> Result<bool> {
    let span = info_span!("batch", input = %args.input.display());
    let _guard = span.enter();
    let options = args.flags.options().with_require_band(args.require_band);

    let input = File::open(&args.input)
        .with_context(|| format!("open {}", args.input.display()))?;
    let reader = BufReader::new(input);
    let summary = match &args.output {
        Some(path) => {
            let output =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let summary = normalize_csv(reader, BufWriter::new(output), &options)?;
            info!(output = %path.display(), "normalized csv written");
            summary
        }
        None => normalize_csv(reader, io::stdout().lock(), &options)?,
    };

    let mut stderr = io::stderr().lock();
    match format {
        OutputFormatArg::Table => writeln!(stderr, "{}", batch_table(&summary))?,
        OutputFormatArg::Json => writeln!(
            stderr,
            "{}",
            serde_json::to_string_pretty(&summary).context("serialize batch summary")?
        )?,
    }
    Ok(summary.has_rejections())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}
