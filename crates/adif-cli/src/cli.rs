//! CLI argument definitions for the ADIF normalizer.

use std::path::PathBuf;

use adif_model::{Axis, NormalizeOptions, SanitizeMode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "adif-normalize",
    version,
    about = "Normalize and validate ADIF logbook fields",
    long_about = "Normalize and validate ADIF logbook fields.\n\n\
                  Repairs dates (YYYYMMDD), times (HHMM[SS]), frequencies (MHz),\n\
                  and coordinates (XDDD MM.MMM), and looks up bands and DXCC entities."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Result format written to stdout.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "table",
        global = true
    )]
    pub output_format: OutputFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize dates to YYYYMMDD.
    Date(ValuesArgs),

    /// Normalize times to HHMM or HHMMSS.
    Time(ValuesArgs),

    /// Normalize frequencies to MHz and look up their band.
    Freq(FreqArgs),

    /// Convert decimal degrees to XDDD MM.MMM.
    Coord(CoordArgs),

    /// Validate XDDD MM.MMM coordinate codes.
    CheckCoord(ValuesArgs),

    /// List the band prefix table.
    Bands,

    /// Look up DXCC entity codes for ISO 3166-1 alpha-2 country codes.
    Dxcc(DxccArgs),

    /// Normalize the ADIF columns of a CSV file.
    Batch(BatchArgs),
}

#[derive(Args)]
pub struct NormalizeFlags {
    /// Only accept values that are already canonical; do not repair them.
    #[arg(long = "strict")]
    pub strict: bool,
}

impl NormalizeFlags {
    pub fn options(&self) -> NormalizeOptions {
        let mode = if self.strict {
            SanitizeMode::Strict
        } else {
            SanitizeMode::Lenient
        };
        NormalizeOptions::new().with_mode(mode)
    }
}

#[derive(Args)]
pub struct ValuesArgs {
    /// Values to process.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

#[derive(Args)]
pub struct FreqArgs {
    /// Frequencies: raw readouts (014074000), dotted kHz (14.074.000), or MHz.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,

    /// Reject frequencies outside the known amateur bands.
    #[arg(long = "require-band")]
    pub require_band: bool,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

#[derive(Args)]
pub struct CoordArgs {
    /// Signed decimal degrees (negative for south/west).
    #[arg(value_name = "DEGREES", required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Which axis the values belong to; selects N/S or E/W.
    #[arg(long = "axis", value_enum, default_value = "latitude")]
    pub axis: AxisArg,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

#[derive(Args)]
pub struct DxccArgs {
    /// ISO 3166-1 alpha-2 codes (case-insensitive).
    #[arg(value_name = "ISO2", required = true)]
    pub codes: Vec<String>,
}

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file with a header row (qso_date, time_on, freq, lat, lon, ...).
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Write the normalized CSV here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Reject frequencies outside the known amateur bands.
    #[arg(long = "require-band")]
    pub require_band: bool,

    #[command(flatten)]
    pub flags: NormalizeFlags,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AxisArg {
    Latitude,
    Longitude,
}

impl From<AxisArg> for Axis {
    fn from(value: AxisArg) -> Self {
        match value {
            AxisArg::Latitude => Axis::Latitude,
            AxisArg::Longitude => Axis::Longitude,
        }
    }
}

/// Result rendering choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
