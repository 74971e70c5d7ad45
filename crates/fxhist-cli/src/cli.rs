//! CLI argument definitions for fxhist.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `load` | Fetch historical rows for one instrument |
//! | `locate` | Print the request URL without fetching |
//! | `instruments` | List the Dukascopy instrument codes |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, csv) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | env or `5000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! fxhist load oanda EUR/USD --from 2020-01-02 --to 2020-01-31 --pretty
//! fxhist load dukascopy XAUUSD --from 2020-01-02 --to 2020-01-31 --format csv
//! fxhist locate dukascopy GBP/JPY --from 2020-01-02 --to 2020-01-31
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Historical FX and metals prices from Oanda and Dukascopy.
#[derive(Debug, Parser)]
#[command(
    name = "fxhist",
    author,
    version,
    about = "Historical FX price loader"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds; overrides FXHIST_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON array.
    Json,
    /// One JSON object per line.
    Ndjson,
    /// Comma-separated table with a header row.
    Csv,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch historical rows for one instrument.
    ///
    /// # Examples
    ///
    ///   fxhist load oanda EUR/USD --from 2020-01-02 --to 2020-01-31
    ///   fxhist load dukascopy USDJPY --from 2020-01-02 --to 2020-03-31 --field close
    Load(LoadArgs),

    /// Print the provider request URL without fetching it.
    Locate(RangeArgs),

    /// List the instruments Dukascopy can resolve, with their codes.
    Instruments,
}

/// Provider, instrument and date range shared by `load` and `locate`.
#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Provider name (oanda, dukascopy).
    pub provider: String,

    /// Currency pair, as `EUR/USD` or `EURUSD`.
    pub instrument: String,

    /// First day, `YYYY-MM-DD`.
    #[arg(long)]
    pub from: String,

    /// Last day, `YYYY-MM-DD`.
    #[arg(long)]
    pub to: String,
}

#[derive(Debug, Args)]
pub struct LoadArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Fields of interest (open, high, low, close, adjusted_close, volume).
    #[arg(long = "field")]
    pub fields: Vec<String>,
}
