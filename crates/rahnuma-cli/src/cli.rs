//! CLI argument definitions for the Rahnuma guide.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rahnuma",
    version,
    about = "Rahnuma - university program guide",
    long_about = "Browse a catalog of university programs from the terminal.\n\n\
                  Search by city, degree, budget, and admission percentage,\n\
                  estimate the total cost of attendance, and inspect the\n\
                  catalog-wide analytics the dashboard charts are built from."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Seed-data directory (default: the repository data/ directory, or
    /// RAHNUMA_DATA_DIR).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Dashboard metrics plus the first few matching programs.
    Overview(OverviewArgs),

    /// Search programs with the sidebar filters.
    Search(SearchArgs),

    /// Estimate the total cost of attendance for one program.
    Fees(FeesArgs),

    /// List every university in the catalog.
    Universities,

    /// Catalog-wide aggregations behind the dashboard charts.
    Analytics(AnalyticsArgs),
}

/// The shared sidebar filters.
///
/// `All` (any case) on --city/--degree is accepted as the dashboard's
/// "no filter" sentinel.
#[derive(Args)]
pub struct FilterArgs {
    /// Only programs in this city (exact match).
    #[arg(long)]
    pub city: Option<String>,

    /// Only programs with this degree code (e.g. BS, BBA).
    #[arg(long = "degree")]
    pub degree: Option<String>,

    /// Maximum annual tuition fee in rupees (inclusive).
    #[arg(long = "max-tuition", value_name = "PKR")]
    pub max_tuition: Option<u64>,

    /// Your own percentage; keeps programs whose requirement you meet.
    #[arg(long = "percentage", value_name = "PCT")]
    pub percentage: Option<u8>,

    /// Case-insensitive substring match on the program name.
    #[arg(long = "name", value_name = "QUERY")]
    pub name: Option<String>,
}

#[derive(Args)]
pub struct OverviewArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Program ids saved in this session (repeatable).
    #[arg(long = "saved", value_name = "PROGRAM_ID")]
    pub saved: Vec<u32>,
}

#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Emit the result as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct FeesArgs {
    /// Program id to quote.
    #[arg(long = "program", value_name = "PROGRAM_ID")]
    pub program: u32,

    /// Books & supplies per year (rupees).
    #[arg(long, default_value_t = 15_000, allow_negative_numbers = true)]
    pub books: i64,

    /// Transportation per year (rupees).
    #[arg(long, default_value_t = 30_000, allow_negative_numbers = true)]
    pub transport: i64,

    /// Miscellaneous costs per year (rupees).
    #[arg(long, default_value_t = 20_000, allow_negative_numbers = true)]
    pub misc: i64,

    /// Emit the quote as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct AnalyticsArgs {
    /// Emit the report as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
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
