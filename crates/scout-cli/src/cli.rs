//! CLI argument definitions for the buyer search tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use scout_model::Industry;

#[derive(Parser)]
#[command(
    name = "exportscout",
    version,
    about = "Export buyer scout - rank overseas buyer candidates from public CSV datasets",
    long_about = "Search public buyer datasets for export candidates.\n\n\
                  Sources are CSV files from Korean trade agencies; records are\n\
                  normalized, scored against an industry and optional HS code,\n\
                  deduplicated, and printed as a ranked list."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Search the buyer datasets and print ranked candidates.
    Search(SearchArgs),

    /// Resolve configured sources against the data directory.
    Sources(SourcesArgs),

    /// List supported industry sectors and their matching keywords.
    Industries,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Industry sector to match against product text and company names.
    #[arg(long = "industry", value_enum)]
    pub industry: IndustryArg,

    /// Optional HS code filter (e.g. 3304, 8517). Tightens the score
    /// threshold when present.
    #[arg(long = "hs-code", value_name = "CODE")]
    pub hs_code: Option<String>,

    /// Target country name; repeat for several (e.g. --country "United States").
    #[arg(long = "country", value_name = "NAME")]
    pub countries: Vec<String>,

    /// Only keep candidates that have an email address.
    #[arg(long = "require-email")]
    pub require_email: bool,

    /// Maximum number of candidates to return.
    #[arg(long = "max-results", value_name = "N", default_value_t = scout_match::DEFAULT_MAX_RESULTS)]
    pub max_results: usize,

    /// Directory to resolve dataset files under.
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON file replacing the built-in source catalog.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Write the result cards as JSON to a file.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SourcesArgs {
    /// Directory to resolve dataset files under.
    #[arg(long = "data-dir", value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// JSON file replacing the built-in source catalog.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,
}

/// CLI industry choices, mapped onto [`Industry`].
#[derive(Clone, Copy, ValueEnum)]
pub enum IndustryArg {
    Cosmetics,
    Electronics,
    Food,
    Textiles,
    AutoParts,
    Machinery,
    MedicalDevices,
    Other,
}

impl From<IndustryArg> for Industry {
    fn from(arg: IndustryArg) -> Self {
        match arg {
            IndustryArg::Cosmetics => Industry::Cosmetics,
            IndustryArg::Electronics => Industry::Electronics,
            IndustryArg::Food => Industry::Food,
            IndustryArg::Textiles => Industry::Textiles,
            IndustryArg::AutoParts => Industry::AutoParts,
            IndustryArg::Machinery => Industry::Machinery,
            IndustryArg::MedicalDevices => Industry::MedicalDevices,
            IndustryArg::Other => Industry::Other,
        }
    }
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
