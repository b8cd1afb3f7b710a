//! CLI argument definitions for the OED validator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use oed_model::{DataType, EntityType, RequiredFlag};

#[derive(Parser)]
#[command(
    name = "oed-validator",
    version,
    about = "Validate Open Exposure Data (OED) files",
    long_about = "Validate Open Exposure Data (OED) location, account and reinsurance files.\n\n\
                  Checks headers against the OED column schema and every value for\n\
                  nullability, data type and range. Failures are printed one per line as\n\
                  <source>:<row>:<column>: <error>: <message>."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Standards directory holding manifest.toml (default: $OED_STANDARDS_DIR or ./standards).
    #[arg(long = "standards-dir", value_name = "DIR", global = true)]
    pub standards_dir: Option<PathBuf>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate headers or whole files.
    #[command(subcommand)]
    Validate(ValidateCommand),

    /// Generate sample values for a column as a JSON array.
    Sample(SampleArgs),

    /// Search the column schema.
    Query(QueryArgs),

    /// Show the pinned OED version and column counts.
    Standards,
}

#[derive(Subcommand)]
pub enum ValidateCommand {
    /// Validate the headers of a file or a header list.
    Headers(HeadersArgs),

    /// Validate the headers and values of a CSV file.
    File(FileArgs),
}

#[derive(Args)]
pub struct HeadersArgs {
    /// OED file type: acc, loc, reinsinfo or reinsscope.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub file_type: String,

    /// CSV file whose first line holds the headers.
    #[arg(long = "file", value_name = "PATH", conflicts_with = "headers")]
    pub file: Option<PathBuf>,

    /// Comma-separated headers.
    #[arg(
        long = "headers",
        value_name = "HEADERS",
        value_delimiter = ',',
        required_unless_present = "file"
    )]
    pub headers: Vec<String>,
}

#[derive(Args)]
pub struct FileArgs {
    /// OED file type: acc, loc, reinsinfo or reinsscope.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub file_type: String,

    /// CSV file to validate.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the full result as JSON instead of report lines.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct SampleArgs {
    /// OED file type: acc, loc, reinsinfo or reinsscope.
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub file_type: String,

    /// Column to sample.
    #[arg(long = "header", value_name = "HEADER")]
    pub header: String,

    /// Number of values (0 means the default of 10).
    #[arg(long = "size", default_value_t = 10)]
    pub size: usize,

    /// Width of unconstrained string samples.
    #[arg(long = "str-width", value_name = "WIDTH")]
    pub str_width: Option<usize>,
}

#[derive(Args)]
pub struct QueryArgs {
    /// File types to include.
    #[arg(long = "type", short = 't', value_name = "TYPE", value_delimiter = ',')]
    pub file_types: Vec<EntityType>,

    /// Header substrings (case-insensitive).
    #[arg(long = "header", value_name = "TEXT")]
    pub headers: Vec<String>,

    /// Description substrings (case-insensitive).
    #[arg(long = "description", value_name = "TEXT")]
    pub descriptions: Vec<String>,

    /// Required flags: R, CR or O.
    #[arg(long = "required", value_name = "FLAG", value_delimiter = ',')]
    pub required: Vec<RequiredFlag>,

    /// Only columns that must not be blank.
    #[arg(long = "nonnull", conflicts_with = "nullable")]
    pub nonnull: bool,

    /// Only columns that may be blank.
    #[arg(long = "nullable")]
    pub nullable: bool,

    /// Default values.
    #[arg(long = "default", value_name = "VALUE")]
    pub defaults: Vec<String>,

    /// Declared types: int, float or str.
    #[arg(long = "data-type", value_name = "TYPE", value_delimiter = ',')]
    pub data_types: Vec<DataType>,

    /// SQL type substrings (case-insensitive).
    #[arg(long = "sql-type", value_name = "TEXT")]
    pub sql_types: Vec<String>,

    /// Print matching columns as JSON instead of a table.
    #[arg(long = "json")]
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
