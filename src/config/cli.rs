//! Command-line interface definition.
//!
//! Lives in the library so the parser can be exercised from tests; `main`
//! only calls `Cli::parse()` and dispatches.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_DOMAIN_COLUMN, DEFAULT_NULL_TOKEN, DEFAULT_URL_COLUMN, STDIN_MARKER,
};
use crate::config::types::{
    BackfillOptions, InputFormat, LogFormat, LogLevel, OutputFormat, PipelineConfig,
};
use crate::sql::SqlDialect;

/// Normalize URLs into domains for grouping, joining and deduplication.
#[derive(Debug, Parser)]
#[command(name = "url_domain", version, about)]
pub struct Cli {
    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract domains from a file or stdin
    Extract(ExtractCommand),
    /// Print a SQL expression that extracts the domain from a column
    Sql(SqlCommand),
    /// Populate a domain column in a SQLite table
    Backfill(BackfillCommand),
}

/// Arguments for `extract`.
#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Input file (`-` for stdin)
    #[arg(default_value = STDIN_MARKER)]
    pub file: PathBuf,

    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Lines)]
    pub input_format: InputFormat,

    /// CSV column holding the URL
    #[arg(long, default_value = DEFAULT_URL_COLUMN)]
    pub column: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub output_format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Column name for the domain in CSV output
    #[arg(long, default_value = DEFAULT_DOMAIN_COLUMN)]
    pub domain_column: String,

    /// Token treated as null in line input and written for null in line output
    #[arg(long, default_value = DEFAULT_NULL_TOKEN)]
    pub null_token: String,
}

impl From<ExtractCommand> for PipelineConfig {
    fn from(cmd: ExtractCommand) -> Self {
        PipelineConfig {
            input: cmd.file,
            input_format: cmd.input_format,
            url_column: cmd.column,
            output: cmd.output,
            output_format: cmd.output_format,
            domain_column: cmd.domain_column,
            null_token: cmd.null_token,
        }
    }
}

/// Arguments for `sql`.
#[derive(Debug, Args)]
pub struct SqlCommand {
    /// Column name or SQL expression holding the URL
    pub expr: String,

    /// Target SQL dialect
    #[arg(long, value_enum, default_value_t = SqlDialect::Sqlite)]
    pub dialect: SqlDialect,

    /// Treat EXPR as a bare column name and quote it
    #[arg(long)]
    pub quote: bool,
}

/// Arguments for `backfill`.
#[derive(Debug, Args)]
pub struct BackfillCommand {
    /// SQLite database file
    #[arg(long)]
    pub db_path: PathBuf,

    /// Table to update
    #[arg(long)]
    pub table: String,

    /// Column holding the URL
    #[arg(long, default_value = DEFAULT_URL_COLUMN)]
    pub source: String,

    /// Column to write the domain to (added if missing)
    #[arg(long, default_value = DEFAULT_DOMAIN_COLUMN)]
    pub target: String,
}

impl From<BackfillCommand> for BackfillOptions {
    fn from(cmd: BackfillCommand) -> Self {
        BackfillOptions {
            db_path: cmd.db_path,
            table: cmd.table,
            source_column: cmd.source,
            target_column: cmd.target,
        }
    }
}
