//! Configuration types.
//!
//! This module defines the enums and structs shared by command-line parsing
//! and library callers. Everything here can be built without clap.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_DOMAIN_COLUMN, DEFAULT_NULL_TOKEN, DEFAULT_URL_COLUMN, STDIN_MARKER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Shape of pipeline input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One value per line
    Lines,
    /// CSV with a header row; the URL is read from a named column
    Csv,
}

/// Shape of pipeline output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One domain per line
    Lines,
    /// Input columns plus a domain column (CSV input) or `url,domain` pairs
    Csv,
    /// One `{"url": .., "domain": ..}` object per line
    Jsonl,
}

/// Pipeline configuration.
///
/// # Examples
///
/// ```no_run
/// use url_domain::{PipelineConfig, InputFormat};
/// use std::path::PathBuf;
///
/// let config = PipelineConfig {
///     input: PathBuf::from("visits.csv"),
///     input_format: InputFormat::Csv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// File to read values from (`-` for stdin)
    pub input: PathBuf,

    /// Input format
    pub input_format: InputFormat,

    /// CSV column holding the URL (CSV input only)
    pub url_column: String,

    /// Output file (stdout if `None`)
    pub output: Option<PathBuf>,

    /// Output format
    pub output_format: OutputFormat,

    /// Column name for the extracted domain (CSV output only)
    pub domain_column: String,

    /// Token read and written as null in `lines` format
    pub null_token: String,
}

impl PipelineConfig {
    /// True when input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_MARKER
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(STDIN_MARKER),
            input_format: InputFormat::Lines,
            url_column: DEFAULT_URL_COLUMN.to_string(),
            output: None,
            output_format: OutputFormat::Lines,
            domain_column: DEFAULT_DOMAIN_COLUMN.to_string(),
            null_token: DEFAULT_NULL_TOKEN.to_string(),
        }
    }
}

/// Options for backfilling a domain column in a SQLite table.
#[derive(Debug, Clone)]
pub struct BackfillOptions {
    /// Path to the SQLite database
    pub db_path: PathBuf,

    /// Table to update
    pub table: String,

    /// Column holding the URL
    pub source_column: String,

    /// Column to write the domain to (created if missing)
    pub target_column: String,
}

impl Default for BackfillOptions {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("./url_domain.db"),
            table: String::new(),
            source_column: DEFAULT_URL_COLUMN.to_string(),
            target_column: DEFAULT_DOMAIN_COLUMN.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_pipeline_config_default() {
        let config = PipelineConfig::default();
        assert!(config.reads_stdin());
        assert_eq!(config.input_format, InputFormat::Lines);
        assert_eq!(config.output_format, OutputFormat::Lines);
        assert_eq!(config.url_column, "url");
        assert_eq!(config.domain_column, "domain");
        assert_eq!(config.null_token, "\\N");
        assert!(config.output.is_none());
    }

    #[test]
    fn test_pipeline_config_file_input() {
        let config = PipelineConfig {
            input: PathBuf::from("urls.txt"),
            ..Default::default()
        };
        assert!(!config.reads_stdin());
    }

    #[test]
    fn test_backfill_options_default() {
        let opts = BackfillOptions::default();
        assert_eq!(opts.db_path, PathBuf::from("./url_domain.db"));
        assert_eq!(opts.source_column, "url");
        assert_eq!(opts.target_column, "domain");
    }
}
