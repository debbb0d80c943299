//! Error type definitions.
//!
//! The extractor itself never fails; these cover the surfaces around it
//! (logger setup, SQLite access, reading pipeline input).

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist.
    #[error("Database file not found: {0}")]
    FileNotFound(String),

    /// The table to backfill does not exist.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// The source column is not in the table.
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound {
        /// Table that was inspected
        table: String,
        /// Column that was requested
        column: String,
    },

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Error types for reading pipeline input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The configured URL column is not in the CSV header.
    #[error("Column '{column}' not found in CSV header (available: {available})")]
    MissingColumn {
        /// Column that was requested
        column: String,
        /// Comma-separated header names
        available: String,
    },

    /// Malformed CSV record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying read failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
