//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (null token, default column names)
//! - Library configuration structs and enums
//! - CLI parsing types

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{BackfillCommand, Cli, Command, ExtractCommand, SqlCommand};
pub use constants::*;
pub use types::{BackfillOptions, InputFormat, LogFormat, LogLevel, OutputFormat, PipelineConfig};
