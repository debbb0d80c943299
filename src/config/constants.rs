//! Configuration constants.
//!
//! Defaults shared by the CLI, the pipeline runner and the SQLite backfill.

/// Marker read as null in `lines` input and written for null in `lines` output.
/// Matches the `\N` convention of `COPY`-style dumps.
pub const DEFAULT_NULL_TOKEN: &str = "\\N";

/// CSV column holding the URL when none is given.
pub const DEFAULT_URL_COLUMN: &str = "url";

/// Column added to CSV output, and populated by the backfill, when none is given.
pub const DEFAULT_DOMAIN_COLUMN: &str = "domain";

/// Marker for reading from stdin instead of a file.
pub const STDIN_MARKER: &str = "-";

/// Log a progress line every this many rows.
pub const LOGGING_INTERVAL: usize = 100_000;
