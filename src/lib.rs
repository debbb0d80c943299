//! url_domain library: normalize URLs into domains for data pipelines
//!
//! The core is [`extract_domain`], a pure function that strips a leading
//! `http://`/`https://`, a single leading `www.`, the path and the query string,
//! keeping subdomains and the original casing of the host. Around it sit:
//!
//! - [`sql`]: the same rules as an inline SQL expression (SQLite, Postgres, Snowflake)
//! - [`pipeline`]: a streaming line/CSV/JSONL transformer
//! - [`storage`]: a SQLite backfill that runs the SQL rendition in place
//!
//! # Example
//!
//! ```
//! use url_domain::{domain_of, extract_domain};
//!
//! assert_eq!(domain_of("https://docs.dagster.io/some/path"), "docs.dagster.io");
//! assert_eq!(domain_of("HTTPS://WWW.Dagster.IO"), "Dagster.IO");
//! assert_eq!(extract_domain(None), None);
//! ```

#![warn(missing_docs)]

pub mod config;
mod domain;
pub mod error_handling;
pub mod initialization;
pub mod pipeline;
pub mod sql;
pub mod storage;

// Re-export public API
pub use config::{BackfillOptions, InputFormat, LogFormat, LogLevel, OutputFormat, PipelineConfig};
pub use domain::{domain_of, extract_domain, trace_domain, Extraction, Rule};
pub use pipeline::{run_pipeline, PipelineReport};
pub use storage::backfill_domains;
