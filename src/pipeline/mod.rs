//! Streaming pipeline: read URL values, write domains.
//!
//! Each input row produces exactly one output row, in order, so output can be
//! zipped back onto the source. Reading and writing are synchronous; async
//! callers should run [`run_pipeline`] on a blocking thread.

mod reader;
mod statistics;
mod writer;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::{InputFormat, PipelineConfig, LOGGING_INTERVAL};
use crate::domain::{trace_domain, Rule};
use crate::error_handling::RuleStats;

pub use reader::{InputRow, RowReader};
pub use statistics::{log_progress, log_rule_statistics};
pub use writer::{IgnoreBrokenPipe, RowWriter};

/// Summary of a completed pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Rows read, null included
    pub total_rows: usize,
    /// Rows whose value was null
    pub null_rows: usize,
    /// How many rows each rule changed, in rule order
    pub rule_counts: Vec<(Rule, usize)>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs the pipeline described by `config`.
///
/// Opens the input file (or stdin for `-`) and the output file (or stdout),
/// then streams every row through the extractor.
///
/// # Errors
///
/// Returns an error if the input or output cannot be opened, the CSV input is
/// malformed or lacks the URL column, or writing fails.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport> {
    let start_time = Instant::now();

    let input: Box<dyn Read> = if config.reads_stdin() {
        info!("Reading URLs from stdin");
        Box::new(io::stdin())
    } else {
        let file = File::open(&config.input)
            .with_context(|| format!("Failed to open input file: {}", config.input.display()))?;
        Box::new(file)
    };

    let output: Box<dyn Write> = match config.output.as_ref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(IgnoreBrokenPipe::new(io::stdout())),
    };

    let stats = RuleStats::new();
    transform(input, BufWriter::new(output), config, &stats)?;
    log_rule_statistics(&stats);

    Ok(PipelineReport {
        total_rows: stats.total_rows(),
        null_rows: stats.null_rows(),
        rule_counts: stats.rule_counts(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    })
}

/// Streams rows from `input` to `output`, recording rule hits in `stats`.
///
/// Only the format fields of `config` are used; `input` and `output` paths are
/// ignored, which makes this the entry point for in-memory callers.
pub fn transform<R: Read, W: Write>(
    input: R,
    output: W,
    config: &PipelineConfig,
    stats: &RuleStats,
) -> Result<()> {
    let reader = match config.input_format {
        InputFormat::Lines => RowReader::lines(input, &config.null_token),
        InputFormat::Csv => RowReader::csv(input, &config.url_column)
            .context("Failed to read CSV header")?,
    };

    let mut writer = RowWriter::new(output, config.output_format, &config.null_token);
    writer
        .write_header(reader.headers(), &config.domain_column)
        .context("Failed to write output header")?;

    let start_time = Instant::now();
    for (index, row) in reader.enumerate() {
        let row = row.with_context(|| format!("Failed to read input row {}", index + 1))?;

        let domain = match row.url.as_deref() {
            Some(url) => {
                let extraction = trace_domain(url);
                debug!("{:?} -> {:?} via {:?}", url, extraction.domain, extraction.applied);
                stats.record(&extraction);
                Some(extraction.domain)
            }
            None => {
                stats.record_null();
                None
            }
        };

        writer
            .write_row(&row, domain)
            .with_context(|| format!("Failed to write output row {}", index + 1))?;

        if (index + 1) % LOGGING_INTERVAL == 0 {
            log_progress(start_time, index + 1);
        }
    }

    writer.finish().context("Failed to flush output")?;
    Ok(())
}
