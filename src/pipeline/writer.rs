//! Output writers for the pipeline.

use std::io::{self, ErrorKind, Write};

use csv::StringRecord;
use serde::Serialize;

use crate::config::OutputFormat;

use super::reader::InputRow;

/// Writer adapter that swallows broken-pipe errors.
///
/// When output is piped to `head` or similar and the reader exits early,
/// further writes are dropped instead of failing the run.
pub struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    /// Wraps `inner`.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

#[derive(Serialize)]
struct JsonRow<'a> {
    url: Option<&'a str>,
    domain: Option<&'a str>,
}

/// Writes one output row per input row in the configured format.
pub enum RowWriter<W: Write> {
    /// One domain per line
    Lines {
        /// Destination
        out: W,
        /// Written in place of a null domain
        null_token: String,
    },
    /// CSV with a header row
    Csv {
        /// Underlying CSV writer
        writer: csv::Writer<W>,
    },
    /// JSON Lines
    Jsonl {
        /// Destination
        out: W,
    },
}

impl<W: Write> RowWriter<W> {
    /// Creates a writer for `format`.
    pub fn new(out: W, format: OutputFormat, null_token: &str) -> Self {
        match format {
            OutputFormat::Lines => RowWriter::Lines {
                out,
                null_token: null_token.to_string(),
            },
            OutputFormat::Csv => RowWriter::Csv {
                writer: csv::Writer::from_writer(out),
            },
            OutputFormat::Jsonl => RowWriter::Jsonl { out },
        }
    }

    /// Writes the CSV header: the input header plus `domain_column`, or
    /// `url,<domain_column>` for line input. No-op for other formats.
    pub fn write_header(
        &mut self,
        input_headers: Option<&StringRecord>,
        domain_column: &str,
    ) -> anyhow::Result<()> {
        if let RowWriter::Csv { writer } = self {
            let mut header = match input_headers {
                Some(headers) => headers.clone(),
                None => StringRecord::from(vec!["url"]),
            };
            header.push_field(domain_column);
            writer.write_record(&header)?;
        }
        Ok(())
    }

    /// Writes the output row for `row`.
    pub fn write_row(&mut self, row: &InputRow, domain: Option<&str>) -> anyhow::Result<()> {
        match self {
            RowWriter::Lines { out, null_token } => {
                writeln!(out, "{}", domain.unwrap_or(null_token.as_str()))?;
            }
            RowWriter::Csv { writer } => {
                let mut record = match &row.record {
                    Some(record) => record.clone(),
                    None => StringRecord::from(vec![row.url.as_deref().unwrap_or("")]),
                };
                record.push_field(domain.unwrap_or(""));
                writer.write_record(&record)?;
            }
            RowWriter::Jsonl { out } => {
                let json = JsonRow {
                    url: row.url.as_deref(),
                    domain,
                };
                serde_json::to_writer(&mut *out, &json)?;
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Flushes buffered output.
    pub fn finish(&mut self) -> io::Result<()> {
        match self {
            RowWriter::Lines { out, .. } | RowWriter::Jsonl { out } => out.flush(),
            RowWriter::Csv { writer } => writer.flush(),
        }
    }
}
