//! Input readers for the pipeline.
//!
//! Every input row yields exactly one output row, so nothing is skipped:
//! blank lines are empty values, not comments, and lines that are not valid
//! UTF-8 are decoded lossily instead of ending the run.

use std::io::{BufRead, BufReader, Read};

use csv::StringRecord;
use log::warn;

use crate::error_handling::InputError;

/// One row of pipeline input.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRow {
    /// The URL value, `None` for null.
    pub url: Option<String>,
    /// The full CSV record, kept so output can pass the other columns through.
    pub record: Option<StringRecord>,
}

/// Reads rows from line-oriented or CSV input.
pub enum RowReader<R: Read> {
    /// One value per line
    Lines {
        /// Buffered input
        input: BufReader<R>,
        /// Line content read as null
        null_token: String,
        /// Lines read so far
        line_number: usize,
    },
    /// CSV with a header row
    Csv {
        /// Underlying CSV reader
        reader: csv::Reader<R>,
        /// Header row
        headers: StringRecord,
        /// Index of the URL column
        column: usize,
    },
}

impl<R: Read> RowReader<R> {
    /// Reader for one value per line. A line equal to `null_token` is null.
    pub fn lines(input: R, null_token: &str) -> Self {
        RowReader::Lines {
            input: BufReader::new(input),
            null_token: null_token.to_string(),
            line_number: 0,
        }
    }

    /// Reader for CSV input, taking URLs from the column named `column`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MissingColumn` if the header has no such column,
    /// or `InputError::Csv` if the header cannot be read.
    pub fn csv(input: R, column: &str) -> Result<Self, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);
        let headers = reader.headers()?.clone();
        let index = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| InputError::MissingColumn {
                column: column.to_string(),
                available: headers.iter().collect::<Vec<_>>().join(", "),
            })?;

        Ok(RowReader::Csv {
            reader,
            headers,
            column: index,
        })
    }

    /// CSV header row, if reading CSV.
    pub fn headers(&self) -> Option<&StringRecord> {
        match self {
            RowReader::Lines { .. } => None,
            RowReader::Csv { headers, .. } => Some(headers),
        }
    }
}

impl<R: Read> Iterator for RowReader<R> {
    type Item = Result<InputRow, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            RowReader::Lines {
                input,
                null_token,
                line_number,
            } => {
                let mut buf = Vec::new();
                match input.read_until(b'\n', &mut buf) {
                    Ok(0) => return None,
                    Ok(_) => {}
                    Err(e) => return Some(Err(e.into())),
                }
                *line_number += 1;

                let line = decode_line(&buf, *line_number);
                let url = if line == *null_token { None } else { Some(line) };
                Some(Ok(InputRow { url, record: None }))
            }
            RowReader::Csv { reader, column, .. } => {
                let mut record = StringRecord::new();
                match reader.read_record(&mut record) {
                    Ok(true) => {
                        // Empty cells are the only null CSV can express.
                        let url = record
                            .get(*column)
                            .filter(|v| !v.is_empty())
                            .map(str::to_string);
                        Some(Ok(InputRow {
                            url,
                            record: Some(record),
                        }))
                    }
                    Ok(false) => None,
                    Err(e) => Some(Err(e.into())),
                }
            }
        }
    }
}

/// Drops the `\n` or `\r\n` terminator and decodes the rest, replacing
/// invalid UTF-8 with U+FFFD.
fn decode_line(buf: &[u8], line_number: usize) -> String {
    let line = match buf.strip_suffix(b"\n") {
        Some(line) => line.strip_suffix(b"\r").unwrap_or(line),
        None => buf,
    };
    match std::str::from_utf8(line) {
        Ok(line) => line.to_string(),
        Err(_) => {
            warn!("Line {line_number} is not valid UTF-8; invalid bytes replaced");
            String::from_utf8_lossy(line).into_owned()
        }
    }
}
