//! Input/Output operations for rental processing.
//!
//! This module provides functions for reading rental requests from CSV files
//! and writing the finished billing report to the output file.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;

use crate::types::Customer;

/// Fixed path the billing report is written to, relative to the working
/// directory. Overwritten on every run.
pub const REPORT_PATH: &str = "output.txt";

/// An iterator over rental requests from a CSV file.
///
/// This struct owns the CSV reader and file, allowing rows to be streamed one
/// at a time without loading the entire file into memory. Each item is a
/// `Result`: a row whose numeric columns fail to parse (or that has the wrong
/// number of fields) yields an `Err` for that row only, so the caller can
/// recover and keep iterating.
pub struct CustomerReader {
    reader: csv::Reader<File>,
    path: String,
    line_num: usize,
}

impl Iterator for CustomerReader {
    type Item = Result<Customer, anyhow::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.deserialize().next().map(|result| {
            self.line_num += 1;
            result.with_context(|| {
                format!(
                    "Failed to parse record at line {} from: {}",
                    self.line_num + 1,
                    self.path
                )
            })
        })
    }
}

/// Reads and parses a CSV file, returning an iterator over [`Customer`] rows.
///
/// This function opens the specified CSV file and returns an iterator that
/// lazily deserializes records into `Customer` structs using serde. The first
/// line is consumed as the header; both CRLF and LF line endings are accepted,
/// and surrounding whitespace in fields is trimmed.
///
/// # Arguments
///
/// * `path` - The file path to the CSV file to read
///
/// # Returns
///
/// Returns a `Result` containing an iterator over `Customer` rows on success,
/// or an error if the file cannot be opened.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be opened (file not found, permission denied, etc.)
///
/// Note: Individual record parsing errors will be returned when iterating over
/// the result — they never make opening the file fail.
pub fn read_customers_from_file(path: &str) -> Result<CustomerReader> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", path))?;
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    Ok(CustomerReader {
        reader,
        path: path.to_string(),
        line_num: 0,
    })
}

/// Writes the accumulated billing report to the given path, UTF-8 encoded,
/// replacing any file already there.
///
/// # Errors
///
/// This function will return an error if the file cannot be created or
/// written (permission denied, disk full, etc.).
pub fn write_report<P: AsRef<Path>>(path: P, report: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report to: {}", path.display()))?;

    Ok(())
}
