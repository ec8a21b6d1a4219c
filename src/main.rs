//! Vehicle rental billing application.
//!
//! This program reads a CSV file containing rental requests, resolves each
//! request against the session's vehicle stock, prices the successful rentals
//! (including a randomized damage surcharge), and writes a per-customer
//! billing report to `output.txt` in the working directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! The program prompts for the input file name on stdout and reads it from
//! stdin.
//!
//! # Input Format
//!
//! The input CSV file should contain rental requests with the following
//! columns:
//! - `firstName`, `lastName`: The customer's name
//! - `license`: Driver's license number (integer)
//! - `phone`: Contact phone number (integer)
//! - `email`: Contact email address
//! - `vehicleCategory`: Requested vehicle make (Ford or Honda, any casing)
//! - `lengthDays`: Rental length in whole days (integer)
//!
//! # Output Format
//!
//! The report opens with a greeting naming the starting stock counts, then
//! carries one line per input row: a charge line, an unavailability notice,
//! or a fixed message for rows that failed to parse.
//!
//! # Examples
//!
//! Process requests from a file in the working directory:
//! ```bash
//! echo "rentals.csv" | cargo run
//! cat output.txt
//! ```
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

mod engine;
mod io;
mod types;

use types::{STARTING_FORDS, STARTING_HONDAS, StockLedger};

/// Printed when the requested input file does not exist.
const FILE_NOT_FOUND_MESSAGE: &str = "Error, the requested file was not found. Please ensure the \
     file name was spelled correctly, and that the file has been placed in the correct folder.";

/// Main entry point for the rental billing application.
///
/// This function orchestrates the entire billing pipeline:
/// 1. Prompts for the input file name and reads it from stdin
/// 2. Checks the file exists, bailing out with a message if it does not
/// 3. Streams and parses rental requests from the CSV file
/// 4. Builds the billing report against a fresh stock ledger
/// 5. Writes the report to `output.txt`, replacing any previous run's file
///
/// # Returns
///
/// Returns `Ok(())` on success and also when the input file is missing — that
/// case is reported to the user on stdout and no output file is written.
///
/// # Errors
///
/// This function will return an error if:
/// - The prompt cannot be written or the file name cannot be read
/// - The input file exists but cannot be opened
/// - Writing the report file fails
fn main() -> Result<()> {
    env_logger::init();

    print!("Enter the name of the (csv) file to use: ");
    std::io::stdout().flush().context("Failed to flush prompt")?;

    let mut file_name = String::new();
    std::io::stdin()
        .read_line(&mut file_name)
        .context("Failed to read file name from stdin")?;
    let file_name = file_name.trim();

    if !Path::new(file_name).exists() {
        println!("{}", FILE_NOT_FOUND_MESSAGE);
        return Ok(());
    }

    let rows = io::read_customers_from_file(file_name)?;
    let mut ledger = StockLedger::new(STARTING_FORDS, STARTING_HONDAS);
    let report = engine::build_report(rows, &mut ledger, &mut rand::thread_rng());

    io::write_report(io::REPORT_PATH, &report)?;

    Ok(())
}
