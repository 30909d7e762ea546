//! Test utilities for record parser testing
//!
//! Shared row fixtures used across the identifier, date, and parser test
//! modules.

use csv::StringRecord;

// Test modules
mod date_tests;
mod identifier_tests;

/// Build a CSV row from field texts
pub fn contract_row(fields: &[&str]) -> StringRecord {
    StringRecord::from(fields.to_vec())
}

/// A fully valid contract row
pub fn valid_row() -> StringRecord {
    contract_row(&[
        "Ana Souza",
        "111.222.333-44",
        "12.345.678-9",
        "Rua A, 10",
        "01/03/2025",
        "15/03/2025",
    ])
}
