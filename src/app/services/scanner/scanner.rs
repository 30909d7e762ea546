//! Core contract scan implementation
//!
//! This module provides the scan orchestration: decode the input, iterate
//! its CSV records in order, validate each row, and match valid rows against
//! the filter window. Row-level failures are counted and skipped with the
//! scan continuing; the only fatal error is input that is not valid UTF-8.

use std::path::Path;
use std::time::Instant;

use indicatif::ProgressBar;
use tracing::{debug, info};

use crate::app::services::record_parser::parse_contract_row;
use crate::config::ScanConfig;
use crate::{Error, Result};

use super::diagnostics::DiagnosticLog;
use super::period_filter::is_included;
use super::stats::{ScanOutcome, ScanStats};

/// Decode raw input bytes as UTF-8
///
/// There is no row-level recovery from an encoding problem, so a failure
/// here aborts the scan.
pub fn decode_input(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        Error::decode(
            format!("input is not valid UTF-8 (first bad byte at offset {})", e.valid_up_to()),
            e,
        )
    })
}

/// Contract scanner for CSV inputs
///
/// Holds the immutable configuration for a run. Scanning the same input
/// twice with the same configuration yields identical outcomes.
#[derive(Debug, Clone)]
pub struct ContractScanner {
    config: ScanConfig,
}

impl ContractScanner {
    /// Create a new scanner with the given configuration
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Get the configuration used by this scanner
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan a contract CSV file
    pub fn scan_file(&self, path: &Path) -> Result<ScanOutcome> {
        info!("Scanning contract file: {}", path.display());

        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        self.scan_bytes(&bytes, None)
    }

    /// Scan raw input bytes, decoding them first
    pub fn scan_bytes(&self, bytes: &[u8], progress: Option<&ProgressBar>) -> Result<ScanOutcome> {
        let text = decode_input(bytes)?;
        Ok(self.scan_str(text, progress))
    }

    /// Scan decoded input text
    ///
    /// Nothing past decoding can fail the scan, so this returns the outcome
    /// directly.
    pub fn scan_str(&self, text: &str, progress: Option<&ProgressBar>) -> ScanOutcome {
        let started = Instant::now();
        let mut stats = ScanStats::new();
        let mut diagnostics = DiagnosticLog::new(self.config.diagnostics_enabled);
        let mut records = Vec::new();

        // Every line is data: no header row, and wrong-arity rows must
        // surface as records so they can be counted and rejected.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(text.as_bytes());

        for result in reader.records() {
            stats.rows_read += 1;
            let row_number = stats.rows_read;

            if let Some(pb) = progress {
                pb.inc(1);
            }

            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    stats.rejected_malformed += 1;
                    diagnostics.push(format!("row {}: malformed row ({})", row_number, e));
                    debug!("Skipped row {}: malformed row ({})", row_number, e);
                    continue;
                }
            };

            match parse_contract_row(&row, self.config.date_parsing) {
                Ok(record) => {
                    if is_included(
                        record.period_start,
                        record.period_end,
                        &self.config.window,
                        self.config.mode,
                    ) {
                        stats.rows_kept += 1;
                        diagnostics.push(format!("row {}: included", row_number));
                        records.push(record);
                    } else {
                        stats.rows_outside_window += 1;
                    }
                }
                Err(reason) => {
                    stats.record_rejection(&reason);
                    diagnostics.push(format!("row {}: {}", row_number, reason));
                    debug!("Skipped row {}: {}", row_number, reason);
                }
            }
        }

        stats.elapsed = started.elapsed();
        info!("Scan complete: {}", stats.summary());

        ScanOutcome::new(records, stats, diagnostics)
    }
}
