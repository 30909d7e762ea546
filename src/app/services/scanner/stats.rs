//! Scan statistics and result structures
//!
//! This module provides types for tracking what happened to every row of a
//! scan and for handing the accepted records to downstream steps.

use std::time::Duration;

use crate::app::models::{ContractRecord, RejectReason};

use super::diagnostics::DiagnosticLog;

/// Scan result with accepted records, statistics, and diagnostics
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Accepted records in input order
    pub records: Vec<ContractRecord>,

    /// Row accounting for the scan
    pub stats: ScanStats,

    /// Capped per-row diagnostic log (empty unless enabled)
    pub diagnostics: DiagnosticLog,
}

impl ScanOutcome {
    /// Create a new scan outcome
    pub fn new(records: Vec<ContractRecord>, stats: ScanStats, diagnostics: DiagnosticLog) -> Self {
        Self {
            records,
            stats,
            diagnostics,
        }
    }

    /// Number of accepted records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// True when nothing was accepted
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Row accounting for a single scan
///
/// Every row read lands in exactly one bucket:
/// `rows_read == rows_kept + rows_outside_window + rows_rejected()`.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Total CSV records encountered
    pub rows_read: usize,

    /// Valid rows whose period matched the window
    pub rows_kept: usize,

    /// Valid rows whose period did not match the window
    pub rows_outside_window: usize,

    /// Rows rejected for not having exactly six fields
    pub rejected_malformed: usize,

    /// Rows rejected for an identifier format failure
    pub rejected_identifier: usize,

    /// Rows rejected for an unparseable period date
    pub rejected_date: usize,

    /// Wall-clock duration of the scan
    pub elapsed: Duration,
}

impl ScanStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the reject counter matching the reason
    pub fn record_rejection(&mut self, reason: &RejectReason) {
        match reason {
            RejectReason::MalformedRow { .. } => self.rejected_malformed += 1,
            RejectReason::InvalidIdentifier => self.rejected_identifier += 1,
            RejectReason::InvalidDate => self.rejected_date += 1,
        }
    }

    /// Total rows rejected during validation
    pub fn rows_rejected(&self) -> usize {
        self.rejected_malformed + self.rejected_identifier + self.rejected_date
    }

    /// Elapsed scan time in seconds
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Share of read rows that were kept, as a percentage
    pub fn kept_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_kept as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// One-line human summary of the scan
    pub fn summary(&self) -> String {
        format!(
            "{} rows read: {} kept, {} outside window, {} rejected in {:.2}s",
            self.rows_read,
            self.rows_kept,
            self.rows_outside_window,
            self.rows_rejected(),
            self.elapsed_seconds()
        )
    }
}
