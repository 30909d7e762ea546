//! Capped per-row diagnostic log
//!
//! An append-only list of human-readable entries collected during a scan,
//! hard-capped so a pathological input cannot balloon the run report. Pushes
//! beyond the cap are counted and discarded; a log constructed disabled
//! ignores pushes entirely.

use crate::constants::DIAGNOSTIC_LOG_CAP;

/// Ordered diagnostic entries for a scan, capped at
/// [`DIAGNOSTIC_LOG_CAP`] entries
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    enabled: bool,
    entries: Vec<String>,
    dropped: usize,
}

impl DiagnosticLog {
    /// Create a new log; a disabled log ignores every push
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
            dropped: 0,
        }
    }

    /// Append an entry, subject to the cap
    pub fn push(&mut self, entry: String) {
        if !self.enabled {
            return;
        }
        if self.entries.len() >= DIAGNOSTIC_LOG_CAP {
            self.dropped += 1;
            return;
        }
        self.entries.push(entry);
    }

    /// Collected entries in append order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of collected entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries discarded after the cap was reached
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Whether this log collects entries at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
