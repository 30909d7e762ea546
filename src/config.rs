//! Configuration for contract scans.
//!
//! Provides the filter mode, date-parsing mode, and the immutable
//! configuration value handed to the scanner for a single run.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::app::models::FilterWindow;
use crate::{Error, Result};

/// How a contract period is matched against the filter window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    /// Keep contracts whose period touches the window at any point
    Overlap,
    /// Keep contracts whose period lies entirely inside the window
    Containment,
}

impl Default for FilterMode {
    fn default() -> Self {
        FilterMode::Overlap
    }
}

impl FromStr for FilterMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "overlap" => Ok(FilterMode::Overlap),
            "containment" => Ok(FilterMode::Containment),
            other => Err(Error::configuration(format!(
                "Unknown filter mode '{}'. Valid modes: overlap, containment",
                other
            ))),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Overlap => write!(f, "overlap"),
            FilterMode::Containment => write!(f, "containment"),
        }
    }
}

/// How contract date fields are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateParseMode {
    /// Try a tolerant, ordered list of day-first formats
    Permissive,
    /// Accept exactly `DD/MM/YYYY` and nothing else
    Strict,
}

impl Default for DateParseMode {
    fn default() -> Self {
        DateParseMode::Permissive
    }
}

impl FromStr for DateParseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(DateParseMode::Permissive),
            "strict" => Ok(DateParseMode::Strict),
            other => Err(Error::configuration(format!(
                "Unknown date-parsing mode '{}'. Valid modes: permissive, strict",
                other
            ))),
        }
    }
}

impl fmt::Display for DateParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseMode::Permissive => write!(f, "permissive"),
            DateParseMode::Strict => write!(f, "strict"),
        }
    }
}

/// Immutable configuration for a single scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Inclusive datetime window contracts are matched against
    pub window: FilterWindow,

    /// Period matching mode
    pub mode: FilterMode,

    /// Date-parsing mode for the two period fields
    pub date_parsing: DateParseMode,

    /// Collect per-row diagnostic entries during the scan
    pub diagnostics_enabled: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(FilterWindow::current_year())
    }
}

impl ScanConfig {
    /// Create a configuration for the given window with default modes
    pub fn new(window: FilterWindow) -> Self {
        Self {
            window,
            mode: FilterMode::default(),
            date_parsing: DateParseMode::default(),
            diagnostics_enabled: false,
        }
    }

    /// Set the period matching mode
    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the date-parsing mode
    pub fn with_date_parsing(mut self, date_parsing: DateParseMode) -> Self {
        self.date_parsing = date_parsing;
        self
    }

    /// Enable or disable diagnostic collection
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics_enabled = enabled;
        self
    }
}
