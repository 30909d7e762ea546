//! Contract scan over CSV input
//!
//! This module runs the single linear pass that turns raw input bytes into
//! accepted [`ContractRecord`]s plus run statistics. Every CSV record is
//! counted exactly once: it is either kept, outside the window, or rejected
//! for one of the three validation reasons. The only fatal scan error is
//! input that is not valid UTF-8.
//!
//! ## Architecture
//!
//! - [`scanner`] - Scan orchestration: decode, iterate, validate, match
//! - [`period_filter`] - Pure window predicates (overlap and containment)
//! - [`stats`] - Run statistics and the scan outcome structure
//! - [`diagnostics`] - Capped per-row diagnostic log
//!
//! ## Usage
//!
//! ```rust
//! use contract_filter::app::services::scanner::ContractScanner;
//! use contract_filter::{FilterWindow, ScanConfig};
//!
//! # fn example() -> contract_filter::Result<()> {
//! let config = ScanConfig::new(FilterWindow::for_year(2025));
//! let scanner = ContractScanner::new(config);
//!
//! let input = "Ana Souza,111.222.333-44,12.345.678-9,\"Rua A, 10\",01/03/2025,15/03/2025\n";
//! let outcome = scanner.scan_bytes(input.as_bytes(), None)?;
//!
//! println!(
//!     "Kept {} of {} rows",
//!     outcome.stats.rows_kept, outcome.stats.rows_read
//! );
//! # Ok(())
//! # }
//! ```
//!
//! [`ContractRecord`]: crate::app::models::ContractRecord

pub mod diagnostics;
pub mod period_filter;
pub mod scanner;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use diagnostics::DiagnosticLog;
pub use period_filter::{is_included, period_contained, period_overlaps};
pub use scanner::{ContractScanner, decode_input};
pub use stats::{ScanOutcome, ScanStats};
