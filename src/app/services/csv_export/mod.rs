//! CSV re-encoding of accepted contract rows
//!
//! Accepted rows are written back from their original field texts, never
//! from the parsed values, so the output is byte-for-byte the accepted
//! subset of the input. Quoting is applied only where a field contains the
//! delimiter, a quote, or a line break.
//!
//! ## Usage
//!
//! ```rust
//! use contract_filter::app::services::csv_export::encode_records;
//!
//! # fn example() -> contract_filter::Result<()> {
//! let text = encode_records(&[])?;
//! assert!(text.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use writer::{encode_records, write_records};
