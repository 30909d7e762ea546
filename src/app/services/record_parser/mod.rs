//! Row validation and parsing for contract CSV data
//!
//! This module turns raw CSV rows into validated [`ContractRecord`]s. A row
//! must clear three checks, always in the same order: exactly six fields,
//! both identifier formats, both period dates. Rows failing a check are
//! rejected with a [`RejectReason`] for that check and never reach the later
//! ones.
//!
//! ## Architecture
//!
//! - [`identifiers`] - Format predicates for the two identifier fields
//! - [`dates`] - Strict and permissive day-first date parsing
//! - [`parser`] - The fixed-order row check producing a record
//!
//! ## Usage
//!
//! ```rust
//! use contract_filter::app::services::record_parser::parse_contract_row;
//! use contract_filter::config::DateParseMode;
//! use csv::StringRecord;
//!
//! let row = StringRecord::from(vec![
//!     "Ana Souza",
//!     "111.222.333-44",
//!     "12.345.678-9",
//!     "Rua A, 10",
//!     "01/03/2025",
//!     "15/03/2025",
//! ]);
//!
//! let record = parse_contract_row(&row, DateParseMode::Permissive).expect("valid row");
//! assert_eq!(record.name, "Ana Souza");
//! ```
//!
//! [`ContractRecord`]: crate::app::models::ContractRecord
//! [`RejectReason`]: crate::app::models::RejectReason

pub mod dates;
pub mod identifiers;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use dates::parse_contract_date;
pub use identifiers::{is_valid_national_id, is_valid_state_id};
pub use parser::parse_contract_row;
