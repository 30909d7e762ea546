//! Contract Filter Library
//!
//! A Rust library for validating contract CSV files and filtering their rows
//! by validity period.
//!
//! This library provides tools for:
//! - Parsing headerless 6-column contract CSV rows with strict field checks
//! - Validating national and state identifier formats (format only, no checksums)
//! - Parsing day-first contract dates in strict or permissive mode
//! - Filtering contracts against an inclusive date window (overlap or containment)
//! - Collecting run metrics and a capped diagnostic log during the scan
//! - Re-encoding accepted rows byte-for-byte into a new CSV file

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod csv_export;
        pub mod record_parser;
        pub mod scanner;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{ContractRecord, FilterWindow, RejectReason};
pub use config::{DateParseMode, FilterMode, ScanConfig};

/// Result type alias for contract filtering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for contract filtering operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input decoding error
    #[error("Decoding error: {message}")]
    Decode {
        message: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// CSV encoding or decoding error
    #[error("CSV error: {message}")]
    Csv {
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date parsing error
    #[error("Date parsing error: {message}")]
    DateParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a decoding error with context
    pub fn decode(message: impl Into<String>, source: std::str::Utf8Error) -> Self {
        Self::Decode {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV error with context
    pub fn csv(message: impl Into<String>, source: Option<csv::Error>) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV processing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateParsing {
            message: "Date parsing failed".to_string(),
            source: error,
        }
    }
}
