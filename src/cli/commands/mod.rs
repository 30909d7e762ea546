//! Command implementations for the contract filter CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and report generation for the CLI interface. Each command is implemented
//! in its own module:
//! - `filter`: the full run (scan, preview, report, output file)
//! - `check`: validation-only survey of a contract CSV file

pub mod check;
pub mod filter;
pub mod shared;

use crate::Result;
use crate::app::services::scanner::ScanStats;
use crate::cli::args::{Args, Commands};

/// Main command runner for the contract filter
///
/// Dispatches to the appropriate subcommand handler based on CLI args and
/// returns the scan statistics for the run.
pub fn run(args: Args) -> Result<ScanStats> {
    match args.get_command() {
        Commands::Filter(filter_args) => filter::run_filter(filter_args),
        Commands::Check(check_args) => check::run_check(check_args),
    }
}
