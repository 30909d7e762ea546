//! Command-line argument definitions for the contract filter
//!
//! This module defines the complete CLI interface using the clap derive API:
//! the `filter` command for the full scan-and-write run and the `check`
//! command for a validation-only survey.

use crate::app::models::FilterWindow;
use crate::config::{DateParseMode, FilterMode};
use crate::constants::{
    CLI_DATE_FORMATS, DEFAULT_OUTPUT_FILENAME, DEFAULT_PREVIEW_ROWS, PREVIEW_ROWS_MAX,
    PREVIEW_ROWS_MIN, default_window_year,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::warn;

/// CLI arguments for the contract filter
///
/// Validates 6-column contract CSV files and filters their rows by how the
/// contract period relates to a user-selected date window.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "contract-filter",
    version,
    about = "Validate contract CSV files and filter rows by validity period",
    long_about = "Loads a headerless 6-column contract CSV (name, national id, state id, \
                  address, period start, period end), validates identifier formats and \
                  day-first dates on every row, and keeps the rows whose contract period \
                  overlaps (or is contained in) a date window. Accepted rows are written \
                  to a new CSV with their original field text preserved byte for byte."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the contract filter
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Filter contract rows by validity period and write the result (default command)
    Filter(FilterArgs),
    /// Validate every row of a contract CSV without filtering or writing
    Check(CheckArgs),
}

/// Arguments for the filter command (main filtering run)
#[derive(Debug, Clone, Parser)]
pub struct FilterArgs {
    /// Input contract CSV file
    ///
    /// Headerless, comma-delimited, UTF-8, exactly 6 columns per row:
    /// name, national id, state id, address, period start, period end.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input contract CSV file"
    )]
    pub input: PathBuf,

    /// Output path for the filtered CSV
    ///
    /// Accepted rows are written with their original field text. Defaults to
    /// contracts_filtered.csv in the current directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the filtered CSV"
    )]
    pub output: Option<PathBuf>,

    /// Window start date (YYYY-MM-DD or DD/MM/YYYY)
    ///
    /// Normalized to the start of the day. Defaults to January 1 of the
    /// current year.
    #[arg(long = "start", value_name = "DATE", help = "Window start date")]
    pub start: Option<String>,

    /// Window end date (YYYY-MM-DD or DD/MM/YYYY)
    ///
    /// Normalized to the end of the day. Defaults to December 31 of the
    /// current year.
    #[arg(long = "end", value_name = "DATE", help = "Window end date")]
    pub end: Option<String>,

    /// Period matching mode
    ///
    /// overlap keeps contracts touching the window at any point;
    /// containment keeps contracts lying entirely inside it.
    #[arg(
        short = 'm',
        long = "mode",
        value_name = "MODE",
        default_value = "overlap",
        help = "Period matching mode: overlap or containment"
    )]
    pub mode: FilterMode,

    /// Date-parsing mode for the two period fields
    ///
    /// permissive tries a tolerant list of day-first formats; strict accepts
    /// exactly DD/MM/YYYY.
    #[arg(
        long = "date-parsing",
        value_name = "MODE",
        default_value = "permissive",
        help = "Date-parsing mode: permissive or strict"
    )]
    pub date_parsing: DateParseMode,

    /// Number of accepted rows shown in the preview table (1-100)
    ///
    /// Affects only the display; the output file always contains every
    /// accepted row.
    #[arg(
        short = 'n',
        long = "preview",
        value_name = "ROWS",
        default_value_t = DEFAULT_PREVIEW_ROWS,
        help = "Accepted rows shown in the preview table"
    )]
    pub preview: usize,

    /// Collect a per-row diagnostic log (capped at 15 entries)
    #[arg(long = "diagnostics", help = "Collect a capped per-row diagnostic log")]
    pub diagnostics: bool,

    /// Scan and report without writing the output file
    #[arg(long = "dry-run", help = "Scan and report without writing the output file")]
    pub dry_run: bool,

    /// Overwrite an existing output file without prompting
    #[arg(long = "force", help = "Overwrite an existing output file without prompting")]
    pub force: bool,

    /// Suppress progress output and non-error logging
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress progress output and non-error logging"
    )]
    pub quiet: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity"
    )]
    pub verbose: u8,

    /// Output format for the run report
    #[arg(
        long = "output-format",
        value_enum,
        default_value_t = OutputFormat::Human,
        help = "Run report format"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the check command (validation-only survey)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Input contract CSV file
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input contract CSV file"
    )]
    pub input: PathBuf,

    /// Date-parsing mode for the two period fields
    #[arg(
        long = "date-parsing",
        value_name = "MODE",
        default_value = "permissive",
        help = "Date-parsing mode: permissive or strict"
    )]
    pub date_parsing: DateParseMode,

    /// Collect a per-row diagnostic log (capped at 15 entries)
    #[arg(long = "diagnostics", help = "Collect a capped per-row diagnostic log")]
    pub diagnostics: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity"
    )]
    pub verbose: u8,

    /// Output format for the check report
    #[arg(
        long = "output-format",
        value_enum,
        default_value_t = OutputFormat::Human,
        help = "Check report format"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Parse a window bound given on the command line
///
/// Accepts `YYYY-MM-DD` or `DD/MM/YYYY`.
fn parse_cli_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    for format in CLI_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date);
        }
    }
    Err(Error::configuration(format!(
        "Invalid window date '{}'. Expected YYYY-MM-DD or DD/MM/YYYY",
        text
    )))
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FilterArgs {
    /// Validate the filter command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if !(PREVIEW_ROWS_MIN..=PREVIEW_ROWS_MAX).contains(&self.preview) {
            return Err(Error::configuration(format!(
                "Preview row count must be between {} and {}, got {}",
                PREVIEW_ROWS_MIN, PREVIEW_ROWS_MAX, self.preview
            )));
        }

        Ok(())
    }

    /// Build the filter window from the start/end arguments
    ///
    /// Missing bounds default to January 1 and December 31 of the current
    /// year. An inverted window is accepted with a warning and evaluated
    /// mechanically by the predicates.
    pub fn window(&self) -> Result<FilterWindow> {
        let year = default_window_year();

        let start = match &self.start {
            Some(text) => parse_cli_date(text)?,
            None => NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        };
        let end = match &self.end {
            Some(text) => parse_cli_date(text)?,
            None => NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        };

        let window = FilterWindow::from_dates(start, end);
        if window.is_inverted() {
            warn!(
                "Window start {} is after window end {}; matching proceeds mechanically",
                start, end
            );
        }

        Ok(window)
    }

    /// Get the output path, defaulting to contracts_filtered.csv
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_OUTPUT_FILENAME),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the scan spinner
    ///
    /// Suppressed in quiet mode and for machine-readable report formats.
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.output_format == OutputFormat::Human
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::file_not_found(self.input.display().to_string()));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            start: None,
            end: None,
            mode: FilterMode::default(),
            date_parsing: DateParseMode::default(),
            preview: DEFAULT_PREVIEW_ROWS,
            diagnostics: false,
            dry_run: false,
            force: false,
            quiet: false,
            verbose: 0,
            output_format: OutputFormat::Human,
        }
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            date_parsing: DateParseMode::default(),
            diagnostics: false,
            verbose: 0,
            output_format: OutputFormat::Human,
        }
    }
}
