//! Check command implementation for the contract filter CLI
//!
//! Validation-only survey of a contract CSV file: every row is parsed and
//! classified, nothing is filtered and nothing is written. Useful for
//! inspecting a file before choosing a window.

use std::time::Instant;

use colored::Colorize;
use tracing::{debug, info};

use super::shared::setup_logging;
use crate::app::services::record_parser::parse_contract_row;
use crate::app::services::scanner::{DiagnosticLog, ScanStats, decode_input};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::{Error, Result};

/// Check command runner for the contract filter
///
/// Runs the row validation pipeline over the whole file and reports how
/// many rows are valid and why the rest fail. Valid rows are counted in
/// `rows_kept`; no window is applied.
pub fn run_check(args: CheckArgs) -> Result<ScanStats> {
    setup_logging(args.get_log_level(), false)?;

    info!("Checking contract file: {}", args.input.display());
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let bytes = std::fs::read(&args.input).map_err(|e| {
        Error::io(
            format!("Failed to read input file {}", args.input.display()),
            e,
        )
    })?;
    let text = decode_input(&bytes)?;

    let started = Instant::now();
    let mut stats = ScanStats::new();
    let mut diagnostics = DiagnosticLog::new(args.diagnostics);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    for result in reader.records() {
        stats.rows_read += 1;
        let row_number = stats.rows_read;

        let row = match result {
            Ok(row) => row,
            Err(e) => {
                stats.rejected_malformed += 1;
                diagnostics.push(format!("row {}: malformed row ({})", row_number, e));
                continue;
            }
        };

        match parse_contract_row(&row, args.date_parsing) {
            Ok(_) => stats.rows_kept += 1,
            Err(reason) => {
                stats.record_rejection(&reason);
                diagnostics.push(format!("row {}: {}", row_number, reason));
            }
        }
    }

    stats.elapsed = started.elapsed();
    info!(
        "Check complete: {} of {} rows valid in {:.2}s",
        stats.rows_kept,
        stats.rows_read,
        stats.elapsed_seconds()
    );

    match args.output_format {
        OutputFormat::Human => generate_human_report(&stats, &diagnostics),
        OutputFormat::Json => generate_json_report(&stats, &diagnostics)?,
        OutputFormat::Csv => generate_csv_report(&stats),
    }

    Ok(stats)
}

/// Generate human-readable check report
fn generate_human_report(stats: &ScanStats, diagnostics: &DiagnosticLog) {
    println!("\n🔎 Contract File Check Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Row Summary:");
    println!("   • Rows read: {}", stats.rows_read);
    println!("   • Valid rows: {}", stats.rows_kept);
    println!("   • Malformed rows: {}", stats.rejected_malformed);
    println!("   • Invalid identifiers: {}", stats.rejected_identifier);
    println!("   • Invalid dates: {}", stats.rejected_date);
    println!("   • Elapsed time: {:.2}s", stats.elapsed_seconds());

    if stats.rows_rejected() == 0 {
        println!("\n{}", "✅ Every row passed validation".green());
    } else {
        println!(
            "\n{}",
            format!("❌ {} rows failed validation", stats.rows_rejected()).red()
        );
    }

    if !diagnostics.is_empty() {
        println!("\n🔍 Diagnostics:");
        for entry in diagnostics.entries() {
            println!("   • {}", entry);
        }
        if diagnostics.dropped() > 0 {
            println!(
                "   • ... {} more entries dropped at the cap",
                diagnostics.dropped()
            );
        }
    }

    println!();
}

/// Generate JSON check report
fn generate_json_report(stats: &ScanStats, diagnostics: &DiagnosticLog) -> Result<()> {
    let report = serde_json::json!({
        "rows_read": stats.rows_read,
        "valid_rows": stats.rows_kept,
        "rejected_malformed": stats.rejected_malformed,
        "rejected_identifier": stats.rejected_identifier,
        "rejected_date": stats.rejected_date,
        "elapsed_seconds": stats.elapsed_seconds(),
        "diagnostics": diagnostics.entries(),
    });

    let text = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize check report: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Generate CSV check report
fn generate_csv_report(stats: &ScanStats) {
    println!("metric,value");
    println!("rows_read,{}", stats.rows_read);
    println!("valid_rows,{}", stats.rows_kept);
    println!("rejected_malformed,{}", stats.rejected_malformed);
    println!("rejected_identifier,{}", stats.rejected_identifier);
    println!("rejected_date,{}", stats.rejected_date);
    println!("elapsed_seconds,{}", stats.elapsed_seconds());
}
