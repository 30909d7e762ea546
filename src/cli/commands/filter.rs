//! Filter command implementation for the contract filter CLI
//!
//! This module contains the complete filtering workflow: argument
//! validation, the scan itself, the overwrite guard for the output file,
//! and run report generation in human, JSON, and CSV formats.

use std::path::Path;

use colored::Colorize;
use indicatif::HumanDuration;
use tracing::{debug, info, warn};

use super::shared::{create_scan_spinner, format_size, setup_logging};
use crate::app::models::ContractRecord;
use crate::app::services::csv_export::write_records;
use crate::app::services::scanner::{ContractScanner, ScanOutcome, ScanStats};
use crate::cli::args::{FilterArgs, OutputFormat};
use crate::cli::input::prompt_confirmation;
use crate::config::ScanConfig;
use crate::constants::PREVIEW_COLUMN_LABELS;
use crate::{Error, Result};

/// Filter command runner for the contract filter
///
/// This function orchestrates the whole run:
/// 1. Set up logging and validate arguments
/// 2. Scan the input file with progress reporting
/// 3. Write the accepted rows to the output file (unless dry run)
/// 4. Generate the run report
pub fn run_filter(args: FilterArgs) -> Result<ScanStats> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting contract filter");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let window = args.window()?;

    let config = ScanConfig::new(window)
        .with_mode(args.mode)
        .with_date_parsing(args.date_parsing)
        .with_diagnostics(args.diagnostics);

    info!(
        "Filtering {} against {} to {} ({} mode, {} dates)",
        args.input.display(),
        window.start.date(),
        window.end.date(),
        config.mode,
        config.date_parsing
    );

    let bytes = std::fs::read(&args.input).map_err(|e| {
        Error::io(
            format!("Failed to read input file {}", args.input.display()),
            e,
        )
    })?;

    let progress = if args.show_progress() {
        Some(create_scan_spinner("scanned"))
    } else {
        None
    };

    let scanner = ContractScanner::new(config.clone());
    let outcome = scanner.scan_bytes(&bytes, progress.as_ref())?;

    if let Some(pb) = &progress {
        pb.finish_with_message(format!(
            "scanned in {}",
            HumanDuration(outcome.stats.elapsed)
        ));
    }

    let output_path = args.output_path();
    let output_size = if args.dry_run {
        info!("Dry run requested, output file not written");
        None
    } else {
        confirm_overwrite(&args, &output_path)?;
        let size = write_records(&output_path, &outcome.records)?;
        info!(
            "Wrote {} records ({}) to {}",
            outcome.record_count(),
            format_size(size),
            output_path.display()
        );
        Some(size)
    };

    match args.output_format {
        OutputFormat::Human => {
            generate_human_report(&args, &config, &outcome, &output_path, output_size)
        }
        OutputFormat::Json => {
            generate_json_report(&config, &outcome, &output_path, output_size)?
        }
        OutputFormat::Csv => generate_csv_report(&outcome.stats),
    }

    Ok(outcome.stats)
}

/// Guard against silently overwriting an existing output file
///
/// `--force` proceeds; otherwise the user is prompted, except in quiet mode
/// where an existing target is a configuration error.
fn confirm_overwrite(args: &FilterArgs, output_path: &Path) -> Result<()> {
    if args.force || !output_path.exists() {
        return Ok(());
    }

    if args.quiet {
        return Err(Error::configuration(format!(
            "Output file already exists: {} (use --force to overwrite)",
            output_path.display()
        )));
    }

    warn!("Output file already exists: {}", output_path.display());
    let overwrite = prompt_confirmation(
        &format!("Overwrite {}?", output_path.display()),
        false,
    )?;

    if overwrite {
        Ok(())
    } else {
        Err(Error::configuration(
            "Aborted: existing output file left unchanged".to_string(),
        ))
    }
}

/// Generate human-readable run report
fn generate_human_report(
    args: &FilterArgs,
    config: &ScanConfig,
    outcome: &ScanOutcome,
    output_path: &Path,
    output_size: Option<u64>,
) {
    let stats = &outcome.stats;

    println!("\n📋 Contract Filtering Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Scan Summary:");
    println!(
        "   • Window: {} to {} ({} mode)",
        config.window.start.date(),
        config.window.end.date(),
        config.mode
    );
    println!("   • Rows read: {}", stats.rows_read);
    println!("   • Rows kept: {}", stats.rows_kept);
    println!("   • Outside window: {}", stats.rows_outside_window);
    if stats.rows_rejected() > 0 {
        println!(
            "   • Rows rejected: {} ({} malformed, {} invalid identifier, {} invalid date)",
            stats.rows_rejected().to_string().red(),
            stats.rejected_malformed,
            stats.rejected_identifier,
            stats.rejected_date
        );
    }
    println!("   • Elapsed time: {:.2}s", stats.elapsed_seconds());

    if outcome.is_empty() {
        println!(
            "\n{}",
            "⚠️  No contracts matched the filter window".yellow()
        );
    } else {
        println!(
            "\n📄 Preview (first {} of {} accepted rows):",
            args.preview.min(outcome.record_count()),
            outcome.record_count()
        );
        render_preview(&outcome.records, args.preview);
    }

    if !outcome.diagnostics.is_empty() {
        println!("\n🔍 Diagnostics:");
        for entry in outcome.diagnostics.entries() {
            println!("   • {}", entry);
        }
        if outcome.diagnostics.dropped() > 0 {
            println!(
                "   • ... {} more entries dropped at the cap",
                outcome.diagnostics.dropped()
            );
        }
    }

    match output_size {
        Some(size) => println!(
            "\n📁 Output: {} ({})",
            output_path.display(),
            format_size(size)
        ),
        None => println!("\n📁 Output: not written (dry run)"),
    }

    println!();
}

/// Print the first rows of the accepted set as an aligned table
fn render_preview(records: &[ContractRecord], limit: usize) {
    let shown = &records[..limit.min(records.len())];

    let mut widths: Vec<usize> = PREVIEW_COLUMN_LABELS.iter().map(|l| l.len()).collect();
    for record in shown {
        for (i, field) in record.raw_fields().iter().enumerate() {
            widths[i] = widths[i].max(field.chars().count());
        }
    }

    let header: Vec<String> = PREVIEW_COLUMN_LABELS
        .iter()
        .zip(&widths)
        .map(|(label, width)| format!("{:<1$}", label, *width))
        .collect();
    println!("   {}", header.join("  "));

    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    println!("   {}", rule.join("  "));

    for record in shown {
        let cells: Vec<String> = record
            .raw_fields()
            .iter()
            .zip(&widths)
            .map(|(field, width)| format!("{:<1$}", field, *width))
            .collect();
        println!("   {}", cells.join("  "));
    }
}

/// Generate JSON report for machine consumption
fn generate_json_report(
    config: &ScanConfig,
    outcome: &ScanOutcome,
    output_path: &Path,
    output_size: Option<u64>,
) -> Result<()> {
    let stats = &outcome.stats;
    let report = serde_json::json!({
        "window": config.window,
        "mode": config.mode,
        "date_parsing": config.date_parsing,
        "rows_read": stats.rows_read,
        "rows_kept": stats.rows_kept,
        "rows_outside_window": stats.rows_outside_window,
        "rejected_malformed": stats.rejected_malformed,
        "rejected_identifier": stats.rejected_identifier,
        "rejected_date": stats.rejected_date,
        "elapsed_seconds": stats.elapsed_seconds(),
        "output_file": output_size.map(|_| output_path.display().to_string()),
        "output_size_bytes": output_size,
        "diagnostics": outcome.diagnostics.entries(),
    });

    let text = serde_json::to_string_pretty(&report)
        .map_err(|e| Error::configuration(format!("Failed to serialize run report: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(stats: &ScanStats) {
    println!("metric,value");
    println!("rows_read,{}", stats.rows_read);
    println!("rows_kept,{}", stats.rows_kept);
    println!("rows_outside_window,{}", stats.rows_outside_window);
    println!("rejected_malformed,{}", stats.rejected_malformed);
    println!("rejected_identifier,{}", stats.rejected_identifier);
    println!("rejected_date,{}", stats.rejected_date);
    println!("elapsed_seconds,{}", stats.elapsed_seconds());
}
