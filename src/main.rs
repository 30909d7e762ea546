use clap::Parser;
use contract_filter::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the run report has already been printed by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Contract Filter - CSV Contract Period Filtering");
    println!("===============================================");
    println!();
    println!("Validate contract CSV files (identifier formats, day-first dates)");
    println!("and filter their rows by how the contract period relates to a");
    println!("date window. Accepted rows are re-encoded byte for byte.");
    println!();
    println!("USAGE:");
    println!("    contract-filter <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    filter      Filter contract rows by validity period (main command)");
    println!("    check       Validate every row without filtering or writing");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Filter contracts against the current calendar year:");
    println!("    contract-filter filter --input contracts.csv");
    println!();
    println!("    # Containment mode over an explicit window, with diagnostics:");
    println!("    contract-filter filter --input contracts.csv \\");
    println!("                           --start 2025-01-01 --end 2025-06-30 \\");
    println!("                           --mode containment --diagnostics");
    println!();
    println!("    # Survey a file for validation problems:");
    println!("    contract-filter check --input contracts.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    contract-filter <COMMAND> --help");
}
