mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::mortgage::MortgageArgs;
use commands::price::ConvertPriceArgs;

/// Mortgage payment estimates and listing price conversion
#[derive(Parser)]
#[command(
    name = "estate",
    version,
    about = "Mortgage payment estimates and listing price conversion",
    long_about = "Estimates the fixed monthly payment for a home purchase using standard \
                  fixed-rate amortisation, and converts stored USD listing prices into \
                  MYR or CNY for display. Labels are available in English and Chinese."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the monthly payment on a fixed-rate mortgage
    Mortgage(MortgageArgs),
    /// Convert a USD listing price for display
    ConvertPrice(ConvertPriceArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Yaml,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Mortgage(args) => commands::mortgage::run_mortgage(args),
        Commands::ConvertPrice(args) => commands::price::run_convert_price(args),
        Commands::Version => {
            println!("estate {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
