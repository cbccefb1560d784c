mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compare::CompareArgs;
use commands::rating::RatingArgs;
use commands::simulate::SimulateArgs;
use commands::spend::SpendArgs;

/// FAIR-based cyber risk quantification
#[derive(Parser)]
#[command(
    name = "cyq",
    version,
    about = "FAIR-based cyber risk quantification",
    long_about = "A CLI for quantifying cyber risk with FAIR-style Monte Carlo simulation. \
                  Produces annualized loss expectancy distributions, risk ratings, \
                  Gordon-Loeb optimal spend, industry benchmarks, and remediation guidance."
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
    /// Run a Monte Carlo risk simulation over an assessment
    Simulate(SimulateArgs),
    /// Gordon-Loeb optimal security spend
    Spend(SpendArgs),
    /// Classify an ALE-to-revenue ratio into a risk rating
    Rating(RatingArgs),
    /// Compare two assessments under a shared seed
    Compare(CompareArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::simulate::run_simulate(args),
        Commands::Spend(args) => commands::spend::run_spend(args),
        Commands::Rating(args) => commands::rating::run_rating(args),
        Commands::Compare(args) => commands::compare::run_compare(args),
        Commands::Version => {
            println!("cyq {}", env!("CARGO_PKG_VERSION"));
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
