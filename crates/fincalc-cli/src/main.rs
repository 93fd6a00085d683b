mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::deposits::{FdArgs, RdArgs};
use commands::investments::{CagrArgs, SipArgs};
use commands::loans::{EligibilityArgs, EmiArgs, ScheduleArgs};
use commands::record::RecordArgs;
use commands::registry::DescribeArgs;

/// Personal-finance calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "pfc",
    version,
    about = "Personal-finance calculations with decimal precision",
    long_about = "A CLI for personal-finance calculations with decimal precision. \
                  Supports loan EMIs with full amortization schedules and prepayment, \
                  fixed and recurring deposit maturity, SIP wealth projection with \
                  annual step-up, FOIR-based loan eligibility, and CAGR."
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
    /// Calculate the fixed monthly installment for a loan
    Emi(EmiArgs),
    /// Generate a month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Check maximum loan eligibility from income and FOIR
    Eligibility(EligibilityArgs),
    /// Fixed deposit maturity with compound interest
    Fd(FdArgs),
    /// Recurring deposit maturity from monthly deposits
    Rd(RdArgs),
    /// SIP wealth projection with optional annual step-up
    Sip(SipArgs),
    /// Compound annual growth rate between two values
    Cagr(CagrArgs),
    /// List all available calculators
    Calculators,
    /// Show a calculator's input schema
    Describe(DescribeArgs),
    /// Summarise a saved calculation record
    Record(RecordArgs),
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
        Commands::Emi(args) => commands::loans::run_emi(args),
        Commands::Schedule(args) => commands::loans::run_schedule(args),
        Commands::Eligibility(args) => commands::loans::run_eligibility(args),
        Commands::Fd(args) => commands::deposits::run_fd(args),
        Commands::Rd(args) => commands::deposits::run_rd(args),
        Commands::Sip(args) => commands::investments::run_sip(args),
        Commands::Cagr(args) => commands::investments::run_cagr(args),
        Commands::Calculators => commands::registry::run_calculators(),
        Commands::Describe(args) => commands::registry::run_describe(args),
        Commands::Record(args) => commands::record::run_record(args),
        Commands::Version => {
            println!("pfc {}", env!("CARGO_PKG_VERSION"));
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
