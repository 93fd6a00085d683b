use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::deposits::fd::{self, Compounding, FdInput};
use fincalc_core::deposits::rd::{self, RdInput};
use fincalc_core::record::CalculationRecord;

use crate::input;

use super::{decimal_map, parse_currency, write_record};

/// Arguments for fixed deposit maturity
#[derive(Args)]
pub struct FdArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Deposit amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub tenure: Option<Decimal>,

    /// Compounding frequency: monthly, quarterly, half-yearly, annual
    #[arg(long, default_value = "quarterly")]
    pub compounding: Compounding,

    /// Record/display currency (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// Write the wrapped calculation record to this JSON file
    #[arg(long)]
    pub record: Option<String>,
}

/// Arguments for recurring deposit maturity
#[derive(Args)]
pub struct RdArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly deposit amount
    #[arg(long)]
    pub deposit: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Tenure in years
    #[arg(long)]
    pub tenure: Option<Decimal>,

    /// Record/display currency (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// Write the wrapped calculation record to this JSON file
    #[arg(long)]
    pub record: Option<String>,
}

pub fn run_fd(args: FdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fd_input: FdInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let (Some(principal), Some(rate), Some(tenure)) =
        (args.principal, args.rate, args.tenure)
    {
        FdInput {
            principal,
            annual_rate: rate,
            tenure_years: tenure,
            compounding: args.compounding,
        }
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--principal, --rate and --tenure (or --input <file.json>) required".into());
    };

    let result = fd::compute_fd(&fd_input)?;

    if let Some(ref path) = args.record {
        let record = CalculationRecord::fd(
            decimal_map(&[
                ("principal", fd_input.principal),
                ("annual_rate", fd_input.annual_rate),
                ("tenure_years", fd_input.tenure_years),
            ]),
            decimal_map(&[
                ("maturity_amount", result.result.maturity_amount),
                ("interest_earned", result.result.interest_earned),
                ("total_investment", result.result.total_investment),
            ]),
            parse_currency(&args.currency)?,
        )?;
        write_record(&record, path)?;
    }

    Ok(serde_json::to_value(result)?)
}

pub fn run_rd(args: RdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rd_input: RdInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let (Some(deposit), Some(rate), Some(tenure)) = (args.deposit, args.rate, args.tenure)
    {
        RdInput {
            monthly_deposit: deposit,
            annual_rate: rate,
            tenure_years: tenure,
        }
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--deposit, --rate and --tenure (or --input <file.json>) required".into());
    };

    let result = rd::compute_rd(&rd_input)?;

    if let Some(ref path) = args.record {
        let record = CalculationRecord::rd(
            decimal_map(&[
                ("monthly_deposit", rd_input.monthly_deposit),
                ("annual_rate", rd_input.annual_rate),
                ("tenure_years", rd_input.tenure_years),
            ]),
            decimal_map(&[
                ("maturity_amount", result.result.maturity_amount),
                ("interest_earned", result.result.interest_earned),
                ("total_investment", result.result.total_investment),
            ]),
            parse_currency(&args.currency)?,
        )?;
        write_record(&record, path)?;
    }

    Ok(serde_json::to_value(result)?)
}
