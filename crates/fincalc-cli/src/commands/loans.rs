use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::loans::eligibility::{self, EligibilityInput};
use fincalc_core::loans::emi::{self, EmiInput, PrepaymentType, ScheduleInput};
use fincalc_core::record::CalculationRecord;

use crate::input;

use super::{decimal_map, parse_currency, write_record};

/// Arguments for EMI calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan tenure in years
    #[arg(long)]
    pub tenure: Option<Decimal>,

    /// Record/display currency (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// Write the wrapped calculation record to this JSON file
    #[arg(long)]
    pub record: Option<String>,
}

/// Arguments for amortization schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan tenure in years
    #[arg(long)]
    pub tenure: Option<Decimal>,

    /// One-time prepayment applied in month 1
    #[arg(long, default_value = "0")]
    pub prepayment: Decimal,
}

/// Arguments for loan eligibility check
#[derive(Args)]
pub struct EligibilityArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Net monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Total existing EMIs
    #[arg(long, default_value = "0")]
    pub existing_emi: Decimal,

    /// FOIR in percent
    #[arg(long, default_value = "40")]
    pub foir: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan tenure in years
    #[arg(long)]
    pub tenure: Option<Decimal>,

    /// Record/display currency (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// Write the wrapped calculation record to this JSON file
    #[arg(long)]
    pub record: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input: EmiInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let (Some(principal), Some(rate), Some(tenure)) =
        (args.principal, args.rate, args.tenure)
    {
        EmiInput {
            principal,
            annual_rate: rate,
            tenure_years: tenure,
        }
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--principal, --rate and --tenure (or --input <file.json>) required".into());
    };

    let result = emi::compute_emi(&emi_input)?;

    if let Some(ref path) = args.record {
        let record = CalculationRecord::emi(
            decimal_map(&[
                ("principal", emi_input.principal),
                ("annual_rate", emi_input.annual_rate),
                ("tenure_years", emi_input.tenure_years),
            ]),
            decimal_map(&[("emi", result.result.emi)]),
            parse_currency(&args.currency)?,
        )?;
        write_record(&record, path)?;
    }

    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let (Some(principal), Some(rate), Some(tenure)) =
        (args.principal, args.rate, args.tenure)
    {
        ScheduleInput {
            principal,
            annual_rate: rate,
            tenure_years: tenure,
            prepayment: args.prepayment,
            prepayment_type: PrepaymentType::OneTime,
        }
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--principal, --rate and --tenure (or --input <file.json>) required".into());
    };

    let result = emi::generate_schedule(&schedule_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_eligibility(args: EligibilityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let el_input: EligibilityInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let (Some(income), Some(rate), Some(tenure)) = (args.income, args.rate, args.tenure)
    {
        EligibilityInput {
            monthly_income: income,
            existing_emi: args.existing_emi,
            foir_percent: args.foir,
            annual_rate: rate,
            tenure_years: tenure,
        }
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--income, --rate and --tenure (or --input <file.json>) required".into());
    };

    let result = eligibility::compute_eligibility(&el_input)?;

    if let Some(ref path) = args.record {
        let record = CalculationRecord::loan_eligibility(
            decimal_map(&[
                ("monthly_income", el_input.monthly_income),
                ("existing_emi", el_input.existing_emi),
                ("foir_percent", el_input.foir_percent),
                ("annual_rate", el_input.annual_rate),
                ("tenure_years", el_input.tenure_years),
            ]),
            decimal_map(&[
                ("max_emi", result.result.max_emi),
                ("max_loan_amount", result.result.max_loan_amount),
            ]),
            parse_currency(&args.currency)?,
        )?;
        write_record(&record, path)?;
    }

    Ok(serde_json::to_value(result)?)
}
