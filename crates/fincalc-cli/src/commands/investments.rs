use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::investments::cagr::{self, CagrInput};
use fincalc_core::investments::sip::{self, SipInput};
use fincalc_core::record::CalculationRecord;

use crate::input;

use super::{decimal_map, parse_currency, write_record};

/// Arguments for SIP wealth projection
#[derive(Args)]
pub struct SipArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly investment amount
    #[arg(long)]
    pub monthly: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub tenure: Option<Decimal>,

    /// Annual step-up in percent
    #[arg(long, default_value = "0")]
    pub step_up: Decimal,

    /// Record/display currency (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// Write the wrapped calculation record to this JSON file
    #[arg(long)]
    pub record: Option<String>,
}

/// Arguments for CAGR calculation
#[derive(Args)]
pub struct CagrArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,

    /// Value at the start of the period
    #[arg(long = "initial")]
    pub initial_value: Option<Decimal>,

    /// Value at the end of the period
    #[arg(long = "final")]
    pub final_value: Option<Decimal>,

    /// Period length in years
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Record/display currency (INR, USD, EUR, GBP)
    #[arg(long, default_value = "INR")]
    pub currency: String,

    /// Write the wrapped calculation record to this JSON file
    #[arg(long)]
    pub record: Option<String>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let (Some(monthly), Some(rate), Some(tenure)) = (args.monthly, args.rate, args.tenure)
    {
        SipInput {
            monthly_investment: monthly,
            expected_return: rate,
            tenure_years: tenure,
            step_up_percent: args.step_up,
        }
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--monthly, --rate and --tenure (or --input <file.json>) required".into());
    };

    let result = sip::compute_sip(&sip_input)?;

    if let Some(ref path) = args.record {
        let record = CalculationRecord::sip(
            decimal_map(&[
                ("monthly_investment", sip_input.monthly_investment),
                ("expected_return", sip_input.expected_return),
                ("tenure_years", sip_input.tenure_years),
                ("step_up_percent", sip_input.step_up_percent),
            ]),
            decimal_map(&[
                ("future_value", result.result.future_value),
                ("total_investment", result.result.total_investment),
                ("wealth_gain", result.result.wealth_gain),
            ]),
            parse_currency(&args.currency)?,
        )?;
        write_record(&record, path)?;
    }

    Ok(serde_json::to_value(result)?)
}

pub fn run_cagr(args: CagrArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cagr_input: CagrInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let (Some(initial), Some(final_value), Some(years)) =
        (args.initial_value, args.final_value, args.years)
    {
        CagrInput {
            initial_value: initial,
            final_value,
            years,
        }
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--initial, --final and --years (or --input <file.json>) required".into());
    };

    let result = cagr::compute_cagr(&cagr_input)?;

    if let Some(ref path) = args.record {
        let record = CalculationRecord::cagr(
            decimal_map(&[
                ("initial_value", cagr_input.initial_value),
                ("final_value", cagr_input.final_value),
                ("years", cagr_input.years),
            ]),
            decimal_map(&[
                ("cagr", result.result.cagr),
                ("absolute_growth", result.result.absolute_growth),
                ("growth_multiple", result.result.growth_multiple),
            ]),
            parse_currency(&args.currency)?,
        )?;
        write_record(&record, path)?;
    }

    Ok(serde_json::to_value(result)?)
}
