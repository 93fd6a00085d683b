//! Fixed deposit maturity under periodic compounding.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::time_value;
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Rate, Years};
use crate::FinCalcResult;

/// Compounding frequency. An exhaustive enum: an unknown frequency is a
/// deserialization error, not a silent lookup miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compounding {
    Monthly,
    #[default]
    Quarterly,
    HalfYearly,
    Annual,
}

impl Compounding {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Compounding::Monthly => 12,
            Compounding::Quarterly => 4,
            Compounding::HalfYearly => 2,
            Compounding::Annual => 1,
        }
    }
}

impl std::str::FromStr for Compounding {
    type Err = FinCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Compounding::Monthly),
            "quarterly" => Ok(Compounding::Quarterly),
            "half-yearly" => Ok(Compounding::HalfYearly),
            "annual" => Ok(Compounding::Annual),
            other => Err(FinCalcError::InvalidInput {
                field: "compounding".into(),
                reason: format!(
                    "unknown compounding '{other}' (expected monthly, quarterly, half-yearly or annual)"
                ),
            }),
        }
    }
}

/// Input parameters for a fixed deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdInput {
    /// Deposit amount.
    pub principal: Money,
    /// Annual interest rate in percent.
    pub annual_rate: Rate,
    /// Deposit tenure in years. Fractional tenures are allowed.
    pub tenure_years: Years,
    #[serde(default)]
    pub compounding: Compounding,
}

/// Fixed deposit result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FdOutput {
    pub maturity_amount: Money,
    pub interest_earned: Money,
    pub total_investment: Money,
}

/// Compute the maturity value of a fixed deposit:
/// principal * (1 + rate/n)^(n*t).
pub fn compute_fd(input: &FdInput) -> FinCalcResult<ComputationOutput<FdOutput>> {
    let start = Instant::now();

    if input.principal <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "principal".into(),
            reason: "deposit amount must be greater than zero".into(),
        });
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "annual_rate".into(),
            reason: "interest rate cannot be negative".into(),
        });
    }
    if input.tenure_years <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "tenure_years".into(),
            reason: "tenure must be greater than zero".into(),
        });
    }

    let n = Decimal::from(input.compounding.periods_per_year());
    let periodic_rate = input.annual_rate / dec!(100) / n;
    let periods = n * input.tenure_years;

    let maturity = input.principal * time_value::growth_factor(periodic_rate, periods);
    let result = FdOutput {
        maturity_amount: round_money(maturity),
        interest_earned: round_money(maturity - input.principal),
        total_investment: input.principal,
    };

    Ok(with_metadata(
        "Compound interest at the selected frequency",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    ))
}
