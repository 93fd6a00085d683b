//! SIP wealth projection with optional annual step-up.
//!
//! Each monthly contribution compounds until the end of the horizon; the
//! final contribution earns nothing. A step-up multiplies the running
//! contribution by (1 + step/100) at every 12-month boundary from year 2
//! onward, so increases compound across years.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::time_value;
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Rate, Years};
use crate::FinCalcResult;

/// Input parameters for a SIP projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    /// First-year monthly contribution.
    pub monthly_investment: Money,
    /// Expected annual return in percent.
    pub expected_return: Rate,
    /// Investment horizon in years.
    pub tenure_years: Years,
    /// Annual step-up in percent. Zero means a flat SIP.
    #[serde(default)]
    pub step_up_percent: Rate,
}

/// SIP projection result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipOutput {
    pub future_value: Money,
    pub total_investment: Money,
    pub wealth_gain: Money,
}

/// Project the future value of a systematic investment plan.
pub fn compute_sip(input: &SipInput) -> FinCalcResult<ComputationOutput<SipOutput>> {
    let start = Instant::now();

    if input.monthly_investment <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "monthly_investment".into(),
            reason: "monthly investment must be greater than zero".into(),
        });
    }
    if input.expected_return < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "expected_return".into(),
            reason: "expected return cannot be negative".into(),
        });
    }
    if input.step_up_percent < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "step_up_percent".into(),
            reason: "step-up cannot be negative".into(),
        });
    }
    let months = time_value::whole_months(input.tenure_years);
    if months == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "tenure_years".into(),
            reason: "tenure must cover at least one month".into(),
        });
    }

    let growth = Decimal::ONE + time_value::monthly_rate(input.expected_return);
    let step_factor = Decimal::ONE + input.step_up_percent / dec!(100);

    // Contribution made in month m compounds for (months - m) periods;
    // the recurrence fv = fv * (1+r) + c realises exactly that.
    let mut future_value = Decimal::ZERO;
    let mut total_investment = Decimal::ZERO;
    let mut contribution = input.monthly_investment;

    for month in 1..=months {
        if input.step_up_percent > Decimal::ZERO && month > 12 && (month - 1) % 12 == 0 {
            contribution *= step_factor;
        }
        future_value = future_value * growth + contribution;
        total_investment += contribution;
    }

    let result = SipOutput {
        future_value: round_money(future_value),
        total_investment: round_money(total_investment),
        wealth_gain: round_money(future_value - total_investment),
    };

    Ok(with_metadata(
        "Annuity accumulation with annual multiplicative step-up",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    ))
}
