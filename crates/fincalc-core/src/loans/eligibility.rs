//! Loan eligibility under a FOIR cap.
//!
//! FOIR (Fixed Obligation to Income Ratio) caps the fraction of monthly
//! income committable to debt service. The surplus after existing EMIs is
//! the affordable installment; inverting the annuity formula turns that
//! into a maximum principal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::time_value;
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Rate, Years};
use crate::FinCalcResult;

fn default_foir() -> Decimal {
    dec!(40)
}

/// Input parameters for a loan eligibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityInput {
    /// Net monthly income.
    pub monthly_income: Money,
    /// Total EMIs already being serviced.
    #[serde(default)]
    pub existing_emi: Money,
    /// FOIR in percent. Lenders commonly cap at 40.
    #[serde(default = "default_foir")]
    pub foir_percent: Rate,
    /// Annual interest rate in percent on the prospective loan.
    pub annual_rate: Rate,
    /// Prospective loan tenure in years.
    pub tenure_years: Years,
}

/// Eligibility result. Both fields are zero when existing obligations
/// already exhaust the FOIR cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityOutput {
    pub max_emi: Money,
    pub max_loan_amount: Money,
}

/// Compute the maximum affordable EMI and the loan principal it supports.
pub fn compute_eligibility(
    input: &EligibilityInput,
) -> FinCalcResult<ComputationOutput<EligibilityOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.monthly_income <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "monthly_income".into(),
            reason: "monthly income must be greater than zero".into(),
        });
    }
    if input.existing_emi < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "existing_emi".into(),
            reason: "existing EMI cannot be negative".into(),
        });
    }
    if input.foir_percent <= Decimal::ZERO || input.foir_percent > dec!(100) {
        return Err(FinCalcError::InvalidInput {
            field: "foir_percent".into(),
            reason: "FOIR must be in (0, 100]".into(),
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

    let max_emi = input.monthly_income * input.foir_percent / dec!(100) - input.existing_emi;

    let result = if max_emi <= Decimal::ZERO {
        warnings.push("existing obligations exhaust the FOIR cap; eligibility is zero".to_string());
        EligibilityOutput {
            max_emi: Decimal::ZERO,
            max_loan_amount: Decimal::ZERO,
        }
    } else {
        let months = time_value::total_months(input.tenure_years);
        let rate = time_value::monthly_rate(input.annual_rate);
        let max_loan = time_value::annuity_principal(max_emi, rate, months)?;
        EligibilityOutput {
            max_emi: round_money(max_emi),
            max_loan_amount: round_money(max_loan),
        }
    };

    Ok(with_metadata(
        "Annuity inversion of the FOIR-capped installment",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salaried_input() -> EligibilityInput {
        EligibilityInput {
            monthly_income: dec!(50000),
            existing_emi: Decimal::ZERO,
            foir_percent: dec!(40),
            annual_rate: dec!(8.5),
            tenure_years: dec!(20),
        }
    }

    #[test]
    fn foir_cap_sets_max_emi() {
        let out = compute_eligibility(&salaried_input()).unwrap().result;
        assert_eq!(out.max_emi, dec!(20000));
        assert!(out.max_loan_amount > Decimal::ZERO);
    }

    #[test]
    fn exhausted_capacity_returns_zero_with_warning() {
        let mut input = salaried_input();
        input.existing_emi = dec!(25000);
        let out = compute_eligibility(&input).unwrap();
        assert_eq!(out.result.max_emi, Decimal::ZERO);
        assert_eq!(out.result.max_loan_amount, Decimal::ZERO);
        assert_eq!(out.warnings.len(), 1);
    }

    #[test]
    fn zero_rate_inverts_straight_line() {
        let mut input = salaried_input();
        input.annual_rate = Decimal::ZERO;
        input.tenure_years = dec!(10);
        let out = compute_eligibility(&input).unwrap().result;
        // 20000/month for 120 months interest-free
        assert_eq!(out.max_loan_amount, dec!(2400000));
    }

    #[test]
    fn rejects_zero_income() {
        let mut input = salaried_input();
        input.monthly_income = Decimal::ZERO;
        assert!(compute_eligibility(&input).is_err());
    }

    #[test]
    fn rejects_foir_above_100() {
        let mut input = salaried_input();
        input.foir_percent = dec!(140);
        assert!(compute_eligibility(&input).is_err());
    }
}
