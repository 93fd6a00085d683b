//! Recurring deposit maturity.
//!
//! Future value of an ordinary annuity: the first deposit compounds for the
//! full tenure in months, the last for exactly one period. Computed with an
//! exact multiply-accumulate recurrence instead of a power per deposit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::time_value;
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Rate, Years};
use crate::FinCalcResult;

/// Input parameters for a recurring deposit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdInput {
    /// Amount deposited every month.
    pub monthly_deposit: Money,
    /// Annual interest rate in percent.
    pub annual_rate: Rate,
    /// Deposit tenure in years.
    pub tenure_years: Years,
}

/// Recurring deposit result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdOutput {
    pub maturity_amount: Money,
    pub interest_earned: Money,
    pub total_investment: Money,
}

/// Compute the maturity value of a recurring deposit.
pub fn compute_rd(input: &RdInput) -> FinCalcResult<ComputationOutput<RdOutput>> {
    let start = Instant::now();

    if input.monthly_deposit <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "monthly_deposit".into(),
            reason: "monthly deposit must be greater than zero".into(),
        });
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "annual_rate".into(),
            reason: "interest rate cannot be negative".into(),
        });
    }
    let months = time_value::whole_months(input.tenure_years);
    if months == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "tenure_years".into(),
            reason: "tenure must cover at least one month".into(),
        });
    }

    let growth = Decimal::ONE + time_value::monthly_rate(input.annual_rate);

    // fv = sum over deposits of deposit * (1+r)^(months - k), k = 0-based
    // deposit index; equivalently (fv + deposit) * (1+r) applied per month.
    let mut maturity = Decimal::ZERO;
    for _ in 0..months {
        maturity = (maturity + input.monthly_deposit) * growth;
    }

    let total_investment = input.monthly_deposit * Decimal::from(months);
    let result = RdOutput {
        maturity_amount: round_money(maturity),
        interest_earned: round_money(maturity - total_investment),
        total_investment,
    };

    Ok(with_metadata(
        "Future value of an ordinary annuity",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn single_month_compounds_once() {
        let input = RdInput {
            monthly_deposit: dec!(12000),
            annual_rate: dec!(12),
            tenure_years: dec!(0.1),
        };
        // 0.1y -> 1 month; 12000 * 1.01 = 12120
        let out = compute_rd(&input).unwrap().result;
        assert_eq!(out.maturity_amount, dec!(12120.00));
        assert_eq!(out.total_investment, dec!(12000));
    }

    #[test]
    fn maturity_exceeds_deposits_for_positive_rate() {
        let input = RdInput {
            monthly_deposit: dec!(5000),
            annual_rate: dec!(6.5),
            tenure_years: dec!(3),
        };
        let out = compute_rd(&input).unwrap().result;
        assert_eq!(out.total_investment, dec!(180000));
        assert!(out.maturity_amount > out.total_investment);
        assert_eq!(
            out.interest_earned,
            out.maturity_amount - out.total_investment
        );
    }

    #[test]
    fn zero_rate_returns_plain_deposits() {
        let input = RdInput {
            monthly_deposit: dec!(2500),
            annual_rate: Decimal::ZERO,
            tenure_years: dec!(2),
        };
        let out = compute_rd(&input).unwrap().result;
        assert_eq!(out.maturity_amount, dec!(60000.00));
        assert_eq!(out.interest_earned, dec!(0.00));
    }

    #[test]
    fn sub_month_tenure_rejected() {
        let input = RdInput {
            monthly_deposit: dec!(1000),
            annual_rate: dec!(6),
            tenure_years: dec!(0.05),
        };
        assert!(compute_rd(&input).is_err());
    }
}
