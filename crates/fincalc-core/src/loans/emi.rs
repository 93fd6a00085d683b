//! EMI calculation and month-by-month amortization.
//!
//! The schedule is a simulation, not a closed form: each month accrues
//! interest on the outstanding balance, the fixed EMI splits into interest
//! and principal, and an optional lump-sum prepayment is absorbed as extra
//! principal in month 1. Early payoff shortens the schedule.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::time_value;
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Rate, Years};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Input parameters for an EMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiInput {
    /// Loan principal.
    pub principal: Money,
    /// Annual interest rate in percent (8.5 = 8.5%).
    pub annual_rate: Rate,
    /// Loan tenure in years. Fractional tenures are allowed.
    pub tenure_years: Years,
}

/// EMI calculation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmiOutput {
    /// Fixed monthly installment.
    pub emi: Money,
}

/// How a prepayment is applied. Only the one-time month-1 lump sum is
/// modelled; `Recurring` is accepted for forward compatibility and warned
/// about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrepaymentType {
    #[default]
    OneTime,
    Recurring,
}

/// Input parameters for an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub principal: Money,
    pub annual_rate: Rate,
    pub tenure_years: Years,
    /// Lump-sum prepayment applied as extra principal in month 1.
    #[serde(default)]
    pub prepayment: Money,
    #[serde(default)]
    pub prepayment_type: PrepaymentType,
}

/// One month of the loan's life.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub opening_balance: Money,
    pub emi_payment: Money,
    pub interest_payment: Money,
    pub principal_payment: Money,
    pub closing_balance: Money,
}

/// Full amortization result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    pub schedule: Vec<AmortizationRow>,
    pub total_interest: Money,
    pub total_payment: Money,
    /// Number of months actually paid; less than the contractual tenure
    /// when a prepayment accelerates payoff.
    pub actual_tenure: u32,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_loan(principal: Money, annual_rate: Rate, tenure_years: Years) -> FinCalcResult<()> {
    if principal <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "principal".into(),
            reason: "loan principal must be greater than zero".into(),
        });
    }
    if annual_rate < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "annual_rate".into(),
            reason: "interest rate cannot be negative".into(),
        });
    }
    if tenure_years <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "tenure_years".into(),
            reason: "tenure must be greater than zero".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// EMI as quoted: the zero-rate straight-line case stays exact, the
/// annuity case rounds to the paise like any published installment.
fn emi_value(principal: Money, annual_rate: Rate, tenure_years: Years) -> FinCalcResult<Money> {
    let months = time_value::total_months(tenure_years);
    let rate = time_value::monthly_rate(annual_rate);
    let payment = time_value::annuity_payment(principal, rate, months)?;
    if rate.is_zero() {
        Ok(payment)
    } else {
        Ok(round_money(payment))
    }
}

/// Compute the fixed Equated Monthly Installment for a loan.
pub fn compute_emi(input: &EmiInput) -> FinCalcResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    validate_loan(input.principal, input.annual_rate, input.tenure_years)?;

    let emi = emi_value(input.principal, input.annual_rate, input.tenure_years)?;

    Ok(with_metadata(
        "Equated monthly installment (fixed-payment annuity)",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        EmiOutput { emi },
    ))
}

/// Simulate a loan month by month and produce its amortization schedule.
pub fn generate_schedule(
    input: &ScheduleInput,
) -> FinCalcResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_loan(input.principal, input.annual_rate, input.tenure_years)?;
    if input.prepayment < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "prepayment".into(),
            reason: "prepayment cannot be negative".into(),
        });
    }
    if input.prepayment >= input.principal {
        return Err(FinCalcError::InvalidInput {
            field: "prepayment".into(),
            reason: "prepayment must be less than the loan principal".into(),
        });
    }
    if input.prepayment_type == PrepaymentType::Recurring && input.prepayment > Decimal::ZERO {
        warnings.push(
            "recurring prepayments are not modelled; the amount is applied once in month 1"
                .to_string(),
        );
    }

    let monthly_rate = time_value::monthly_rate(input.annual_rate);
    let months = time_value::whole_months(input.tenure_years);
    let emi = emi_value(input.principal, input.annual_rate, input.tenure_years)?;

    let mut schedule = Vec::with_capacity(months as usize);
    let mut balance = input.principal;
    let mut total_interest = Decimal::ZERO;
    let mut total_principal = Decimal::ZERO;

    let mut month = 1u32;
    while month <= months && balance > Decimal::ZERO {
        let interest = balance * monthly_rate;
        let mut principal_part = emi - interest;

        // One-time lump sum lands in the first period
        if month == 1 && input.prepayment > Decimal::ZERO {
            principal_part += input.prepayment;
        }

        // Final-month adjustment: never pay past zero
        if principal_part > balance {
            principal_part = balance;
        }

        let opening = balance;
        balance -= principal_part;
        total_interest += interest;
        total_principal += principal_part;

        let emi_paid = if month == 1 && input.prepayment > Decimal::ZERO {
            emi + input.prepayment
        } else {
            emi
        };

        schedule.push(AmortizationRow {
            month,
            opening_balance: round_money(opening),
            emi_payment: emi_paid,
            interest_payment: round_money(interest),
            principal_payment: round_money(principal_part),
            closing_balance: round_money(balance),
        });

        month += 1;
    }

    let actual_tenure = schedule.len() as u32;
    let output = ScheduleOutput {
        schedule,
        total_interest: round_money(total_interest),
        total_payment: round_money(total_principal + total_interest),
        actual_tenure,
    };

    Ok(with_metadata(
        "Month-by-month amortization at fixed EMI",
        input,
        warnings,
        start.elapsed().as_micros() as u64,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_rate_emi_is_exact_straight_line() {
        let input = EmiInput {
            principal: dec!(120000),
            annual_rate: Decimal::ZERO,
            tenure_years: dec!(10),
        };
        let out = compute_emi(&input).unwrap();
        assert_eq!(out.result.emi, dec!(120000) / dec!(120));
    }

    #[test]
    fn emi_reference_value() {
        let input = EmiInput {
            principal: dec!(1000000),
            annual_rate: dec!(8.5),
            tenure_years: dec!(10),
        };
        let out = compute_emi(&input).unwrap();
        assert_eq!(out.result.emi, dec!(12398.57));
    }

    #[test]
    fn rejects_nonpositive_principal_and_tenure() {
        let bad = EmiInput {
            principal: Decimal::ZERO,
            annual_rate: dec!(8.5),
            tenure_years: dec!(10),
        };
        assert!(matches!(
            compute_emi(&bad),
            Err(FinCalcError::InvalidInput { .. })
        ));

        let bad = EmiInput {
            principal: dec!(100000),
            annual_rate: dec!(8.5),
            tenure_years: Decimal::ZERO,
        };
        assert!(compute_emi(&bad).is_err());
    }

    #[test]
    fn rejects_negative_rate() {
        let bad = EmiInput {
            principal: dec!(100000),
            annual_rate: dec!(-1),
            tenure_years: dec!(5),
        };
        assert!(compute_emi(&bad).is_err());
    }

    #[test]
    fn schedule_pays_down_to_zero() {
        let input = ScheduleInput {
            principal: dec!(500000),
            annual_rate: dec!(9),
            tenure_years: dec!(5),
            prepayment: Decimal::ZERO,
            prepayment_type: PrepaymentType::OneTime,
        };
        let out = generate_schedule(&input).unwrap().result;
        assert!(out.actual_tenure <= 60);
        let last = out.schedule.last().unwrap();
        assert_eq!(last.closing_balance, dec!(0.00));
    }

    #[test]
    fn opening_balance_chains_to_prior_closing() {
        let input = ScheduleInput {
            principal: dec!(250000),
            annual_rate: dec!(7.25),
            tenure_years: dec!(3),
            prepayment: Decimal::ZERO,
            prepayment_type: PrepaymentType::OneTime,
        };
        let out = generate_schedule(&input).unwrap().result;
        for pair in out.schedule.windows(2) {
            assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
        }
    }

    #[test]
    fn prepayment_shows_in_first_row_only() {
        let input = ScheduleInput {
            principal: dec!(1000000),
            annual_rate: dec!(8.5),
            tenure_years: dec!(10),
            prepayment: dec!(100000),
            prepayment_type: PrepaymentType::OneTime,
        };
        let out = generate_schedule(&input).unwrap().result;
        let first = &out.schedule[0];
        let second = &out.schedule[1];
        assert_eq!(first.emi_payment - second.emi_payment, dec!(100000));
    }

    #[test]
    fn recurring_selection_warns_but_computes() {
        let input = ScheduleInput {
            principal: dec!(1000000),
            annual_rate: dec!(8.5),
            tenure_years: dec!(10),
            prepayment: dec!(50000),
            prepayment_type: PrepaymentType::Recurring,
        };
        let out = generate_schedule(&input).unwrap();
        assert_eq!(out.warnings.len(), 1);
        assert!(out.result.actual_tenure < 120);
    }

    #[test]
    fn prepayment_at_or_above_principal_rejected() {
        let input = ScheduleInput {
            principal: dec!(100000),
            annual_rate: dec!(8.5),
            tenure_years: dec!(10),
            prepayment: dec!(100000),
            prepayment_type: PrepaymentType::OneTime,
        };
        assert!(generate_schedule(&input).is_err());
    }

    #[test]
    fn fractional_tenure_truncates_schedule() {
        let input = ScheduleInput {
            principal: dec!(10000),
            annual_rate: dec!(12),
            tenure_years: dec!(0.4),
            prepayment: Decimal::ZERO,
            prepayment_type: PrepaymentType::OneTime,
        };
        let out = generate_schedule(&input).unwrap().result;
        // 0.4y = 4.8 months -> 4 scheduled periods, balance left outstanding
        assert_eq!(out.actual_tenure, 4);
        assert!(out.schedule.last().unwrap().closing_balance > Decimal::ZERO);
    }
}
