//! Compound Annual Growth Rate.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::types::{round_money, with_metadata, ComputationOutput, Money, Years};
use crate::FinCalcResult;

/// Input parameters for a CAGR calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CagrInput {
    /// Value at the start of the period.
    pub initial_value: Money,
    /// Value at the end of the period.
    pub final_value: Money,
    /// Length of the period in years. Fractional periods are allowed.
    pub years: Years,
}

/// CAGR result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CagrOutput {
    /// Annualised growth rate in percent.
    pub cagr: Decimal,
    /// final - initial.
    pub absolute_growth: Money,
    /// final / initial, to 4 decimal places.
    pub growth_multiple: Decimal,
}

/// Compute the constant annual rate that grows `initial_value` to
/// `final_value` over `years`: ((final/initial)^(1/years) - 1) * 100.
pub fn compute_cagr(input: &CagrInput) -> FinCalcResult<ComputationOutput<CagrOutput>> {
    let start = Instant::now();

    if input.initial_value <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "initial_value".into(),
            reason: "initial value must be greater than zero".into(),
        });
    }
    if input.final_value < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "final_value".into(),
            reason: "final value cannot be negative".into(),
        });
    }
    if input.years <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "years".into(),
            reason: "period must be greater than zero".into(),
        });
    }

    let multiple = input.final_value / input.initial_value;
    // A position that went to zero has lost everything, annualised or not.
    let cagr = if multiple.is_zero() {
        dec!(-100)
    } else {
        (multiple.powd(Decimal::ONE / input.years) - Decimal::ONE) * dec!(100)
    };

    let result = CagrOutput {
        cagr: cagr.round_dp(2),
        absolute_growth: round_money(input.final_value - input.initial_value),
        growth_multiple: multiple.round_dp(4),
    };

    Ok(with_metadata(
        "Compound annual growth rate",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_over_five_years() {
        let input = CagrInput {
            initial_value: dec!(100000),
            final_value: dec!(200000),
            years: dec!(5),
        };
        let out = compute_cagr(&input).unwrap().result;
        assert_eq!(out.cagr, dec!(14.87));
        assert_eq!(out.absolute_growth, dec!(100000.00));
        assert_eq!(out.growth_multiple, dec!(2.0000));
    }

    #[test]
    fn flat_value_is_zero_growth() {
        let input = CagrInput {
            initial_value: dec!(50000),
            final_value: dec!(50000),
            years: dec!(3),
        };
        let out = compute_cagr(&input).unwrap().result;
        assert_eq!(out.cagr, dec!(0.00));
    }

    #[test]
    fn total_loss_is_minus_hundred() {
        let input = CagrInput {
            initial_value: dec!(10000),
            final_value: Decimal::ZERO,
            years: dec!(4),
        };
        let out = compute_cagr(&input).unwrap().result;
        assert_eq!(out.cagr, dec!(-100));
    }

    #[test]
    fn rejects_zero_initial_value() {
        let input = CagrInput {
            initial_value: Decimal::ZERO,
            final_value: dec!(1000),
            years: dec!(5),
        };
        assert!(matches!(
            compute_cagr(&input),
            Err(FinCalcError::InvalidInput { .. })
        ));
    }

    #[test]
    fn rejects_zero_years() {
        let input = CagrInput {
            initial_value: dec!(1000),
            final_value: dec!(2000),
            years: Decimal::ZERO,
        };
        assert!(compute_cagr(&input).is_err());
    }
}
