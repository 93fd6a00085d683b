//! Shared annuity and compounding math.
//!
//! Everything here works on periodic (usually monthly) fractional rates.
//! Callers convert from annual percentage inputs via [`monthly_rate`].

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::error::FinCalcError;
use crate::types::{Money, Rate, Years};
use crate::FinCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT_TO_MONTHLY: Decimal = dec!(1200);

/// Monthly fractional rate from an annual percentage (8.5 -> 0.0070833...).
pub fn monthly_rate(annual_percent: Rate) -> Rate {
    annual_percent / PERCENT_TO_MONTHLY
}

/// Tenure in months, fractional values preserved (0.5y -> 6, 0.4y -> 4.8).
pub fn total_months(tenure_years: Years) -> Decimal {
    tenure_years * MONTHS_PER_YEAR
}

/// Whole months covered by a tenure. Truncates, never rounds: a 0.4-year
/// loan runs for 4 monthly periods.
pub fn whole_months(tenure_years: Years) -> u32 {
    total_months(tenure_years).floor().to_u32().unwrap_or(0)
}

/// Compute (1 + r)^n for integer n via iterative multiplication
/// (avoids Decimal::powd drift).
pub fn compound_factor(periodic_rate: Rate, periods: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + periodic_rate;
    for _ in 0..periods {
        result *= factor;
    }
    result
}

/// Compute (1 + r)^n for possibly fractional n.
pub fn growth_factor(periodic_rate: Rate, periods: Decimal) -> Decimal {
    if periods.fract().is_zero() && periods >= Decimal::ZERO {
        compound_factor(periodic_rate, periods.to_u32().unwrap_or(0))
    } else {
        (Decimal::ONE + periodic_rate).powd(periods)
    }
}

/// Fixed periodic payment fully amortizing `principal` over `periods`
/// at `periodic_rate`: P * r * (1+r)^n / ((1+r)^n - 1).
///
/// Zero-rate loans amortize straight-line: P / n, exact.
pub fn annuity_payment(
    principal: Money,
    periodic_rate: Rate,
    periods: Decimal,
) -> FinCalcResult<Money> {
    if periods <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "periods".into(),
            reason: "number of payment periods must be greater than zero".into(),
        });
    }

    if periodic_rate.is_zero() {
        return Ok(principal / periods);
    }

    let factor = growth_factor(periodic_rate, periods);
    Ok(principal * periodic_rate * factor / (factor - Decimal::ONE))
}

/// Principal supported by a fixed periodic payment, the inverse of
/// [`annuity_payment`]: PMT * ((1+r)^n - 1) / (r * (1+r)^n).
pub fn annuity_principal(
    payment: Money,
    periodic_rate: Rate,
    periods: Decimal,
) -> FinCalcResult<Money> {
    if periods <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "periods".into(),
            reason: "number of payment periods must be greater than zero".into(),
        });
    }

    if periodic_rate.is_zero() {
        return Ok(payment * periods);
    }

    let factor = growth_factor(periodic_rate, periods);
    Ok(payment * (factor - Decimal::ONE) / (periodic_rate * factor))
}
