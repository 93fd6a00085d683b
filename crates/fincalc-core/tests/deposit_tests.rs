use fincalc_core::deposits::fd::{self, Compounding, FdInput};
use fincalc_core::deposits::rd::{self, RdInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Fixed deposit tests
// ===========================================================================

#[test]
fn test_fd_annual_one_year_is_simple_compound() {
    let input = FdInput {
        principal: dec!(250000),
        annual_rate: dec!(6.8),
        tenure_years: dec!(1),
        compounding: Compounding::Annual,
    };
    let out = fd::compute_fd(&input).unwrap().result;
    // p * (1 + r/100)
    assert_eq!(out.maturity_amount, dec!(267000.00));
    assert_eq!(out.interest_earned, dec!(17000.00));
}

#[test]
fn test_fd_five_year_quarterly_reference() {
    // Classic tax-saver FD: 1.5L at 7% for 5 years, quarterly compounding.
    // 150000 * (1 + 0.07/4)^20 = 212216.73
    let input = FdInput {
        principal: dec!(150000),
        annual_rate: dec!(7),
        tenure_years: dec!(5),
        compounding: Compounding::Quarterly,
    };
    let out = fd::compute_fd(&input).unwrap().result;
    assert!(
        (out.maturity_amount - dec!(212216.73)).abs() < dec!(0.05),
        "got {}",
        out.maturity_amount
    );
    assert_eq!(out.total_investment, dec!(150000));
}

#[test]
fn test_fd_more_frequent_compounding_earns_more() {
    let base = FdInput {
        principal: dec!(100000),
        annual_rate: dec!(7.5),
        tenure_years: dec!(4),
        compounding: Compounding::Annual,
    };
    let annual = fd::compute_fd(&base).unwrap().result.maturity_amount;
    let half_yearly = fd::compute_fd(&FdInput {
        compounding: Compounding::HalfYearly,
        ..base.clone()
    })
    .unwrap()
    .result
    .maturity_amount;
    let monthly = fd::compute_fd(&FdInput {
        compounding: Compounding::Monthly,
        ..base
    })
    .unwrap()
    .result
    .maturity_amount;
    assert!(annual < half_yearly);
    assert!(half_yearly < monthly);
}

#[test]
fn test_fd_compounding_parses_kebab_case_only() {
    assert!(serde_json::from_str::<Compounding>("\"half-yearly\"").is_ok());
    assert!(serde_json::from_str::<Compounding>("\"HalfYearly\"").is_err());
    assert!(serde_json::from_str::<Compounding>("\"daily\"").is_err());
}

#[test]
fn test_fd_rejects_invalid_inputs() {
    let mut input = FdInput {
        principal: dec!(-5),
        annual_rate: dec!(7),
        tenure_years: dec!(1),
        compounding: Compounding::Quarterly,
    };
    assert!(fd::compute_fd(&input).is_err());

    input.principal = dec!(100000);
    input.annual_rate = dec!(-0.5);
    assert!(fd::compute_fd(&input).is_err());

    input.annual_rate = dec!(7);
    input.tenure_years = Decimal::ZERO;
    assert!(fd::compute_fd(&input).is_err());
}

// ===========================================================================
// Recurring deposit tests
// ===========================================================================

#[test]
fn test_rd_one_year_reference() {
    // 5000/month at 12% for a year: 5000 * 1.01 * (1.01^12 - 1) / 0.01
    let input = RdInput {
        monthly_deposit: dec!(5000),
        annual_rate: dec!(12),
        tenure_years: dec!(1),
    };
    let out = rd::compute_rd(&input).unwrap().result;
    assert_eq!(out.maturity_amount, dec!(64046.64));
    assert_eq!(out.total_investment, dec!(60000));
    assert_eq!(out.interest_earned, dec!(4046.64));
}

#[test]
fn test_rd_first_deposit_compounds_longest() {
    // With one extra month, the new deposit joins at the end and every
    // earlier deposit earns one more period.
    let shorter = RdInput {
        monthly_deposit: dec!(2000),
        annual_rate: dec!(7.5),
        tenure_years: dec!(2),
    };
    let longer = RdInput {
        tenure_years: dec!(2.25),
        ..shorter.clone()
    };
    let a = rd::compute_rd(&shorter).unwrap().result;
    let b = rd::compute_rd(&longer).unwrap().result;
    assert_eq!(b.total_investment - a.total_investment, dec!(6000));
    assert!(b.interest_earned > a.interest_earned);
}

#[test]
fn test_rd_interest_identity() {
    let input = RdInput {
        monthly_deposit: dec!(7500),
        annual_rate: dec!(6.5),
        tenure_years: dec!(5),
    };
    let out = rd::compute_rd(&input).unwrap().result;
    assert_eq!(
        out.interest_earned,
        out.maturity_amount - out.total_investment
    );
    assert!(out.maturity_amount > out.total_investment);
}

#[test]
fn test_rd_rejects_zero_deposit() {
    let input = RdInput {
        monthly_deposit: Decimal::ZERO,
        annual_rate: dec!(6),
        tenure_years: dec!(1),
    };
    assert!(rd::compute_rd(&input).is_err());
}
