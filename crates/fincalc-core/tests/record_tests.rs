use std::collections::BTreeMap;

use fincalc_core::loans::emi::{self, EmiInput};
use fincalc_core::record::{CalculationRecord, CalculatorType};
use fincalc_core::registry;
use fincalc_core::types::Currency;
use fincalc_core::FinCalcError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn map(pairs: &[(&str, Decimal)]) -> BTreeMap<String, Decimal> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

// ===========================================================================
// CalculationRecord tests
// ===========================================================================

#[test]
fn test_record_round_trip_for_each_calculator_type() {
    let cases = [
        (CalculatorType::Emi, Currency::INR),
        (CalculatorType::Fd, Currency::USD),
        (CalculatorType::Rd, Currency::EUR),
        (CalculatorType::Sip, Currency::GBP),
        (CalculatorType::LoanEligibility, Currency::INR),
        (CalculatorType::Cagr, Currency::INR),
    ];
    for (calculator_type, currency) in cases {
        let record = CalculationRecord::new(
            calculator_type,
            map(&[("principal", dec!(100000)), ("annual_rate", dec!(7.5))]),
            map(&[("result", dec!(123.45))]),
            currency,
        )
        .unwrap();
        let json = record.to_json().unwrap();
        let restored = CalculationRecord::from_json(&json).unwrap();
        assert_eq!(record, restored);
    }
}

#[test]
fn test_record_wraps_a_real_calculation() {
    let input = EmiInput {
        principal: dec!(1000000),
        annual_rate: dec!(8.5),
        tenure_years: dec!(10),
    };
    let out = emi::compute_emi(&input).unwrap();

    let record = CalculationRecord::emi(
        map(&[
            ("principal", input.principal),
            ("annual_rate", input.annual_rate),
            ("tenure_years", input.tenure_years),
        ]),
        map(&[("emi", out.result.emi)]),
        Currency::INR,
    )
    .unwrap();

    let summary = record.summary();
    assert_eq!(summary.calculator_type, CalculatorType::Emi);
    assert_eq!(summary.currency, Currency::INR);
    assert_eq!(summary.input_count, 3);
    assert_eq!(summary.result_count, 1);
}

#[test]
fn test_record_requires_nonempty_maps() {
    let err = CalculationRecord::new(
        CalculatorType::Sip,
        BTreeMap::new(),
        map(&[("future_value", dec!(1))]),
        Currency::INR,
    );
    assert!(matches!(err, Err(FinCalcError::Validation(_))));

    let err = CalculationRecord::new(
        CalculatorType::Sip,
        map(&[("monthly_investment", dec!(1))]),
        BTreeMap::new(),
        Currency::INR,
    );
    assert!(matches!(err, Err(FinCalcError::Validation(_))));
}

#[test]
fn test_record_rejects_unknown_currency_on_the_wire() {
    let raw = r#"{
        "calculator_type": "fd",
        "inputs": {"principal": "100000"},
        "results": {"maturity_amount": "107100"},
        "currency": "JPY"
    }"#;
    assert!(CalculationRecord::from_json(raw).is_err());
}

// ===========================================================================
// Registry tests
// ===========================================================================

#[test]
fn test_registry_slugs_match_calculator_types() {
    for descriptor in registry::list_all() {
        let parsed: CalculatorType = descriptor.slug.parse().unwrap();
        assert_eq!(parsed.slug(), descriptor.slug);
    }
}

#[test]
fn test_registry_schema_names_deserialize_into_engine_inputs() {
    // A form built from the EMI descriptor produces exactly the JSON the
    // engine input expects.
    let descriptor = registry::describe("emi").unwrap();
    let mut form = serde_json::Map::new();
    for field in descriptor.inputs {
        if field.required {
            form.insert(field.name.to_string(), serde_json::Value::from("10"));
        }
    }
    let input: EmiInput = serde_json::from_value(serde_json::Value::Object(form)).unwrap();
    assert_eq!(input.principal, dec!(10));
    assert_eq!(input.tenure_years, dec!(10));
}

#[test]
fn test_registry_unknown_slug() {
    assert!(registry::describe("nps").is_none());
}
