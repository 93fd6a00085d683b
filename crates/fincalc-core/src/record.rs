//! A validated, immutable wrapper around one calculation's inputs and
//! outputs, suitable for in-memory history and export.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::types::Currency;
use crate::FinCalcResult;

/// Which calculator produced a record. Wire slugs are kebab-case
/// (`emi`, `fd`, `rd`, `sip`, `loan-eligibility`, `cagr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorType {
    Emi,
    Fd,
    Rd,
    Sip,
    LoanEligibility,
    Cagr,
}

impl CalculatorType {
    pub fn slug(&self) -> &'static str {
        match self {
            CalculatorType::Emi => "emi",
            CalculatorType::Fd => "fd",
            CalculatorType::Rd => "rd",
            CalculatorType::Sip => "sip",
            CalculatorType::LoanEligibility => "loan-eligibility",
            CalculatorType::Cagr => "cagr",
        }
    }
}

impl fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CalculatorType {
    type Err = FinCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emi" => Ok(CalculatorType::Emi),
            "fd" => Ok(CalculatorType::Fd),
            "rd" => Ok(CalculatorType::Rd),
            "sip" => Ok(CalculatorType::Sip),
            "loan-eligibility" => Ok(CalculatorType::LoanEligibility),
            "cagr" => Ok(CalculatorType::Cagr),
            other => Err(FinCalcError::InvalidInput {
                field: "calculator_type".into(),
                reason: format!("unknown calculator '{other}'"),
            }),
        }
    }
}

/// One completed calculation. Immutable after construction; replaced, not
/// mutated, when the user recalculates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub calculator_type: CalculatorType,
    pub inputs: BTreeMap<String, Decimal>,
    pub results: BTreeMap<String, Decimal>,
    pub currency: Currency,
}

/// Compact view of a record for history listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSummary {
    pub calculator_type: CalculatorType,
    pub currency: Currency,
    pub input_count: usize,
    pub result_count: usize,
    pub generated_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Construct a record, rejecting empty input or result sets.
    pub fn new(
        calculator_type: CalculatorType,
        inputs: BTreeMap<String, Decimal>,
        results: BTreeMap<String, Decimal>,
        currency: Currency,
    ) -> FinCalcResult<Self> {
        let record = CalculationRecord {
            calculator_type,
            inputs,
            results,
            currency,
        };
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> FinCalcResult<()> {
        if self.inputs.is_empty() {
            return Err(FinCalcError::Validation(
                "a calculation record requires at least one input".into(),
            ));
        }
        if self.results.is_empty() {
            return Err(FinCalcError::Validation(
                "a calculation record requires at least one result".into(),
            ));
        }
        Ok(())
    }

    pub fn emi(
        inputs: BTreeMap<String, Decimal>,
        results: BTreeMap<String, Decimal>,
        currency: Currency,
    ) -> FinCalcResult<Self> {
        Self::new(CalculatorType::Emi, inputs, results, currency)
    }

    pub fn fd(
        inputs: BTreeMap<String, Decimal>,
        results: BTreeMap<String, Decimal>,
        currency: Currency,
    ) -> FinCalcResult<Self> {
        Self::new(CalculatorType::Fd, inputs, results, currency)
    }

    pub fn rd(
        inputs: BTreeMap<String, Decimal>,
        results: BTreeMap<String, Decimal>,
        currency: Currency,
    ) -> FinCalcResult<Self> {
        Self::new(CalculatorType::Rd, inputs, results, currency)
    }

    pub fn sip(
        inputs: BTreeMap<String, Decimal>,
        results: BTreeMap<String, Decimal>,
        currency: Currency,
    ) -> FinCalcResult<Self> {
        Self::new(CalculatorType::Sip, inputs, results, currency)
    }

    pub fn loan_eligibility(
        inputs: BTreeMap<String, Decimal>,
        results: BTreeMap<String, Decimal>,
        currency: Currency,
    ) -> FinCalcResult<Self> {
        Self::new(CalculatorType::LoanEligibility, inputs, results, currency)
    }

    pub fn cagr(
        inputs: BTreeMap<String, Decimal>,
        results: BTreeMap<String, Decimal>,
        currency: Currency,
    ) -> FinCalcResult<Self> {
        Self::new(CalculatorType::Cagr, inputs, results, currency)
    }

    /// Summary view, timestamped at generation.
    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            calculator_type: self.calculator_type,
            currency: self.currency,
            input_count: self.inputs.len(),
            result_count: self.results.len(),
            generated_at: Utc::now(),
        }
    }

    /// Serialize to JSON. Inverse of [`CalculationRecord::from_json`].
    pub fn to_json(&self) -> FinCalcResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and re-validate a record from JSON.
    pub fn from_json(data: &str) -> FinCalcResult<Self> {
        let record: CalculationRecord = serde_json::from_str(data)?;
        record.validate()?;
        Ok(record)
    }
}
