pub mod deposits;
pub mod investments;
pub mod loans;
pub mod record;
pub mod registry;

use std::collections::BTreeMap;
use std::fs;

use rust_decimal::Decimal;

use fincalc_core::record::CalculationRecord;
use fincalc_core::types::Currency;

/// Build the flat decimal map a `CalculationRecord` stores.
pub(crate) fn decimal_map(pairs: &[(&str, Decimal)]) -> BTreeMap<String, Decimal> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

pub(crate) fn parse_currency(code: &str) -> Result<Currency, Box<dyn std::error::Error>> {
    Ok(code.parse::<Currency>()?)
}

/// Persist a wrapped record next to the printed output.
pub(crate) fn write_record(
    record: &CalculationRecord,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = record.to_json()?;
    fs::write(path, json).map_err(|e| format!("Failed to write record '{path}': {e}"))?;
    Ok(())
}
