use clap::Args;
use serde_json::{json, Value};
use std::fs;

use fincalc_core::record::CalculationRecord;

/// Arguments for inspecting a saved calculation record
#[derive(Args)]
pub struct RecordArgs {
    /// Path to a record JSON file written with --record
    pub file: String,
}

/// Load, re-validate, and summarise a saved record.
pub fn run_record(args: RecordArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(&args.file)
        .map_err(|e| format!("Failed to read '{}': {e}", args.file))?;
    let record = CalculationRecord::from_json(&contents)?;
    let summary = record.summary();

    Ok(json!({
        "summary": summary,
        "record": record,
    }))
}
