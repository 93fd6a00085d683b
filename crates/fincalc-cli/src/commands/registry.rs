use clap::Args;
use serde_json::{json, Value};

use fincalc_core::registry;

/// Arguments for describing a single calculator
#[derive(Args)]
pub struct DescribeArgs {
    /// Calculator slug (emi, fd, rd, sip, loan-eligibility, cagr)
    pub slug: String,
}

/// List every calculator with its category and summary.
pub fn run_calculators() -> Result<Value, Box<dyn std::error::Error>> {
    let listing: Vec<Value> = registry::list_all()
        .iter()
        .map(|c| {
            json!({
                "slug": c.slug,
                "title": c.title,
                "category": c.category,
                "description": c.description,
            })
        })
        .collect();
    Ok(Value::Array(listing))
}

/// Show a calculator's full input schema.
pub fn run_describe(args: DescribeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    match registry::describe(&args.slug) {
        Some(descriptor) => Ok(serde_json::to_value(descriptor)?),
        None => Err(format!(
            "unknown calculator '{}' (run `pfc calculators` for the list)",
            args.slug
        )
        .into()),
    }
}
