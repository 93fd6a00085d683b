use serde_json::Value;
use std::io;

use fincalc_core::loans::emi::AmortizationRow;

/// Write output as CSV to stdout.
///
/// An amortization schedule is written through its typed rows so the column
/// order is fixed (month, opening_balance, emi_payment, interest_payment,
/// principal_payment, closing_balance) regardless of JSON key order.
pub fn print_csv(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                if let Some(schedule) = result.get("schedule") {
                    if write_schedule_csv(schedule).is_ok() {
                        return;
                    }
                }
                write_field_value_csv(result);
            } else {
                write_field_value_csv(map);
            }
        }
        Value::Array(arr) => {
            write_array_csv(arr);
        }
        _ => {
            let mut wtr = csv::Writer::from_writer(io::stdout().lock());
            let _ = wtr.write_record([&format_csv_value(value)]);
            let _ = wtr.flush();
        }
    }
}

fn write_schedule_csv(schedule: &Value) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<AmortizationRow> = serde_json::from_value(schedule.clone())?;
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    for row in &rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_field_value_csv(map: &serde_json::Map<String, Value>) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in map {
        let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
    }
    let _ = wtr.flush();
}

fn write_array_csv(arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    // Extract headers from first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(*h)
                            .map(format_csv_value)
                            .unwrap_or_default()
                    })
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }

    let _ = wtr.flush();
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
