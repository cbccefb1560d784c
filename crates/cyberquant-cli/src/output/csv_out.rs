use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// Scalar fields emit as field,value rows with nested objects flattened
/// one level; per-trial arrays and curve points stay in the JSON output.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                // Two-column CSV: field, value
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result {
                    match val {
                        Value::Array(_) => continue,
                        Value::Object(nested) => {
                            for (nested_key, nested_val) in nested {
                                let _ = wtr.write_record([
                                    format!("{}.{}", key, nested_key),
                                    format_csv_value(nested_val),
                                ]);
                            }
                        }
                        _ => {
                            let _ =
                                wtr.write_record([key.as_str(), &format_csv_value(val)]);
                        }
                    }
                }
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
        Value::Array(arr) => {
            write_array_csv(&mut wtr, arr);
        }
        _ => {
            let _ = wtr.write_record([&format_csv_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

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
                            .map(|v| format_csv_value(v))
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
