use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Array fields rendered as their own sections or left to the JSON output
const ELIDED_FIELDS: &[&str] = &[
    "raw_losses",
    "distribution_buckets",
    "exceedance_curve",
    "key_drivers",
    "recommendations",
];

/// Format output as tables using the tabled crate.
///
/// Headline figures flatten into a Field/Value table; drivers and
/// recommendations print as their own sections; per-trial arrays and
/// curve points stay in the JSON output.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    if let Value::Object(res_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in res_map {
            if ELIDED_FIELDS.contains(&key.as_str()) {
                continue;
            }
            match val {
                Value::Object(nested) => {
                    for (nested_key, nested_val) in nested {
                        builder.push_record([
                            format!("{}.{}", key, nested_key),
                            format_value(nested_val),
                        ]);
                    }
                }
                _ => {
                    builder.push_record([key.to_string(), format_value(val)]);
                }
            }
        }
        let table = Table::from(builder);
        println!("{}", table);

        print_drivers(res_map.get("key_drivers"));
        print_recommendations(res_map.get("recommendations"));
    } else {
        print_flat_object(&Value::Object(envelope.clone()));
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    // Print methodology
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_drivers(drivers: Option<&Value>) {
    if let Some(Value::Array(drivers)) = drivers {
        if drivers.is_empty() {
            return;
        }
        println!("\nKey Drivers:");
        let mut builder = Builder::default();
        builder.push_record(["Factor", "Impact", "Description"]);
        for driver in drivers {
            if let Value::Object(map) = driver {
                builder.push_record([
                    map.get("factor").and_then(Value::as_str).unwrap_or("").to_string(),
                    map.get("impact").and_then(Value::as_str).unwrap_or("").to_string(),
                    map.get("description")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_string(),
                ]);
            }
        }
        println!("{}", Table::from(builder));
    }
}

fn print_recommendations(recommendations: Option<&Value>) {
    if let Some(Value::Array(recommendations)) = recommendations {
        if recommendations.is_empty() {
            return;
        }
        println!("\nRecommendations:");
        for (i, recommendation) in recommendations.iter().enumerate() {
            if let Value::String(s) = recommendation {
                println!("  {}. {}", i + 1, s);
            }
        }
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.to_string(), format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_value(v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(|v| format_value(v)).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
