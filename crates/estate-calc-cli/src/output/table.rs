use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::plain;

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(envelope) => {
            if let Some(Value::Object(result)) = envelope.get("result") {
                println!("{}", field_table(result));
            }
            if let Some(Value::Object(display)) = envelope.get("display") {
                println!("\n{}", quote_table(display));
            }
            if let Some(Value::Array(rows)) = envelope.get("results") {
                print_rows(rows);
            }
            print_notes(envelope);
        }
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", plain(value)),
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &plain(val)]);
    }
    builder.build()
}

/// Pairs each `*_label` entry with its value, e.g. "Home Price | $1,000,000".
fn quote_table(display: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    if let Some(Value::String(title)) = display.get("title") {
        builder.push_record([title.as_str(), ""]);
    }
    if let Some(Value::String(heading)) = display.get("loan_details_heading") {
        builder.push_record([heading.as_str(), ""]);
    }
    for (key, val) in display {
        let Some(field) = key.strip_suffix("_label") else {
            continue;
        };
        let shown = match (field, display.get("down_payment_percent")) {
            ("down_payment", Some(pct)) => format!(
                "{} ({})",
                plain(display.get(field).unwrap_or(&Value::Null)),
                plain(pct)
            ),
            _ => plain(display.get(field).unwrap_or(&Value::Null)),
        };
        builder.push_record([plain(val), shown]);
    }
    if let Some(Value::String(note)) = display.get("disclaimer") {
        builder.push_record([note.as_str(), ""]);
    }
    builder.build()
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        println!("(empty)");
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(String::as_str));
    for row in rows {
        if let Value::Object(map) = row {
            builder.push_record(
                headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(plain).unwrap_or_default()),
            );
        }
    }
    println!("{}", builder.build());
}

fn print_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                println!("  - {}", plain(w));
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
