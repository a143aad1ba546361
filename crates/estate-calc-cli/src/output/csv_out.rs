use serde_json::Value;
use std::io;

use super::plain;

/// Write output as CSV to stdout.
///
/// Single results become `field,value` rows (display strings appended with a
/// `display.` prefix); `results` arrays become one row per entry.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(Value::Array(rows)) = value.get("results") {
        write_rows(&mut wtr, rows);
    } else if let Some(Value::Object(result)) = value.get("result") {
        let _ = wtr.write_record(["field", "value"]);
        for (key, val) in result {
            let _ = wtr.write_record([key.as_str(), &plain(val)]);
        }
        if let Some(Value::Object(display)) = value.get("display") {
            for (key, val) in display {
                let _ = wtr.write_record([format!("display.{key}"), plain(val)]);
            }
        }
    } else {
        let _ = wtr.write_record([plain(value)]);
    }

    let _ = wtr.flush();
}

fn write_rows(wtr: &mut csv::Writer<io::StdoutLock<'_>>, rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);
    for row in rows {
        if let Value::Object(map) = row {
            let record: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(plain).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&record);
        }
    }
}
