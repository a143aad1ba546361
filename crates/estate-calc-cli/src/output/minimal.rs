use serde_json::Value;

use super::plain;

/// Print just the headline figure.
///
/// A mortgage estimate prints its formatted monthly payment when a display
/// block is present; otherwise the first well-known result field is used.
pub fn print_minimal(value: &Value) {
    if let Some(Value::String(payment)) = value.pointer("/display/monthly_payment") {
        println!("{}", payment);
        return;
    }

    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["monthly_payment", "converted_price", "principal"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", plain(val));
                    return;
                }
            }
        }
    }

    if let Some(Value::Array(results)) = value.get("results") {
        for item in results {
            if let Some(price) = item.get("converted_price") {
                println!("{}", plain(price));
            }
        }
        return;
    }

    println!("{}", plain(result_obj));
}
