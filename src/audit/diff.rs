//! Change summaries for audit entries

use serde::Serialize;
use serde_json::Value;

/// Summarize the top-level fields that differ between two values
///
/// Returns `None` when nothing changed. Non-object values are compared as a
/// whole.
pub fn summarize_changes<T: Serialize>(before: &T, after: &T) -> Option<String> {
    let before = serde_json::to_value(before).ok()?;
    let after = serde_json::to_value(after).ok()?;

    match (&before, &after) {
        (Value::Object(old), Value::Object(new)) => {
            let mut keys: Vec<&String> = old.keys().chain(new.keys()).collect();
            keys.sort();
            keys.dedup();

            let changes: Vec<String> = keys
                .into_iter()
                .filter_map(|key| {
                    let old_val = old.get(key).unwrap_or(&Value::Null);
                    let new_val = new.get(key).unwrap_or(&Value::Null);
                    (old_val != new_val)
                        .then(|| format!("{}: {} -> {}", key, short(old_val), short(new_val)))
                })
                .collect();

            (!changes.is_empty()).then(|| changes.join(", "))
        }
        _ => (before != after).then(|| format!("{} -> {}", short(&before), short(&after))),
    }
}

fn short(value: &Value) -> String {
    match value {
        Value::Null => "(none)".to_string(),
        Value::String(s) if s.chars().count() > 40 => {
            format!("\"{}...\"", s.chars().take(37).collect::<String>())
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(fields) => format!("{{{} fields}}", fields.len()),
        other => other.to_string(),
    }
}
