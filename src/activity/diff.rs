//! Diff summaries for the activity log
//!
//! Turns before/after JSON snapshots into short "key: old -> new" text.

use serde_json::Value;

/// Summarize what changed between two snapshots
///
/// Objects are compared key by key at the top level; anything else is
/// compared as a whole. Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes: Vec<String> = before_obj
                .iter()
                .filter_map(|(key, before_val)| match after_obj.get(key) {
                    Some(after_val) if after_val == before_val => None,
                    Some(after_val) => Some(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    None => Some(format!("{}: {} -> (removed)", key, format_value(before_val))),
                })
                .collect();

            changes.extend(
                after_obj
                    .iter()
                    .filter(|(key, _)| !before_obj.contains_key(*key))
                    .map(|(key, after_val)| {
                        format!("{}: (added) -> {}", key, format_value(after_val))
                    }),
            );
            changes
        }
        _ if before != after => vec![format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Format a JSON value for a one-line summary
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}
