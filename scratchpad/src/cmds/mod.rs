pub mod choice;
pub mod demo;
pub mod path;
pub mod sample;
pub mod shape;

use serde_json::Value;

/// Strings print bare, everything else as JSON.
pub fn display_values(values: &[Value]) -> String {
    values
        .iter()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
