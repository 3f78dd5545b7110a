//! Import payload parsing and export serialization.

use super::{StoreError, StoreResult};
use crate::domain::Note;
use chrono::NaiveDate;
use serde_json::Value;

/// Parses an import payload into notes.
///
/// The payload must be a JSON array whose every element is a note record.
/// The first bad element fails the whole payload.
pub fn parse_import(payload: &str) -> StoreResult<Vec<Note>> {
    let value: Value = serde_json::from_str(payload).map_err(|e| StoreError::Format {
        reason: format!("not valid JSON: {e}"),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(StoreError::Format {
                reason: format!("expected an array of notes, found {}", json_kind(&other)),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| StoreError::Format {
                reason: format!("note #{}: {e}", i + 1),
            })
        })
        .collect()
}

/// Serializes notes as an indented JSON array, preserving order.
pub fn serialize_export(notes: &[Note]) -> StoreResult<String> {
    serde_json::to_string_pretty(notes).map_err(|source| StoreError::Encode { source })
}

/// Returns the default export file name for a given day, e.g. `notes-2024-06-01.json`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("notes-{}.json", date.format("%Y-%m-%d"))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
