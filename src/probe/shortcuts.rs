//! Shortcut records from an agent's online configuration.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Malformed `data.shortcuts` content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortcutError {
    #[error("data.shortcuts is not a list (got {0})")]
    NotAList(&'static str),
    #[error("shortcut record {index} is not an object (got {kind})")]
    BadRecord { index: usize, kind: &'static str },
}

/// A named quick-action attached to an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortcut {
    pub id: String,
    pub name: String,
}

impl Shortcut {
    fn from_record(index: usize, record: &Value) -> Result<Self, ShortcutError> {
        if !record.is_object() {
            return Err(ShortcutError::BadRecord {
                index,
                kind: json_kind(record),
            });
        }
        Ok(Self {
            id: render_field(record.get("id")),
            name: render_field(record.get("name")),
        })
    }

    pub fn line(&self) -> String {
        format!("Shortcut id: {}, name: {}", self.id, self.name)
    }
}

/// Strings print bare, other JSON values as JSON text, absent fields as `undefined`.
fn render_field(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Collect `data.shortcuts` from an online-info payload.
///
/// An absent or falsy value (`null`, `false`, `0`, `""`) yields no records.
/// Any other non-list value, or a list entry that is not an object, is an error.
pub fn extract_shortcuts(payload: &Value) -> Result<Vec<Shortcut>, ShortcutError> {
    let Some(shortcuts) = payload.get("data").and_then(|data| data.get("shortcuts")) else {
        return Ok(Vec::new());
    };
    if !is_truthy(shortcuts) {
        return Ok(Vec::new());
    }
    match shortcuts {
        Value::Array(records) => records
            .iter()
            .enumerate()
            .map(|(index, record)| Shortcut::from_record(index, record))
            .collect(),
        other => Err(ShortcutError::NotAList(json_kind(other))),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
