//! Decoding of loosely-typed remote payloads.
//!
//! The remote API is not strict about shapes: numbers arrive as strings,
//! single values arrive where lists are expected, and some text fields come
//! either bare or wrapped in an object holding a list. Each decoder accepts
//! a closed set of shapes and falls back to the empty form for anything else.
//! None of them fail.

use serde::Deserialize;
use serde_json::Value;

/// Known shapes of a loosely-typed text field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LooseText {
    Bare(String),
    Number(serde_json::Number),
    Listed {
        #[serde(alias = "items")]
        values: Vec<Value>,
    },
}

impl LooseText {
    /// The canonical scalar: the bare value, or the first non-empty listed element
    pub fn into_scalar(self) -> String {
        match self {
            LooseText::Bare(s) => s.trim().to_string(),
            LooseText::Number(n) => n.to_string(),
            LooseText::Listed { values } => values
                .iter()
                .filter_map(scalar_text)
                .find(|s| !s.is_empty())
                .unwrap_or_default(),
        }
    }
}

/// A bare scalar rendered as trimmed text; `None` for containers and null.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

pub fn text(value: Option<&Value>) -> String {
    value.and_then(scalar_text).unwrap_or_default()
}

pub fn loose_text(value: Option<&Value>) -> String {
    value
        .cloned()
        .and_then(|v| serde_json::from_value::<LooseText>(v).ok())
        .map(LooseText::into_scalar)
        .unwrap_or_default()
}

fn scalar_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn int(value: Option<&Value>) -> i64 {
    value.and_then(scalar_int).unwrap_or(0)
}

pub fn boolean(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => matches!(s.trim().to_lowercase().as_str(), "true" | "1"),
        _ => false,
    }
}

/// Elements of a list-valued field as text. A lone scalar is a one-element list.
pub fn text_items(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(other).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Elements of an integer list. Unparseable elements are dropped.
pub fn int_items(value: Option<&Value>) -> Vec<i64> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(scalar_int).collect(),
        Some(other) => scalar_int(other).into_iter().collect(),
        None => Vec::new(),
    }
}

/// Entries of a map-valued field.
///
/// Accepts an object of scalars, or an array of `{name|key, value}` objects.
pub fn map_entries(value: Option<&Value>) -> Vec<(String, String)> {
    match value {
        Some(Value::Object(obj)) => obj
            .iter()
            .filter_map(|(k, v)| scalar_text(v).map(|v| (k.clone(), v)))
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| {
                let key = item.get("name").or_else(|| item.get("key"))?.as_str()?;
                let value = scalar_text(item.get("value")?)?;
                Some((key.to_string(), value))
            })
            .collect(),
        _ => Vec::new(),
    }
}
