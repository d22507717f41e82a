use serde::{Deserialize, Serialize};

/// The kind of a catalog field, which also selects its normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Int,
    Bool,
    /// Trimmed, deduplicated, sorted strings (case-sensitive)
    StringSet,
    /// Like `StringSet` but case-folded
    TagSet,
    IntSet,
    /// String-keyed map such as request headers
    Map,
}

impl ValueKind {
    /// The normalized empty value of this kind.
    ///
    /// Used both for explicit "clear" assertions and for remote fields that
    /// are missing or arrive in an unrecognised shape.
    pub fn empty(&self) -> FieldValue {
        match self {
            ValueKind::Text => FieldValue::Text(String::new()),
            ValueKind::Int => FieldValue::Int(0),
            ValueKind::Bool => FieldValue::Bool(false),
            ValueKind::StringSet | ValueKind::TagSet => FieldValue::Strings(Vec::new()),
            ValueKind::IntSet => FieldValue::Ints(Vec::new()),
            ValueKind::Map => FieldValue::Pairs(Vec::new()),
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            ValueKind::StringSet | ValueKind::TagSet | ValueKind::IntSet | ValueKind::Map
        )
    }
}

/// A normalized, comparable field value.
///
/// Values are only ever constructed through the normalizers, so plain
/// structural equality is the comparison rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Bool(bool),
    Strings(Vec<String>),
    Ints(Vec<i64>),
    Pairs(Vec<(String, String)>),
}

impl FieldValue {
    /// True for the empty form of the value's kind. Booleans are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Int(i) => *i == 0,
            FieldValue::Bool(_) => false,
            FieldValue::Strings(v) => v.is_empty(),
            FieldValue::Ints(v) => v.is_empty(),
            FieldValue::Pairs(v) => v.is_empty(),
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{:?}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Strings(v) => write!(f, "[{}]", v.join(", ")),
            FieldValue::Ints(v) => {
                let items: Vec<String> = v.iter().map(|i| i.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            FieldValue::Pairs(v) => {
                let items: Vec<String> =
                    v.iter().map(|(k, val)| format!("{}={}", k, val)).collect();
                write!(f, "{{{}}}", items.join(", "))
            }
        }
    }
}
