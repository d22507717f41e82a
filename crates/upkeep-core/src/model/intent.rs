//! Write intents as handed over by the schema layer.
//!
//! An intent records only what the caller said. A field that is missing from
//! the intent was never mentioned; `IntentField::Omit` says "leave whatever
//! the server holds"; `IntentField::Clear` says "make it empty".

use crate::model::catalog::ResourceKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOp {
    Create,
    Update,
}

impl WriteOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOp::Create => "create",
            WriteOp::Update => "update",
        }
    }
}

/// A single field value carried by a write intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum IntentField {
    Text(String),
    Int(i64),
    Bool(bool),
    Strings(Vec<String>),
    Ints(Vec<i64>),
    Pairs(Vec<(String, String)>),
    /// Explicitly empty: the remote value must be cleared
    Clear,
    /// Explicitly omitted: the remote value must be preserved, never compared
    Omit,
}

/// A create or update request for one remote object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WriteIntent {
    kind: ResourceKind,
    op: WriteOp,
    target_id: Option<String>,
    subtype: Option<String>,
    fields: BTreeMap<String, IntentField>,
}

impl WriteIntent {
    /// Start a creation intent
    pub fn create(kind: ResourceKind) -> Self {
        Self {
            kind,
            op: WriteOp::Create,
            target_id: None,
            subtype: None,
            fields: BTreeMap::new(),
        }
    }

    /// Start a modification intent for an existing remote object
    pub fn update(kind: ResourceKind, target_id: impl Into<String>) -> Self {
        Self {
            kind,
            op: WriteOp::Update,
            target_id: Some(target_id.into()),
            subtype: None,
            fields: BTreeMap::new(),
        }
    }

    /// Set the resource subtype (e.g. the monitor type) the intent applies to
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Set a field
    pub fn with(mut self, name: impl Into<String>, value: IntentField) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn with_text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, IntentField::Text(value.into()))
    }

    pub fn with_int(self, name: impl Into<String>, value: i64) -> Self {
        self.with(name, IntentField::Int(value))
    }

    pub fn with_bool(self, name: impl Into<String>, value: bool) -> Self {
        self.with(name, IntentField::Bool(value))
    }

    pub fn with_strings<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(
            name,
            IntentField::Strings(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn with_ints<I>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        self.with(name, IntentField::Ints(values.into_iter().collect()))
    }

    pub fn with_pairs<I, K, V>(self, name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.with(
            name,
            IntentField::Pairs(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        )
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn op(&self) -> WriteOp {
        self.op
    }

    pub fn target_id(&self) -> Option<&str> {
        self.target_id.as_deref()
    }

    pub fn subtype(&self) -> Option<&str> {
        self.subtype.as_deref()
    }

    /// Look up a field the caller supplied
    pub fn field(&self, name: &str) -> Option<&IntentField> {
        self.fields.get(name)
    }

    /// Iterate over supplied fields in name order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &IntentField)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_intent_has_no_target() {
        let intent = WriteIntent::create(ResourceKind::Monitor).with_text("name", "api");
        assert_eq!(intent.op(), WriteOp::Create);
        assert!(intent.target_id().is_none());
        assert_eq!(
            intent.field("name"),
            Some(&IntentField::Text("api".to_string()))
        );
        assert!(intent.field("url").is_none());
    }

    #[test]
    fn test_update_intent_keeps_omit_and_clear_distinct() {
        let intent = WriteIntent::update(ResourceKind::MaintenanceWindow, "9")
            .with("days", IntentField::Clear)
            .with("monitor_ids", IntentField::Omit);
        assert_eq!(intent.target_id(), Some("9"));
        assert_eq!(intent.field("days"), Some(&IntentField::Clear));
        assert_eq!(intent.field("monitor_ids"), Some(&IntentField::Omit));
    }
}
