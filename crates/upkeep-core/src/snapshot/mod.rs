//! Observed snapshots.
//!
//! An [`ObservedSnapshot`] is the total, normalized view of one remote read:
//! every field of the resource kind's catalog is present, with missing or
//! malformed remote values replaced by the empty form of the field's kind.

pub mod builder;
pub mod wire;

pub use builder::build_observed;

use crate::model::{FieldValue, ResourceKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservedSnapshot {
    kind: ResourceKind,
    id: Option<String>,
    values: Vec<(&'static str, FieldValue)>,
}

impl ObservedSnapshot {
    pub(crate) fn new(kind: ResourceKind, id: Option<String>) -> Self {
        Self {
            kind,
            id,
            values: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.values.push((name, value));
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Remote identifier as reported by the read, if the payload carried one
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// All fields in catalog declaration order
    pub fn values(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.values.iter().map(|(n, v)| (*n, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
