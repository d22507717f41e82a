//! Desired projections.
//!
//! A [`DesiredProjection`] is the sparse comparison target derived from one
//! write intent. It only ever holds fields the intent touched:
//!
//! - `SetTo(v)`: the remote object must end up holding `v`
//! - `ClearTo(empty)`: the remote object must end up empty for this field
//! - `Unset`: the caller asked to preserve the remote value; never compared
//!
//! Fields the intent never mentioned are simply not present.

pub mod builder;

pub use builder::{
    build_desired_from_create, build_desired_from_update, build_desired_with_subtype,
};

use crate::model::{FieldValue, ResourceKind, WriteOp};
use serde::Serialize;

/// Per-field assertion of a desired projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "assert", content = "value", rename_all = "snake_case")]
pub enum Assertion {
    Unset,
    ClearTo(FieldValue),
    SetTo(FieldValue),
}

impl Assertion {
    /// The value the remote object must hold, if this assertion is compared at all.
    pub fn expected(&self) -> Option<&FieldValue> {
        match self {
            Assertion::Unset => None,
            Assertion::ClearTo(v) | Assertion::SetTo(v) => Some(v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DesiredProjection {
    kind: ResourceKind,
    op: WriteOp,
    fields: Vec<(&'static str, Assertion)>,
}

impl DesiredProjection {
    pub fn new(kind: ResourceKind, op: WriteOp) -> Self {
        Self {
            kind,
            op,
            fields: Vec::new(),
        }
    }

    /// Append an assertion.
    ///
    /// The builders append in catalog declaration order; diagnostics report
    /// fields in the order they were appended. A later assertion for the same
    /// name replaces the earlier one in place.
    pub fn with_assertion(mut self, name: &'static str, assertion: Assertion) -> Self {
        self.push(name, assertion);
        self
    }

    pub(crate) fn push(&mut self, name: &'static str, assertion: Assertion) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = assertion,
            None => self.fields.push((name, assertion)),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn op(&self) -> WriteOp {
        self.op
    }

    pub fn assertion(&self, name: &str) -> Option<&Assertion> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, a)| a)
    }

    /// Every entry, including skip-compare ones, in order
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &Assertion)> {
        self.fields.iter().map(|(n, a)| (*n, a))
    }

    /// Compared fields with their expected values, in order
    pub fn asserted(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields
            .iter()
            .filter_map(|(n, a)| a.expected().map(|v| (*n, v)))
    }

    pub fn asserted_names(&self) -> Vec<&'static str> {
        self.asserted().map(|(n, _)| n).collect()
    }

    /// Fields explicitly marked "preserve remote"
    pub fn skipped(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|(_, a)| matches!(a, Assertion::Unset))
            .map(|(n, _)| *n)
            .collect()
    }

    pub fn is_skipped(&self, name: &str) -> bool {
        matches!(self.assertion(name), Some(Assertion::Unset))
    }

    /// True when nothing would be compared
    pub fn is_vacuous(&self) -> bool {
        self.asserted().next().is_none()
    }
}
