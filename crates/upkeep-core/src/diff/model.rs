//! Diff output types.

use crate::model::FieldValue;
use serde::Serialize;

/// One asserted field whose observed value does not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMismatch {
    pub field: &'static str,
    pub expected: FieldValue,
    /// `None` when the snapshot does not carry the field at all
    pub observed: Option<FieldValue>,
}

impl std::fmt::Display for FieldMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.observed {
            Some(observed) => write!(
                f,
                "{}: expected {}, observed {}",
                self.field, self.expected, observed
            ),
            None => write!(f, "{}: expected {}, observed nothing", self.field, self.expected),
        }
    }
}
