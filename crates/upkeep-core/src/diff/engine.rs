//! Equality engine.
//!
//! Values on both sides are already normalized by the builders, so equality
//! is plain structural equality.

use crate::diff::model::FieldMismatch;
use crate::projection::DesiredProjection;
use crate::snapshot::ObservedSnapshot;

/// Every asserted field that fails to match, with both values.
pub fn mismatches(desired: &DesiredProjection, observed: &ObservedSnapshot) -> Vec<FieldMismatch> {
    let same_kind = desired.kind() == observed.kind();
    desired
        .asserted()
        .filter_map(|(field, expected)| {
            let actual = if same_kind { observed.get(field) } else { None };
            match actual {
                Some(actual) if actual == expected => None,
                _ => Some(FieldMismatch {
                    field,
                    expected: expected.clone(),
                    observed: actual.cloned(),
                }),
            }
        })
        .collect()
}

/// Names of asserted fields that do not match, in declaration order.
pub fn still_differing(
    desired: &DesiredProjection,
    observed: &ObservedSnapshot,
) -> Vec<&'static str> {
    mismatches(desired, observed)
        .into_iter()
        .map(|m| m.field)
        .collect()
}

/// Whether everything the projection asserts holds in the snapshot.
pub fn converged(desired: &DesiredProjection, observed: &ObservedSnapshot) -> bool {
    if desired.kind() != observed.kind() {
        return desired.is_vacuous();
    }
    desired
        .asserted()
        .all(|(field, expected)| observed.get(field) == Some(expected))
}
