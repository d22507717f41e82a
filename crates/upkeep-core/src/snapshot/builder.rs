//! Snapshot builder: remote representation → [`ObservedSnapshot`].

use crate::model::{FieldDescriptor, FieldValue, ResourceCatalog, ValueKind, WireShape};
use crate::normalize;
use crate::snapshot::{wire, ObservedSnapshot};
use serde_json::Value;

/// Build a total, normalized snapshot of a remote object.
///
/// Never fails: a payload that is not an object yields a snapshot holding
/// the empty form of every field.
pub fn build_observed(catalog: &ResourceCatalog, raw: &Value) -> ObservedSnapshot {
    if !raw.is_object() {
        tracing::debug!(
            resource_kind = %catalog.kind,
            "remote representation is not an object; observing empty values"
        );
    }

    let id = raw.get(catalog.id_key).and_then(wire::scalar_text).filter(|s| !s.is_empty());
    let mut snapshot = ObservedSnapshot::new(catalog.kind, id);
    for descriptor in catalog.fields {
        snapshot.insert(descriptor.name, observe_field(descriptor, raw.get(descriptor.wire_key)));
    }
    snapshot
}

fn observe_field(descriptor: &FieldDescriptor, value: Option<&Value>) -> FieldValue {
    if let Some(labels) = descriptor.labels {
        return FieldValue::Text(value.and_then(|v| labels.label_wire(v)).unwrap_or_default());
    }

    match descriptor.kind {
        ValueKind::Text => {
            let text = match descriptor.shape {
                WireShape::Plain => wire::text(value),
                WireShape::Loose => wire::loose_text(value),
            };
            FieldValue::Text(if descriptor.folded { text.to_lowercase() } else { text })
        }
        ValueKind::Int => FieldValue::Int(wire::int(value)),
        ValueKind::Bool => FieldValue::Bool(wire::boolean(value)),
        ValueKind::StringSet => FieldValue::Strings(normalize::string_set(wire::text_items(value))),
        ValueKind::TagSet => FieldValue::Strings(normalize::tag_set(wire::text_items(value))),
        ValueKind::IntSet => FieldValue::Ints(normalize::int_set(wire::int_items(value))),
        ValueKind::Map => FieldValue::Pairs(normalize::string_map(
            wire::map_entries(value),
            descriptor.ignored_keys,
        )),
    }
}
