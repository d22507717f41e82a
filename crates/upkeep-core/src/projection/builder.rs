//! Projection builders: write intent → [`DesiredProjection`].
//!
//! Both entry points walk the catalog in declaration order and differ only
//! in how they read scalars:
//!
//! - create: an empty or zero scalar means "server default" and is not asserted
//! - update: any scalar the intent carries is asserted, empty included
//!
//! Collections behave the same for both: `Omit` marks the field skip-compare,
//! `Clear` or an empty normalized collection asserts the empty form.
//!
//! Fields are gated by the resource subtype. The intent's explicit subtype
//! wins, then its subtype field, then a subtype observed on the remote object
//! when the caller has one (see [`build_desired_with_subtype`]).

use crate::model::{FieldDescriptor, FieldValue, IntentField, ResourceCatalog, ValueKind};
use crate::model::{WriteIntent, WriteOp};
use crate::normalize;
use crate::projection::{Assertion, DesiredProjection};

/// Build the desired projection for a creation intent.
pub fn build_desired_from_create(
    catalog: &ResourceCatalog,
    intent: &WriteIntent,
) -> DesiredProjection {
    build(catalog, intent, WriteOp::Create, None)
}

/// Build the desired projection for a modification intent.
pub fn build_desired_from_update(
    catalog: &ResourceCatalog,
    intent: &WriteIntent,
) -> DesiredProjection {
    build(catalog, intent, WriteOp::Update, None)
}

/// Build the desired projection for the intent's own operation.
///
/// `observed_subtype` gates fields when the intent names no subtype itself.
/// Updates usually omit it; the write echo still reports it.
pub fn build_desired_with_subtype(
    catalog: &ResourceCatalog,
    intent: &WriteIntent,
    observed_subtype: Option<&str>,
) -> DesiredProjection {
    build(catalog, intent, intent.op(), observed_subtype)
}

fn build(
    catalog: &ResourceCatalog,
    intent: &WriteIntent,
    op: WriteOp,
    observed_subtype: Option<&str>,
) -> DesiredProjection {
    let mut projection = DesiredProjection::new(catalog.kind, op);
    let subtype = intent
        .subtype()
        .or_else(|| subtype_field(catalog, intent))
        .or(observed_subtype);

    for descriptor in catalog.fields {
        let Some(value) = intent.field(descriptor.name) else {
            continue;
        };
        if !descriptor.applies.allows(subtype) {
            tracing::debug!(
                resource_kind = %catalog.kind,
                field = descriptor.name,
                subtype = subtype.unwrap_or_default(),
                "field not applicable to subtype; not asserted"
            );
            continue;
        }
        if let Some(assertion) = assert_field(descriptor, value, op) {
            projection.push(descriptor.name, assertion);
        }
    }

    projection
}

/// The subtype carried as an ordinary field, when the intent names none.
fn subtype_field<'a>(catalog: &ResourceCatalog, intent: &'a WriteIntent) -> Option<&'a str> {
    let descriptor = catalog.subtype_field()?;
    match intent.field(descriptor.name)? {
        IntentField::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    }
}

fn assert_field(
    descriptor: &FieldDescriptor,
    value: &IntentField,
    op: WriteOp,
) -> Option<Assertion> {
    let collection = descriptor.kind.is_collection();
    match value {
        IntentField::Omit => collection.then_some(Assertion::Unset),
        IntentField::Clear => (collection || op == WriteOp::Update)
            .then(|| Assertion::ClearTo(descriptor.kind.empty())),
        supplied => {
            let Some(normalized) = normalize_intent(descriptor, supplied) else {
                tracing::warn!(
                    field = descriptor.name,
                    expected = ?descriptor.kind,
                    "intent value does not match field kind; not asserted"
                );
                return None;
            };
            match (normalized.is_empty(), collection, op) {
                (true, false, WriteOp::Create) => None,
                (true, _, _) => Some(Assertion::ClearTo(normalized)),
                (false, _, _) => Some(Assertion::SetTo(normalized)),
            }
        }
    }
}

/// Normalize a supplied intent value into the descriptor's comparable form.
///
/// Returns `None` when the value cannot represent the field's kind.
fn normalize_intent(descriptor: &FieldDescriptor, value: &IntentField) -> Option<FieldValue> {
    if let IntentField::Text(s) = value {
        if descriptor.kind == ValueKind::Text && s.trim().is_empty() {
            return Some(FieldValue::Text(String::new()));
        }
    }

    if let Some(labels) = descriptor.labels {
        let label = match value {
            IntentField::Bool(b) => Some(labels.label_bool(*b)),
            IntentField::Int(i) => labels.label_int(*i),
            IntentField::Text(s) => labels.label_text(s),
            _ => None,
        };
        return label.map(FieldValue::Text);
    }

    match (descriptor.kind, value) {
        (ValueKind::Text, IntentField::Text(s)) if descriptor.folded => {
            Some(FieldValue::Text(normalize::text(s).to_lowercase()))
        }
        (ValueKind::Text, IntentField::Text(s)) => Some(FieldValue::Text(normalize::text(s))),
        (ValueKind::Text, IntentField::Int(i)) => Some(FieldValue::Text(i.to_string())),
        (ValueKind::Int, IntentField::Int(i)) => Some(FieldValue::Int(*i)),
        (ValueKind::Int, IntentField::Text(s)) => s.trim().parse().ok().map(FieldValue::Int),
        (ValueKind::Bool, IntentField::Bool(b)) => Some(FieldValue::Bool(*b)),
        (ValueKind::StringSet, IntentField::Strings(v)) => {
            Some(FieldValue::Strings(normalize::string_set(v)))
        }
        (ValueKind::TagSet, IntentField::Strings(v)) => {
            Some(FieldValue::Strings(normalize::tag_set(v)))
        }
        (ValueKind::IntSet, IntentField::Ints(v)) => {
            Some(FieldValue::Ints(normalize::int_set(v.iter().copied())))
        }
        (ValueKind::Map, IntentField::Pairs(pairs)) => Some(FieldValue::Pairs(
            normalize::string_map(pairs.iter().map(|(k, v)| (k, v)), descriptor.ignored_keys),
        )),
        _ => None,
    }
}
