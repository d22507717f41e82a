use serde_json::Value;
use upkeep_core::{
    build_desired_from_create, build_desired_from_update, build_observed, catalog_for,
    DesiredProjection, ObservedSnapshot, WriteIntent, WriteOp,
};

/// Build the projection for an intent against its kind's catalog
#[allow(dead_code)]
pub fn desired(intent: &WriteIntent) -> DesiredProjection {
    let catalog = catalog_for(intent.kind());
    match intent.op() {
        WriteOp::Create => build_desired_from_create(catalog, intent),
        WriteOp::Update => build_desired_from_update(catalog, intent),
    }
}

/// Build the snapshot of a raw payload for the same kind as `intent`
#[allow(dead_code)]
pub fn observed(intent: &WriteIntent, raw: &Value) -> ObservedSnapshot {
    build_observed(catalog_for(intent.kind()), raw)
}
