//! upkeep Core - field-level reconciliation kernel
//!
//! This crate decides whether a remote monitoring object has caught up with
//! a write that was just made against it:
//! - Normalizers giving every comparable value one canonical form
//! - Declarative field catalogs per resource kind
//! - Desired projections built from write intents (sparse, three-valued)
//! - Observed snapshots built from loosely-typed remote payloads (total)
//! - The convergence check and its per-field diagnostics
//!
//! Everything here is synchronous and pure; polling lives in `upkeep-engine`.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod projection;
pub mod resources;
pub mod snapshot;

// Re-export commonly used types
pub use diff::{converged, mismatches, still_differing, FieldMismatch};
pub use errors::{ExError, ExErrorKind, Result};
pub use model::{FieldValue, IntentField, ResourceCatalog, ResourceKind, WriteIntent, WriteOp};
pub use projection::{
    build_desired_from_create, build_desired_from_update, build_desired_with_subtype, Assertion,
    DesiredProjection,
};
pub use resources::catalog_for;
pub use snapshot::{build_observed, ObservedSnapshot};
