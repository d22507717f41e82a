//! Convergence checks between a desired projection and an observed snapshot.
//!
//! The comparison is one-directional: it verifies that everything the
//! projection asserts is now true of the remote object. Fields the remote
//! object carries but the projection never asserted are not examined.
//!
//! ## Guarantees
//!
//! - Absent and skip-compare (`Unset`) fields are never examined.
//! - No assertion is ever manufactured: only projection entries are compared.
//! - Differing fields are reported in projection (catalog declaration) order.
//! - A projection and a snapshot of different resource kinds never converge
//!   unless the projection asserts nothing.

pub mod engine;
pub mod model;

pub use engine::{converged, mismatches, still_differing};
pub use model::FieldMismatch;
