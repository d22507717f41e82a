//! Field catalogs of the managed resource kinds.

pub mod integration;
pub mod maintenance_window;
pub mod monitor;

use crate::model::{ResourceCatalog, ResourceKind};

pub use integration::INTEGRATION;
pub use maintenance_window::MAINTENANCE_WINDOW;
pub use monitor::MONITOR;

/// Headers implied by a body encoding rather than chosen by the caller
pub const IMPLIED_HEADERS: &[&str] = &["content-type", "content-length"];

pub fn catalog_for(kind: ResourceKind) -> &'static ResourceCatalog {
    match kind {
        ResourceKind::Monitor => &MONITOR,
        ResourceKind::MaintenanceWindow => &MAINTENANCE_WINDOW,
        ResourceKind::Integration => &INTEGRATION,
    }
}
