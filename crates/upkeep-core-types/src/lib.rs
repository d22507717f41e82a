//! Core types shared across upkeep facilities
//!
//! This crate provides foundational types used by the error, logging and
//! settle facilities:
//!
//! - **Correlation types**: SessionId, RequestContext
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, SessionId};
