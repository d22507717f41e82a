//! upkeep Engine - write-then-settle orchestration
//!
//! Drives a write through a [`client::RemoteWriter`], then polls the remote
//! object through a [`client::RemoteReader`] until it matches the desired
//! projection built from the write intent, or until the settle deadline.

pub mod client;
pub mod config;
pub mod errors;
pub mod reconcile;
pub mod settle;

pub use client::{RemoteReader, RemoteWriter};
pub use config::EngineConfig;
pub use errors::{ExhaustionCause, ReconcileError, SettleFailure};
pub use reconcile::{Reconciled, Reconciler};
pub use settle::{effective_deadline, settle, Backoff, CallerContext, SettlePolicy};
