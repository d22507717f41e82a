//! Structured logging for reconciliation runs
//!
//! Logs go through `tracing`. A binary calls [`init`] once with a
//! [`Profile`]; library code never installs a subscriber. Operations open
//! and close with the `log_op_*` macros, while the settle loop adds one
//! `settle_attempt` debug event per read. Tests install the in-memory
//! capture from [`test_capture`] and assert on what was recorded.
//!
//! ```rust
//! use upkeep_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
