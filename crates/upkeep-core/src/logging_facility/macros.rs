//! Operation boundary macros
//!
//! `reconcile` and `settle` each bracket their work with one `start` event
//! and exactly one closing event, `end` or `end_error`. Extra fields follow
//! the fixed ones using ordinary `tracing` field syntax.

/// Open an operation
///
/// # Example
///
/// ```
/// # use upkeep_core::log_op_start;
/// log_op_start!("settle");
/// log_op_start!("settle", target_id = "42", required_matches = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = upkeep_core_types::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Close an operation that succeeded
///
/// # Example
///
/// ```
/// # use upkeep_core::log_op_end;
/// log_op_end!("settle", duration_ms = 1500);
/// log_op_end!("reconcile", duration_ms = 20, settled = false);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = upkeep_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Close an operation that failed
///
/// `$err` is anything convertible into `ExError`. Besides its kind and code,
/// the event records the field names the error carries (the fields still
/// differing when a settle gave up), comma-joined under `err_fields`.
///
/// # Example
///
/// ```
/// # use upkeep_core::log_op_error;
/// use upkeep_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::NotConverged).with_fields(vec!["name".into()]);
/// log_op_error!("settle", err, duration_ms = 3000, target_id = "42");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        let err_fields = ex_err.fields().map(|f| f.join(",")).unwrap_or_default();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = upkeep_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_fields = %err_fields,
            $($($field)*)?
        );
    }};
}
