use thiserror::Error;
use upkeep_core::{ExError, ExErrorKind, ObservedSnapshot, ResourceKind};
use upkeep_core_types::SessionId;

/// Why a settle call stopped polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionCause {
    DeadlineExceeded,
    Cancelled,
}

impl std::fmt::Display for ExhaustionCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExhaustionCause::DeadlineExceeded => f.write_str("deadline exceeded"),
            ExhaustionCause::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// A remote object that never matched its desired projection.
#[derive(Debug, Clone, Error)]
#[error(
    "{resource_kind} {target_id} did not converge after {attempts} read(s) ({cause}); \
     still differing: [{}]",
    .still_differing.join(", ")
)]
pub struct SettleFailure {
    pub target_id: String,
    pub resource_kind: ResourceKind,
    pub cause: ExhaustionCause,
    pub attempts: u32,
    /// Asserted fields that did not match the last snapshot, in declaration
    /// order; every asserted field when no read ever succeeded
    pub still_differing: Vec<&'static str>,
    pub last_snapshot: Option<ObservedSnapshot>,
    /// Set only when the final read attempt itself failed
    #[source]
    pub last_read_error: Option<ExError>,
    pub session_id: Option<SessionId>,
}

impl SettleFailure {
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }
}

/// Failure of a write-then-settle reconciliation
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The catalog describes a different kind than the intent writes
    #[error("{intent} intent reconciled against the {catalog} catalog")]
    KindMismatch {
        catalog: ResourceKind,
        intent: ResourceKind,
    },

    /// The write was rejected; nothing was compared
    #[error("write of {kind} failed: {source}")]
    Write {
        kind: ResourceKind,
        #[source]
        source: ExError,
    },

    /// The write succeeded but no identifier is known to read the object back by
    #[error("{kind} write response carried no identifier")]
    MissingIdentifier { kind: ResourceKind },

    #[error(transparent)]
    Settle(#[from] SettleFailure),
}

impl ReconcileError {
    /// The settle failure, when the write itself went through
    pub fn settle_failure(&self) -> Option<&SettleFailure> {
        match self {
            ReconcileError::Settle(failure) => Some(failure),
            _ => None,
        }
    }
}

impl From<&SettleFailure> for ExError {
    fn from(failure: &SettleFailure) -> Self {
        let kind = match failure.cause {
            ExhaustionCause::DeadlineExceeded => ExErrorKind::NotConverged,
            ExhaustionCause::Cancelled => ExErrorKind::Cancelled,
        };
        let mut err = ExError::new(kind)
            .with_op("settle")
            .with_resource_kind(failure.resource_kind.as_str())
            .with_target_id(failure.target_id.clone())
            .with_message(format!(
                "not converged after {} read(s) ({})",
                failure.attempts, failure.cause
            ))
            .with_fields(failure.still_differing.iter().map(|f| f.to_string()).collect());
        if let Some(session_id) = &failure.session_id {
            err = err.with_session_id(session_id.clone());
        }
        match &failure.last_read_error {
            Some(read) => err.with_source(read.clone()),
            None => err,
        }
    }
}

impl From<SettleFailure> for ExError {
    fn from(failure: SettleFailure) -> Self {
        ExError::from(&failure)
    }
}

impl From<&ReconcileError> for ExError {
    fn from(err: &ReconcileError) -> Self {
        match err {
            ReconcileError::KindMismatch { catalog, intent } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("reconcile")
                    .with_resource_kind(intent.as_str())
                    .with_message(format!("catalog is for {}", catalog))
            }

            ReconcileError::Write { kind, source } => ExError::new(ExErrorKind::WriteFailed)
                .with_op("write")
                .with_resource_kind(kind.as_str())
                .with_message("write rejected")
                .with_source(source.clone()),

            ReconcileError::MissingIdentifier { kind } => {
                ExError::new(ExErrorKind::MissingIdentifier)
                    .with_op("reconcile")
                    .with_resource_kind(kind.as_str())
                    .with_message("write response carried no identifier")
            }

            ReconcileError::Settle(failure) => ExError::from(failure),
        }
    }
}

impl From<ReconcileError> for ExError {
    fn from(err: ReconcileError) -> Self {
        ExError::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(cause: ExhaustionCause, read_error: Option<ExError>) -> SettleFailure {
        SettleFailure {
            target_id: "17".to_string(),
            resource_kind: ResourceKind::Integration,
            cause,
            attempts: 4,
            still_differing: vec!["name", "monitor_ids"],
            last_snapshot: None,
            last_read_error: read_error,
            session_id: None,
        }
    }

    #[test]
    fn test_settle_failure_display() {
        let rendered = failure(ExhaustionCause::DeadlineExceeded, None).to_string();
        assert_eq!(
            rendered,
            "integration 17 did not converge after 4 read(s) (deadline exceeded); \
             still differing: [name, monitor_ids]"
        );
    }

    #[test]
    fn test_settle_failure_into_ex_error() {
        let err: ExError = failure(ExhaustionCause::DeadlineExceeded, None).into();
        assert_eq!(err.kind(), ExErrorKind::NotConverged);
        assert_eq!(err.target_id(), Some("17"));
        assert_eq!(err.resource_kind(), Some("integration"));
        assert_eq!(
            err.fields(),
            Some(&["name".to_string(), "monitor_ids".to_string()][..])
        );
        assert!(err.source_error().is_none());
        assert!(err.session_id().is_none());
    }

    #[test]
    fn test_settle_failure_carries_session_id() {
        let session = SessionId::new();
        let err = ExError::from(
            &failure(ExhaustionCause::DeadlineExceeded, None).with_session_id(session.clone()),
        );
        assert_eq!(err.session_id(), Some(&session));
    }

    #[test]
    fn test_cancelled_settle_keeps_read_error() {
        let read = ExError::new(ExErrorKind::ReadFailed).with_message("connection reset");
        let err: ExError = failure(ExhaustionCause::Cancelled, Some(read)).into();
        assert_eq!(err.kind(), ExErrorKind::Cancelled);
        assert_eq!(err.source_error().map(ExError::kind), Some(ExErrorKind::ReadFailed));
    }

    #[test]
    fn test_reconcile_error_kinds() {
        let write = ReconcileError::Write {
            kind: ResourceKind::Monitor,
            source: ExError::new(ExErrorKind::ExternalService),
        };
        assert_eq!(ExError::from(&write).kind(), ExErrorKind::WriteFailed);

        let missing = ReconcileError::MissingIdentifier {
            kind: ResourceKind::Monitor,
        };
        assert_eq!(ExError::from(missing).code(), "ERR_MISSING_IDENTIFIER");

        let settle = ReconcileError::from(failure(ExhaustionCause::DeadlineExceeded, None));
        assert!(settle.settle_failure().is_some());
        assert_eq!(ExError::from(settle).kind(), ExErrorKind::NotConverged);

        let mismatch = ReconcileError::KindMismatch {
            catalog: ResourceKind::Monitor,
            intent: ResourceKind::Integration,
        };
        assert_eq!(
            mismatch.to_string(),
            "integration intent reconciled against the monitor catalog"
        );
        assert_eq!(ExError::from(&mismatch).kind(), ExErrorKind::InvalidInput);
    }
}
