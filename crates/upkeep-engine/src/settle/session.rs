//! Mutable state of one settle call.

use crate::errors::{ExhaustionCause, SettleFailure};
use upkeep_core::diff::{converged, still_differing};
use upkeep_core::{DesiredProjection, ExError, ObservedSnapshot, ResourceKind};

#[derive(Debug)]
pub struct SettleSession {
    required: u32,
    attempts: u32,
    consecutive: u32,
    last_snapshot: Option<ObservedSnapshot>,
    last_read_error: Option<ExError>,
}

impl SettleSession {
    /// A required count of zero is treated as one.
    pub fn new(required: u32) -> Self {
        Self {
            required: required.max(1),
            attempts: 0,
            consecutive: 0,
            last_snapshot: None,
            last_read_error: None,
        }
    }

    /// Record a completed read.
    pub fn record_snapshot(&mut self, snapshot: ObservedSnapshot, matched: bool) {
        self.attempts += 1;
        self.consecutive = if matched { self.consecutive + 1 } else { 0 };
        self.last_snapshot = Some(snapshot);
        self.last_read_error = None;
    }

    /// Record a failed read. Breaks any run of matches.
    pub fn record_read_error(&mut self, err: ExError) {
        self.attempts += 1;
        self.consecutive = 0;
        self.last_read_error = Some(err);
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn consecutive(&self) -> u32 {
        self.consecutive
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn is_stable(&self) -> bool {
        self.consecutive >= self.required
    }

    pub fn last_snapshot(&self) -> Option<&ObservedSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn last_read_error(&self) -> Option<&ExError> {
        self.last_read_error.as_ref()
    }

    /// Hand out the last snapshot once enough consecutive matches were seen.
    pub fn take_stable(&mut self) -> Option<ObservedSnapshot> {
        if self.is_stable() {
            self.last_snapshot.take()
        } else {
            None
        }
    }

    /// Close the session after the deadline or a cancellation.
    ///
    /// The last snapshot gets one more convergence check; a pass is a success
    /// even when fewer consecutive matches than required were seen.
    pub fn exhaust(
        self,
        cause: ExhaustionCause,
        kind: ResourceKind,
        target_id: &str,
        desired: &DesiredProjection,
    ) -> Result<ObservedSnapshot, SettleFailure> {
        match self.last_snapshot {
            Some(snapshot) if converged(desired, &snapshot) => Ok(snapshot),
            last_snapshot => Err(SettleFailure {
                target_id: target_id.to_string(),
                resource_kind: kind,
                cause,
                attempts: self.attempts,
                still_differing: last_snapshot
                    .as_ref()
                    .map(|s| still_differing(desired, s))
                    .unwrap_or_else(|| desired.asserted_names()),
                last_snapshot,
                last_read_error: self.last_read_error,
                session_id: None,
            }),
        }
    }
}
