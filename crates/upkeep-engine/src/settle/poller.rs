//! The settle loop.

use crate::client::RemoteReader;
use crate::errors::{ExhaustionCause, SettleFailure};
use crate::settle::{CallerContext, SettlePolicy, SettleSession};
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use upkeep_core::diff::still_differing;
use upkeep_core::{build_observed, log_op_end, log_op_error, log_op_start};
use upkeep_core::{DesiredProjection, ObservedSnapshot, ResourceCatalog};
use upkeep_core_types::schema::EVENT_SETTLE_ATTEMPT;

const OP_SETTLE: &str = "settle";

/// Stand-in for "no deadline" when `now + timeout` overflows
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// The earlier of the poller's own deadline and the caller's.
pub fn effective_deadline(now: Instant, timeout: Duration, caller: Option<Instant>) -> Instant {
    let own = now.checked_add(timeout).unwrap_or_else(|| now + FAR_FUTURE);
    match caller {
        Some(caller) => own.min(caller),
        None => own,
    }
}

/// Poll `target_id` until it matches `desired`.
///
/// Each cycle reads the remote object, builds a snapshot and compares it.
/// A matching read increments the consecutive-match counter; a mismatching
/// or failed read resets it. Once the counter reaches
/// `policy.required_matches` the last snapshot is returned.
///
/// # Errors
///
/// Returns [`SettleFailure`] when the deadline passes or the caller cancels
/// and the last snapshot still does not match. A read in flight at that
/// moment is abandoned.
pub async fn settle<R>(
    reader: &R,
    catalog: &ResourceCatalog,
    target_id: &str,
    desired: &DesiredProjection,
    policy: &SettlePolicy,
    ctx: &CallerContext,
) -> Result<ObservedSnapshot, SettleFailure>
where
    R: RemoteReader + ?Sized,
{
    let started = Instant::now();
    let deadline = effective_deadline(started, policy.timeout, ctx.deadline());
    let cancel = ctx.cancel_token();
    let mut session = SettleSession::new(policy.required_matches);

    log_op_start!(
        OP_SETTLE,
        target_id = target_id,
        resource_kind = %catalog.kind,
        session_id = %ctx.session_id(),
        required_matches = session.required(),
        asserted = desired.asserted_names().len(),
    );

    let cause = loop {
        let read = tokio::select! {
            biased;
            _ = cancel.cancelled() => break ExhaustionCause::Cancelled,
            _ = sleep_until(deadline) => break ExhaustionCause::DeadlineExceeded,
            read = reader.read(target_id) => read,
        };

        let differing = match read {
            Ok(raw) => {
                let snapshot = build_observed(catalog, &raw);
                let differing = still_differing(desired, &snapshot);
                session.record_snapshot(snapshot, differing.is_empty());
                differing
            }
            Err(err) => {
                tracing::debug!(target_id = target_id, error = %err, "settle read failed");
                session.record_read_error(err);
                desired.asserted_names()
            }
        };

        if let Some(snapshot) = session.take_stable() {
            log_op_end!(
                OP_SETTLE,
                duration_ms = started.elapsed().as_millis() as u64,
                target_id = target_id,
                attempts = session.attempts(),
            );
            return Ok(snapshot);
        }

        let delay = policy.backoff.delay(session.attempts().saturating_sub(1));
        tracing::debug!(
            component = module_path!(),
            op = OP_SETTLE,
            event = EVENT_SETTLE_ATTEMPT,
            target_id = target_id,
            attempt = session.attempts(),
            consecutive_matches = session.consecutive(),
            required_matches = session.required(),
            differing = %differing.join(","),
            backoff_ms = delay.as_millis() as u64,
        );

        let wake = Instant::now()
            .checked_add(delay)
            .map_or(deadline, |t| t.min(deadline));
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break ExhaustionCause::Cancelled,
            _ = sleep_until(wake) => {}
        }
    };

    let attempts = session.attempts();
    let exhausted = session
        .exhaust(cause, catalog.kind, target_id, desired)
        .map_err(|failure| failure.with_session_id(ctx.session_id().clone()));
    match exhausted {
        Ok(snapshot) => {
            log_op_end!(
                OP_SETTLE,
                duration_ms = started.elapsed().as_millis() as u64,
                target_id = target_id,
                attempts = attempts,
                rechecked = true,
            );
            Ok(snapshot)
        }
        Err(failure) => {
            log_op_error!(
                OP_SETTLE,
                &failure,
                duration_ms = started.elapsed().as_millis() as u64,
                target_id = target_id,
                attempts = attempts,
                cause = %failure.cause,
                differing = %failure.still_differing.join(","),
            );
            Err(failure)
        }
    }
}
