//! Write-then-settle orchestration.

use crate::client::{RemoteReader, RemoteWriter};
use crate::config::EngineConfig;
use crate::errors::ReconcileError;
use crate::settle::{settle, CallerContext};
use tokio::time::Instant;
use upkeep_core::{build_desired_with_subtype, build_observed, converged};
use upkeep_core::{log_op_end, log_op_error, log_op_start};
use upkeep_core::{DesiredProjection, ExError, ObservedSnapshot, ResourceCatalog, WriteIntent};

const OP_RECONCILE: &str = "reconcile";

/// A write whose effect was observed on the remote object.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub target_id: String,
    pub desired: DesiredProjection,
    /// The snapshot that matched: the write echo, or the last settle read
    pub snapshot: ObservedSnapshot,
    /// False when the write echo already matched and no read was needed
    pub settled: bool,
}

pub struct Reconciler<C> {
    client: C,
    config: EngineConfig,
}

impl<C> Reconciler<C>
where
    C: RemoteReader + RemoteWriter,
{
    pub fn new(client: C, config: EngineConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Submit `intent` and wait until the remote object reflects it.
    ///
    /// The desired projection is built only once the write went through,
    /// gated by the subtype the echo reports when the intent names none. If
    /// the echoed object already matches it, no read is made; otherwise the
    /// object is polled under the settle policy configured for its kind.
    ///
    /// # Errors
    ///
    /// - [`ReconcileError::KindMismatch`] when `catalog` is not the intent's
    ///   kind; nothing is written
    /// - [`ReconcileError::Write`] when the write is rejected (never retried)
    /// - [`ReconcileError::MissingIdentifier`] when neither the echo nor the
    ///   intent names the object
    /// - [`ReconcileError::Settle`] when the object does not converge in time
    pub async fn apply(
        &self,
        catalog: &ResourceCatalog,
        intent: &WriteIntent,
        ctx: &CallerContext,
    ) -> Result<Reconciled, ReconcileError> {
        let started = Instant::now();
        log_op_start!(
            OP_RECONCILE,
            resource_kind = %catalog.kind,
            write_op = intent.op().as_str(),
            session_id = %ctx.session_id(),
        );

        let result = self.write_then_settle(catalog, intent, ctx).await;
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(done) => {
                log_op_end!(
                    OP_RECONCILE,
                    duration_ms = duration_ms,
                    target_id = done.target_id.as_str(),
                    settled = done.settled,
                );
            }
            Err(err) => {
                let ex_err = ExError::from(err).with_session_id(ctx.session_id().clone());
                log_op_error!(OP_RECONCILE, ex_err, duration_ms = duration_ms);
            }
        }
        result
    }

    async fn write_then_settle(
        &self,
        catalog: &ResourceCatalog,
        intent: &WriteIntent,
        ctx: &CallerContext,
    ) -> Result<Reconciled, ReconcileError> {
        if catalog.kind != intent.kind() {
            return Err(ReconcileError::KindMismatch {
                catalog: catalog.kind,
                intent: intent.kind(),
            });
        }

        let echoed = self
            .client
            .write(intent)
            .await
            .map_err(|source| ReconcileError::Write {
                kind: catalog.kind,
                source,
            })?;

        let echoed_subtype = catalog.observed_subtype(&echoed);
        let desired = build_desired_with_subtype(catalog, intent, echoed_subtype.as_deref());
        let echo = build_observed(catalog, &echoed);

        let target_id = echo
            .id()
            .or(intent.target_id())
            .map(str::to_string)
            .ok_or(ReconcileError::MissingIdentifier { kind: catalog.kind })?;

        if converged(&desired, &echo) {
            tracing::debug!(target_id = %target_id, "write echo already converged");
            return Ok(Reconciled {
                target_id,
                desired,
                snapshot: echo,
                settled: false,
            });
        }

        let policy = self.config.policy_for(catalog.kind);
        let snapshot = settle(&self.client, catalog, &target_id, &desired, &policy, ctx).await?;
        Ok(Reconciled {
            target_id,
            desired,
            snapshot,
            settled: true,
        })
    }
}
