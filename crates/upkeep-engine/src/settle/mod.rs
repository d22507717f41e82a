//! Settle poller.
//!
//! After a write, the remote object is read back until it matches the
//! desired projection. The poller owns one [`session::SettleSession`] per
//! call and moves through three states:
//!
//! - polling: read, snapshot, compare, sleep the current backoff
//! - converged: enough consecutive matching reads were seen
//! - exhausted: the deadline passed or the caller cancelled
//!
//! Suspension happens only while a read is in flight and while sleeping;
//! both are interrupted by cancellation and by the deadline.

pub mod backoff;
pub mod poller;
pub mod session;

pub use backoff::Backoff;
pub use poller::{effective_deadline, settle};
pub use session::SettleSession;

use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use upkeep_core_types::{RequestContext, SessionId};

/// How long and how hard one settle call polls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlePolicy {
    pub timeout: Duration,
    pub backoff: Backoff,
    /// Consecutive matching reads needed before the object counts as settled
    pub required_matches: u32,
}

impl SettlePolicy {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn with_backoff(mut self, backoff: Backoff) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_required_matches(mut self, required_matches: u32) -> Self {
        self.required_matches = required_matches;
        self
    }
}

impl Default for SettlePolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            backoff: Backoff::default(),
            required_matches: 1,
        }
    }
}

/// What the caller imposes on a settle call: an optional deadline of its
/// own, a cancellation token and the correlation context.
#[derive(Debug, Clone, Default)]
pub struct CallerContext {
    deadline: Option<Instant>,
    cancel: CancellationToken,
    request: RequestContext,
}

impl CallerContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn with_request(mut self, request: RequestContext) -> Self {
        self.request = request;
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn request(&self) -> &RequestContext {
        &self.request
    }

    pub fn session_id(&self) -> &SessionId {
        &self.request.session_id
    }
}
