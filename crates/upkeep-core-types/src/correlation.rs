//! Correlation types for settle sessions
//!
//! A settle session performs many reads against the same remote object.
//! Every event it emits carries the same `SessionId` so the reads of one
//! reconciliation can be stitched together in the logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for one reconciliation (write plus settle) or one bare settle call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a new time-ordered SessionId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for propagation from a caller)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried from the caller into a reconciliation
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub session_id: SessionId,
    /// Free-form label of the caller (e.g. the plan step that triggered the write)
    pub origin: Option<String>,
}

impl RequestContext {
    /// Create a new context with a fresh SessionId
    pub fn new() -> Self {
        Self {
            session_id: SessionId::new(),
            origin: None,
        }
    }

    /// Create a context that continues an existing session
    pub fn with_session_id(session_id: SessionId) -> Self {
        Self {
            session_id,
            origin: None,
        }
    }

    /// Attach an origin label
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
