//! Collaborator interfaces.
//!
//! The transport (authentication, HTTP, payload encoding) lives behind these
//! two traits. Both hand back the remote object's JSON representation.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use upkeep_core::{ExError, WriteIntent};

/// Reads the current representation of a remote object.
#[async_trait]
pub trait RemoteReader: Send + Sync {
    /// # Errors
    ///
    /// Any failure to obtain the representation. The settle poller treats
    /// every read error as transient.
    async fn read(&self, target_id: &str) -> Result<Value, ExError>;
}

/// Submits a write and returns the object the remote echoed back.
#[async_trait]
pub trait RemoteWriter: Send + Sync {
    /// # Errors
    ///
    /// The write was rejected or could not be delivered. Never retried.
    async fn write(&self, intent: &WriteIntent) -> Result<Value, ExError>;
}

#[async_trait]
impl<T: RemoteReader + ?Sized> RemoteReader for Arc<T> {
    async fn read(&self, target_id: &str) -> Result<Value, ExError> {
        (**self).read(target_id).await
    }
}

#[async_trait]
impl<T: RemoteWriter + ?Sized> RemoteWriter for Arc<T> {
    async fn write(&self, intent: &WriteIntent) -> Result<Value, ExError> {
        (**self).write(intent).await
    }
}
