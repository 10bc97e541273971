//! Error types for the Rider actor.

use actor_store::StoreError;
use thiserror::Error;

/// Errors that can occur during rider operations.
#[derive(Debug, Error)]
pub enum RiderError {
    #[error("rider not found: {0}")]
    NotFound(String),
    #[error("invalid rider data: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl RiderError {
    /// Recovers the domain error from the storage layer's wrapper.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<RiderError>() {
                Ok(e) => *e,
                Err(inner) => Self::Internal(inner.to_string()),
            },
            other => Self::Internal(other.to_string()),
        }
    }
}
