//! Error taxonomy for the order lifecycle engine.

use actor_store::StoreError;
use thiserror::Error;

/// Errors reported by order operations.
///
/// Every kind maps to one failure class a caller can act on: the entity did
/// not resolve, the caller lacks the relationship the transition requires,
/// the operation is illegal from the order's current state, the caller lost
/// a race, the input was malformed, or something below us broke.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl OrderError {
    /// Recovers the domain error from the storage layer's wrapper, so the
    /// error kind survives the trip through the actor channel.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(e) => *e,
                Err(inner) => Self::Internal(inner.to_string()),
            },
            other => Self::Internal(other.to_string()),
        }
    }
}
