//! Error types for the Restaurant actor.

use actor_store::StoreError;
use thiserror::Error;

/// Errors that can occur during restaurant operations.
#[derive(Debug, Error)]
pub enum RestaurantError {
    #[error("restaurant not found: {0}")]
    NotFound(String),
    #[error("menu item not found: {0}")]
    MenuItemNotFound(u32),
    #[error("invalid restaurant data: {0}")]
    Validation(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl RestaurantError {
    /// Recovers the domain error from the storage layer's wrapper.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => Self::NotFound(id),
            StoreError::EntityError(inner) => match inner.downcast::<RestaurantError>() {
                Ok(e) => *e,
                Err(inner) => Self::Internal(inner.to_string()),
            },
            other => Self::Internal(other.to_string()),
        }
    }
}
