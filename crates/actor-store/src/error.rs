//! # Store Errors
//!
//! Common error types for the storage layer. Domain crates map these back to
//! their own error enums; entity errors travel boxed and are recovered by
//! downcasting on the client side.

/// Errors that can occur within the storage layer itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
