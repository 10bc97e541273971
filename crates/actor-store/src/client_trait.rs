//! # ActorClient Trait
//!
//! Common interface for resource-specific client wrappers. Supplies default
//! `get` and `delete` implementations on top of the generic
//! [`ResourceClient`], so domain clients only write their bespoke methods.

use crate::{ActorEntity, ResourceClient, StoreError};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read/delete
/// operations.
///
/// A wrapper implements `inner()` (exposing its generic client) and
/// `map_error` (translating [`StoreError`] into its own error enum), and gets
/// `get`/`delete` for free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map storage-layer errors to the specific resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
