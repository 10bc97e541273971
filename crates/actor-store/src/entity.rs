//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (Customer,
//! Restaurant, Rider, Order, …) must implement to be managed by the generic
//! [`ResourceActor`](crate::ResourceActor). It names the associated types for
//! identifiers, DTOs, actions and queries, and provides async lifecycle hooks.
//!
//! # Architecture Note
//! By defining one contract that all resource types satisfy, the actor event
//! loop is written *once* and reused everywhere. The associated types keep the
//! whole surface type safe: an `OrderCreate` payload cannot be sent to the
//! restaurant actor, the compiler rejects it outright.
//!
//! # Provided Methods (Hooks)
//! `on_create`, `on_delete` and `run_query` have default implementations; an
//! entity only overrides the hooks it actually needs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by a
/// [`ResourceActor`](crate::ResourceActor).
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors. The
/// `Context` associated type carries runtime dependencies (other clients,
/// policy configuration, clocks) and is injected via `run()` instead of the
/// constructor, which keeps the dependency graph acyclic at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier for this entity. Must be convertible from `u32`
    /// because the actor assigns dense ids from an internal counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload applied to an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations that do not fit the CRUD shape
    /// (e.g. claiming an order, recording a completed delivery).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter describing which entities a list operation should return.
    /// Use `()` for entities that are never listed.
    type Query: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` if none.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers the whole actor rather than one per message; clients
    /// then match on a single error type. The enum is boxed into
    /// [`StoreError::EntityError`](crate::StoreError::EntityError) when it
    /// crosses the channel, and domain clients downcast it back out.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its assigned id and the create payload.
    /// Called synchronously before `on_create`; structural validation of the
    /// payload belongs here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is inserted into the
    /// store. A failure here discards the entity entirely, so cross-actor
    /// validation performed in this hook cannot leave partial state behind.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action. The actor processes one
    /// message at a time, so a read-check-write sequence inside this hook is
    /// atomic with respect to every other operation on the same store.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Query Hook (Sync) ---

    /// Evaluate a list query against the full store. The default returns
    /// every entity unordered; override to filter, sort and cap.
    fn run_query(store: &HashMap<Self::Id, Self>, _query: &Self::Query) -> Vec<Self> {
        store.values().cloned().collect()
    }
}
