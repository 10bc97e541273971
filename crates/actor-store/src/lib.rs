//! # Actor Store
//!
//! Resource-actor storage layer: every persisted entity type is owned by a
//! single Tokio task that processes requests sequentially, so the store
//! itself is the only synchronization point.
//!
//! ## Architecture
//!
//! The crate separates three concerns:
//!
//! 1. **Entity layer** ([`ActorEntity`]) — domain models and their lifecycle
//!    hooks. This is where business logic lives.
//! 2. **Runtime layer** ([`ResourceActor`]) — the event loop owning the
//!    entity map, processing one message at a time.
//! 3. **Interface layer** ([`ResourceClient`]) — the cloneable, type-safe
//!    handle used by the rest of the system.
//!
//! Business logic is written once against the trait; the runtime handles the
//! message passing, id assignment and error plumbing for every entity type.
//!
//! ## Operations
//!
//! Each actor answers the standard resource lifecycle — Create, Get, Update,
//! Delete — plus:
//!
//! - **Action**: an entity-specific operation executed inside the actor's
//!   message turn. Because turns never interleave, a check-then-mutate
//!   sequence in [`ActorEntity::handle_action`] is a genuine conditional
//!   write: two racing callers resolve to exactly one winner.
//! - **Query**: a filtered list read evaluated by [`ActorEntity::run_query`]
//!   over the whole store.
//!
//! ## Wiring
//!
//! Actors are created first and wired afterwards: dependencies (clients of
//! other actors, configuration, clocks) are injected through the `Context`
//! associated type when the loop starts.
//!
//! ```rust
//! use actor_store::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter {
//!     id: u32,
//!     value: i64,
//! }
//!
//! #[derive(Debug)]
//! struct CounterCreate {
//!     start: i64,
//! }
//! #[derive(Debug)]
//! struct CounterUpdate {
//!     value: Option<i64>,
//! }
//! #[derive(Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//! #[derive(Debug, thiserror::Error)]
//! #[error("counter error")]
//! struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = CounterUpdate;
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type Query = ();
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: params.start })
//!     }
//!
//!     async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
//!         if let Some(value) = update.value {
//!             self.value = value;
//!         }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<i64, Self::Error> {
//!         match action {
//!             CounterAction::Increment => {
//!                 self.value += 1;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate { start: 41 }).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Increment).await.unwrap();
//!     assert_eq!(value, 42);
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient<T>`, an in-memory double that
//! answers the same channel protocol from a scripted expectation queue. Use
//! it to test the logic around a client without spawning the real actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::StoreError;
pub use message::{ResourceRequest, Response};
