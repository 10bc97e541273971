//! # Generic Messages
//!
//! Message types exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a resource actor.
///
/// The variants map to the standard lifecycle of a persisted resource —
/// Create, Get, Update, Delete — plus two extensions the delivery domain
/// leans on heavily:
///
/// - **Action**: resource-specific operations ([`ActorEntity::Action`]) that
///   must run inside the actor's message turn. Because the actor processes
///   one message at a time, an action is the storage layer's conditional
///   write: its read-check-mutate sequence cannot interleave with another
///   request.
/// - **Query**: filtered list reads evaluated by [`ActorEntity::run_query`].
///
/// Every variant is generic over the entity's associated types, so a payload
/// for one resource type can never be addressed to a different actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Query {
        query: T::Query,
        respond_to: Response<Vec<T>>,
    },
}
