//! # Rider Actor
//!
//! Manages courier profiles: availability, last known location and the
//! lifetime delivery counter. Deliberately *not* involved in the claim
//! invariant — a rider profile carries no "currently delivering" lock; the
//! at-most-one-claim rule is enforced on the order side.

pub mod entity;
pub mod error;

pub use entity::RiderAction;
pub use error::RiderError;

use crate::model::Rider;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new Rider actor and its generic client.
pub fn new() -> (ResourceActor<Rider>, ResourceClient<Rider>) {
    ResourceActor::new(32)
}
