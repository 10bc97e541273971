//! # Restaurant Actor
//!
//! Manages the restaurant catalog: menu, open/active flags, delivery fee and
//! minimum order. The order actor reads a restaurant once at order placement
//! and freezes everything it needs into the order, so later catalog changes
//! never leak into existing orders.

pub mod entity;
pub mod error;

pub use entity::RestaurantAction;
pub use error::RestaurantError;

use crate::model::Restaurant;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new Restaurant actor and its generic client.
pub fn new() -> (ResourceActor<Restaurant>, ResourceClient<Restaurant>) {
    ResourceActor::new(32)
}
