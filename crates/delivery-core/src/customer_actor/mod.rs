//! # Customer Actor
//!
//! Manages customer accounts and their saved delivery addresses. The
//! simplest actor in the system: no dependencies (`Context = ()`) and no
//! custom actions. The order actor reads customers to verify address
//! ownership at order placement.

pub mod entity;
pub mod error;

pub use entity::CustomerAction;
pub use error::CustomerError;

use crate::model::Customer;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new Customer actor and its generic client.
pub fn new() -> (ResourceActor<Customer>, ResourceClient<Customer>) {
    ResourceActor::new(32)
}
