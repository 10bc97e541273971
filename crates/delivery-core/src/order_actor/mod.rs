//! # Order Actor
//!
//! The lifecycle engine. Owns every order from placement to its terminal
//! state and is the synchronization point for all order mutations: status
//! transitions, customer cancellation, payment recording and the rider
//! claim all run one-at-a-time inside its message loop.
//!
//! Dependencies on the other actors arrive late, through [`OrderContext`]
//! at `run()` time, which keeps construction free of ordering constraints.

pub mod actions;
pub mod entity;
pub mod error;
pub mod policy;

pub use actions::OrderAction;
pub use error::OrderError;

use crate::clients::{CustomerClient, RestaurantClient, RiderClient};
use crate::clock::Clock;
use crate::config::Config;
use crate::model::Order;
use crate::notify::NotificationHub;
use crate::payment::PaymentProcessor;
use actor_store::{ResourceActor, ResourceClient};
use std::sync::Arc;

/// Everything the order actor's hooks need from the rest of the system.
///
/// The sibling clients are cheap clones of channel senders; the processor
/// and clock are shared trait objects so tests can substitute a stub
/// processor and a manual clock.
#[derive(Clone)]
pub struct OrderContext {
    pub customers: CustomerClient,
    pub restaurants: RestaurantClient,
    pub riders: RiderClient,
    pub notifier: NotificationHub,
    pub payments: Arc<dyn PaymentProcessor>,
    pub clock: Arc<dyn Clock>,
    pub config: Arc<Config>,
}

/// Creates a new Order actor and its generic client.
pub fn new() -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32)
}
