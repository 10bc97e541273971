//! # Delivery Core
//!
//! The order lifecycle engine of a food-delivery marketplace, built on the
//! [`actor_store`] resource-actor pattern: one actor per entity type
//! (customers, restaurants, riders, orders), each owning its store and
//! processing requests sequentially.
//!
//! The order actor is where the interesting invariants live: the forward-only
//! status machine, role-scoped transition authorization, the race-free rider
//! claim, the customer cancellation grace window, and the append-only
//! tracking log with strictly increasing timestamps. Status changes fan out
//! to interested parties through the in-process [`notify::NotificationHub`].

pub mod clients;
pub mod clock;
pub mod config;
pub mod customer_actor;
pub mod lifecycle;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod payment;
pub mod pricing;
pub mod restaurant_actor;
pub mod rider_actor;
