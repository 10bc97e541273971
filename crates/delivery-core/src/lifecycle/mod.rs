//! # System Lifecycle & Orchestration
//!
//! Starts, wires and shuts down the four actors that make up the delivery
//! system. Actors are created first with no dependencies, then started with
//! their context injected at `run()` time, so the order actor can hold
//! clients for the other three without any construction-order gymnastics.
//!
//! Shutdown follows the channel-closure pattern: drop every client the
//! system holds, each actor's `recv()` returns `None`, and the run loops
//! exit after draining what is already queued. The order actor's context
//! holds clones of the profile clients, but the dependency graph is acyclic
//! so those clones die with the order actor itself.

pub mod delivery_system;

pub use delivery_system::DeliverySystem;
