//! Lifecycle actions on the Order entity.
//!
//! Every mutation after creation goes through one of these actions. The
//! order actor processes one action per message turn, so each action's
//! precondition checks and its write are atomic — in particular, `Accept` is
//! the conditional claim write: assign-only-if-still-unassigned.

use crate::model::{Caller, CustomerId, OrderStatus, RiderId};

/// State-changing operations on a placed order. Each returns the updated
/// order on success.
#[derive(Debug)]
pub enum OrderAction {
    /// Role-scoped status transition (restaurant, assigned rider, or admin).
    UpdateStatus {
        caller: Caller,
        target: OrderStatus,
        message: Option<String>,
    },
    /// Customer-initiated cancellation, constrained to the grace window once
    /// the order has been confirmed.
    CancelByCustomer {
        customer_id: CustomerId,
        reason: Option<String>,
    },
    /// Rider claim. Rider identity is resolved by the caller beforehand; the
    /// name and phone travel with the action so the assignment notification
    /// and tracking entry need no second lookup.
    Accept {
        rider_id: RiderId,
        rider_name: String,
        rider_phone: String,
    },
    /// Records a succeeded payment intent against the order.
    RecordPayment { reference: String },
}
