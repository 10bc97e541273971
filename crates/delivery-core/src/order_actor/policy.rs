//! Authorization for status transitions.
//!
//! One predicate decides, from the caller's relationship to the order, which
//! target statuses that caller may request. Transition *legality* (what the
//! current status allows) is a separate check on [`OrderStatus`]; this module
//! only answers "may this caller ask for that status at all".

use crate::model::{Caller, Order, OrderStatus};

const RESTAURANT_TARGETS: &[OrderStatus] = &[
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::Ready,
    OrderStatus::Cancelled,
];

const RIDER_TARGETS: &[OrderStatus] = &[OrderStatus::PickedUp, OrderStatus::Delivered];

const ADMIN_TARGETS: &[OrderStatus] = &[
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Preparing,
    OrderStatus::Ready,
    OrderStatus::PickedUp,
    OrderStatus::Delivered,
    OrderStatus::Cancelled,
];

/// Target statuses `caller` may request for `order`.
///
/// - The order's own restaurant drives the kitchen-side half of the
///   lifecycle and retains discretionary cancellation.
/// - The assigned rider (and only the assigned rider) drives the
///   delivery-side half.
/// - Admins may request anything; the transition table still applies.
/// - Everyone else, including the customer, gets nothing — customers cancel
///   through their dedicated operation, not through status updates.
pub fn allowed_targets(caller: &Caller, order: &Order) -> &'static [OrderStatus] {
    match caller {
        Caller::Restaurant(id) if *id == order.restaurant_id => RESTAURANT_TARGETS,
        Caller::Rider(id) if order.rider_id == Some(*id) => RIDER_TARGETS,
        Caller::Admin => ADMIN_TARGETS,
        _ => &[],
    }
}
