use crate::model::{CustomerId, GeoPoint, RestaurantId, RiderId};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// The `Display` form doubles as the order's tracking-subscribers topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// The order lifecycle.
///
/// `pending → confirmed → preparing → ready → picked_up → delivered`, with
/// `cancelled` reachable from `pending` or `confirmed` only. No transition
/// moves backward; `delivered` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    PickedUp,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The transition table: which statuses may follow `self`.
    pub fn next_allowed(self) -> &'static [OrderStatus] {
        use OrderStatus::*;
        match self {
            Pending => &[Confirmed, Cancelled],
            Confirmed => &[Preparing, Cancelled],
            Preparing => &[Ready],
            Ready => &[PickedUp],
            PickedUp => &[Delivered],
            Delivered | Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.next_allowed().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.next_allowed().is_empty()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Cash,
    Wallet,
}

/// Payment progress as seen by the lifecycle engine. The processor itself is
/// opaque; only its "succeeded" signal is recorded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum PaymentState {
    Unpaid,
    Paid { reference: String },
    Refunded { reference: String },
}

/// A line item as requested by the caller.
#[derive(Debug, Clone)]
pub struct OrderItemRequest {
    pub menu_item_id: u32,
    pub quantity: u32,
    pub note: Option<String>,
}

/// A line item frozen into the order: the name and unit price are captured
/// from the catalog at creation time and never change afterwards, whatever
/// happens to the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: u32,
    pub name: String,
    pub unit_price: u32,
    pub quantity: u32,
    pub note: Option<String>,
}

/// The monetary breakdown, derived once at creation and immutable.
///
/// Invariant: `total = subtotal + delivery_fee + platform_fee + taxes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pricing {
    pub subtotal: u32,
    pub delivery_fee: u32,
    pub platform_fee: u32,
    pub taxes: u32,
    pub total: u32,
}

/// One append-only tracking log row. Never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEntry {
    pub status: OrderStatus,
    pub message: String,
    pub at: DateTime<Utc>,
}

/// Who is asking for a lifecycle transition. Authorization is decided from
/// the caller's relationship to the order, not a generic permission bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Customer(CustomerId),
    Restaurant(RestaurantId),
    Rider(RiderId),
    Admin,
}

/// A placed order: the aggregate the lifecycle engine operates on.
///
/// The tracking log is embedded so that appending an entry is atomic with
/// the transition that produced it. Restaurant name and location are
/// snapshotted at creation, like item prices, so rider dispatch never has to
/// join back to the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: String,
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub restaurant_name: String,
    pub restaurant_location: Option<GeoPoint>,
    pub address_id: u32,
    pub items: Vec<OrderItem>,
    pub payment_method: PaymentMethod,
    pub instructions: Option<String>,
    pub pricing: Pricing,
    pub status: OrderStatus,
    pub rider_id: Option<RiderId>,
    pub payment: PaymentState,
    pub cancellation_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub preparing_at: Option<DateTime<Utc>>,
    pub ready_at: Option<DateTime<Utc>>,
    pub picked_up_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub estimated_delivery_at: DateTime<Utc>,
    pub delivery_duration_minutes: Option<i64>,
    pub tracking: Vec<TrackingEntry>,
}

impl Order {
    /// Stamps the lifecycle timestamp matching `status`, only if it has not
    /// been set before. `Pending` has no slot; `created_at` covers it.
    pub fn stamp(&mut self, status: OrderStatus, at: DateTime<Utc>) {
        let slot = match status {
            OrderStatus::Pending => return,
            OrderStatus::Confirmed => &mut self.confirmed_at,
            OrderStatus::Preparing => &mut self.preparing_at,
            OrderStatus::Ready => &mut self.ready_at,
            OrderStatus::PickedUp => &mut self.picked_up_at,
            OrderStatus::Delivered => &mut self.delivered_at,
            OrderStatus::Cancelled => &mut self.cancelled_at,
        };
        if slot.is_none() {
            *slot = Some(at);
        }
    }

    /// Appends one tracking entry. Per-order tracking timestamps are kept
    /// strictly increasing: a same-instant transition is nudged forward by a
    /// millisecond rather than recorded twice at the same time.
    pub fn append_tracking_at(
        &mut self,
        status: OrderStatus,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) {
        let at = match self.tracking.last() {
            Some(last) if now <= last.at => last.at + Duration::milliseconds(1),
            _ => now,
        };
        self.tracking.push(TrackingEntry {
            status,
            message: message.into(),
            at,
        });
    }
}

/// Payload for placing an order. All monetary fields are derived server-side;
/// the caller supplies only references and quantities.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub restaurant_id: RestaurantId,
    pub address_id: u32,
    pub items: Vec<OrderItemRequest>,
    pub payment_method: PaymentMethod,
    pub instructions: Option<String>,
}

/// Filters understood by the order store.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    ForCustomer(CustomerId),
    ForRestaurant(RestaurantId),
    /// Ready, unclaimed orders for rider dispatch: oldest-ready first,
    /// optionally filtered by distance from the rider, capped at `limit`.
    AvailableForRider {
        location: Option<GeoPoint>,
        radius_km: f64,
        limit: usize,
    },
}

/// Builds a human-readable order number from the creation time and a random
/// suffix, e.g. `ORD-1756450800-4821`. Sortable by creation; uniqueness is
/// best-effort only and nothing relies on it surviving a true collision.
pub fn generate_order_number(now: DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(1000..10000);
    format!("ORD-{}-{}", now.timestamp(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_table_is_forward_only() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Preparing));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(PickedUp));
        assert!(PickedUp.can_transition_to(Delivered));

        // No backward moves, no skipping the cancellation window.
        assert!(!Confirmed.can_transition_to(Pending));
        assert!(!Preparing.can_transition_to(Cancelled));
        assert!(!Ready.can_transition_to(Cancelled));
        assert!(!Ready.can_transition_to(Delivered));
        assert!(!Delivered.can_transition_to(Cancelled));
    }

    #[test]
    fn delivered_and_cancelled_are_terminal() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Ready.is_terminal());
    }

    #[test]
    fn status_display_matches_wire_labels() {
        assert_eq!(OrderStatus::PickedUp.to_string(), "picked_up");
        assert_eq!(OrderStatus::Pending.to_string(), "pending");
    }

    #[test]
    fn order_number_is_sortable_and_carries_suffix() {
        let earlier = generate_order_number(Utc::now());
        let later = generate_order_number(Utc::now() + Duration::seconds(2));
        assert!(later > earlier);
        assert_eq!(earlier.matches('-').count(), 2);
    }
}
