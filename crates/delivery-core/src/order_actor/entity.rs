//! [`ActorEntity`] implementation for [`Order`]: the lifecycle engine.
//!
//! Creation validates against the restaurant and customer actors, freezes
//! the monetary breakdown, and appends the initial tracking entry before the
//! order is inserted into the store — a failure anywhere leaves no partial
//! state. All later mutations arrive as [`OrderAction`]s and run inside the
//! actor's message turn, which is what makes the rider claim an atomic
//! conditional write.

use super::{policy, OrderAction, OrderContext, OrderError};
use crate::model::{
    generate_order_number, haversine_km, Caller, CustomerId, Order, OrderCreate, OrderId,
    OrderQuery, OrderStatus, PaymentState, Pricing, RiderId,
};
use crate::notify::NotificationEvent;
use crate::payment::{IntentStatus, PaymentError};
use crate::pricing::price_order;
use actor_store::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Duration;
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Query = OrderQuery;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::Validation(
                "order must contain at least one item".into(),
            ));
        }
        if params.items.iter().any(|i| i.quantity == 0) {
            return Err(OrderError::Validation(
                "item quantity must be at least 1".into(),
            ));
        }

        // Names and prices are placeholders until on_create resolves them
        // against the catalog; created_at is finalized there as well, from
        // the injected clock.
        let items = params
            .items
            .into_iter()
            .map(|r| crate::model::OrderItem {
                menu_item_id: r.menu_item_id,
                name: String::new(),
                unit_price: 0,
                quantity: r.quantity,
                note: r.note,
            })
            .collect();
        let placeholder = chrono::Utc::now();

        Ok(Self {
            id,
            order_number: String::new(),
            customer_id: params.customer_id,
            restaurant_id: params.restaurant_id,
            restaurant_name: String::new(),
            restaurant_location: None,
            address_id: params.address_id,
            items,
            payment_method: params.payment_method,
            instructions: params.instructions,
            pricing: Pricing::default(),
            status: OrderStatus::Pending,
            rider_id: None,
            payment: PaymentState::Unpaid,
            cancellation_reason: None,
            created_at: placeholder,
            confirmed_at: None,
            preparing_at: None,
            ready_at: None,
            picked_up_at: None,
            delivered_at: None,
            cancelled_at: None,
            estimated_delivery_at: placeholder,
            delivery_duration_minutes: None,
            tracking: Vec::new(),
        })
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        let restaurant = ctx
            .restaurants
            .get(self.restaurant_id)
            .await
            .map_err(|e| OrderError::Internal(e.to_string()))?
            .ok_or_else(|| OrderError::NotFound(format!("restaurant {}", self.restaurant_id)))?;
        if !restaurant.active || !restaurant.open {
            return Err(OrderError::InvalidState(format!(
                "restaurant {} is not accepting orders",
                restaurant.name
            )));
        }

        let customer = ctx
            .customers
            .get(self.customer_id)
            .await
            .map_err(|e| OrderError::Internal(e.to_string()))?
            .ok_or_else(|| OrderError::NotFound(format!("customer {}", self.customer_id)))?;
        if customer.address(self.address_id).is_none() {
            return Err(OrderError::NotFound(format!(
                "address {} for {}",
                self.address_id, self.customer_id
            )));
        }

        // Resolve and freeze every line item; one unavailable item fails the
        // whole order, never a partial one.
        for item in &mut self.items {
            let menu_item = restaurant
                .menu_item(item.menu_item_id)
                .filter(|m| m.available)
                .ok_or_else(|| {
                    OrderError::InvalidState(format!(
                        "menu item {} is not available at {}",
                        item.menu_item_id, restaurant.name
                    ))
                })?;
            item.name = menu_item.name.clone();
            item.unit_price = menu_item.price;
        }

        let delivery_fee = restaurant
            .delivery_fee
            .unwrap_or(ctx.config.pricing.default_delivery_fee);
        let pricing = price_order(&self.items, delivery_fee, &ctx.config.pricing)
            .ok_or_else(|| OrderError::Validation("order total is too large".into()))?;
        if pricing.subtotal < restaurant.minimum_order {
            return Err(OrderError::InvalidState(format!(
                "subtotal {} is below the minimum order of {}",
                pricing.subtotal, restaurant.minimum_order
            )));
        }

        let now = ctx.clock.now();
        self.created_at = now;
        self.estimated_delivery_at =
            now + Duration::minutes(ctx.config.orders.delivery_estimate_minutes);
        self.order_number = generate_order_number(now);
        self.restaurant_location = restaurant.location;
        self.restaurant_name = restaurant.name;
        self.pricing = pricing;
        self.append_tracking_at(OrderStatus::Pending, "Order placed successfully", now);

        ctx.notifier.publish(
            &self.restaurant_id.to_string(),
            NotificationEvent::OrderPlaced {
                order_id: self.id,
                order_number: self.order_number.clone(),
                total: pricing.total,
            },
        );
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), OrderError> {
        Err(OrderError::InvalidState(
            "orders are mutated through lifecycle actions only".into(),
        ))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::UpdateStatus {
                caller,
                target,
                message,
            } => self.apply_status_update(caller, target, message, ctx).await,
            OrderAction::CancelByCustomer {
                customer_id,
                reason,
            } => self.cancel_by_customer(customer_id, reason, ctx).await,
            OrderAction::Accept {
                rider_id,
                rider_name,
                rider_phone,
            } => self.accept(rider_id, rider_name, rider_phone, ctx),
            OrderAction::RecordPayment { reference } => {
                self.record_payment(reference, ctx).await
            }
        }
    }

    fn run_query(store: &HashMap<OrderId, Order>, query: &OrderQuery) -> Vec<Order> {
        match query {
            OrderQuery::ForCustomer(id) => {
                let mut orders: Vec<Order> = store
                    .values()
                    .filter(|o| o.customer_id == *id)
                    .cloned()
                    .collect();
                orders.sort_by_key(|o| Reverse(o.created_at));
                orders
            }
            OrderQuery::ForRestaurant(id) => {
                let mut orders: Vec<Order> = store
                    .values()
                    .filter(|o| o.restaurant_id == *id)
                    .cloned()
                    .collect();
                orders.sort_by_key(|o| Reverse(o.created_at));
                orders
            }
            OrderQuery::AvailableForRider {
                location,
                radius_km,
                limit,
            } => {
                let mut orders: Vec<Order> = store
                    .values()
                    .filter(|o| o.status == OrderStatus::Ready && o.rider_id.is_none())
                    .filter(|o| match (location, o.restaurant_location) {
                        // Missing geodata fails open: never hide an order
                        // because the restaurant has no recorded location.
                        (Some(rider), Some(restaurant)) => {
                            haversine_km(*rider, restaurant) <= *radius_km
                        }
                        _ => true,
                    })
                    .cloned()
                    .collect();
                // First-ready, first-served: oldest-ready first.
                orders.sort_by_key(|o| o.ready_at.unwrap_or(o.created_at));
                orders.truncate(*limit);
                orders
            }
        }
    }
}

impl Order {
    async fn apply_status_update(
        &mut self,
        caller: Caller,
        target: OrderStatus,
        message: Option<String>,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        if !policy::allowed_targets(&caller, self).contains(&target) {
            return Err(OrderError::Forbidden(format!(
                "caller {caller:?} may not set status {target}"
            )));
        }
        if !self.status.can_transition_to(target) {
            return Err(OrderError::InvalidState(format!(
                "cannot move order from {} to {}",
                self.status, target
            )));
        }

        let now = ctx.clock.now();
        let message = message.unwrap_or_else(|| format!("Order {target}"));
        self.status = target;
        self.stamp(target, now);

        if target == OrderStatus::Cancelled && self.cancellation_reason.is_none() {
            self.cancellation_reason = Some(message.clone());
        }
        if target == OrderStatus::Delivered {
            self.delivery_duration_minutes = Some((now - self.created_at).num_minutes());
            if let Some(rider_id) = self.rider_id {
                // Side effect on a sibling actor; a failure here must not
                // undo an already-delivered order.
                if let Err(e) = ctx.riders.record_delivery(rider_id).await {
                    warn!(order_id = %self.id, %rider_id, error = %e, "Failed to record delivery");
                }
            }
        }

        self.append_tracking_at(target, message.clone(), now);
        let at = self.tracking.last().map(|t| t.at).unwrap_or(now);
        let event = NotificationEvent::StatusChanged {
            order_id: self.id,
            status: target,
            message,
            at,
        };
        ctx.notifier
            .publish(&self.customer_id.to_string(), event.clone());
        ctx.notifier.publish(&self.id.to_string(), event);
        Ok(self.clone())
    }

    async fn cancel_by_customer(
        &mut self,
        customer_id: CustomerId,
        reason: Option<String>,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        if self.customer_id != customer_id {
            return Err(OrderError::Forbidden(
                "only the ordering customer may cancel".into(),
            ));
        }

        let now = ctx.clock.now();
        match self.status {
            OrderStatus::Pending => {}
            OrderStatus::Confirmed => {
                let grace = Duration::minutes(ctx.config.orders.cancellation_grace_minutes);
                if now - self.created_at > grace {
                    return Err(OrderError::InvalidState(format!(
                        "confirmed orders can only be cancelled within {} minutes of placement",
                        ctx.config.orders.cancellation_grace_minutes
                    )));
                }
            }
            other => {
                return Err(OrderError::InvalidState(format!(
                    "cannot cancel an order in status {other}"
                )))
            }
        }

        // Refund before any mutation; a refund failure aborts the cancel.
        if let PaymentState::Paid { reference } = self.payment.clone() {
            let refund = ctx
                .payments
                .refund(&reference, None)
                .await
                .map_err(|e| OrderError::Internal(format!("refund failed: {e}")))?;
            info!(order_id = %self.id, refund_id = %refund.id, amount = refund.amount, "Refunded");
            self.payment = PaymentState::Refunded { reference };
        }

        let reason = reason.unwrap_or_else(|| "Cancelled by customer".to_string());
        self.status = OrderStatus::Cancelled;
        self.stamp(OrderStatus::Cancelled, now);
        self.cancellation_reason = Some(reason.clone());
        self.append_tracking_at(OrderStatus::Cancelled, reason.clone(), now);

        ctx.notifier.publish(
            &self.restaurant_id.to_string(),
            NotificationEvent::OrderCancelled {
                order_id: self.id,
                reason,
            },
        );
        Ok(self.clone())
    }

    /// The claim write. Runs inside the order actor's message turn, so the
    /// status/rider checks and the assignment cannot interleave with a
    /// competing claim: the second caller always observes the first one's
    /// write and fails with `Conflict`.
    fn accept(
        &mut self,
        rider_id: RiderId,
        rider_name: String,
        rider_phone: String,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        if self.status != OrderStatus::Ready {
            return Err(OrderError::InvalidState(format!(
                "only ready orders can be accepted, order is {}",
                self.status
            )));
        }
        if self.rider_id.is_some() {
            return Err(OrderError::Conflict(
                "order already claimed by another rider".into(),
            ));
        }

        let now = ctx.clock.now();
        self.rider_id = Some(rider_id);
        self.append_tracking_at(
            OrderStatus::Ready,
            format!("Order accepted by rider {rider_name}"),
            now,
        );

        let event = NotificationEvent::RiderAssigned {
            order_id: self.id,
            rider_name,
            rider_phone,
        };
        ctx.notifier
            .publish(&self.customer_id.to_string(), event.clone());
        ctx.notifier
            .publish(&self.restaurant_id.to_string(), event);
        Ok(self.clone())
    }

    async fn record_payment(
        &mut self,
        reference: String,
        ctx: &OrderContext,
    ) -> Result<Order, OrderError> {
        if self.status == OrderStatus::Cancelled {
            return Err(OrderError::InvalidState(
                "cannot record payment on a cancelled order".into(),
            ));
        }
        if self.payment != PaymentState::Unpaid {
            return Err(OrderError::InvalidState(
                "payment already recorded for this order".into(),
            ));
        }

        let status = ctx
            .payments
            .retrieve_intent(&reference)
            .await
            .map_err(|e| match e {
                PaymentError::UnknownIntent(_) => OrderError::NotFound(e.to_string()),
                other => OrderError::Internal(other.to_string()),
            })?;
        if status != IntentStatus::Succeeded {
            return Err(OrderError::InvalidState(format!(
                "payment intent {reference} has not succeeded"
            )));
        }

        let now = ctx.clock.now();
        self.payment = PaymentState::Paid {
            reference: reference.clone(),
        };
        self.append_tracking_at(self.status, "Payment received", now);

        ctx.notifier.publish(
            &self.customer_id.to_string(),
            NotificationEvent::PaymentRecorded {
                order_id: self.id,
                reference,
            },
        );
        Ok(self.clone())
    }
}
