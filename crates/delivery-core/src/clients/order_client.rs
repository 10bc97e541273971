//! # Order Client
//!
//! High-level API for the Order actor, and the one place where rider
//! dispatch is orchestrated: the rider-facing methods resolve the rider's
//! profile first, then forward to the order actor. The claim itself stays
//! inside the actor, so the pre-checks here are conveniences, never the
//! integrity guarantee.
//!
//! Orders are deliberately not deletable and have no free-form update, so
//! this wrapper does not expose the generic CRUD surface the profile
//! clients share.

use super::RiderClient;
use crate::config::DispatchPolicy;
use crate::model::{
    Caller, CustomerId, GeoPoint, Order, OrderCreate, OrderId, OrderQuery, OrderStatus,
    RestaurantId, Rider, RiderId, TrackingEntry,
};
use crate::order_actor::{OrderAction, OrderError};
use crate::rider_actor::RiderError;
use actor_store::{ActorClient, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    riders: RiderClient,
    dispatch: DispatchPolicy,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, riders: RiderClient, dispatch: DispatchPolicy) -> Self {
        Self {
            inner,
            riders,
            dispatch,
        }
    }

    /// Places an order. Validation against the restaurant and customer
    /// happens in the order actor's `on_create` hook.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(OrderError::from_store)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(OrderError::from_store)
    }

    /// Returns the order's append-only tracking history, oldest first.
    #[instrument(skip(self))]
    pub async fn get_order_tracking(&self, id: OrderId) -> Result<Vec<TrackingEntry>, OrderError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await
            .map_err(OrderError::from_store)?
            .map(|order| order.tracking)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// A customer's order history, newest first.
    #[instrument(skip(self))]
    pub async fn list_orders_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .query(OrderQuery::ForCustomer(customer_id))
            .await
            .map_err(OrderError::from_store)
    }

    /// A restaurant's incoming orders, newest first.
    #[instrument(skip(self))]
    pub async fn list_orders_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.inner
            .query(OrderQuery::ForRestaurant(restaurant_id))
            .await
            .map_err(OrderError::from_store)
    }

    /// Role-scoped status transition.
    #[instrument(skip(self, message))]
    pub async fn update_order_status(
        &self,
        id: OrderId,
        caller: Caller,
        target: OrderStatus,
        message: Option<String>,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(
                id,
                OrderAction::UpdateStatus {
                    caller,
                    target,
                    message,
                },
            )
            .await
            .map_err(OrderError::from_store)
    }

    /// Customer-initiated cancellation. Paid orders are refunded before the
    /// cancellation is recorded.
    #[instrument(skip(self, reason))]
    pub async fn cancel_order(
        &self,
        id: OrderId,
        customer_id: CustomerId,
        reason: Option<String>,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::CancelByCustomer { customer_id, reason })
            .await
            .map_err(OrderError::from_store)
    }

    /// Attaches a succeeded payment intent to the order.
    #[instrument(skip(self))]
    pub async fn record_payment(
        &self,
        id: OrderId,
        reference: String,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::RecordPayment { reference })
            .await
            .map_err(OrderError::from_store)
    }

    /// Ready, unclaimed orders this rider could pick up: distance-filtered
    /// when a location is known, oldest-ready first, capped at the dispatch
    /// limit. `location` overrides the rider's last recorded position;
    /// without either, no distance filter applies.
    #[instrument(skip(self))]
    pub async fn list_available_orders(
        &self,
        rider_id: RiderId,
        location: Option<GeoPoint>,
        radius_km: Option<f64>,
    ) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let rider = self.fetch_rider(rider_id).await?;
        if !rider.available {
            return Err(OrderError::Forbidden(format!(
                "rider {rider_id} is not available for deliveries"
            )));
        }

        self.inner
            .query(OrderQuery::AvailableForRider {
                location: location.or(rider.location),
                radius_km: radius_km.unwrap_or(self.dispatch.default_radius_km),
                limit: self.dispatch.max_results,
            })
            .await
            .map_err(OrderError::from_store)
    }

    /// Claims a ready order for a rider. The conditional write runs inside
    /// the order actor; under contention exactly one claim succeeds and the
    /// rest fail with [`OrderError::Conflict`].
    #[instrument(skip(self))]
    pub async fn accept_order(&self, id: OrderId, rider_id: RiderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        let rider = self.fetch_rider(rider_id).await?;
        if !rider.available {
            return Err(OrderError::Forbidden(format!(
                "rider {rider_id} is not available for deliveries"
            )));
        }

        self.inner
            .perform_action(
                id,
                OrderAction::Accept {
                    rider_id,
                    rider_name: rider.name,
                    rider_phone: rider.phone,
                },
            )
            .await
            .map_err(OrderError::from_store)
    }

    async fn fetch_rider(&self, rider_id: RiderId) -> Result<Rider, OrderError> {
        self.riders
            .get(rider_id)
            .await
            .map_err(|e| match e {
                RiderError::NotFound(id) => OrderError::NotFound(id),
                other => OrderError::Internal(other.to_string()),
            })?
            .ok_or_else(|| OrderError::NotFound(rider_id.to_string()))
    }
}
