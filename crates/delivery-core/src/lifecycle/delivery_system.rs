//! The conductor: creates the actors, wires the order actor's context, and
//! coordinates graceful shutdown.

use crate::clients::{CustomerClient, OrderClient, RestaurantClient, RiderClient};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::notify::NotificationHub;
use crate::payment::{PaymentProcessor, StubProcessor};
use crate::{customer_actor, order_actor, restaurant_actor, rider_actor};
use order_actor::OrderContext;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// A running delivery system: four actors, their clients, and the shared
/// notification hub.
pub struct DeliverySystem {
    pub customer_client: CustomerClient,
    pub restaurant_client: RestaurantClient,
    pub rider_client: RiderClient,
    pub order_client: OrderClient,
    pub notifier: NotificationHub,
    handles: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    /// Starts a system with default configuration, the system clock and the
    /// in-memory payment processor.
    pub fn new() -> Self {
        Self::with(
            Config::default(),
            Arc::new(SystemClock),
            Arc::new(StubProcessor::new()),
        )
    }

    /// Starts a system with explicit configuration, clock and payment
    /// processor. Tests inject a [`ManualClock`](crate::clock::ManualClock)
    /// here to drive the cancellation grace window deterministically.
    pub fn with(
        config: Config,
        clock: Arc<dyn Clock>,
        payments: Arc<dyn PaymentProcessor>,
    ) -> Self {
        info!("Starting delivery system");

        let (customer_actor, customer_inner) = customer_actor::new();
        let (restaurant_actor, restaurant_inner) = restaurant_actor::new();
        let (rider_actor, rider_inner) = rider_actor::new();
        let (order_actor, order_inner) = order_actor::new();

        let customer_client = CustomerClient::new(customer_inner);
        let restaurant_client = RestaurantClient::new(restaurant_inner);
        let rider_client = RiderClient::new(rider_inner);
        let notifier = NotificationHub::new();

        let config = Arc::new(config);
        let order_client = OrderClient::new(
            order_inner,
            rider_client.clone(),
            config.dispatch.clone(),
        );

        // Profile actors have no dependencies; the order actor gets the
        // whole context.
        let customer_handle = tokio::spawn(customer_actor.run(()));
        let restaurant_handle = tokio::spawn(restaurant_actor.run(()));
        let rider_handle = tokio::spawn(rider_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            customers: customer_client.clone(),
            restaurants: restaurant_client.clone(),
            riders: rider_client.clone(),
            notifier: notifier.clone(),
            payments,
            clock,
            config,
        }));

        Self {
            customer_client,
            restaurant_client,
            rider_client,
            order_client,
            notifier,
            handles: vec![
                customer_handle,
                restaurant_handle,
                rider_handle,
                order_handle,
            ],
        }
    }

    /// Shuts the system down by dropping every client this struct holds and
    /// awaiting the actor tasks. The order actor exits first (its context
    /// clones of the profile clients drop with it), then the profile actors
    /// see their channels close.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down delivery system");

        drop(self.customer_client);
        drop(self.restaurant_client);
        drop(self.rider_client);
        drop(self.order_client);
        drop(self.notifier);

        for handle in self.handles {
            handle.await.map_err(|e| e.to_string())?;
        }

        info!("Delivery system shut down");
        Ok(())
    }
}

impl Default for DeliverySystem {
    fn default() -> Self {
        Self::new()
    }
}
