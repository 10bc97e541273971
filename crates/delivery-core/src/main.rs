//! # Delivery Core Demo
//!
//! Walks one order through the full lifecycle: a customer places it, the
//! payment settles, the restaurant works it to `ready`, a rider claims it
//! and delivers it. Run with `RUST_LOG=info` for the compact story or
//! `RUST_LOG=debug` for every actor message.

use actor_store::tracing::setup_tracing;
use delivery_core::clock::SystemClock;
use delivery_core::config::Config;
use delivery_core::lifecycle::DeliverySystem;
use delivery_core::model::{
    Address, Caller, CustomerCreate, GeoPoint, MenuItem, OrderCreate, OrderItemRequest,
    OrderStatus, PaymentMethod, RestaurantCreate, RiderCreate, RiderUpdate,
};
use delivery_core::payment::{PaymentProcessor, StubProcessor};
use std::sync::Arc;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting delivery system demo");

    let payments = Arc::new(StubProcessor::new());
    let system = DeliverySystem::with(
        Config::from_env(),
        Arc::new(SystemClock),
        payments.clone(),
    );

    // A customer in central Bangkok with one saved address.
    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            phone: "081-000-1111".to_string(),
            addresses: vec![Address {
                id: 1,
                label: "Home".to_string(),
                location: Some(GeoPoint::new(13.7563, 100.5018)),
            }],
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%customer_id, "Customer created");

    let restaurant_id = system
        .restaurant_client
        .create_restaurant(RestaurantCreate {
            name: "Som Tam Corner".to_string(),
            location: Some(GeoPoint::new(13.7650, 100.5381)),
            delivery_fee: Some(40),
            minimum_order: 100,
            menu: vec![
                MenuItem {
                    id: 1,
                    name: "Som Tam Thai".to_string(),
                    price: 80,
                    available: true,
                },
                MenuItem {
                    id: 2,
                    name: "Grilled Chicken".to_string(),
                    price: 120,
                    available: true,
                },
            ],
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%restaurant_id, "Restaurant created");

    let rider_id = system
        .rider_client
        .create_rider(RiderCreate {
            name: "Somchai".to_string(),
            phone: "089-222-3333".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    system
        .rider_client
        .update_rider(
            rider_id,
            RiderUpdate {
                available: Some(true),
                location: Some(GeoPoint::new(13.7600, 100.5200)),
            },
        )
        .await
        .map_err(|e| e.to_string())?;
    info!(%rider_id, "Rider created and online");

    // Watch the customer's notification stream while the order progresses.
    let mut inbox = system.notifier.subscribe(customer_id.to_string());

    let order_id = async {
        system
            .order_client
            .create_order(OrderCreate {
                customer_id,
                restaurant_id,
                address_id: 1,
                items: vec![
                    OrderItemRequest {
                        menu_item_id: 1,
                        quantity: 1,
                        note: Some("extra spicy".to_string()),
                    },
                    OrderItemRequest {
                        menu_item_id: 2,
                        quantity: 1,
                        note: None,
                    },
                ],
                payment_method: PaymentMethod::Card,
                instructions: Some("Leave at the lobby".to_string()),
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(tracing::info_span!("order_placement"))
    .await?;

    let order = system
        .order_client
        .get_order(order_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or("order vanished")?;
    info!(%order_id, order_number = %order.order_number, total = order.pricing.total, "Order placed");

    // Settle the payment through the stub processor and attach it.
    let intent = payments
        .create_intent(order.pricing.total, "thb", &order.order_number)
        .await
        .map_err(|e| e.to_string())?;
    payments.settle(&intent.id);
    system
        .order_client
        .record_payment(order_id, intent.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(%order_id, "Payment recorded");

    // The restaurant works the order up to ready.
    let kitchen = Caller::Restaurant(restaurant_id);
    for target in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ] {
        system
            .order_client
            .update_order_status(order_id, kitchen, target, None)
            .await
            .map_err(|e| e.to_string())?;
    }
    info!(%order_id, "Order is ready for pickup");

    // The rider finds it, claims it and completes the delivery.
    let available = system
        .order_client
        .list_available_orders(rider_id, None, None)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = available.len(), "Ready orders near rider");

    system
        .order_client
        .accept_order(order_id, rider_id)
        .await
        .map_err(|e| e.to_string())?;
    for target in [OrderStatus::PickedUp, OrderStatus::Delivered] {
        system
            .order_client
            .update_order_status(order_id, Caller::Rider(rider_id), target, None)
            .await
            .map_err(|e| e.to_string())?;
    }
    info!(%order_id, "Order delivered");

    let tracking = system
        .order_client
        .get_order_tracking(order_id)
        .await
        .map_err(|e| e.to_string())?;
    for entry in &tracking {
        info!(status = %entry.status, at = %entry.at, "{}", entry.message);
    }

    while let Ok(notification) = inbox.try_recv() {
        info!(topic = %notification.topic, event = ?notification.event, "Customer notification");
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
