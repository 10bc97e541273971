//! Real Order actor with mocked sibling actors.
//!
//! Exercises the order actor's own hook logic (`on_create` validation, the
//! delivered-order side effect on the rider) while the customer, restaurant
//! and rider dependencies answer from scripted expectation queues. The
//! notification hub and payment stub are real; only the actors are doubled.

use actor_store::mock::MockClient;
use actor_store::StoreError;
use chrono::Duration;
use delivery_core::clients::{CustomerClient, OrderClient, RestaurantClient, RiderClient};
use delivery_core::clock::ManualClock;
use delivery_core::config::Config;
use delivery_core::model::{
    Address, Caller, Customer, CustomerId, GeoPoint, MenuItem, Order, OrderCreate,
    OrderItemRequest, OrderStatus, PaymentMethod, Restaurant, RestaurantId, Rider, RiderId,
};
use delivery_core::notify::{NotificationEvent, NotificationHub};
use delivery_core::order_actor::{self, OrderContext, OrderError};
use delivery_core::payment::StubProcessor;
use std::sync::Arc;

fn customer() -> Customer {
    Customer {
        id: CustomerId(1),
        name: "Alice".to_string(),
        phone: "081-000-1111".to_string(),
        addresses: vec![Address {
            id: 1,
            label: "Home".to_string(),
            location: Some(GeoPoint::new(13.7400, 100.5100)),
        }],
    }
}

fn restaurant(open: bool) -> Restaurant {
    Restaurant {
        id: RestaurantId(1),
        name: "Som Tam Corner".to_string(),
        active: true,
        open,
        location: Some(GeoPoint::new(13.7563, 100.5018)),
        delivery_fee: Some(40),
        minimum_order: 100,
        menu: vec![MenuItem {
            id: 1,
            name: "Som Tam Thai".to_string(),
            price: 125,
            available: true,
        }],
    }
}

fn rider() -> Rider {
    Rider {
        id: RiderId(1),
        name: "Somchai".to_string(),
        phone: "089-222-3333".to_string(),
        available: true,
        location: Some(GeoPoint::new(13.7500, 100.5050)),
        deliveries_completed: 3,
        rating: 4.8,
    }
}

fn order_params() -> OrderCreate {
    OrderCreate {
        customer_id: CustomerId(1),
        restaurant_id: RestaurantId(1),
        address_id: 1,
        items: vec![OrderItemRequest {
            menu_item_id: 1,
            quantity: 2,
            note: None,
        }],
        payment_method: PaymentMethod::Cash,
        instructions: None,
    }
}

struct Harness {
    customer_mock: MockClient<Customer>,
    restaurant_mock: MockClient<Restaurant>,
    rider_mock: MockClient<Rider>,
    order_client: OrderClient,
    notifier: NotificationHub,
    clock: Arc<ManualClock>,
    actor_handle: tokio::task::JoinHandle<()>,
}

/// Spawns the real order actor wired to three mock clients, a real hub, the
/// payment stub and a manual clock.
fn spawn_order_actor() -> Harness {
    let customer_mock = MockClient::<Customer>::new();
    let restaurant_mock = MockClient::<Restaurant>::new();
    let rider_mock = MockClient::<Rider>::new();
    let notifier = NotificationHub::new();
    let clock = Arc::new(ManualClock::starting_now());
    let config = Config::default();

    let (order_actor, order_inner) = order_actor::new();
    let actor_handle = tokio::spawn(order_actor.run(OrderContext {
        customers: CustomerClient::new(customer_mock.client()),
        restaurants: RestaurantClient::new(restaurant_mock.client()),
        riders: RiderClient::new(rider_mock.client()),
        notifier: notifier.clone(),
        payments: Arc::new(StubProcessor::new()),
        clock: clock.clone(),
        config: Arc::new(config.clone()),
    }));
    let order_client = OrderClient::new(
        order_inner,
        RiderClient::new(rider_mock.client()),
        config.dispatch,
    );

    Harness {
        customer_mock,
        restaurant_mock,
        rider_mock,
        order_client,
        notifier,
        clock,
        actor_handle,
    }
}

#[tokio::test]
async fn on_create_validates_against_mocked_profiles() {
    let mut h = spawn_order_actor();
    h.restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant(true)));
    h.customer_mock
        .expect_get(CustomerId(1))
        .return_ok(Some(customer()));

    let mut restaurant_rx = h.notifier.subscribe(RestaurantId(1).to_string());

    let order_id = h
        .order_client
        .create_order(order_params())
        .await
        .expect("Order creation failed");

    let order: Order = h
        .order_client
        .get_order(order_id)
        .await
        .unwrap()
        .expect("Order not found");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items[0].unit_price, 125);
    assert_eq!(order.pricing.subtotal, 250);
    assert_eq!(order.pricing.total, 308);
    assert_eq!(order.tracking.len(), 1);

    // Placement fanned out to the restaurant through the real hub.
    let placed = restaurant_rx.recv().await.expect("No placement event");
    assert!(matches!(
        placed.event,
        NotificationEvent::OrderPlaced { total: 308, .. }
    ));

    h.customer_mock.verify();
    h.restaurant_mock.verify();

    drop(h.order_client);
    h.actor_handle.await.unwrap();
}

#[tokio::test]
async fn closed_restaurant_rejects_placement_before_customer_lookup() {
    let mut h = spawn_order_actor();
    h.restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant(false)));

    let err = h
        .order_client
        .create_order(order_params())
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::InvalidState(_)), "got {err:?}");

    // The customer actor was never consulted.
    h.customer_mock.verify();
    h.restaurant_mock.verify();

    drop(h.order_client);
    h.actor_handle.await.unwrap();
}

#[tokio::test]
async fn delivery_credits_the_rider_through_the_rider_actor() {
    let mut h = spawn_order_actor();
    h.restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant(true)));
    h.customer_mock
        .expect_get(CustomerId(1))
        .return_ok(Some(customer()));
    // accept_order resolves the rider, then delivery bumps the counter.
    h.rider_mock.expect_get(RiderId(1)).return_ok(Some(rider()));
    h.rider_mock.expect_action(RiderId(1)).return_ok(4);

    let order_id = h.order_client.create_order(order_params()).await.unwrap();
    for target in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ] {
        h.order_client
            .update_order_status(order_id, Caller::Restaurant(RestaurantId(1)), target, None)
            .await
            .unwrap();
    }
    h.order_client
        .accept_order(order_id, RiderId(1))
        .await
        .expect("Claim failed");

    let courier = Caller::Rider(RiderId(1));
    h.order_client
        .update_order_status(order_id, courier, OrderStatus::PickedUp, None)
        .await
        .unwrap();
    h.clock.advance(Duration::minutes(30));
    let delivered = h
        .order_client
        .update_order_status(order_id, courier, OrderStatus::Delivered, None)
        .await
        .expect("Delivery failed");

    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.delivery_duration_minutes, Some(30));

    h.rider_mock.verify();

    drop(h.order_client);
    h.actor_handle.await.unwrap();
}

#[tokio::test]
async fn rider_counter_failure_does_not_undo_the_delivery() {
    let mut h = spawn_order_actor();
    h.restaurant_mock
        .expect_get(RestaurantId(1))
        .return_ok(Some(restaurant(true)));
    h.customer_mock
        .expect_get(CustomerId(1))
        .return_ok(Some(customer()));
    h.rider_mock.expect_get(RiderId(1)).return_ok(Some(rider()));
    // The rider actor is unreachable when the order completes.
    h.rider_mock
        .expect_action(RiderId(1))
        .return_err(StoreError::ActorClosed);

    let order_id = h.order_client.create_order(order_params()).await.unwrap();
    for target in [
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ] {
        h.order_client
            .update_order_status(order_id, Caller::Restaurant(RestaurantId(1)), target, None)
            .await
            .unwrap();
    }
    h.order_client
        .accept_order(order_id, RiderId(1))
        .await
        .unwrap();

    let courier = Caller::Rider(RiderId(1));
    h.order_client
        .update_order_status(order_id, courier, OrderStatus::PickedUp, None)
        .await
        .unwrap();
    let delivered = h
        .order_client
        .update_order_status(order_id, courier, OrderStatus::Delivered, None)
        .await
        .expect("Delivery must survive a failed counter update");
    assert_eq!(delivered.status, OrderStatus::Delivered);

    h.rider_mock.verify();

    drop(h.order_client);
    h.actor_handle.await.unwrap();
}
