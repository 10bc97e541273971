//! Domain models for the delivery marketplace.

pub mod customer;
pub mod geo;
pub mod order;
pub mod restaurant;
pub mod rider;

pub use customer::{Address, Customer, CustomerCreate, CustomerId, CustomerUpdate};
pub use geo::{haversine_km, GeoPoint};
pub use order::{
    generate_order_number, Caller, Order, OrderCreate, OrderId, OrderItem, OrderItemRequest,
    OrderQuery, OrderStatus, PaymentMethod, PaymentState, Pricing, TrackingEntry,
};
pub use restaurant::{MenuItem, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
pub use rider::{Rider, RiderCreate, RiderId, RiderUpdate};
