use crate::model::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
///
/// The `Display` form doubles as the restaurant's notification topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// One entry on a restaurant's menu. Prices are whole currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub available: bool,
}

/// A restaurant with its menu and order policy.
///
/// `delivery_fee` is optional; orders fall back to the configured default
/// when it is unset. `minimum_order` is compared against the order subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub active: bool,
    pub open: bool,
    pub location: Option<GeoPoint>,
    pub delivery_fee: Option<u32>,
    pub minimum_order: u32,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn menu_item(&self, item_id: u32) -> Option<&MenuItem> {
        self.menu.iter().find(|m| m.id == item_id)
    }
}

/// Payload for creating a new restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub location: Option<GeoPoint>,
    pub delivery_fee: Option<u32>,
    pub minimum_order: u32,
    pub menu: Vec<MenuItem>,
}

/// Payload for updating an existing restaurant.
#[derive(Debug, Clone, Default)]
pub struct RestaurantUpdate {
    pub active: Option<bool>,
    pub open: Option<bool>,
    pub delivery_fee: Option<Option<u32>>,
    pub minimum_order: Option<u32>,
}
