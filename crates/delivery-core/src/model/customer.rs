use crate::model::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
///
/// The `Display` form doubles as the customer's notification topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A saved delivery address, owned by exactly one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: u32,
    pub label: String,
    pub location: Option<GeoPoint>,
}

/// A customer account with its saved delivery addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub addresses: Vec<Address>,
}

impl Customer {
    pub fn address(&self, address_id: u32) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == address_id)
    }
}

/// Payload for creating a new customer.
#[derive(Debug, Clone)]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    pub addresses: Vec<Address>,
}

/// Payload for updating an existing customer.
#[derive(Debug, Clone)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
}
