use crate::model::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Riders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiderId(pub u32);

impl From<u32> for RiderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RiderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rider_{}", self.0)
    }
}

/// A courier profile.
///
/// A rider does not track "currently delivering" — the at-most-one-claim
/// invariant lives on the order side (`Order::rider_id`), checked inside the
/// order actor's message turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub phone: String,
    pub available: bool,
    pub location: Option<GeoPoint>,
    pub deliveries_completed: u32,
    pub rating: f32,
}

/// Payload for creating a new rider.
#[derive(Debug, Clone)]
pub struct RiderCreate {
    pub name: String,
    pub phone: String,
}

/// Payload for updating a rider's availability or last known location.
#[derive(Debug, Clone, Default)]
pub struct RiderUpdate {
    pub available: Option<bool>,
    pub location: Option<GeoPoint>,
}
