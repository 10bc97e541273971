//! # Rider Client
//!
//! High-level API for the Rider actor: generated CRUD plus the delivery
//! counter increment the order actor fires on delivery.

use crate::model::{Rider, RiderId};
use crate::rider_actor::{RiderAction, RiderError};
use tracing::{debug, instrument};

super::entity_client!(RiderClient, Rider, RiderError, rider);

impl RiderClient {
    /// Increments the rider's lifetime delivery counter and returns the new
    /// count.
    #[instrument(skip(self))]
    pub async fn record_delivery(&self, id: RiderId) -> Result<u32, RiderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, RiderAction::RecordDelivery)
            .await
            .map_err(RiderError::from_store)
    }
}
