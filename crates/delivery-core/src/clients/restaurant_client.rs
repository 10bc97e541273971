//! # Restaurant Client
//!
//! High-level API for the Restaurant actor: generated CRUD plus the menu
//! availability toggle.

use crate::model::{Restaurant, RestaurantId};
use crate::restaurant_actor::{RestaurantAction, RestaurantError};
use tracing::{debug, instrument};

super::entity_client!(RestaurantClient, Restaurant, RestaurantError, restaurant);

impl RestaurantClient {
    /// Marks one menu item as available or sold out. Returns the updated
    /// restaurant.
    #[instrument(skip(self))]
    pub async fn set_menu_item_availability(
        &self,
        id: RestaurantId,
        item_id: u32,
        available: bool,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, RestaurantAction::SetMenuItemAvailability { item_id, available })
            .await
            .map_err(RestaurantError::from_store)
    }
}
