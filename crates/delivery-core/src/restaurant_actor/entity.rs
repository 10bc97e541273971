//! [`ActorEntity`] implementation for [`Restaurant`].

use super::RestaurantError;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use actor_store::ActorEntity;
use async_trait::async_trait;

/// Catalog maintenance operations.
#[derive(Debug)]
pub enum RestaurantAction {
    /// Flips a menu item's availability. Existing orders are unaffected:
    /// they carry their own price/name snapshot.
    SetMenuItemAvailability { item_id: u32, available: bool },
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = Restaurant;
    type Query = ();
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(RestaurantError::Validation("name must not be empty".into()));
        }
        if params.menu.is_empty() {
            return Err(RestaurantError::Validation(
                "menu must contain at least one item".into(),
            ));
        }
        Ok(Self {
            id,
            name: params.name,
            active: true,
            open: true,
            location: params.location,
            delivery_fee: params.delivery_fee,
            minimum_order: params.minimum_order,
            menu: params.menu,
        })
    }

    async fn on_update(
        &mut self,
        update: RestaurantUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(active) = update.active {
            self.active = active;
        }
        if let Some(open) = update.open {
            self.open = open;
        }
        if let Some(delivery_fee) = update.delivery_fee {
            self.delivery_fee = delivery_fee;
        }
        if let Some(minimum_order) = update.minimum_order {
            self.minimum_order = minimum_order;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &Self::Context,
    ) -> Result<Restaurant, Self::Error> {
        match action {
            RestaurantAction::SetMenuItemAvailability { item_id, available } => {
                let item = self
                    .menu
                    .iter_mut()
                    .find(|m| m.id == item_id)
                    .ok_or(RestaurantError::MenuItemNotFound(item_id))?;
                item.available = available;
                Ok(self.clone())
            }
        }
    }
}
