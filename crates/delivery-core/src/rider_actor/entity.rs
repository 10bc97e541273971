//! [`ActorEntity`] implementation for [`Rider`].

use super::RiderError;
use crate::model::{Rider, RiderCreate, RiderId, RiderUpdate};
use actor_store::ActorEntity;
use async_trait::async_trait;

/// Rider profile operations beyond plain updates.
#[derive(Debug)]
pub enum RiderAction {
    /// Bumps the lifetime delivery counter. Driven by the order actor when
    /// an order reaches `delivered`.
    RecordDelivery,
}

#[async_trait]
impl ActorEntity for Rider {
    type Id = RiderId;
    type Create = RiderCreate;
    type Update = RiderUpdate;
    type Action = RiderAction;
    type ActionResult = u32;
    type Query = ();
    type Context = ();
    type Error = RiderError;

    fn from_create_params(id: RiderId, params: RiderCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(RiderError::Validation("name must not be empty".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            phone: params.phone,
            available: false,
            location: None,
            deliveries_completed: 0,
            rating: 5.0,
        })
    }

    async fn on_update(
        &mut self,
        update: RiderUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(available) = update.available {
            self.available = available;
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RiderAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            RiderAction::RecordDelivery => {
                self.deliveries_completed += 1;
                Ok(self.deliveries_completed)
            }
        }
    }
}
