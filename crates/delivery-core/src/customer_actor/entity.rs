//! [`ActorEntity`] implementation for [`Customer`].

use super::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_store::ActorEntity;
use async_trait::async_trait;

/// Customers have no custom actions.
#[derive(Debug)]
pub enum CustomerAction {}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = ();
    type Query = ();
    type Context = ();
    type Error = CustomerError;

    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CustomerError::Validation("name must not be empty".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            phone: params.phone,
            addresses: params.addresses,
        })
    }

    async fn on_update(
        &mut self,
        update: CustomerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
