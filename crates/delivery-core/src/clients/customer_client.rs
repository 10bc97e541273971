//! # Customer Client
//!
//! High-level API for the Customer actor. Pure CRUD, so the whole surface
//! comes from [`entity_client!`](super::entity_client).

use crate::customer_actor::CustomerError;
use crate::model::Customer;

super::entity_client!(CustomerClient, Customer, CustomerError, customer);
