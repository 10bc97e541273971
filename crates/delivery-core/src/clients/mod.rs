//! # Domain Clients
//!
//! Type-safe wrappers around the generic [`ResourceClient`]s. Each hides the
//! message-passing plumbing behind named methods and translates storage
//! errors back into the owning actor's error enum.
//!
//! The CRUD surface is identical across the profile actors, so
//! [`entity_client!`] generates the wrapper struct, its [`ActorClient`] impl
//! (which supplies `get` and `delete`) and the inherent
//! `create_*`/`update_*` methods. Bespoke orchestration (rider dispatch,
//! order placement) lives in hand-written methods on the individual clients.

pub mod customer_client;
pub mod order_client;
pub mod restaurant_client;
pub mod rider_client;

pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use restaurant_client::RestaurantClient;
pub use rider_client::RiderClient;

/// Generates a client wrapper for one entity: the struct, its
/// [`ActorClient`](actor_store::ActorClient) impl (providing `get` and
/// `delete`), and inherent `create_<entity>` / `update_<entity>` methods
/// covering the write surface every profile actor shares.
macro_rules! entity_client {
    ($client:ident, $entity:ident, $error:ty, $lower:ident) => {
        paste::paste! {
            #[doc = "Client for interacting with the " $entity " actor."]
            #[derive(Clone)]
            pub struct $client {
                inner: ::actor_store::ResourceClient<$entity>,
            }

            impl $client {
                pub fn new(inner: ::actor_store::ResourceClient<$entity>) -> Self {
                    Self { inner }
                }

                #[::tracing::instrument(skip(self, params))]
                pub async fn [<create_ $lower>](
                    &self,
                    params: <$entity as ::actor_store::ActorEntity>::Create,
                ) -> Result<<$entity as ::actor_store::ActorEntity>::Id, $error> {
                    ::tracing::debug!("Sending request");
                    self.inner.create(params).await.map_err(<$error>::from_store)
                }

                #[::tracing::instrument(skip(self, update))]
                pub async fn [<update_ $lower>](
                    &self,
                    id: <$entity as ::actor_store::ActorEntity>::Id,
                    update: <$entity as ::actor_store::ActorEntity>::Update,
                ) -> Result<$entity, $error> {
                    ::tracing::debug!("Sending request");
                    self.inner.update(id, update).await.map_err(<$error>::from_store)
                }
            }

            #[::async_trait::async_trait]
            impl ::actor_store::ActorClient<$entity> for $client {
                type Error = $error;

                fn inner(&self) -> &::actor_store::ResourceClient<$entity> {
                    &self.inner
                }

                fn map_error(e: ::actor_store::StoreError) -> Self::Error {
                    <$error>::from_store(e)
                }
            }
        }
    };
}

pub(crate) use entity_client;
