use actor_store::{ActorClient, ActorEntity, ResourceActor, ResourceClient, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    subject: String,
    open: bool,
}

#[derive(Debug)]
struct TicketCreate {
    subject: String,
}

#[derive(Debug)]
struct TicketUpdate {
    subject: Option<String>,
}

#[derive(Debug)]
enum TicketAction {
    Close,
}

#[derive(Debug)]
enum TicketQuery {
    Open,
}

#[derive(Debug, thiserror::Error)]
enum TicketError {
    #[error("ticket already closed")]
    AlreadyClosed,
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Update = TicketUpdate;
    type Action = TicketAction;
    type ActionResult = Ticket;
    type Query = TicketQuery;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            subject: params.subject,
            open: true,
        })
    }

    async fn on_update(
        &mut self,
        update: TicketUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(subject) = update.subject {
            self.subject = subject;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<Ticket, Self::Error> {
        match action {
            TicketAction::Close => {
                if !self.open {
                    return Err(TicketError::AlreadyClosed);
                }
                self.open = false;
                Ok(self.clone())
            }
        }
    }

    fn run_query(store: &HashMap<u32, Ticket>, query: &TicketQuery) -> Vec<Ticket> {
        match query {
            TicketQuery::Open => {
                let mut open: Vec<Ticket> =
                    store.values().filter(|t| t.open).cloned().collect();
                open.sort_by_key(|t| t.id);
                open
            }
        }
    }
}

// A minimal wrapper in the shape domain clients take.
struct TicketClient {
    inner: ResourceClient<Ticket>,
}

#[async_trait]
impl ActorClient<Ticket> for TicketClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Ticket> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        e
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client
        .create(TicketCreate {
            subject: "Cold food".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Update
    let updated = client
        .update(
            id,
            TicketUpdate {
                subject: Some("Cold food, refund requested".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.subject, "Cold food, refund requested");

    // 3. Action: close
    let closed = client.perform_action(id, TicketAction::Close).await.unwrap();
    assert!(!closed.open);

    // 4. Action on a closed ticket fails with the entity's own error
    let err = client
        .perform_action(id, TicketAction::Close)
        .await
        .unwrap_err();
    match err {
        StoreError::EntityError(inner) => {
            let ticket_err = inner.downcast::<TicketError>().expect("entity error kind");
            assert!(matches!(*ticket_err, TicketError::AlreadyClosed));
        }
        other => panic!("expected EntityError, got {other:?}"),
    }

    // 5. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_query_filters_and_sorts() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    for subject in ["a", "b", "c"] {
        client
            .create(TicketCreate {
                subject: subject.into(),
            })
            .await
            .unwrap();
    }
    client.perform_action(2, TicketAction::Close).await.unwrap();

    let open = client.query(TicketQuery::Open).await.unwrap();
    let ids: Vec<u32> = open.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_missing_ids_surface_as_not_found() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .update(99, TicketUpdate { subject: None })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let err = client
        .perform_action(99, TicketAction::Close)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    // Get distinguishes "absent" from "failed"
    assert!(client.get(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_wrapper_clients_inherit_get_and_delete() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    let wrapper = TicketClient { inner: client };
    let id = wrapper
        .inner()
        .create(TicketCreate {
            subject: "Wrong address".into(),
        })
        .await
        .unwrap();

    let found = wrapper.get(id).await.unwrap().expect("ticket exists");
    assert_eq!(found.subject, "Wrong address");

    wrapper.delete(id).await.unwrap();
    assert!(wrapper.get(id).await.unwrap().is_none());
}
