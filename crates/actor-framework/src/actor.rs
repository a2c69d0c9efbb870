//! # Generic Actor Server
//!
//! The `ResourceActor` owns one table of entities and processes requests against it one at
//! a time. Sequential processing is what makes the framework safe to build invariants on:
//! a check made by a hook and the write that follows it cannot interleave with any other
//! request for the same table.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::peers::Peers;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on its own Tokio task.
///
/// ```rust
/// use actor_framework::{ActorEntity, FrameworkError, Peers, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Counter { id: u64, value: u32 }
/// #[derive(Debug, thiserror::Error)]
/// enum CounterError { #[error(transparent)] Framework(#[from] FrameworkError) }
///
/// #[async_trait]
/// impl ActorEntity for Counter {
///     type Id = u64;
///     type Create = u32;
///     type Update = u32;
///     type Delete = ();
///     type Action = ();
///     type ActionResult = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn on_create(id: u64, value: u32, _: &Peers<'_, Self>, _: &()) -> Result<Self, CounterError> {
///         Ok(Self { id, value })
///     }
///     async fn on_update(&mut self, value: u32, _: &Peers<'_, Self>, _: &()) -> Result<(), CounterError> {
///         self.value = value;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: (), _: &Peers<'_, Self>, _: &()) -> Result<u32, CounterError> {
///         self.value += 1;
///         Ok(self.value)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Counter>::new(10);
///     tokio::spawn(actor.run(()));
///     let counter = client.create(41).await.unwrap();
///     assert_eq!(client.perform_action(counter.id, ()).await.unwrap(), 42);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: allocate the next id, call `on_create`, insert the result.
/// * **Get / List / Count**: read-only, answered from the store.
/// * **Update / Action**: clone the stored entity into a draft, run the hook against the
///   draft, write the draft back only if the hook succeeded.
/// * **Delete**: call `on_delete`; remove the entity only if it did not veto.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls
    /// wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn not_found(entity_type: &'static str, id: &T::Id) -> T::Error {
        T::Error::from(FrameworkError::NotFound {
            entity: entity_type,
            id: id.to_string(),
        })
    }

    fn sorted(&self, mut items: Vec<(&T::Id, &T)>) -> Vec<T> {
        items.sort_by(|(a, _), (b, _)| a.cmp(b));
        items.into_iter().map(|(_, item)| item.clone()).collect()
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is injected into every hook. It is supplied here rather than in
    /// `new()` so actors can be created first and wired to each other afterwards.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let peers = Peers::new(&self.store, None);
                    match T::on_create(id.clone(), params, &peers, &context).await {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, respond_to } => {
                    let matches = self
                        .store
                        .iter()
                        .filter(|(_, item)| filter.matches(item))
                        .collect();
                    let items = self.sorted(matches);
                    debug!(entity_type, found = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Count { filter, respond_to } => {
                    let count = self.store.values().filter(|item| filter.matches(item)).count();
                    debug!(entity_type, count, "Count");
                    let _ = respond_to.send(Ok(count));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut draft) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(Self::not_found(entity_type, &id)));
                        continue;
                    };
                    let peers = Peers::new(&self.store, Some(id.clone()));
                    if let Err(e) = draft.on_update(update, &peers, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    self.store.insert(id.clone(), draft.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
                ResourceRequest::Delete {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(Self::not_found(entity_type, &id)));
                        continue;
                    };
                    if let Err(e) = item.on_delete(params, &context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(e));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(mut draft) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(Self::not_found(entity_type, &id)));
                        continue;
                    };
                    let peers = Peers::new(&self.store, Some(id.clone()));
                    let result = draft.handle_action(action, &peers, &context).await;
                    match &result {
                        Ok(_) => {
                            self.store.insert(id.clone(), draft);
                            info!(entity_type, %id, "Action ok");
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
