//! # Generic Client
//!
//! The sending half of a `ResourceActor`: every method posts one request and awaits the
//! one-shot reply.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{Filter, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so it is cheap to clone and share across tasks. All methods return
/// the entity's own error type; channel failures arrive as `From<FrameworkError>`
/// conversions.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<V>(
        &self,
        request: ResourceRequest<T>,
        response: oneshot::Receiver<Result<V, T::Error>>,
    ) -> Result<V, T::Error> {
        self.sender
            .send(request)
            .await
            .map_err(|_| T::Error::from(FrameworkError::ActorClosed))?;
        response
            .await
            .map_err(|_| T::Error::from(FrameworkError::ActorDropped))?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.call(ResourceRequest::Create { params, respond_to }, response)
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.call(ResourceRequest::Get { id, respond_to }, response)
            .await
    }

    /// Every entity matching `filter`, ordered by id.
    pub async fn list(&self, filter: Filter<T>) -> Result<Vec<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.call(ResourceRequest::List { filter, respond_to }, response)
            .await
    }

    pub async fn count(&self, filter: Filter<T>) -> Result<usize, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.call(ResourceRequest::Count { filter, respond_to }, response)
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.call(
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            },
            response,
        )
        .await
    }

    pub async fn delete(&self, id: T::Id, params: T::Delete) -> Result<(), T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.call(
            ResourceRequest::Delete {
                id,
                params,
                respond_to,
            },
            response,
        )
        .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.call(
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            },
            response,
        )
        .await
    }
}
