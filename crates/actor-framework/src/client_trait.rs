//! # ActorClient Trait
//!
//! Resource-specific clients wrap a [`ResourceClient`] and add domain methods on top. This
//! trait gives every wrapper the plain reads (`get`, `find_all`) for free.
use crate::{ActorEntity, Filter, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, Peers, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u64, label: String }
/// #[derive(Debug, thiserror::Error)]
/// enum TagError { #[error(transparent)] Framework(#[from] FrameworkError) }
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u64; type Create = String; type Update = String; type Delete = ();
///     type Action = (); type ActionResult = (); type Context = (); type Error = TagError;
///     async fn on_create(id: u64, label: String, _: &Peers<'_, Self>, _: &()) -> Result<Self, TagError> {
///         Ok(Self { id, label })
///     }
///     async fn on_update(&mut self, label: String, _: &Peers<'_, Self>, _: &()) -> Result<(), TagError> {
///         self.label = label;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: (), _: &Peers<'_, Self>, _: &()) -> Result<(), TagError> { Ok(()) }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// impl ActorClient<Tag> for TagClient {
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
/// }
///
/// async fn usage(client: TagClient) {
///     // get() and find_all() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.find_all().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await
    }

    /// Every entity, ordered by id.
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<T>, T::Error> {
        tracing::debug!("Sending request");
        self.inner().list(Filter::all()).await
    }
}
