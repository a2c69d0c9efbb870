//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource must satisfy to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the payload types for each
//! operation, the injected runtime context and the error type, and exposes the lifecycle
//! hooks the actor drives.
//!
//! # Drafts
//! `on_update` and `handle_action` receive a **draft**: a clone of the stored entity. The
//! actor only writes the draft back when the hook returns `Ok`, so a hook that fails half way
//! through leaves the stored entity untouched. Side effects on *other* actors are the hook's
//! own responsibility to undo.
//!
//! # Peers
//! Hooks also receive a read-only [`Peers`] view over every other entity in the same store.
//! Because the actor processes one message at a time, a check made against the view (a
//! uniqueness rule, a count) still holds when the draft is committed.

use crate::peers::Peers;
use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u64` for automatic ID generation, and ordered so listings
    /// come back in a stable order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The data that accompanies a deletion (e.g. who asked for it).
    type Delete: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than per message. Framework failures (closed
    /// channels, unknown ids) are folded into it through `From<FrameworkError>`.
    type Error: std::error::Error + From<crate::FrameworkError> + Send + Sync + 'static;

    /// Build and validate a new entity.
    ///
    /// Called with the freshly allocated id. Returning `Err` discards the id and nothing is
    /// stored.
    async fn on_create(
        id: Self::Id,
        params: Self::Create,
        peers: &Peers<'_, Self>,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Apply an update to the draft.
    async fn on_update(
        &mut self,
        update: Self::Update,
        peers: &Peers<'_, Self>,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Returning `Err` vetoes the removal.
    async fn on_delete(
        &self,
        _params: Self::Delete,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action against the draft.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        peers: &Peers<'_, Self>,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
