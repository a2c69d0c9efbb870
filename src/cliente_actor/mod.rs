//! # Cliente Actor
//!
//! Owns the customer table: identificacion uniqueness, the `activo` flag, and a reference
//! count of the pedidos pointing at each cliente so deletes can be refused while any exist.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cliente`]
//! - [`actions`] - [`ClienteAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! Context: the [`AuditRecorder`](crate::clients::AuditRecorder).

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::ClienteClient;
use crate::model::Cliente;
use actor_framework::ResourceActor;

/// Creates a new Cliente actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cliente>, ClienteClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ClienteClient::new(generic_client))
}
