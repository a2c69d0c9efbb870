//! # Usuario Actor
//!
//! Registry of system users. Users are the editors named in audit records; they are not
//! audited themselves and cannot be updated or deleted through the actor.

pub mod entity;

use crate::clients::UsuarioClient;
use crate::model::Usuario;
use actor_framework::ResourceActor;

/// Creates a new Usuario actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Usuario>, UsuarioClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UsuarioClient::new(generic_client))
}
