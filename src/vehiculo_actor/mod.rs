//! # Vehiculo Actor
//!
//! Owns the vehicle table, including every Vehiculo→Conductor link. All link changes and
//! the per-conductor capacity count are processed by this actor's sequential loop, which is
//! what keeps a conductor at or under three vehicles under concurrent requests.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Vehiculo`]
//! - [`actions`] - [`VehiculoAction`]
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::VehiculoClient;
use crate::model::Vehiculo;
use actor_framework::ResourceActor;

/// Creates a new Vehiculo actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Vehiculo>, VehiculoClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, VehiculoClient::new(generic_client))
}
