//! # Conductor Actor
//!
//! Owns the driver table and drives every vehicle assignment for a driver.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Conductor`]
//! - [`actions`] - [`ConductorAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor's context is a [`ConductorContext`]: the Vehiculo client (links, capacity
//! counts) and the audit recorder. The Vehiculo actor never calls back into this one, so
//! the two can wait on each other's replies safely.
//!
//! ```rust,ignore
//! let conductor = conductor_client
//!     .assign_vehicle(conductor_id, vehiculo_id, editor)
//!     .await?;
//! ```

pub mod actions;
pub mod entity;

pub use actions::*;

use crate::clients::{AuditRecorder, ConductorClient, VehiculoClient};
use crate::model::Conductor;
use actor_framework::ResourceActor;

/// Runtime dependencies of the Conductor actor.
#[derive(Clone)]
pub struct ConductorContext {
    pub vehiculos: VehiculoClient,
    pub audit: AuditRecorder,
}

/// Creates a new Conductor actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Conductor>, ConductorClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ConductorClient::new(generic_client))
}
