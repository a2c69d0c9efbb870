//! # Pedido Actor
//!
//! Owns delivery orders and is the only writer of a pedido's estado, conductor and
//! vehiculo.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Pedido`]
//! - [`actions`] - [`PedidoAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! A pedido holds a reference count on its cliente, conductor and vehicle so those
//! actors can refuse deletes while it exists. Dependencies flow one way only:
//! Pedido → Conductor → Vehiculo, and each of them → Audit.

pub mod actions;
pub mod entity;
mod holds;

pub use actions::*;

use crate::clients::{AuditRecorder, ClienteClient, ConductorClient, PedidoClient, VehiculoClient};
use crate::model::Pedido;
use actor_framework::ResourceActor;

/// Runtime dependencies of the Pedido actor.
#[derive(Clone)]
pub struct PedidoContext {
    pub clientes: ClienteClient,
    pub conductores: ConductorClient,
    pub vehiculos: VehiculoClient,
    pub audit: AuditRecorder,
}

/// Creates a new Pedido actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Pedido>, PedidoClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, PedidoClient::new(generic_client))
}
