//! # Audit Actors
//!
//! One append-only log actor per audited entity type (Cliente, Conductor, Vehiculo,
//! Pedido). Each log is a plain `ResourceActor<AuditRecord>` with no dependencies; the
//! [`AuditRecorder`](crate::clients::AuditRecorder) routes every record to the right log.
//!
//! Entity actors write to the recorder from inside their own hooks, before the mutated
//! entity is committed. A failed append therefore fails the whole operation.

pub mod entity;

use crate::clients::{AuditLogClient, AuditRecorder};
use crate::model::AuditRecord;
use actor_framework::ResourceActor;

/// The four log actors, to be spawned with `run(())`.
pub struct AuditActors {
    pub clientes: ResourceActor<AuditRecord>,
    pub conductores: ResourceActor<AuditRecord>,
    pub vehiculos: ResourceActor<AuditRecord>,
    pub pedidos: ResourceActor<AuditRecord>,
}

impl AuditActors {
    pub fn into_vec(self) -> Vec<ResourceActor<AuditRecord>> {
        vec![self.clientes, self.conductores, self.vehiculos, self.pedidos]
    }
}

/// Creates the audit log actors and the recorder that writes to them.
pub fn new(buffer_size: usize) -> (AuditActors, AuditRecorder) {
    let (clientes, clientes_log) = ResourceActor::new(buffer_size);
    let (conductores, conductores_log) = ResourceActor::new(buffer_size);
    let (vehiculos, vehiculos_log) = ResourceActor::new(buffer_size);
    let (pedidos, pedidos_log) = ResourceActor::new(buffer_size);

    let recorder = AuditRecorder::new(
        AuditLogClient::new(clientes_log),
        AuditLogClient::new(conductores_log),
        AuditLogClient::new(vehiculos_log),
        AuditLogClient::new(pedidos_log),
    );
    let actors = AuditActors {
        clientes,
        conductores,
        vehiculos,
        pedidos,
    };
    (actors, recorder)
}
