use crate::clients::{AuditRecorder, UsuarioClient};
use crate::conductor_actor::ConductorContext;
use crate::config::SystemConfig;
use crate::error::FleetError;
use crate::pedido_actor::PedidoContext;
use crate::services::{
    AssignmentService, ClienteService, ConductorService, OrderLifecycleService, SharedResolver,
    VehiculoService,
};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the fleet.
///
/// `FleetSystem` is responsible for:
/// - **Lifecycle Management**: starting every actor and stopping them all on shutdown
/// - **Dependency Wiring**: injecting clients into the actors that depend on them
/// - **Service Construction**: handing every service the same editor resolver
///
/// # Architecture
///
/// ```text
/// Pedido     ──► Cliente, Conductor, Vehiculo, Audit
/// Conductor  ──► Vehiculo, Audit
/// Cliente    ──► Audit
/// Vehiculo   ──► Audit
/// Usuario    (backs the editor resolver)
/// Audit logs (one per audited entity type)
/// ```
///
/// The graph has no cycles, so an actor never waits on a reply from an actor that is
/// waiting on it.
///
/// # Example
///
/// ```ignore
/// let system = FleetSystem::new();
/// system.usuarios.create_usuario(admin).await?;
///
/// let conductor = system.conductores.create(conductor, "admin").await?;
/// let vehiculo = system.vehiculos.create(vehiculo, "admin").await?;
/// system.asignaciones.assign_vehicle(conductor.id, vehiculo.id, "admin").await?;
///
/// system.shutdown().await?;
/// ```
pub struct FleetSystem {
    pub clientes: ClienteService,
    pub conductores: ConductorService,
    pub vehiculos: VehiculoService,
    pub pedidos: OrderLifecycleService,
    pub asignaciones: AssignmentService,
    pub usuarios: UsuarioClient,
    pub auditoria: AuditRecorder,

    /// Task handles for all running actors, dependents first.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for FleetSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FleetSystem {
    /// Starts the system with default settings, resolving editors through the Usuario actor.
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    pub fn with_config(config: &SystemConfig) -> Self {
        Self::build(config, None)
    }

    /// Starts the system with a caller-supplied editor resolver. The Usuario actor still
    /// runs but services do not consult it.
    pub fn with_resolver(config: &SystemConfig, editors: SharedResolver) -> Self {
        Self::build(config, Some(editors))
    }

    fn build(config: &SystemConfig, editors: Option<SharedResolver>) -> Self {
        let buffer = config.actor_buffer;

        // 1. Create actors (no dependencies yet)
        let (audit_actors, auditoria) = crate::audit_actor::new(buffer);
        let (usuario_actor, usuarios) = crate::usuario_actor::new(buffer);
        let (vehiculo_actor, vehiculo_client) = crate::vehiculo_actor::new(buffer);
        let (conductor_actor, conductor_client) = crate::conductor_actor::new(buffer);
        let (cliente_actor, cliente_client) = crate::cliente_actor::new(buffer);
        let (pedido_actor, pedido_client) = crate::pedido_actor::new(buffer);

        // 2. Start actors with injected context, dependents first
        let mut handles = vec![tokio::spawn(pedido_actor.run(PedidoContext {
            clientes: cliente_client.clone(),
            conductores: conductor_client.clone(),
            vehiculos: vehiculo_client.clone(),
            audit: auditoria.clone(),
        }))];
        handles.push(tokio::spawn(conductor_actor.run(ConductorContext {
            vehiculos: vehiculo_client.clone(),
            audit: auditoria.clone(),
        })));
        handles.push(tokio::spawn(cliente_actor.run(auditoria.clone())));
        handles.push(tokio::spawn(vehiculo_actor.run(auditoria.clone())));
        handles.push(tokio::spawn(usuario_actor.run(())));
        handles.extend(
            audit_actors
                .into_vec()
                .into_iter()
                .map(|actor| tokio::spawn(actor.run(()))),
        );

        // 3. Services
        let editors: SharedResolver = editors.unwrap_or_else(|| Arc::new(usuarios.clone()));
        info!(actors = handles.len(), buffer, "Fleet system started");

        Self {
            clientes: ClienteService::new(cliente_client, editors.clone()),
            conductores: ConductorService::new(
                conductor_client.clone(),
                vehiculo_client.clone(),
                editors.clone(),
            ),
            vehiculos: VehiculoService::new(vehiculo_client, editors.clone()),
            pedidos: OrderLifecycleService::new(pedido_client, editors.clone()),
            asignaciones: AssignmentService::new(conductor_client, editors),
            usuarios,
            auditoria,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the services closes the outer channels. The Pedido actor then exits and
    /// drops the clients in its context, which lets the Conductor and Cliente actors exit,
    /// and so on down to the audit logs. Handles are awaited in that order.
    pub async fn shutdown(self) -> Result<(), FleetError> {
        info!("Shutting down fleet system...");

        drop(self.pedidos);
        drop(self.asignaciones);
        drop(self.conductores);
        drop(self.clientes);
        drop(self.vehiculos);
        drop(self.usuarios);
        drop(self.auditoria);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(FleetError::ActorCommunication(format!(
                    "Actor task failed: {e}"
                )));
            }
        }

        info!("Fleet system shutdown complete.");
        Ok(())
    }
}
