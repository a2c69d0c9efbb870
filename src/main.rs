//! # Flota Pedidos demo
//!
//! Starts a [`FleetSystem`], registers a driver with two vehicles, takes a pedido from
//! creation to delivery and prints the audit trail it left behind.

use flota_pedidos::lifecycle::setup_tracing;
use flota_pedidos::model::{
    AuditedEntity, ClienteCreate, ConductorCreate, EstadoPedido, PedidoCreate, UsuarioCreate,
    VehiculoCreate,
};
use flota_pedidos::{FleetError, FleetSystem, SystemConfig};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

const EDITOR: &str = "admin";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = SystemConfig::from_env()?;
    setup_tracing(&config.log_filter);

    info!(buffer = config.actor_buffer, "Starting fleet demo");
    let system = FleetSystem::with_config(&config);

    system
        .usuarios
        .create_usuario(UsuarioCreate {
            username: EDITOR.to_string(),
            nombre_completo: "Administrador".to_string(),
        })
        .await?;

    let span = tracing::info_span!("delivery_flow");
    if let Err(e) = delivery_flow(&system).instrument(span).await {
        error!(error = %e, "Delivery flow failed");
    }

    let span = tracing::info_span!("capacity_check");
    capacity_check(&system).instrument(span).await;

    for record in system.auditoria.all(AuditedEntity::Pedido).await? {
        info!(
            id = %record.id,
            operacion = %record.operacion,
            editor = %record.editor,
            "Pedido audit record"
        );
    }

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}

async fn delivery_flow(system: &FleetSystem) -> Result<(), FleetError> {
    let cliente = system
        .clientes
        .create(
            ClienteCreate {
                identificacion: "1020304050".to_string(),
                nombre_completo: "Ana Torres".to_string(),
                telefono: Some("3001234567".to_string()),
                direccion_residencia: None,
                activo: None,
            },
            EDITOR,
        )
        .await?;

    let conductor = system
        .conductores
        .create(
            ConductorCreate {
                identificacion: "79888777".to_string(),
                nombre_completo: "Luis Pardo".to_string(),
                fecha_nacimiento: None,
                telefono: None,
                activo: None,
            },
            EDITOR,
        )
        .await?;

    let vehiculo = system
        .vehiculos
        .create(
            VehiculoCreate {
                placa: "ABC123".to_string(),
                capacidad_kg: Decimal::new(1500, 0),
                marca: Some("Chevrolet".to_string()),
                modelo: Some("NHR".to_string()),
                anio: Some(2021),
                activo: None,
            },
            EDITOR,
        )
        .await?;

    system
        .asignaciones
        .assign_vehicle(conductor.id, vehiculo.id, EDITOR)
        .await?;

    let pedido = system
        .pedidos
        .create_order(
            PedidoCreate::new(cliente.id, "Calle 10 # 5-20", "Carrera 7 # 45-10"),
            EDITOR,
        )
        .await?;
    info!(pedido_id = %pedido.id, estado = %pedido.estado, "Pedido created");

    let pedido = system
        .pedidos
        .assign_driver_and_vehicle(pedido.id, conductor.id, vehiculo.id, EDITOR)
        .await?;
    info!(pedido_id = %pedido.id, estado = %pedido.estado, "Pedido assigned");

    for estado in [EstadoPedido::EnCamino, EstadoPedido::Completado] {
        let pedido = system
            .pedidos
            .change_order_state(pedido.id, estado, EDITOR)
            .await?;
        info!(pedido_id = %pedido.id, estado = %pedido.estado, "Pedido moved");
    }

    match system
        .pedidos
        .change_order_state(pedido.id, EstadoPedido::EnCamino, EDITOR)
        .await
    {
        Err(e) => info!(error = %e, "Completed pedido stayed completed"),
        Ok(_) => error!("Completed pedido was moved back"),
    }

    Ok(())
}

/// Links vehicles to one conductor until the limit refuses one.
async fn capacity_check(system: &FleetSystem) {
    let conductor = match system
        .conductores
        .create(
            ConductorCreate {
                identificacion: "80111222".to_string(),
                nombre_completo: "Marta Gil".to_string(),
                fecha_nacimiento: None,
                telefono: None,
                activo: None,
            },
            EDITOR,
        )
        .await
    {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "Could not create conductor");
            return;
        }
    };

    for n in 1..=4 {
        let created = system
            .vehiculos
            .create(
                VehiculoCreate {
                    placa: format!("CAP{n:03}"),
                    capacidad_kg: Decimal::new(800, 0),
                    marca: None,
                    modelo: None,
                    anio: None,
                    activo: None,
                },
                EDITOR,
            )
            .await;
        let vehiculo = match created {
            Ok(v) => v,
            Err(e) => {
                error!(error = %e, "Could not create vehiculo");
                return;
            }
        };
        match system
            .asignaciones
            .assign_vehicle(conductor.id, vehiculo.id, EDITOR)
            .await
        {
            Ok(_) => info!(placa = %vehiculo.placa, "Vehiculo linked"),
            Err(e) => info!(placa = %vehiculo.placa, error = %e, "Vehiculo refused"),
        }
    }
}
