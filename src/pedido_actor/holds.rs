//! Reference counts a pedido holds on its cliente, conductor and vehicle.
//!
//! A pedido operation collects what it newly retained in one `Holds` and what it let go of
//! in another. On failure the first is released; on success the second is.

use super::PedidoContext;
use crate::error::FleetError;
use crate::model::{ClienteId, ConductorId, VehiculoId};
use tracing::error;

#[derive(Debug, Default)]
pub(crate) struct Holds {
    clientes: Vec<ClienteId>,
    conductores: Vec<ConductorId>,
    vehiculos: Vec<VehiculoId>,
}

impl Holds {
    /// Retains the cliente, failing with NotFound if it does not exist.
    pub async fn retain_cliente(&mut self, id: ClienteId, ctx: &PedidoContext) -> Result<(), FleetError> {
        ctx.clientes.retain(id).await?;
        self.clientes.push(id);
        Ok(())
    }

    pub async fn retain_conductor(
        &mut self,
        id: ConductorId,
        ctx: &PedidoContext,
    ) -> Result<(), FleetError> {
        ctx.conductores.retain(id).await?;
        self.conductores.push(id);
        Ok(())
    }

    pub async fn retain_vehiculo(
        &mut self,
        id: VehiculoId,
        ctx: &PedidoContext,
    ) -> Result<(), FleetError> {
        ctx.vehiculos.retain(id).await?;
        self.vehiculos.push(id);
        Ok(())
    }

    pub fn cliente(&mut self, id: ClienteId) {
        self.clientes.push(id);
    }

    pub fn conductor(&mut self, id: Option<ConductorId>) {
        self.conductores.extend(id);
    }

    pub fn vehiculo(&mut self, id: Option<VehiculoId>) {
        self.vehiculos.extend(id);
    }

    /// Settles an operation that acquired `self`: on success the holds it gave up are
    /// released, on failure the ones it acquired are.
    pub async fn settle(
        self,
        outcome: Result<Holds, FleetError>,
        ctx: &PedidoContext,
    ) -> Result<(), FleetError> {
        match outcome {
            Ok(released) => {
                released.release(ctx).await;
                Ok(())
            }
            Err(e) => {
                self.release(ctx).await;
                Err(e)
            }
        }
    }

    /// Releases everything held. Failures are logged, not returned.
    pub async fn release(self, ctx: &PedidoContext) {
        for id in self.vehiculos {
            if let Err(e) = ctx.vehiculos.release(id).await {
                error!(vehiculo_id = %id, error = %e, "Failed to release vehiculo");
            }
        }
        for id in self.conductores {
            if let Err(e) = ctx.conductores.release(id).await {
                error!(conductor_id = %id, error = %e, "Failed to release conductor");
            }
        }
        for id in self.clientes {
            if let Err(e) = ctx.clientes.release(id).await {
                error!(cliente_id = %id, error = %e, "Failed to release cliente");
            }
        }
    }
}
