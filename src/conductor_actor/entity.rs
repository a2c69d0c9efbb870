//! [`ActorEntity`] implementation for [`Conductor`].
//!
//! Vehicle assignment is driven from here so that every link change for a conductor passes
//! through this actor's sequential loop. The link itself, and the capacity check, happen in
//! the Vehiculo actor; if the audit append that follows fails, the link is put back.

use super::{ConductorAction, ConductorContext};
use crate::error::FleetError;
use crate::model::{
    require_text, Conductor, ConductorCreate, ConductorDetalle, ConductorId, ConductorPatch, Edit,
    Editor, TipoOperacion, VehiculoId,
};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;
use tracing::{error, warn};

fn ensure_unique(peers: &Peers<'_, Conductor>, identificacion: &str) -> Result<(), FleetError> {
    if let Some(other) = peers.find(|c| c.identificacion == identificacion) {
        return Err(FleetError::ValidationConflict(format!(
            "identificacion {} is already registered to conductor {}",
            identificacion, other.id
        )));
    }
    Ok(())
}

impl Conductor {
    /// Audits the conductor together with its current vehicles.
    async fn record_detalle(&self, editor: &Editor, ctx: &ConductorContext) -> Result<(), FleetError> {
        let detalle = ConductorDetalle {
            conductor: self.clone(),
            vehiculos: ctx.vehiculos.find_by_conductor(self.id).await?,
        };
        ctx.audit
            .record(&detalle, TipoOperacion::Actualizar, editor)
            .await?;
        Ok(())
    }

    async fn assign_vehicle(
        &self,
        vehiculo_id: VehiculoId,
        editor: &Editor,
        ctx: &ConductorContext,
    ) -> Result<(), FleetError> {
        ctx.vehiculos.link(vehiculo_id, self.clone()).await?;
        if let Err(e) = self.record_detalle(editor, ctx).await {
            if let Err(undo) = ctx.vehiculos.restore_link(vehiculo_id, None).await {
                error!(%vehiculo_id, error = %undo, "Failed to undo vehicle link");
            }
            return Err(e);
        }
        Ok(())
    }

    async fn unassign_vehicle(
        &self,
        vehiculo_id: VehiculoId,
        editor: &Editor,
        ctx: &ConductorContext,
    ) -> Result<(), FleetError> {
        ctx.vehiculos.unlink(vehiculo_id, self.id).await?;
        if let Err(e) = self.record_detalle(editor, ctx).await {
            if let Err(undo) = ctx.vehiculos.restore_link(vehiculo_id, Some(self.id)).await {
                error!(%vehiculo_id, error = %undo, "Failed to undo vehicle unlink");
            }
            return Err(e);
        }
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for Conductor {
    type Id = ConductorId;
    type Create = Edit<ConductorCreate>;
    type Update = Edit<ConductorPatch>;
    type Delete = Editor;
    type Action = ConductorAction;
    type ActionResult = Conductor;
    type Context = ConductorContext;
    type Error = FleetError;

    async fn on_create(
        id: ConductorId,
        params: Edit<ConductorCreate>,
        peers: &Peers<'_, Self>,
        ctx: &ConductorContext,
    ) -> Result<Self, FleetError> {
        let Edit { editor, data } = params;
        require_text("identificacion", &data.identificacion)?;
        ensure_unique(peers, &data.identificacion)?;

        let conductor = Self {
            id,
            identificacion: data.identificacion,
            nombre_completo: data.nombre_completo,
            fecha_nacimiento: data.fecha_nacimiento,
            telefono: data.telefono,
            activo: data.activo.unwrap_or(true),
            referencias: 0,
        };
        ctx.audit
            .record(&conductor, TipoOperacion::Crear, &editor)
            .await?;
        Ok(conductor)
    }

    async fn on_update(
        &mut self,
        update: Edit<ConductorPatch>,
        peers: &Peers<'_, Self>,
        ctx: &ConductorContext,
    ) -> Result<(), FleetError> {
        let Edit { editor, data } = update;
        if let Some(identificacion) = data.identificacion {
            require_text("identificacion", &identificacion)?;
            ensure_unique(peers, &identificacion)?;
            self.identificacion = identificacion;
        }
        if let Some(nombre) = data.nombre_completo {
            self.nombre_completo = nombre;
        }
        if let Some(fecha) = data.fecha_nacimiento {
            self.fecha_nacimiento = Some(fecha);
        }
        if let Some(telefono) = data.telefono {
            self.telefono = Some(telefono);
        }
        ctx.audit
            .record(&*self, TipoOperacion::Actualizar, &editor)
            .await?;
        Ok(())
    }

    /// Refused while the conductor still holds vehicles or any pedido points at it.
    async fn on_delete(&self, editor: Editor, ctx: &ConductorContext) -> Result<(), FleetError> {
        let vehiculos = ctx.vehiculos.count_by_conductor(self.id).await?;
        if vehiculos > 0 {
            return Err(FleetError::IntegrityConflict(format!(
                "conductor {} still has {} vehicle(s) assigned",
                self.id, vehiculos
            )));
        }
        if self.referencias > 0 {
            return Err(FleetError::IntegrityConflict(format!(
                "conductor {} is referenced by {} pedido(s)",
                self.id, self.referencias
            )));
        }
        ctx.audit
            .record(self, TipoOperacion::Eliminar, &editor)
            .await?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ConductorAction,
        _peers: &Peers<'_, Self>,
        ctx: &ConductorContext,
    ) -> Result<Conductor, FleetError> {
        match action {
            ConductorAction::SetActivo { activo, editor } => {
                self.activo = activo;
                ctx.audit
                    .record(&*self, TipoOperacion::CambioEstado, &editor)
                    .await?;
            }
            ConductorAction::AssignVehicle {
                vehiculo_id,
                editor,
            } => self.assign_vehicle(vehiculo_id, &editor, ctx).await?,
            ConductorAction::UnassignVehicle {
                vehiculo_id,
                editor,
            } => self.unassign_vehicle(vehiculo_id, &editor, ctx).await?,
            ConductorAction::PairForOrder { vehiculo_id } => {
                ctx.vehiculos.pair(vehiculo_id, self.clone()).await?;
                self.referencias += 1;
            }
            ConductorAction::Retain => self.referencias += 1,
            ConductorAction::Release => {
                if self.referencias == 0 {
                    warn!(conductor_id = %self.id, "Release without matching retain");
                }
                self.referencias = self.referencias.saturating_sub(1);
            }
        }
        Ok(self.clone())
    }
}
