//! [`ActorEntity`] implementation for [`Vehiculo`].
//!
//! The capacity count is taken from [`Peers`], i.e. from the same store the link is written
//! to, while no other request to this actor can run. Counting and linking are therefore a
//! single step.

use super::VehiculoAction;
use crate::assignment::{check_assignment, Intent};
use crate::clients::AuditRecorder;
use crate::error::FleetError;
use crate::model::{
    require_text, Conductor, ConductorId, Edit, Editor, TipoOperacion, Vehiculo, VehiculoCreate,
    VehiculoId, VehiculoPatch,
};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::info;

fn ensure_unique(peers: &Peers<'_, Vehiculo>, placa: &str) -> Result<(), FleetError> {
    if let Some(other) = peers.find(|v| v.placa == placa) {
        return Err(FleetError::ValidationConflict(format!(
            "placa {} is already registered to vehiculo {}",
            placa, other.id
        )));
    }
    Ok(())
}

fn ensure_capacity(capacidad_kg: Decimal) -> Result<(), FleetError> {
    if capacidad_kg < Decimal::ZERO {
        return Err(FleetError::ValidationConflict(
            "capacidad_kg must not be negative".into(),
        ));
    }
    Ok(())
}

fn linked_to(peers: &Peers<'_, Vehiculo>, conductor: ConductorId) -> usize {
    peers.count_where(|v| v.conductor == Some(conductor))
}

impl Vehiculo {
    fn check(&self, conductor: &Conductor, peers: &Peers<'_, Self>, intent: Intent) -> Result<(), FleetError> {
        check_assignment(conductor, self, linked_to(peers, conductor.id), intent)
    }
}

#[async_trait]
impl ActorEntity for Vehiculo {
    type Id = VehiculoId;
    type Create = Edit<VehiculoCreate>;
    type Update = Edit<VehiculoPatch>;
    type Delete = Editor;
    type Action = VehiculoAction;
    type ActionResult = Vehiculo;
    type Context = AuditRecorder;
    type Error = FleetError;

    async fn on_create(
        id: VehiculoId,
        params: Edit<VehiculoCreate>,
        peers: &Peers<'_, Self>,
        audit: &AuditRecorder,
    ) -> Result<Self, FleetError> {
        let Edit { editor, data } = params;
        require_text("placa", &data.placa)?;
        ensure_unique(peers, &data.placa)?;
        ensure_capacity(data.capacidad_kg)?;

        let vehiculo = Self {
            id,
            placa: data.placa,
            capacidad_kg: data.capacidad_kg,
            marca: data.marca,
            modelo: data.modelo,
            anio: data.anio,
            activo: data.activo.unwrap_or(true),
            conductor: None,
            referencias: 0,
        };
        audit.record(&vehiculo, TipoOperacion::Crear, &editor).await?;
        Ok(vehiculo)
    }

    async fn on_update(
        &mut self,
        update: Edit<VehiculoPatch>,
        peers: &Peers<'_, Self>,
        audit: &AuditRecorder,
    ) -> Result<(), FleetError> {
        let Edit { editor, data } = update;
        if let Some(placa) = data.placa {
            require_text("placa", &placa)?;
            ensure_unique(peers, &placa)?;
            self.placa = placa;
        }
        if let Some(capacidad) = data.capacidad_kg {
            ensure_capacity(capacidad)?;
            self.capacidad_kg = capacidad;
        }
        if let Some(marca) = data.marca {
            self.marca = Some(marca);
        }
        if let Some(modelo) = data.modelo {
            self.modelo = Some(modelo);
        }
        if let Some(anio) = data.anio {
            self.anio = Some(anio);
        }
        audit.record(&*self, TipoOperacion::Actualizar, &editor).await?;
        Ok(())
    }

    /// Refused while any pedido still points at this vehicle.
    async fn on_delete(&self, editor: Editor, audit: &AuditRecorder) -> Result<(), FleetError> {
        if self.referencias > 0 {
            return Err(FleetError::IntegrityConflict(format!(
                "vehiculo {} is referenced by {} pedido(s)",
                self.placa, self.referencias
            )));
        }
        audit.record(self, TipoOperacion::Eliminar, &editor).await?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: VehiculoAction,
        peers: &Peers<'_, Self>,
        audit: &AuditRecorder,
    ) -> Result<Vehiculo, FleetError> {
        match action {
            VehiculoAction::SetActivo { activo, editor } => {
                self.activo = activo;
                audit.record(&*self, TipoOperacion::CambioEstado, &editor).await?;
            }
            VehiculoAction::Link { conductor } => {
                self.check(&conductor, peers, Intent::Link)?;
                self.conductor = Some(conductor.id);
                info!(vehiculo_id = %self.id, conductor_id = %conductor.id, "Linked");
            }
            VehiculoAction::Unlink { conductor_id } => {
                if self.conductor != Some(conductor_id) {
                    return Err(FleetError::ValidationConflict(format!(
                        "vehiculo {} is not assigned to conductor {}",
                        self.placa, conductor_id
                    )));
                }
                self.conductor = None;
                info!(vehiculo_id = %self.id, %conductor_id, "Unlinked");
            }
            VehiculoAction::RestoreLink { conductor } => self.conductor = conductor,
            VehiculoAction::Pair { conductor } => {
                self.check(&conductor, peers, Intent::Pairing)?;
                self.referencias += 1;
            }
            VehiculoAction::Retain => self.referencias += 1,
            VehiculoAction::Release => self.referencias = self.referencias.saturating_sub(1),
        }
        Ok(self.clone())
    }
}
