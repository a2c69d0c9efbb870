//! Linking vehicles to conductors.

use super::SharedResolver;
use crate::clients::ConductorClient;
use crate::error::FleetError;
use crate::model::{Conductor, ConductorId, VehiculoId};
use tracing::instrument;

/// The only entry point that writes the Vehiculo→Conductor link. Never touches pedidos.
#[derive(Clone)]
pub struct AssignmentService {
    conductores: ConductorClient,
    editors: SharedResolver,
}

impl AssignmentService {
    pub fn new(conductores: ConductorClient, editors: SharedResolver) -> Self {
        Self {
            conductores,
            editors,
        }
    }

    /// Links `vehiculo_id` to `conductor_id` and returns the conductor.
    ///
    /// Fails with NotFound if either is missing, ValidationConflict if either is inactive or
    /// the vehicle is already linked (to this or another conductor), and CapacityExceeded if
    /// the conductor already holds the maximum number of vehicles.
    #[instrument(skip(self))]
    pub async fn assign_vehicle(
        &self,
        conductor_id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: &str,
    ) -> Result<Conductor, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.conductores
            .assign_vehicle(conductor_id, vehiculo_id, editor)
            .await
    }

    /// Clears the link. Fails with ValidationConflict unless the vehicle is linked to this
    /// conductor.
    #[instrument(skip(self))]
    pub async fn unassign_vehicle(
        &self,
        conductor_id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: &str,
    ) -> Result<Conductor, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.conductores
            .unassign_vehicle(conductor_id, vehiculo_id, editor)
            .await
    }
}
