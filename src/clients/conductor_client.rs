//! # Conductor Client
//!
//! Provides a high‑level API for interacting with the `Conductor` actor, including the
//! vehicle assignment operations.
use crate::conductor_actor::ConductorAction;
use crate::error::FleetError;
use crate::model::{Conductor, ConductorCreate, ConductorId, ConductorPatch, Edit, Editor, VehiculoId};
use actor_framework::{ActorClient, Filter, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Conductor actor.
#[derive(Clone)]
pub struct ConductorClient {
    inner: ResourceClient<Conductor>,
}

impl ActorClient<Conductor> for ConductorClient {
    fn inner(&self) -> &ResourceClient<Conductor> {
        &self.inner
    }
}

impl ConductorClient {
    pub fn new(inner: ResourceClient<Conductor>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_conductor(
        &self,
        params: Edit<ConductorCreate>,
    ) -> Result<Conductor, FleetError> {
        debug!(?params, "create_conductor called");
        self.inner.create(params).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_conductor(
        &self,
        id: ConductorId,
        patch: Edit<ConductorPatch>,
    ) -> Result<Conductor, FleetError> {
        debug!(?patch, "update_conductor called");
        self.inner.update(id, patch).await
    }

    #[instrument(skip(self, editor))]
    pub async fn delete_conductor(&self, id: ConductorId, editor: Editor) -> Result<(), FleetError> {
        debug!("Sending request");
        self.inner.delete(id, editor).await
    }

    /// Sets `activo` and returns the number of rows affected: 0 when the conductor does not
    /// exist.
    #[instrument(skip(self, editor))]
    pub async fn update_activo_status(
        &self,
        id: ConductorId,
        activo: bool,
        editor: Editor,
    ) -> Result<u64, FleetError> {
        match self
            .inner
            .perform_action(id, ConductorAction::SetActivo { activo, editor })
            .await
        {
            Ok(_) => Ok(1),
            Err(e) if e.is_not_found() => Ok(0),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_identificacion(
        &self,
        identificacion: &str,
    ) -> Result<Option<Conductor>, FleetError> {
        let wanted = identificacion.to_string();
        let mut found = self
            .inner
            .list(Filter::new(move |c: &Conductor| c.identificacion == wanted))
            .await?;
        Ok(found.pop())
    }

    #[instrument(skip(self))]
    pub async fn find_by_activo(&self, activo: bool) -> Result<Vec<Conductor>, FleetError> {
        self.inner
            .list(Filter::new(move |c: &Conductor| c.activo == activo))
            .await
    }

    #[instrument(skip(self, editor))]
    pub async fn assign_vehicle(
        &self,
        id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: Editor,
    ) -> Result<Conductor, FleetError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ConductorAction::AssignVehicle { vehiculo_id, editor })
            .await
    }

    #[instrument(skip(self, editor))]
    pub async fn unassign_vehicle(
        &self,
        id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: Editor,
    ) -> Result<Conductor, FleetError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, ConductorAction::UnassignVehicle { vehiculo_id, editor })
            .await
    }

    /// Checks the assignment rules for this conductor and vehicle on a pedido and retains
    /// both on success.
    #[instrument(skip(self))]
    pub(crate) async fn pair_for_order(
        &self,
        id: ConductorId,
        vehiculo_id: VehiculoId,
    ) -> Result<Conductor, FleetError> {
        self.inner
            .perform_action(id, ConductorAction::PairForOrder { vehiculo_id })
            .await
    }

    #[instrument(skip(self))]
    pub(crate) async fn retain(&self, id: ConductorId) -> Result<Conductor, FleetError> {
        self.inner.perform_action(id, ConductorAction::Retain).await
    }

    #[instrument(skip(self))]
    pub(crate) async fn release(&self, id: ConductorId) -> Result<Conductor, FleetError> {
        self.inner.perform_action(id, ConductorAction::Release).await
    }
}
