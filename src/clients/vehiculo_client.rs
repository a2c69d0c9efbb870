//! # Vehiculo Client
//!
//! The vehicle gateway. Link operations (`link`, `unlink`, `restore_link`, `pair`) are
//! crate-private: only the Conductor actor writes the Vehiculo→Conductor link.
use crate::error::FleetError;
use crate::model::{Conductor, ConductorId, Edit, Editor, Vehiculo, VehiculoCreate, VehiculoId, VehiculoPatch};
use crate::vehiculo_actor::VehiculoAction;
use actor_framework::{ActorClient, Filter, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Vehiculo actor.
#[derive(Clone)]
pub struct VehiculoClient {
    inner: ResourceClient<Vehiculo>,
}

impl ActorClient<Vehiculo> for VehiculoClient {
    fn inner(&self) -> &ResourceClient<Vehiculo> {
        &self.inner
    }
}

impl VehiculoClient {
    pub fn new(inner: ResourceClient<Vehiculo>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_vehiculo(
        &self,
        params: Edit<VehiculoCreate>,
    ) -> Result<Vehiculo, FleetError> {
        debug!(?params, "create_vehiculo called");
        self.inner.create(params).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_vehiculo(
        &self,
        id: VehiculoId,
        patch: Edit<VehiculoPatch>,
    ) -> Result<Vehiculo, FleetError> {
        debug!(?patch, "update_vehiculo called");
        self.inner.update(id, patch).await
    }

    #[instrument(skip(self, editor))]
    pub async fn delete_vehiculo(&self, id: VehiculoId, editor: Editor) -> Result<(), FleetError> {
        debug!("Sending request");
        self.inner.delete(id, editor).await
    }

    /// Sets `activo` and returns the number of rows affected: 0 when the vehicle does not
    /// exist.
    #[instrument(skip(self, editor))]
    pub async fn update_activo_status(
        &self,
        id: VehiculoId,
        activo: bool,
        editor: Editor,
    ) -> Result<u64, FleetError> {
        match self
            .inner
            .perform_action(id, VehiculoAction::SetActivo { activo, editor })
            .await
        {
            Ok(_) => Ok(1),
            Err(e) if e.is_not_found() => Ok(0),
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_by_placa(&self, placa: &str) -> Result<Option<Vehiculo>, FleetError> {
        let wanted = placa.to_string();
        let mut found = self
            .inner
            .list(Filter::new(move |v: &Vehiculo| v.placa == wanted))
            .await?;
        Ok(found.pop())
    }

    #[instrument(skip(self))]
    pub async fn find_by_activo(&self, activo: bool) -> Result<Vec<Vehiculo>, FleetError> {
        self.inner
            .list(Filter::new(move |v: &Vehiculo| v.activo == activo))
            .await
    }

    #[instrument(skip(self))]
    pub async fn count_by_conductor(&self, conductor: ConductorId) -> Result<usize, FleetError> {
        self.inner
            .count(Filter::new(move |v: &Vehiculo| v.conductor == Some(conductor)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_conductor(
        &self,
        conductor: ConductorId,
    ) -> Result<Vec<Vehiculo>, FleetError> {
        self.inner
            .list(Filter::new(move |v: &Vehiculo| v.conductor == Some(conductor)))
            .await
    }

    #[instrument(skip(self, conductor), fields(conductor_id = %conductor.id))]
    pub(crate) async fn link(
        &self,
        id: VehiculoId,
        conductor: Conductor,
    ) -> Result<Vehiculo, FleetError> {
        self.inner
            .perform_action(id, VehiculoAction::Link { conductor })
            .await
    }

    #[instrument(skip(self))]
    pub(crate) async fn unlink(
        &self,
        id: VehiculoId,
        conductor_id: ConductorId,
    ) -> Result<Vehiculo, FleetError> {
        self.inner
            .perform_action(id, VehiculoAction::Unlink { conductor_id })
            .await
    }

    #[instrument(skip(self))]
    pub(crate) async fn restore_link(
        &self,
        id: VehiculoId,
        conductor: Option<ConductorId>,
    ) -> Result<Vehiculo, FleetError> {
        self.inner
            .perform_action(id, VehiculoAction::RestoreLink { conductor })
            .await
    }

    #[instrument(skip(self, conductor), fields(conductor_id = %conductor.id))]
    pub(crate) async fn pair(
        &self,
        id: VehiculoId,
        conductor: Conductor,
    ) -> Result<Vehiculo, FleetError> {
        self.inner
            .perform_action(id, VehiculoAction::Pair { conductor })
            .await
    }

    /// Records that a pedido now points at this vehicle. Fails with NotFound if it does not
    /// exist.
    #[instrument(skip(self))]
    pub(crate) async fn retain(&self, id: VehiculoId) -> Result<Vehiculo, FleetError> {
        self.inner.perform_action(id, VehiculoAction::Retain).await
    }

    #[instrument(skip(self))]
    pub(crate) async fn release(&self, id: VehiculoId) -> Result<Vehiculo, FleetError> {
        self.inner.perform_action(id, VehiculoAction::Release).await
    }
}
