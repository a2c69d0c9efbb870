use crate::error::FleetError;
use crate::model::{
    ClienteId, ConductorId, Edit, Editor, EstadoPedido, Pedido, PedidoCreate, PedidoId,
    PedidoPatch, VehiculoId,
};
use crate::pedido_actor::PedidoAction;
use actor_framework::{ActorClient, Filter, ResourceClient};
use chrono::{DateTime, Utc};
use tracing::{debug, info, instrument};

/// Client for interacting with the Pedido actor.
///
/// Orchestration (resolving the cliente, retaining the conductor and vehicle, writing the
/// audit record) happens in the Pedido actor's hooks.
#[derive(Clone)]
pub struct PedidoClient {
    inner: ResourceClient<Pedido>,
}

impl ActorClient<Pedido> for PedidoClient {
    fn inner(&self) -> &ResourceClient<Pedido> {
        &self.inner
    }
}

impl PedidoClient {
    pub fn new(inner: ResourceClient<Pedido>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_pedido(&self, params: Edit<PedidoCreate>) -> Result<Pedido, FleetError> {
        debug!(?params, "create_pedido called");
        info!("Sending create_pedido to actor");
        self.inner.create(params).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_pedido(
        &self,
        id: PedidoId,
        patch: Edit<PedidoPatch>,
    ) -> Result<Pedido, FleetError> {
        debug!(?patch, "update_pedido called");
        self.inner.update(id, patch).await
    }

    #[instrument(skip(self, editor))]
    pub async fn delete_pedido(&self, id: PedidoId, editor: Editor) -> Result<(), FleetError> {
        self.inner.delete(id, editor).await
    }

    #[instrument(skip(self, editor))]
    pub async fn assign_driver_and_vehicle(
        &self,
        id: PedidoId,
        conductor_id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: Editor,
    ) -> Result<Pedido, FleetError> {
        self.inner
            .perform_action(
                id,
                PedidoAction::AssignDriverAndVehicle {
                    conductor_id,
                    vehiculo_id,
                    editor,
                },
            )
            .await
    }

    #[instrument(skip(self, editor))]
    pub async fn change_state(
        &self,
        id: PedidoId,
        estado: EstadoPedido,
        editor: Editor,
    ) -> Result<Pedido, FleetError> {
        self.inner
            .perform_action(id, PedidoAction::ChangeState { estado, editor })
            .await
    }

    async fn find(
        &self,
        predicate: impl Fn(&Pedido) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.inner.list(Filter::new(predicate)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_cliente(&self, cliente: ClienteId) -> Result<Vec<Pedido>, FleetError> {
        self.find(move |p| p.cliente == cliente).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_conductor(
        &self,
        conductor: ConductorId,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.find(move |p| p.conductor == Some(conductor)).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_estado(&self, estado: EstadoPedido) -> Result<Vec<Pedido>, FleetError> {
        self.find(move |p| p.estado == estado).await
    }

    /// Pedidos created within `[desde, hasta]`, both ends inclusive.
    #[instrument(skip(self))]
    pub async fn find_by_fecha_creacion_between(
        &self,
        desde: DateTime<Utc>,
        hasta: DateTime<Utc>,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.find(move |p| p.fecha_creacion >= desde && p.fecha_creacion <= hasta)
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_cliente_and_estado(
        &self,
        cliente: ClienteId,
        estado: EstadoPedido,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.find(move |p| p.cliente == cliente && p.estado == estado)
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_by_conductor_and_estado(
        &self,
        conductor: ConductorId,
        estado: EstadoPedido,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.find(move |p| p.conductor == Some(conductor) && p.estado == estado)
            .await
    }
}
