//! Pedido creation, updates, assignment and state transitions.

use super::SharedResolver;
use crate::clients::PedidoClient;
use crate::error::FleetError;
use crate::model::{
    ClienteId, ConductorId, Edit, EstadoPedido, Pedido, PedidoCreate, PedidoId, PedidoPatch,
    VehiculoId,
};
use actor_framework::ActorClient;
use chrono::{DateTime, Utc};
use tracing::instrument;

/// Entry point for everything that changes a pedido. Each successful call appends exactly
/// one record to the pedido audit log.
#[derive(Clone)]
pub struct OrderLifecycleService {
    pedidos: PedidoClient,
    editors: SharedResolver,
}

impl OrderLifecycleService {
    pub fn new(pedidos: PedidoClient, editors: SharedResolver) -> Self {
        Self { pedidos, editors }
    }

    /// Creates a pedido. `estado` defaults to `PENDIENTE` and `fecha_creacion` to now.
    /// Fails with NotFound if the cliente, or a given conductor or vehicle, does not exist.
    #[instrument(skip(self, pedido))]
    pub async fn create_order(
        &self,
        pedido: PedidoCreate,
        editor: &str,
    ) -> Result<Pedido, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.pedidos.create_pedido(Edit::new(editor, pedido)).await
    }

    /// Applies a partial update. See [`PedidoPatch`] for how absent and null fields behave.
    #[instrument(skip(self, patch))]
    pub async fn update_order(
        &self,
        id: PedidoId,
        patch: PedidoPatch,
        editor: &str,
    ) -> Result<Pedido, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.pedidos.update_pedido(id, Edit::new(editor, patch)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: PedidoId, editor: &str) -> Result<(), FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.pedidos.delete_pedido(id, editor).await
    }

    /// Puts a conductor and vehicle on the pedido, promoting `PENDIENTE` to `ASIGNADO`.
    ///
    /// Applies the same rules as vehicle assignment: both must be active, the vehicle may
    /// not be linked to a different conductor, and a conductor at capacity cannot take an
    /// unlinked vehicle.
    #[instrument(skip(self))]
    pub async fn assign_driver_and_vehicle(
        &self,
        pedido_id: PedidoId,
        conductor_id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: &str,
    ) -> Result<Pedido, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.pedidos
            .assign_driver_and_vehicle(pedido_id, conductor_id, vehiculo_id, editor)
            .await
    }

    /// Fails with ValidationConflict when leaving `COMPLETADO` for anything but
    /// `CANCELADO`.
    #[instrument(skip(self))]
    pub async fn change_order_state(
        &self,
        pedido_id: PedidoId,
        estado: EstadoPedido,
        editor: &str,
    ) -> Result<Pedido, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.pedidos.change_state(pedido_id, estado, editor).await
    }

    pub async fn get_order(&self, id: PedidoId) -> Result<Option<Pedido>, FleetError> {
        self.pedidos.get(id).await
    }

    pub async fn list_orders(&self) -> Result<Vec<Pedido>, FleetError> {
        self.pedidos.find_all().await
    }

    pub async fn orders_by_cliente(&self, cliente: ClienteId) -> Result<Vec<Pedido>, FleetError> {
        self.pedidos.find_by_cliente(cliente).await
    }

    pub async fn orders_by_conductor(
        &self,
        conductor: ConductorId,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.pedidos.find_by_conductor(conductor).await
    }

    pub async fn orders_by_estado(&self, estado: EstadoPedido) -> Result<Vec<Pedido>, FleetError> {
        self.pedidos.find_by_estado(estado).await
    }

    pub async fn orders_created_between(
        &self,
        desde: DateTime<Utc>,
        hasta: DateTime<Utc>,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.pedidos.find_by_fecha_creacion_between(desde, hasta).await
    }

    pub async fn orders_by_cliente_and_estado(
        &self,
        cliente: ClienteId,
        estado: EstadoPedido,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.pedidos.find_by_cliente_and_estado(cliente, estado).await
    }

    pub async fn orders_by_conductor_and_estado(
        &self,
        conductor: ConductorId,
        estado: EstadoPedido,
    ) -> Result<Vec<Pedido>, FleetError> {
        self.pedidos
            .find_by_conductor_and_estado(conductor, estado)
            .await
    }
}
