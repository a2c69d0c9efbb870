//! Master data: clientes, conductores and vehiculos.
//!
//! Every mutating call resolves the editor first and appends exactly one audit record on
//! success: `CREAR`, `ACTUALIZAR`, `CAMBIO_ESTADO` or `ELIMINAR`.

use super::SharedResolver;
use crate::clients::{ClienteClient, ConductorClient, VehiculoClient};
use crate::error::FleetError;
use crate::model::{
    Cliente, ClienteCreate, ClienteId, ClientePatch, Conductor, ConductorCreate,
    ConductorDetalle, ConductorId, ConductorPatch, Edit, Vehiculo, VehiculoCreate, VehiculoId,
    VehiculoPatch,
};
use actor_framework::ActorClient;
use tracing::{instrument, warn};

/// Turns an `update_activo_status` row count into NotFound when nothing was touched.
fn require_row(rows: u64, entity: &'static str, id: impl ToString) -> Result<(), FleetError> {
    if rows == 0 {
        let id = id.to_string();
        warn!(entity, %id, "Status change matched no rows");
        return Err(FleetError::NotFound { entity, id });
    }
    Ok(())
}

#[derive(Clone)]
pub struct ClienteService {
    clientes: ClienteClient,
    editors: SharedResolver,
}

impl ClienteService {
    pub fn new(clientes: ClienteClient, editors: SharedResolver) -> Self {
        Self { clientes, editors }
    }

    #[instrument(skip(self, cliente))]
    pub async fn create(&self, cliente: ClienteCreate, editor: &str) -> Result<Cliente, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.clientes.create_cliente(Edit::new(editor, cliente)).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: ClienteId,
        patch: ClientePatch,
        editor: &str,
    ) -> Result<Cliente, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.clientes.update_cliente(id, Edit::new(editor, patch)).await
    }

    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: ClienteId,
        activo: bool,
        editor: &str,
    ) -> Result<(), FleetError> {
        let editor = self.editors.resolve(editor).await?;
        let rows = self.clientes.update_activo_status(id, activo, editor).await?;
        require_row(rows, "Cliente", id)
    }

    /// Fails with IntegrityConflict while any pedido references the cliente.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ClienteId, editor: &str) -> Result<(), FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.clientes.delete_cliente(id, editor).await
    }

    pub async fn get(&self, id: ClienteId) -> Result<Option<Cliente>, FleetError> {
        self.clientes.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Cliente>, FleetError> {
        self.clientes.find_all().await
    }

    pub async fn find_by_identificacion(
        &self,
        identificacion: &str,
    ) -> Result<Option<Cliente>, FleetError> {
        self.clientes.find_by_identificacion(identificacion).await
    }

    pub async fn find_by_activo(&self, activo: bool) -> Result<Vec<Cliente>, FleetError> {
        self.clientes.find_by_activo(activo).await
    }
}

#[derive(Clone)]
pub struct ConductorService {
    conductores: ConductorClient,
    vehiculos: VehiculoClient,
    editors: SharedResolver,
}

impl ConductorService {
    pub fn new(
        conductores: ConductorClient,
        vehiculos: VehiculoClient,
        editors: SharedResolver,
    ) -> Self {
        Self {
            conductores,
            vehiculos,
            editors,
        }
    }

    #[instrument(skip(self, conductor))]
    pub async fn create(
        &self,
        conductor: ConductorCreate,
        editor: &str,
    ) -> Result<Conductor, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.conductores
            .create_conductor(Edit::new(editor, conductor))
            .await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: ConductorId,
        patch: ConductorPatch,
        editor: &str,
    ) -> Result<Conductor, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.conductores
            .update_conductor(id, Edit::new(editor, patch))
            .await
    }

    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: ConductorId,
        activo: bool,
        editor: &str,
    ) -> Result<(), FleetError> {
        let editor = self.editors.resolve(editor).await?;
        let rows = self
            .conductores
            .update_activo_status(id, activo, editor)
            .await?;
        require_row(rows, "Conductor", id)
    }

    /// Fails with IntegrityConflict while the conductor holds vehicles or any pedido
    /// references it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ConductorId, editor: &str) -> Result<(), FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.conductores.delete_conductor(id, editor).await
    }

    pub async fn get(&self, id: ConductorId) -> Result<Option<Conductor>, FleetError> {
        self.conductores.get(id).await
    }

    /// The conductor with its linked vehicles.
    pub async fn detalle(&self, id: ConductorId) -> Result<Option<ConductorDetalle>, FleetError> {
        let Some(conductor) = self.conductores.get(id).await? else {
            return Ok(None);
        };
        let vehiculos = self.vehiculos.find_by_conductor(id).await?;
        Ok(Some(ConductorDetalle {
            conductor,
            vehiculos,
        }))
    }

    pub async fn list(&self) -> Result<Vec<Conductor>, FleetError> {
        self.conductores.find_all().await
    }

    pub async fn find_by_identificacion(
        &self,
        identificacion: &str,
    ) -> Result<Option<Conductor>, FleetError> {
        self.conductores.find_by_identificacion(identificacion).await
    }

    pub async fn find_by_activo(&self, activo: bool) -> Result<Vec<Conductor>, FleetError> {
        self.conductores.find_by_activo(activo).await
    }

    pub async fn vehiculos(&self, id: ConductorId) -> Result<Vec<Vehiculo>, FleetError> {
        self.vehiculos.find_by_conductor(id).await
    }
}

#[derive(Clone)]
pub struct VehiculoService {
    vehiculos: VehiculoClient,
    editors: SharedResolver,
}

impl VehiculoService {
    pub fn new(vehiculos: VehiculoClient, editors: SharedResolver) -> Self {
        Self { vehiculos, editors }
    }

    #[instrument(skip(self, vehiculo))]
    pub async fn create(
        &self,
        vehiculo: VehiculoCreate,
        editor: &str,
    ) -> Result<Vehiculo, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.vehiculos
            .create_vehiculo(Edit::new(editor, vehiculo))
            .await
    }

    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: VehiculoId,
        patch: VehiculoPatch,
        editor: &str,
    ) -> Result<Vehiculo, FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.vehiculos
            .update_vehiculo(id, Edit::new(editor, patch))
            .await
    }

    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: VehiculoId,
        activo: bool,
        editor: &str,
    ) -> Result<(), FleetError> {
        let editor = self.editors.resolve(editor).await?;
        let rows = self.vehiculos.update_activo_status(id, activo, editor).await?;
        require_row(rows, "Vehiculo", id)
    }

    /// Fails with IntegrityConflict while any pedido references the vehicle.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: VehiculoId, editor: &str) -> Result<(), FleetError> {
        let editor = self.editors.resolve(editor).await?;
        self.vehiculos.delete_vehiculo(id, editor).await
    }

    pub async fn get(&self, id: VehiculoId) -> Result<Option<Vehiculo>, FleetError> {
        self.vehiculos.get(id).await
    }

    pub async fn list(&self) -> Result<Vec<Vehiculo>, FleetError> {
        self.vehiculos.find_all().await
    }

    pub async fn find_by_placa(&self, placa: &str) -> Result<Option<Vehiculo>, FleetError> {
        self.vehiculos.find_by_placa(placa).await
    }

    pub async fn find_by_activo(&self, activo: bool) -> Result<Vec<Vehiculo>, FleetError> {
        self.vehiculos.find_by_activo(activo).await
    }

    pub async fn count_by_conductor(&self, conductor: ConductorId) -> Result<usize, FleetError> {
        self.vehiculos.count_by_conductor(conductor).await
    }

    pub async fn find_by_conductor(
        &self,
        conductor: ConductorId,
    ) -> Result<Vec<Vehiculo>, FleetError> {
        self.vehiculos.find_by_conductor(conductor).await
    }
}
