//! # Cliente Client
//!
//! Wraps a `ResourceClient<Cliente>` and exposes the customer gateway: CRUD, finders, the
//! atomic status update and the reference counting used by the Pedido actor.
use crate::cliente_actor::ClienteAction;
use crate::error::FleetError;
use crate::model::{Cliente, ClienteCreate, ClienteId, ClientePatch, Edit, Editor};
use actor_framework::{ActorClient, Filter, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Cliente actor.
#[derive(Clone)]
pub struct ClienteClient {
    inner: ResourceClient<Cliente>,
}

impl ActorClient<Cliente> for ClienteClient {
    fn inner(&self) -> &ResourceClient<Cliente> {
        &self.inner
    }
}

impl ClienteClient {
    pub fn new(inner: ResourceClient<Cliente>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn create_cliente(&self, params: Edit<ClienteCreate>) -> Result<Cliente, FleetError> {
        debug!(?params, "create_cliente called");
        self.inner.create(params).await
    }

    #[instrument(skip(self, patch))]
    pub async fn update_cliente(
        &self,
        id: ClienteId,
        patch: Edit<ClientePatch>,
    ) -> Result<Cliente, FleetError> {
        debug!(?patch, "update_cliente called");
        self.inner.update(id, patch).await
    }

    #[instrument(skip(self, editor))]
    pub async fn delete_cliente(&self, id: ClienteId, editor: Editor) -> Result<(), FleetError> {
        debug!("Sending request");
        self.inner.delete(id, editor).await
    }

    /// Sets `activo` and returns the number of rows affected: 0 when the cliente does not
    /// exist.
    #[instrument(skip(self, editor))]
    pub async fn update_activo_status(
        &self,
        id: ClienteId,
        activo: bool,
        editor: Editor,
    ) -> Result<u64, FleetError> {
        match self
            .inner
            .perform_action(id, ClienteAction::SetActivo { activo, editor })
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
    ) -> Result<Option<Cliente>, FleetError> {
        let wanted = identificacion.to_string();
        let mut found = self
            .inner
            .list(Filter::new(move |c: &Cliente| c.identificacion == wanted))
            .await?;
        Ok(found.pop())
    }

    #[instrument(skip(self))]
    pub async fn find_by_activo(&self, activo: bool) -> Result<Vec<Cliente>, FleetError> {
        self.inner
            .list(Filter::new(move |c: &Cliente| c.activo == activo))
            .await
    }

    /// Records that a pedido now points at this cliente. Fails with NotFound if it does not
    /// exist.
    #[instrument(skip(self))]
    pub(crate) async fn retain(&self, id: ClienteId) -> Result<Cliente, FleetError> {
        self.inner.perform_action(id, ClienteAction::Retain).await
    }

    #[instrument(skip(self))]
    pub(crate) async fn release(&self, id: ClienteId) -> Result<Cliente, FleetError> {
        self.inner.perform_action(id, ClienteAction::Release).await
    }
}
