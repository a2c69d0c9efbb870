//! [`ActorEntity`] implementation for [`Cliente`].

use super::ClienteAction;
use crate::clients::AuditRecorder;
use crate::error::FleetError;
use crate::model::{
    require_text, Cliente, ClienteCreate, ClienteId, ClientePatch, Edit, Editor, TipoOperacion,
};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;

fn ensure_unique(peers: &Peers<'_, Cliente>, identificacion: &str) -> Result<(), FleetError> {
    if let Some(other) = peers.find(|c| c.identificacion == identificacion) {
        return Err(FleetError::ValidationConflict(format!(
            "identificacion {} is already registered to cliente {}",
            identificacion, other.id
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Cliente {
    type Id = ClienteId;
    type Create = Edit<ClienteCreate>;
    type Update = Edit<ClientePatch>;
    type Delete = Editor;
    type Action = ClienteAction;
    type ActionResult = Cliente;
    type Context = AuditRecorder;
    type Error = FleetError;

    async fn on_create(
        id: ClienteId,
        params: Edit<ClienteCreate>,
        peers: &Peers<'_, Self>,
        audit: &AuditRecorder,
    ) -> Result<Self, FleetError> {
        let Edit { editor, data } = params;
        require_text("identificacion", &data.identificacion)?;
        ensure_unique(peers, &data.identificacion)?;

        let cliente = Self {
            id,
            identificacion: data.identificacion,
            nombre_completo: data.nombre_completo,
            telefono: data.telefono,
            direccion_residencia: data.direccion_residencia,
            activo: data.activo.unwrap_or(true),
            referencias: 0,
        };
        audit.record(&cliente, TipoOperacion::Crear, &editor).await?;
        Ok(cliente)
    }

    async fn on_update(
        &mut self,
        update: Edit<ClientePatch>,
        peers: &Peers<'_, Self>,
        audit: &AuditRecorder,
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
        if let Some(telefono) = data.telefono {
            self.telefono = Some(telefono);
        }
        if let Some(direccion) = data.direccion_residencia {
            self.direccion_residencia = Some(direccion);
        }
        audit.record(&*self, TipoOperacion::Actualizar, &editor).await?;
        Ok(())
    }

    /// Refused while any pedido still points at this cliente.
    async fn on_delete(&self, editor: Editor, audit: &AuditRecorder) -> Result<(), FleetError> {
        if self.referencias > 0 {
            return Err(FleetError::IntegrityConflict(format!(
                "cliente {} is referenced by {} pedido(s)",
                self.id, self.referencias
            )));
        }
        audit.record(self, TipoOperacion::Eliminar, &editor).await?;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ClienteAction,
        _peers: &Peers<'_, Self>,
        audit: &AuditRecorder,
    ) -> Result<Cliente, FleetError> {
        match action {
            ClienteAction::SetActivo { activo, editor } => {
                self.activo = activo;
                audit.record(&*self, TipoOperacion::CambioEstado, &editor).await?;
            }
            ClienteAction::Retain => self.referencias += 1,
            ClienteAction::Release => self.referencias = self.referencias.saturating_sub(1),
        }
        Ok(self.clone())
    }
}
