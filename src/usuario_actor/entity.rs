use crate::error::FleetError;
use crate::model::{require_text, Usuario, UsuarioCreate, UsuarioId};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Usuario {
    type Id = UsuarioId;
    type Create = UsuarioCreate;
    type Update = Infallible;
    type Delete = Infallible;
    type Action = Infallible;
    type ActionResult = Infallible;
    type Context = ();
    type Error = FleetError;

    /// Usernames are required and unique.
    async fn on_create(
        id: UsuarioId,
        params: UsuarioCreate,
        peers: &Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<Self, FleetError> {
        require_text("username", &params.username)?;
        if peers.find(|u| u.username == params.username).is_some() {
            return Err(FleetError::ValidationConflict(format!(
                "username {} is already taken",
                params.username
            )));
        }
        Ok(Self {
            id,
            username: params.username,
            nombre_completo: params.nombre_completo,
        })
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _peers: &Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<(), FleetError> {
        match update {}
    }

    async fn on_delete(&self, params: Infallible, _ctx: &()) -> Result<(), FleetError> {
        match params {}
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _peers: &Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<Infallible, FleetError> {
        match action {}
    }
}
