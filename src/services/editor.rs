//! Resolution of the acting user.

use crate::clients::UsuarioClient;
use crate::error::FleetError;
use crate::model::{Editor, Usuario};
use async_trait::async_trait;
use std::sync::Arc;

/// Maps a username to the [`Editor`] recorded in audit records.
///
/// Every service receives one at construction. Fails with NotFound for unknown users.
#[async_trait]
pub trait EditorResolver: Send + Sync {
    async fn resolve(&self, username: &str) -> Result<Editor, FleetError>;
}

pub type SharedResolver = Arc<dyn EditorResolver>;

#[async_trait]
impl EditorResolver for UsuarioClient {
    async fn resolve(&self, username: &str) -> Result<Editor, FleetError> {
        self.find_by_username(username)
            .await?
            .as_ref()
            .map(Editor::from)
            .ok_or_else(|| FleetError::not_found("Usuario", username))
    }
}

/// A fixed set of users, for callers that do not run a Usuario actor.
#[derive(Debug, Default)]
pub struct StaticResolver {
    usuarios: Vec<Usuario>,
}

impl StaticResolver {
    pub fn new(usuarios: Vec<Usuario>) -> Self {
        Self { usuarios }
    }
}

#[async_trait]
impl EditorResolver for StaticResolver {
    async fn resolve(&self, username: &str) -> Result<Editor, FleetError> {
        self.usuarios
            .iter()
            .find(|u| u.username == username)
            .map(Editor::from)
            .ok_or_else(|| FleetError::not_found("Usuario", username))
    }
}
