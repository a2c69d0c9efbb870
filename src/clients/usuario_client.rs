use crate::error::FleetError;
use crate::model::{Usuario, UsuarioCreate};
use actor_framework::{ActorClient, Filter, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Usuario actor.
#[derive(Clone)]
pub struct UsuarioClient {
    inner: ResourceClient<Usuario>,
}

impl ActorClient<Usuario> for UsuarioClient {
    fn inner(&self) -> &ResourceClient<Usuario> {
        &self.inner
    }
}

impl UsuarioClient {
    pub fn new(inner: ResourceClient<Usuario>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_usuario(&self, params: UsuarioCreate) -> Result<Usuario, FleetError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Usuario>, FleetError> {
        let wanted = username.to_string();
        let mut found = self
            .inner
            .list(Filter::new(move |u: &Usuario| u.username == wanted))
            .await?;
        Ok(found.pop())
    }
}
