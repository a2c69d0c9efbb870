//! # Audit Clients
//!
//! [`AuditLogClient`] talks to a single audit log actor. [`AuditRecorder`] holds one per
//! audited entity type and is what entity actors and callers use.
use crate::error::FleetError;
use crate::model::{AuditRecord, Audited, AuditedEntity, Editor, NewAuditRecord, TipoOperacion};
use actor_framework::{ActorClient, Filter, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for one append-only audit log.
#[derive(Clone)]
pub struct AuditLogClient {
    inner: ResourceClient<AuditRecord>,
}

impl ActorClient<AuditRecord> for AuditLogClient {
    fn inner(&self) -> &ResourceClient<AuditRecord> {
        &self.inner
    }
}

/// Newest first; records written in the same instant fall back to append order.
fn newest_first(mut records: Vec<AuditRecord>) -> Vec<AuditRecord> {
    records.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
    records
}

impl AuditLogClient {
    pub fn new(inner: ResourceClient<AuditRecord>) -> Self {
        Self { inner }
    }

    pub async fn append(&self, record: NewAuditRecord) -> Result<AuditRecord, FleetError> {
        self.inner.create(record).await
    }

    async fn query(
        &self,
        predicate: impl Fn(&AuditRecord) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<AuditRecord>, FleetError> {
        let records = self.inner.list(Filter::new(predicate)).await?;
        Ok(newest_first(records))
    }

    pub async fn find_by_subject_id(&self, subject_id: u64) -> Result<Vec<AuditRecord>, FleetError> {
        self.query(move |r| r.subject_id == Some(subject_id)).await
    }

    pub async fn find_by_natural_key(&self, key: String) -> Result<Vec<AuditRecord>, FleetError> {
        self.query(move |r| r.subject_key.as_deref() == Some(key.as_str()))
            .await
    }

    pub async fn find_by_editor(&self, username: String) -> Result<Vec<AuditRecord>, FleetError> {
        self.query(move |r| r.editor == username).await
    }

    /// Case-insensitive substring match on the subject's display name.
    pub async fn find_by_name_containing(
        &self,
        fragment: String,
    ) -> Result<Vec<AuditRecord>, FleetError> {
        let needle = fragment.to_lowercase();
        self.query(move |r| {
            r.subject_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .await
    }
}

/// Writes and reads the audit trail of every audited entity type.
#[derive(Clone)]
pub struct AuditRecorder {
    clientes: AuditLogClient,
    conductores: AuditLogClient,
    vehiculos: AuditLogClient,
    pedidos: AuditLogClient,
}

impl AuditRecorder {
    pub fn new(
        clientes: AuditLogClient,
        conductores: AuditLogClient,
        vehiculos: AuditLogClient,
        pedidos: AuditLogClient,
    ) -> Self {
        Self {
            clientes,
            conductores,
            vehiculos,
            pedidos,
        }
    }

    pub fn log(&self, entidad: AuditedEntity) -> &AuditLogClient {
        match entidad {
            AuditedEntity::Cliente => &self.clientes,
            AuditedEntity::Conductor => &self.conductores,
            AuditedEntity::Vehiculo => &self.vehiculos,
            AuditedEntity::Pedido => &self.pedidos,
        }
    }

    /// Appends one record for `subject`. `Eliminar` records carry an empty snapshot and no
    /// subject id; every other operation stores a full snapshot of `subject`.
    #[instrument(skip(self, subject, editor), fields(editor = %editor.username))]
    pub async fn record<S: Audited + Sync>(
        &self,
        subject: &S,
        operacion: TipoOperacion,
        editor: &Editor,
    ) -> Result<AuditRecord, FleetError> {
        let record = NewAuditRecord::of(subject, operacion, editor);
        let saved = self.log(S::ENTITY).append(record).await?;
        info!(
            entidad = ?S::ENTITY,
            subject_id = subject.subject_id(),
            record_id = %saved.id,
            "Audit record appended"
        );
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn history(
        &self,
        entidad: AuditedEntity,
        subject_id: u64,
    ) -> Result<Vec<AuditRecord>, FleetError> {
        debug!("Sending request");
        self.log(entidad).find_by_subject_id(subject_id).await
    }

    #[instrument(skip(self))]
    pub async fn history_by_key(
        &self,
        entidad: AuditedEntity,
        key: &str,
    ) -> Result<Vec<AuditRecord>, FleetError> {
        debug!("Sending request");
        self.log(entidad).find_by_natural_key(key.to_string()).await
    }

    #[instrument(skip(self))]
    pub async fn by_editor(
        &self,
        entidad: AuditedEntity,
        username: &str,
    ) -> Result<Vec<AuditRecord>, FleetError> {
        debug!("Sending request");
        self.log(entidad).find_by_editor(username.to_string()).await
    }

    #[instrument(skip(self))]
    pub async fn search_by_name(
        &self,
        entidad: AuditedEntity,
        fragment: &str,
    ) -> Result<Vec<AuditRecord>, FleetError> {
        debug!("Sending request");
        self.log(entidad)
            .find_by_name_containing(fragment.to_string())
            .await
    }

    /// Every record in the log, newest first.
    pub async fn all(&self, entidad: AuditedEntity) -> Result<Vec<AuditRecord>, FleetError> {
        Ok(newest_first(self.log(entidad).find_all().await?))
    }
}
