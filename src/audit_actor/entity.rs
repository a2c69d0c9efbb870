//! [`ActorEntity`] implementation for [`AuditRecord`].
//!
//! Audit logs are append-only: the update, delete and action payloads are
//! [`Infallible`], so no request that would alter or remove a record can be built.

use crate::error::FleetError;
use crate::model::{AuditRecord, AuditRecordId, NewAuditRecord};
use actor_framework::{ActorEntity, Peers};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for AuditRecord {
    type Id = AuditRecordId;
    type Create = NewAuditRecord;
    type Update = Infallible;
    type Delete = Infallible;
    type Action = Infallible;
    type ActionResult = Infallible;
    type Context = ();
    type Error = FleetError;

    async fn on_create(
        id: AuditRecordId,
        params: NewAuditRecord,
        _peers: &Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<Self, FleetError> {
        Ok(Self {
            id,
            entidad: params.entidad,
            subject_id: params.subject_id,
            subject_key: params.subject_key,
            subject_name: params.subject_name,
            operacion: params.operacion,
            editor: params.editor.username,
            editor_id: params.editor.id,
            timestamp: Utc::now(),
            cambios: params.cambios,
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
