//! Audit trail records and the snapshots they carry.

use super::{AuditRecordId, Cliente, Conductor, ConductorDetalle, Editor, Pedido, UsuarioId, Vehiculo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version stamped on every snapshot so readers can evolve alongside the entity shapes.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoOperacion {
    Crear,
    Actualizar,
    CambioEstado,
    Eliminar,
}

impl fmt::Display for TipoOperacion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TipoOperacion::Crear => "CREAR",
            TipoOperacion::Actualizar => "ACTUALIZAR",
            TipoOperacion::CambioEstado => "CAMBIO_ESTADO",
            TipoOperacion::Eliminar => "ELIMINAR",
        };
        f.write_str(name)
    }
}

/// The entity types that keep an audit log. Each has its own log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditedEntity {
    Cliente,
    Conductor,
    Vehiculo,
    Pedido,
}

/// What changed: a full snapshot of the subject after the mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeDetails {
    Snapshot {
        version: u32,
        data: serde_json::Value,
    },
    /// Hard deletes carry no snapshot.
    Empty,
    /// The subject could not be serialized; the mutation still went through.
    Unavailable { reason: String },
}

impl ChangeDetails {
    /// Snapshot of `subject`, or `Unavailable` if serialization fails.
    pub fn capture<S: Serialize>(subject: &S) -> Self {
        match serde_json::to_value(subject) {
            Ok(data) => ChangeDetails::Snapshot {
                version: SNAPSHOT_VERSION,
                data,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Audit snapshot serialization failed");
                ChangeDetails::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// One immutable entry in an audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: AuditRecordId,
    pub entidad: AuditedEntity,
    /// `None` once the subject has been hard-deleted.
    pub subject_id: Option<u64>,
    pub subject_key: Option<String>,
    pub subject_name: Option<String>,
    pub operacion: TipoOperacion,
    pub editor: String,
    pub editor_id: UsuarioId,
    pub timestamp: DateTime<Utc>,
    pub cambios: ChangeDetails,
}

/// Payload for appending a record. Id and timestamp are assigned by the log.
#[derive(Debug, Clone)]
pub struct NewAuditRecord {
    pub entidad: AuditedEntity,
    pub subject_id: Option<u64>,
    pub subject_key: Option<String>,
    pub subject_name: Option<String>,
    pub operacion: TipoOperacion,
    pub editor: Editor,
    pub cambios: ChangeDetails,
}

impl NewAuditRecord {
    pub fn of<S: Audited>(subject: &S, operacion: TipoOperacion, editor: &Editor) -> Self {
        let (subject_id, cambios) = match operacion {
            TipoOperacion::Eliminar => (None, ChangeDetails::Empty),
            _ => (Some(subject.subject_id()), ChangeDetails::capture(subject)),
        };
        Self {
            entidad: S::ENTITY,
            subject_id,
            subject_key: subject.natural_key(),
            subject_name: subject.display_name(),
            operacion,
            editor: editor.clone(),
            cambios,
        }
    }
}

/// An entity whose mutations are written to an audit log.
pub trait Audited: Serialize {
    const ENTITY: AuditedEntity;

    fn subject_id(&self) -> u64;

    /// Business key (identificacion, placa) used to find history across deletes.
    fn natural_key(&self) -> Option<String> {
        None
    }

    fn display_name(&self) -> Option<String> {
        None
    }
}

impl Audited for Cliente {
    const ENTITY: AuditedEntity = AuditedEntity::Cliente;

    fn subject_id(&self) -> u64 {
        self.id.0
    }

    fn natural_key(&self) -> Option<String> {
        Some(self.identificacion.clone())
    }

    fn display_name(&self) -> Option<String> {
        Some(self.nombre_completo.clone())
    }
}

impl Audited for Conductor {
    const ENTITY: AuditedEntity = AuditedEntity::Conductor;

    fn subject_id(&self) -> u64 {
        self.id.0
    }

    fn natural_key(&self) -> Option<String> {
        Some(self.identificacion.clone())
    }

    fn display_name(&self) -> Option<String> {
        Some(self.nombre_completo.clone())
    }
}

impl Audited for ConductorDetalle {
    const ENTITY: AuditedEntity = AuditedEntity::Conductor;

    fn subject_id(&self) -> u64 {
        self.conductor.subject_id()
    }

    fn natural_key(&self) -> Option<String> {
        self.conductor.natural_key()
    }

    fn display_name(&self) -> Option<String> {
        self.conductor.display_name()
    }
}

impl Audited for Vehiculo {
    const ENTITY: AuditedEntity = AuditedEntity::Vehiculo;

    fn subject_id(&self) -> u64 {
        self.id.0
    }

    fn natural_key(&self) -> Option<String> {
        Some(self.placa.clone())
    }

    fn display_name(&self) -> Option<String> {
        self.descripcion()
    }
}

impl Audited for Pedido {
    const ENTITY: AuditedEntity = AuditedEntity::Pedido;

    fn subject_id(&self) -> u64 {
        self.id.0
    }

    /// Pedidos have no business key, the id stands in for one.
    fn natural_key(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}
