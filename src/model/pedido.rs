use super::{ClienteId, ConductorId, PedidoId, VehiculoId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a [`Pedido`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoPedido {
    #[default]
    Pendiente,
    Asignado,
    EnCamino,
    Completado,
    Cancelado,
}

impl EstadoPedido {
    /// Completed orders may only move to `Cancelado`. Every other transition is allowed.
    pub fn can_transition_to(self, next: EstadoPedido) -> bool {
        self != EstadoPedido::Completado || next == EstadoPedido::Cancelado
    }
}

impl fmt::Display for EstadoPedido {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EstadoPedido::Pendiente => "PENDIENTE",
            EstadoPedido::Asignado => "ASIGNADO",
            EstadoPedido::EnCamino => "EN_CAMINO",
            EstadoPedido::Completado => "COMPLETADO",
            EstadoPedido::Cancelado => "CANCELADO",
        };
        f.write_str(name)
    }
}

/// A delivery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pedido {
    pub id: PedidoId,
    pub cliente: ClienteId,
    pub direccion_origen: String,
    pub direccion_destino: String,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_recogida_estimada: Option<DateTime<Utc>>,
    pub fecha_recogida_real: Option<DateTime<Utc>>,
    pub fecha_entrega_estimada: Option<DateTime<Utc>>,
    pub fecha_entrega_real: Option<DateTime<Utc>>,
    pub estado: EstadoPedido,
    pub vehiculo: Option<VehiculoId>,
    pub conductor: Option<ConductorId>,
    pub peso_kg: Option<Decimal>,
    pub notas: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedidoCreate {
    pub cliente_id: ClienteId,
    pub direccion_origen: String,
    pub direccion_destino: String,
    /// Defaults to now.
    #[serde(default)]
    pub fecha_creacion: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_recogida_estimada: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_recogida_real: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_entrega_estimada: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_entrega_real: Option<DateTime<Utc>>,
    /// Defaults to `PENDIENTE`.
    #[serde(default)]
    pub estado: Option<EstadoPedido>,
    #[serde(default)]
    pub conductor_id: Option<ConductorId>,
    #[serde(default)]
    pub vehiculo_id: Option<VehiculoId>,
    #[serde(default)]
    pub peso_kg: Option<Decimal>,
    #[serde(default)]
    pub notas: Option<String>,
}

impl PedidoCreate {
    pub fn new(
        cliente_id: ClienteId,
        direccion_origen: impl Into<String>,
        direccion_destino: impl Into<String>,
    ) -> Self {
        Self {
            cliente_id,
            direccion_origen: direccion_origen.into(),
            direccion_destino: direccion_destino.into(),
            fecha_creacion: None,
            fecha_recogida_estimada: None,
            fecha_recogida_real: None,
            fecha_entrega_estimada: None,
            fecha_entrega_real: None,
            estado: None,
            conductor_id: None,
            vehiculo_id: None,
            peso_kg: None,
            notas: None,
        }
    }
}

/// A nested reference inside a patch: `{"id": 5}` points somewhere, `{"id": null}` clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference<I> {
    pub id: Option<I>,
}

impl<I> Reference<I> {
    pub fn to(id: I) -> Self {
        Self { id: Some(id) }
    }

    pub fn none() -> Self {
        Self { id: None }
    }
}

/// Partial update of a [`Pedido`].
///
/// Scalars: `None` leaves the field untouched. `conductor` and `vehiculo` are tri-state:
/// absent leaves the assignment alone, a [`Reference`] with a null id unassigns, and a
/// reference with an id resolves and replaces it. `estado` is not patchable; use the
/// state change operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PedidoPatch {
    #[serde(default)]
    pub cliente_id: Option<ClienteId>,
    #[serde(default)]
    pub direccion_origen: Option<String>,
    #[serde(default)]
    pub direccion_destino: Option<String>,
    #[serde(default)]
    pub fecha_recogida_estimada: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_recogida_real: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_entrega_estimada: Option<DateTime<Utc>>,
    #[serde(default)]
    pub fecha_entrega_real: Option<DateTime<Utc>>,
    #[serde(default)]
    pub conductor: Option<Reference<ConductorId>>,
    #[serde(default)]
    pub vehiculo: Option<Reference<VehiculoId>>,
    #[serde(default)]
    pub peso_kg: Option<Decimal>,
    #[serde(default)]
    pub notas: Option<String>,
}
