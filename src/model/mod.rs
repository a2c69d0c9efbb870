//! Pure data structures for the fleet: entities, their create/patch payloads and ids.
//!
//! The [`ActorEntity`](actor_framework::ActorEntity) implementations live next to each
//! actor (`cliente_actor`, `vehiculo_actor`, ...); this module stays free of behavior apart
//! from small field validation helpers.

pub mod audit;
pub mod cliente;
pub mod conductor;
pub mod pedido;
pub mod usuario;
pub mod vehiculo;

pub use audit::*;
pub use cliente::*;
pub use conductor::*;
pub use pedido::*;
pub use usuario::*;
pub use vehiculo::*;

use crate::error::FleetError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(ClienteId);
entity_id!(ConductorId);
entity_id!(VehiculoId);
entity_id!(PedidoId);
entity_id!(UsuarioId);
entity_id!(
    /// Audit ids are allocated per audit log, so they are only unique within one entity type.
    AuditRecordId
);

/// Rejects blank values for a required text field.
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), FleetError> {
    if value.trim().is_empty() {
        return Err(FleetError::ValidationConflict(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}
