//! Error taxonomy shared by every actor, client and service of the fleet.

use crate::model::ConductorId;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during fleet operations.
///
/// Business-rule violations are never retried; callers map each variant to whatever
/// user-facing status they need.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FleetError {
    /// A referenced Cliente, Conductor, Vehiculo, Pedido or Usuario does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Duplicate unique field, inactive resource, forbidden state transition or a vehicle
    /// linked elsewhere.
    #[error("{0}")]
    ValidationConflict(String),

    /// The conductor already holds the maximum number of vehicles.
    #[error("conductor {conductor} already has the maximum of {max} vehicles")]
    CapacityExceeded { conductor: ConductorId, max: usize },

    /// A delete was blocked by rows that still reference the entity.
    #[error("{0}")]
    IntegrityConflict(String),

    /// An actor closed its channel or dropped a reply.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl FleetError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        FleetError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FleetError::NotFound { .. })
    }
}

impl From<FrameworkError> for FleetError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound { entity, id } => FleetError::NotFound { entity, id },
            other => FleetError::ActorCommunication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_not_found_stays_not_found() {
        let err = FleetError::from(FrameworkError::NotFound {
            entity: "Vehiculo",
            id: "7".into(),
        });
        assert_eq!(err, FleetError::not_found("Vehiculo", 7));
        assert_eq!(err.to_string(), "Vehiculo not found: 7");
    }

    #[test]
    fn channel_failures_become_communication_errors() {
        let err = FleetError::from(FrameworkError::ActorClosed);
        assert!(matches!(err, FleetError::ActorCommunication(ref msg) if msg == "Actor closed"));
    }
}
