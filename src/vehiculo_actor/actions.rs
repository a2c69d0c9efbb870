use crate::model::{Conductor, ConductorId, Editor};

/// Custom operations on a Vehiculo beyond CRUD.
///
/// `Link`, `Unlink` and `RestoreLink` are only sent by the Conductor actor, which makes it
/// the single writer of the Vehiculo→Conductor link.
#[derive(Debug, Clone)]
pub enum VehiculoAction {
    /// Flip the `activo` flag. Audited as `CAMBIO_ESTADO`.
    SetActivo { activo: bool, editor: Editor },
    /// Link this vehicle to `conductor` after checking the assignment rules.
    Link { conductor: Conductor },
    /// Clear the link; fails unless it currently points at `conductor_id`.
    Unlink { conductor_id: ConductorId },
    /// Put the link back the way it was after a failed operation. No rules are checked.
    RestoreLink { conductor: Option<ConductorId> },
    /// Check the assignment rules for putting this vehicle on a pedido with `conductor`,
    /// and retain the vehicle if they pass.
    Pair { conductor: Conductor },
    /// A pedido started pointing at this vehicle.
    Retain,
    /// A pedido stopped pointing at this vehicle.
    Release,
}
