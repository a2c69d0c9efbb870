use crate::model::{Editor, VehiculoId};

/// Custom operations on a Conductor beyond CRUD.
#[derive(Debug, Clone)]
pub enum ConductorAction {
    /// Flip the `activo` flag. Audited as `CAMBIO_ESTADO`.
    SetActivo { activo: bool, editor: Editor },
    /// Link a vehicle to this conductor. Audited as `ACTUALIZAR` on the conductor.
    AssignVehicle { vehiculo_id: VehiculoId, editor: Editor },
    /// Clear a vehicle's link to this conductor. Audited as `ACTUALIZAR` on the conductor.
    UnassignVehicle { vehiculo_id: VehiculoId, editor: Editor },
    /// Check that this conductor may drive `vehiculo_id` on a pedido and retain both. The
    /// pedido writes the audit record, not the conductor.
    PairForOrder { vehiculo_id: VehiculoId },
    /// A pedido started pointing at this conductor.
    Retain,
    /// A pedido stopped pointing at this conductor.
    Release,
}
