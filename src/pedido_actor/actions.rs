use crate::model::{ConductorId, Editor, EstadoPedido, VehiculoId};

/// Custom operations on a Pedido beyond CRUD.
#[derive(Debug, Clone)]
pub enum PedidoAction {
    /// Put a conductor and vehicle on the order. Promotes `PENDIENTE` to `ASIGNADO`.
    AssignDriverAndVehicle {
        conductor_id: ConductorId,
        vehiculo_id: VehiculoId,
        editor: Editor,
    },
    /// Move to `estado`. A completed order may only be cancelled.
    ChangeState { estado: EstadoPedido, editor: Editor },
}
