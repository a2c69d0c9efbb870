use crate::model::Editor;

/// Custom operations on a Cliente beyond CRUD.
#[derive(Debug, Clone)]
pub enum ClienteAction {
    /// Flip the `activo` flag. Audited as `CAMBIO_ESTADO`.
    SetActivo { activo: bool, editor: Editor },
    /// A pedido started pointing at this cliente.
    Retain,
    /// A pedido stopped pointing at this cliente.
    Release,
}
