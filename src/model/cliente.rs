use super::ClienteId;
use serde::{Deserialize, Serialize};

/// A customer who requests deliveries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cliente {
    pub id: ClienteId,
    pub identificacion: String,
    pub nombre_completo: String,
    pub telefono: Option<String>,
    pub direccion_residencia: Option<String>,
    pub activo: bool,
    /// Number of pedidos pointing at this cliente.
    #[serde(skip)]
    pub referencias: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteCreate {
    pub identificacion: String,
    pub nombre_completo: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion_residencia: Option<String>,
    /// Defaults to active.
    #[serde(default)]
    pub activo: Option<bool>,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientePatch {
    #[serde(default)]
    pub identificacion: Option<String>,
    #[serde(default)]
    pub nombre_completo: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion_residencia: Option<String>,
}
