use super::{ConductorId, VehiculoId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transport asset, linked to at most one conductor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehiculo {
    pub id: VehiculoId,
    pub placa: String,
    pub capacidad_kg: Decimal,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub anio: Option<i32>,
    pub activo: bool,
    /// Written only through the conductor's assign/unassign operations.
    pub conductor: Option<ConductorId>,
    /// Number of pedidos pointing at this vehicle.
    #[serde(skip)]
    pub referencias: u32,
}

impl Vehiculo {
    pub fn descripcion(&self) -> Option<String> {
        let parts: Vec<&str> = [self.marca.as_deref(), self.modelo.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiculoCreate {
    pub placa: String,
    pub capacidad_kg: Decimal,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub anio: Option<i32>,
    #[serde(default)]
    pub activo: Option<bool>,
}

/// Partial update. The conductor link cannot be changed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VehiculoPatch {
    #[serde(default)]
    pub placa: Option<String>,
    #[serde(default)]
    pub capacidad_kg: Option<Decimal>,
    #[serde(default)]
    pub marca: Option<String>,
    #[serde(default)]
    pub modelo: Option<String>,
    #[serde(default)]
    pub anio: Option<i32>,
}
