use super::{ConductorId, Vehiculo};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upper bound on vehicles linked to one conductor at any time.
pub const MAX_VEHICULOS_POR_CONDUCTOR: usize = 3;

/// A driver. Linked vehicles are recorded on the [`Vehiculo`] side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conductor {
    pub id: ConductorId,
    pub identificacion: String,
    pub nombre_completo: String,
    pub fecha_nacimiento: Option<NaiveDate>,
    pub telefono: Option<String>,
    pub activo: bool,
    /// Number of pedidos pointing at this conductor.
    #[serde(skip)]
    pub referencias: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConductorCreate {
    pub identificacion: String,
    pub nombre_completo: String,
    #[serde(default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConductorPatch {
    #[serde(default)]
    pub identificacion: Option<String>,
    #[serde(default)]
    pub nombre_completo: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<NaiveDate>,
    #[serde(default)]
    pub telefono: Option<String>,
}

/// A conductor together with the vehicles currently linked to it.
///
/// This is the snapshot recorded when vehicles are assigned or unassigned, so the audit
/// trail shows the fleet a driver held after each change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductorDetalle {
    #[serde(flatten)]
    pub conductor: Conductor,
    pub vehiculos: Vec<Vehiculo>,
}
