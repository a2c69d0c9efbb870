#![allow(dead_code)]

use flota_pedidos::model::{
    ClienteCreate, ConductorCreate, PedidoCreate, UsuarioCreate, VehiculoCreate,
};
use flota_pedidos::{FleetSystem, SystemConfig};
use rust_decimal::Decimal;

pub const ADMIN: &str = "admin";
pub const OPS: &str = "ops";

/// A running system with two registered editors.
pub async fn system() -> FleetSystem {
    let system = FleetSystem::with_config(&SystemConfig::default());
    for (username, nombre) in [(ADMIN, "Administrador"), (OPS, "Operaciones")] {
        system
            .usuarios
            .create_usuario(UsuarioCreate {
                username: username.to_string(),
                nombre_completo: nombre.to_string(),
            })
            .await
            .unwrap();
    }
    system
}

pub fn cliente(identificacion: &str, nombre: &str) -> ClienteCreate {
    ClienteCreate {
        identificacion: identificacion.to_string(),
        nombre_completo: nombre.to_string(),
        telefono: None,
        direccion_residencia: None,
        activo: None,
    }
}

pub fn conductor(identificacion: &str) -> ConductorCreate {
    ConductorCreate {
        identificacion: identificacion.to_string(),
        nombre_completo: format!("Conductor {identificacion}"),
        fecha_nacimiento: None,
        telefono: None,
        activo: None,
    }
}

pub fn vehiculo(placa: &str) -> VehiculoCreate {
    VehiculoCreate {
        placa: placa.to_string(),
        capacidad_kg: Decimal::new(1200, 0),
        marca: Some("Hino".to_string()),
        modelo: Some("300".to_string()),
        anio: Some(2020),
        activo: None,
    }
}

pub fn pedido(cliente_id: flota_pedidos::model::ClienteId) -> PedidoCreate {
    PedidoCreate::new(cliente_id, "Bodega Norte", "Calle 80 # 20-15")
}
