//! The one set of rules deciding whether a vehicle may be put in a conductor's hands.
//!
//! Both the conductor's assign operation and the pedido's driver-and-vehicle assignment
//! call [`check_assignment`]. It runs inside the Vehiculo actor with `linked` counted from
//! the same store that the subsequent write goes to, so the count and the link happen in
//! one step.

use crate::error::FleetError;
use crate::model::{Conductor, Vehiculo, MAX_VEHICULOS_POR_CONDUCTOR};

/// Why the vehicle is being put with the conductor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Create the Vehiculo→Conductor link.
    Link,
    /// Pair the two on a pedido. A vehicle already linked to this conductor is fine here.
    Pairing,
}

/// Checks, in order: conductor active, vehicle active, vehicle exclusivity, capacity.
///
/// `linked` is the number of vehicles currently linked to `conductor`, not counting
/// `vehiculo` itself.
pub fn check_assignment(
    conductor: &Conductor,
    vehiculo: &Vehiculo,
    linked: usize,
    intent: Intent,
) -> Result<(), FleetError> {
    if !conductor.activo {
        return Err(FleetError::ValidationConflict(format!(
            "conductor {} is not active",
            conductor.id
        )));
    }
    if !vehiculo.activo {
        return Err(FleetError::ValidationConflict(format!(
            "vehiculo {} is not active",
            vehiculo.placa
        )));
    }

    match vehiculo.conductor {
        Some(holder) if holder == conductor.id => match intent {
            Intent::Link => {
                return Err(FleetError::ValidationConflict(format!(
                    "vehiculo {} is already assigned to conductor {}",
                    vehiculo.placa, holder
                )))
            }
            // Already counted among the conductor's vehicles.
            Intent::Pairing => return Ok(()),
        },
        Some(holder) => {
            return Err(FleetError::ValidationConflict(format!(
                "vehiculo {} is assigned to another conductor: {}",
                vehiculo.placa, holder
            )))
        }
        None => {}
    }

    if linked >= MAX_VEHICULOS_POR_CONDUCTOR {
        return Err(FleetError::CapacityExceeded {
            conductor: conductor.id,
            max: MAX_VEHICULOS_POR_CONDUCTOR,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConductorId, VehiculoId};
    use rust_decimal::Decimal;

    fn conductor(id: u64, activo: bool) -> Conductor {
        Conductor {
            id: ConductorId(id),
            identificacion: format!("LIC-{id}"),
            nombre_completo: "Luis Pardo".into(),
            fecha_nacimiento: None,
            telefono: None,
            activo,
            referencias: 0,
        }
    }

    fn vehiculo(activo: bool, holder: Option<u64>) -> Vehiculo {
        Vehiculo {
            id: VehiculoId(9),
            placa: "XYZ789".into(),
            capacidad_kg: Decimal::new(2000, 0),
            marca: None,
            modelo: None,
            anio: None,
            activo,
            conductor: holder.map(ConductorId),
            referencias: 0,
        }
    }

    #[test]
    fn free_active_vehicle_under_capacity_is_accepted() {
        for intent in [Intent::Link, Intent::Pairing] {
            assert!(check_assignment(&conductor(1, true), &vehiculo(true, None), 2, intent).is_ok());
        }
    }

    #[test]
    fn inactive_parties_are_rejected() {
        let err = check_assignment(&conductor(1, false), &vehiculo(true, None), 0, Intent::Link)
            .unwrap_err();
        assert!(matches!(err, FleetError::ValidationConflict(ref m) if m.contains("conductor 1")));

        let err = check_assignment(&conductor(1, true), &vehiculo(false, None), 0, Intent::Pairing)
            .unwrap_err();
        assert!(matches!(err, FleetError::ValidationConflict(ref m) if m.contains("XYZ789")));
    }

    #[test]
    fn vehicle_held_elsewhere_names_the_holder() {
        let err = check_assignment(&conductor(2, true), &vehiculo(true, Some(1)), 0, Intent::Link)
            .unwrap_err();
        assert_eq!(
            err,
            FleetError::ValidationConflict(
                "vehiculo XYZ789 is assigned to another conductor: 1".into()
            )
        );
    }

    #[test]
    fn relinking_to_the_same_conductor_depends_on_intent() {
        let c = conductor(1, true);
        let v = vehiculo(true, Some(1));
        assert!(matches!(
            check_assignment(&c, &v, 3, Intent::Link),
            Err(FleetError::ValidationConflict(ref m)) if m.contains("already assigned")
        ));
        // Pairing an order with one of the conductor's own vehicles never hits the cap.
        assert!(check_assignment(&c, &v, 3, Intent::Pairing).is_ok());
    }

    #[test]
    fn capacity_is_enforced_for_both_intents() {
        for intent in [Intent::Link, Intent::Pairing] {
            let err = check_assignment(&conductor(1, true), &vehiculo(true, None), 3, intent)
                .unwrap_err();
            assert_eq!(
                err,
                FleetError::CapacityExceeded {
                    conductor: ConductorId(1),
                    max: MAX_VEHICULOS_POR_CONDUCTOR
                }
            );
        }
    }
}
