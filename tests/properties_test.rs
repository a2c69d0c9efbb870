//! Cross-cutting rules: audit trail completeness, capacity under concurrency and
//! referential integrity.

mod common;

use common::{cliente, conductor, pedido, vehiculo, ADMIN, OPS};
use flota_pedidos::model::{
    AuditedEntity, ChangeDetails, ClientePatch, EstadoPedido, PedidoCreate, TipoOperacion,
    VehiculoId, MAX_VEHICULOS_POR_CONDUCTOR,
};
use flota_pedidos::{FleetError, FleetSystem};

async fn audit_len(system: &FleetSystem, entidad: AuditedEntity) -> usize {
    system.auditoria.all(entidad).await.unwrap().len()
}

async fn latest(system: &FleetSystem, entidad: AuditedEntity) -> (TipoOperacion, String) {
    let records = system.auditoria.all(entidad).await.unwrap();
    let newest = records.first().expect("audit log is empty");
    (newest.operacion, newest.editor.clone())
}

#[tokio::test]
async fn every_cliente_mutation_appends_one_record() {
    let system = common::system().await;

    let ana = system
        .clientes
        .create(cliente("1020", "Ana Torres"), ADMIN)
        .await
        .unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Cliente).await, 1);
    assert_eq!(
        latest(&system, AuditedEntity::Cliente).await,
        (TipoOperacion::Crear, ADMIN.to_string())
    );

    let patch = ClientePatch {
        telefono: Some("3100000000".into()),
        ..Default::default()
    };
    system.clientes.update(ana.id, patch, OPS).await.unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Cliente).await, 2);
    assert_eq!(
        latest(&system, AuditedEntity::Cliente).await,
        (TipoOperacion::Actualizar, OPS.to_string())
    );

    system.clientes.change_status(ana.id, false, OPS).await.unwrap();
    assert_eq!(
        latest(&system, AuditedEntity::Cliente).await,
        (TipoOperacion::CambioEstado, OPS.to_string())
    );
    let stored = system.clientes.get(ana.id).await.unwrap().unwrap();
    assert!(!stored.activo);

    system.clientes.delete(ana.id, ADMIN).await.unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Cliente).await, 4);
    let records = system.auditoria.all(AuditedEntity::Cliente).await.unwrap();
    assert_eq!(records[0].operacion, TipoOperacion::Eliminar);
    assert_eq!(records[0].subject_id, None);
    assert_eq!(records[0].cambios, ChangeDetails::Empty);

    // History survives the delete through the natural key.
    let history = system
        .auditoria
        .history_by_key(AuditedEntity::Cliente, "1020")
        .await
        .unwrap();
    assert_eq!(history.len(), 4);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn failed_mutations_leave_no_record() {
    let system = common::system().await;
    system
        .clientes
        .create(cliente("1020", "Ana Torres"), ADMIN)
        .await
        .unwrap();

    let duplicate = system
        .clientes
        .create(cliente("1020", "Otra Ana"), ADMIN)
        .await
        .unwrap_err();
    assert!(matches!(duplicate, FleetError::ValidationConflict(_)));

    let unknown_editor = system
        .clientes
        .create(cliente("3040", "Luis Pardo"), "ghost")
        .await
        .unwrap_err();
    assert_eq!(unknown_editor, FleetError::not_found("Usuario", "ghost"));

    assert_eq!(audit_len(&system, AuditedEntity::Cliente).await, 1);
    assert_eq!(system.clientes.list().await.unwrap().len(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn every_pedido_mutation_appends_one_record() {
    let system = common::system().await;
    let ana = system
        .clientes
        .create(cliente("1020", "Ana Torres"), ADMIN)
        .await
        .unwrap();
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();
    let conductor_records = audit_len(&system, AuditedEntity::Conductor).await;

    let p1 = system.pedidos.create_order(pedido(ana.id), ADMIN).await.unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Pedido).await, 1);

    system
        .pedidos
        .assign_driver_and_vehicle(p1.id, c1.id, v1.id, OPS)
        .await
        .unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Pedido).await, 2);
    assert_eq!(
        latest(&system, AuditedEntity::Pedido).await,
        (TipoOperacion::Actualizar, OPS.to_string())
    );

    system
        .pedidos
        .change_order_state(p1.id, EstadoPedido::EnCamino, ADMIN)
        .await
        .unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Pedido).await, 3);

    system.pedidos.delete_order(p1.id, ADMIN).await.unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Pedido).await, 4);
    assert_eq!(
        latest(&system, AuditedEntity::Pedido).await,
        (TipoOperacion::Eliminar, ADMIN.to_string())
    );

    // The id is the key, so the delete stays in the pedido's history.
    let history = system
        .auditoria
        .history_by_key(AuditedEntity::Pedido, &p1.id.to_string())
        .await
        .unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].operacion, TipoOperacion::Eliminar);
    assert_eq!(history[0].subject_id, None);
    assert_eq!(history[3].operacion, TipoOperacion::Crear);

    // Pairing a conductor with a pedido is recorded on the pedido only.
    assert_eq!(
        audit_len(&system, AuditedEntity::Conductor).await,
        conductor_records
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn assignment_snapshot_lists_the_conductors_vehicles() {
    let system = common::system().await;
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();
    system
        .asignaciones
        .assign_vehicle(c1.id, v1.id, OPS)
        .await
        .unwrap();

    let history = system
        .auditoria
        .history(AuditedEntity::Conductor, c1.id.0)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].operacion, TipoOperacion::Actualizar);
    assert_eq!(history[0].editor, OPS);
    match &history[0].cambios {
        ChangeDetails::Snapshot { data, .. } => {
            assert_eq!(data["vehiculos"][0]["placa"], "V1");
            assert_eq!(data["identificacion"], "C1");
        }
        other => panic!("expected a snapshot, got {other:?}"),
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn conductor_delete_requires_no_linked_vehicles() {
    let system = common::system().await;
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();
    system
        .asignaciones
        .assign_vehicle(c1.id, v1.id, ADMIN)
        .await
        .unwrap();
    let before = audit_len(&system, AuditedEntity::Conductor).await;

    let err = system.conductores.delete(c1.id, ADMIN).await.unwrap_err();
    assert!(matches!(err, FleetError::IntegrityConflict(_)));
    assert_eq!(audit_len(&system, AuditedEntity::Conductor).await, before);
    assert!(system.conductores.get(c1.id).await.unwrap().is_some());

    system
        .asignaciones
        .unassign_vehicle(c1.id, v1.id, ADMIN)
        .await
        .unwrap();
    let before = audit_len(&system, AuditedEntity::Conductor).await;

    system.conductores.delete(c1.id, ADMIN).await.unwrap();
    assert_eq!(audit_len(&system, AuditedEntity::Conductor).await, before + 1);
    assert_eq!(
        latest(&system, AuditedEntity::Conductor).await,
        (TipoOperacion::Eliminar, ADMIN.to_string())
    );
    assert!(system.conductores.get(c1.id).await.unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_assignments_never_exceed_capacity() {
    let system = common::system().await;
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();

    let mut vehiculos = Vec::new();
    for n in 0..10 {
        let v = system
            .vehiculos
            .create(vehiculo(&format!("RACE{n}")), ADMIN)
            .await
            .unwrap();
        vehiculos.push(v.id);
    }

    let conductor_id = c1.id;
    let handles: Vec<_> = vehiculos
        .into_iter()
        .map(|vehiculo_id| {
            let asignaciones = system.asignaciones.clone();
            tokio::spawn(async move {
                asignaciones.assign_vehicle(conductor_id, vehiculo_id, ADMIN).await
            })
        })
        .collect();

    let mut linked = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => linked += 1,
            Err(e) => assert!(
                matches!(e, FleetError::CapacityExceeded { .. }),
                "unexpected error: {e:?}"
            ),
        }
    }

    assert_eq!(linked, MAX_VEHICULOS_POR_CONDUCTOR);
    assert_eq!(
        system.vehiculos.count_by_conductor(c1.id).await.unwrap(),
        MAX_VEHICULOS_POR_CONDUCTOR
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn racing_conductors_get_one_vehicle_once() {
    let system = common::system().await;
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();

    let mut conductores = Vec::new();
    for n in 0..5 {
        let c = system
            .conductores
            .create(conductor(&format!("C{n}")), ADMIN)
            .await
            .unwrap();
        conductores.push(c.id);
    }

    let vehiculo_id = v1.id;
    let handles: Vec<_> = conductores
        .into_iter()
        .map(|conductor_id| {
            let asignaciones = system.asignaciones.clone();
            tokio::spawn(async move {
                asignaciones.assign_vehicle(conductor_id, vehiculo_id, ADMIN).await
            })
        })
        .collect();

    let mut winners = Vec::new();
    for handle in handles {
        if let Ok(conductor) = handle.await.unwrap() {
            winners.push(conductor.id);
        }
    }
    assert_eq!(winners.len(), 1);

    let v1 = system.vehiculos.get(v1.id).await.unwrap().unwrap();
    assert_eq!(v1.conductor, Some(winners[0]));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() {
    let system = common::system().await;
    let ana = system
        .clientes
        .create(cliente("1020", "Ana Torres"), ADMIN)
        .await
        .unwrap();
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();

    let mut create = pedido(ana.id);
    create.conductor_id = Some(c1.id);
    create.vehiculo_id = Some(v1.id);
    let p1 = system.pedidos.create_order(create, ADMIN).await.unwrap();
    assert_eq!(p1.estado, EstadoPedido::Pendiente);

    for err in [
        system.clientes.delete(ana.id, ADMIN).await.unwrap_err(),
        system.conductores.delete(c1.id, ADMIN).await.unwrap_err(),
        system.vehiculos.delete(v1.id, ADMIN).await.unwrap_err(),
    ] {
        assert!(matches!(err, FleetError::IntegrityConflict(_)), "{err:?}");
    }

    system.pedidos.delete_order(p1.id, ADMIN).await.unwrap();

    system.clientes.delete(ana.id, ADMIN).await.unwrap();
    system.conductores.delete(c1.id, ADMIN).await.unwrap();
    system.vehiculos.delete(v1.id, ADMIN).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn failed_order_creation_releases_the_cliente() {
    let system = common::system().await;
    let ana = system
        .clientes
        .create(cliente("1020", "Ana Torres"), ADMIN)
        .await
        .unwrap();

    let missing = system
        .pedidos
        .create_order(
            PedidoCreate {
                conductor_id: Some(flota_pedidos::model::ConductorId(99)),
                ..pedido(ana.id)
            },
            ADMIN,
        )
        .await
        .unwrap_err();
    assert!(missing.is_not_found());
    assert!(system.pedidos.list_orders().await.unwrap().is_empty());
    assert_eq!(audit_len(&system, AuditedEntity::Pedido).await, 0);

    // No dangling reference was left on the cliente.
    system.clientes.delete(ana.id, ADMIN).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn assignment_rules_apply_to_orders() {
    let system = common::system().await;
    let ana = system
        .clientes
        .create(cliente("1020", "Ana Torres"), ADMIN)
        .await
        .unwrap();
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let c2 = system.conductores.create(conductor("C2"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();
    let v2 = system.vehiculos.create(vehiculo("V2"), ADMIN).await.unwrap();
    system
        .asignaciones
        .assign_vehicle(c1.id, v1.id, ADMIN)
        .await
        .unwrap();
    system.vehiculos.change_status(v2.id, false, ADMIN).await.unwrap();
    let p1 = system.pedidos.create_order(pedido(ana.id), ADMIN).await.unwrap();

    let held = system
        .pedidos
        .assign_driver_and_vehicle(p1.id, c2.id, v1.id, ADMIN)
        .await
        .unwrap_err();
    assert!(matches!(held, FleetError::ValidationConflict(ref m) if m.contains("another conductor")));

    let inactive = system
        .pedidos
        .assign_driver_and_vehicle(p1.id, c2.id, v2.id, ADMIN)
        .await
        .unwrap_err();
    assert!(matches!(inactive, FleetError::ValidationConflict(ref m) if m.contains("not active")));

    let unchanged = system.pedidos.get_order(p1.id).await.unwrap().unwrap();
    assert_eq!(unchanged.estado, EstadoPedido::Pendiente);
    assert_eq!(unchanged.conductor, None);

    // A refused pairing retained nothing.
    system.conductores.delete(c2.id, ADMIN).await.unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn status_change_on_missing_row_is_not_found() {
    let system = common::system().await;
    let err = system
        .vehiculos
        .change_status(flota_pedidos::model::VehiculoId(42), false, ADMIN)
        .await
        .unwrap_err();
    assert_eq!(err, FleetError::not_found("Vehiculo", 42));
    assert_eq!(audit_len(&system, AuditedEntity::Vehiculo).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unassigning_a_vehicle_held_by_nobody_is_refused() {
    let system = common::system().await;
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let v4 = system.vehiculos.create(vehiculo("V4"), ADMIN).await.unwrap();
    let conductor_records = audit_len(&system, AuditedEntity::Conductor).await;

    let err = system
        .asignaciones
        .unassign_vehicle(c1.id, v4.id, ADMIN)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        FleetError::ValidationConflict(format!(
            "vehiculo V4 is not assigned to conductor {}",
            c1.id
        ))
    );

    let v4 = system.vehiculos.get(v4.id).await.unwrap().unwrap();
    assert_eq!(v4.conductor, None);
    assert_eq!(
        audit_len(&system, AuditedEntity::Conductor).await,
        conductor_records
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unassigning_from_the_wrong_conductor_keeps_the_link() {
    let system = common::system().await;
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let c2 = system.conductores.create(conductor("C2"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();
    system
        .asignaciones
        .assign_vehicle(c1.id, v1.id, ADMIN)
        .await
        .unwrap();
    let conductor_records = audit_len(&system, AuditedEntity::Conductor).await;

    let err = system
        .asignaciones
        .unassign_vehicle(c2.id, v1.id, ADMIN)
        .await
        .unwrap_err();
    assert!(
        matches!(&err, FleetError::ValidationConflict(m) if m.contains("is not assigned to conductor")),
        "unexpected error: {err:?}"
    );

    let v1 = system.vehiculos.get(v1.id).await.unwrap().unwrap();
    assert_eq!(v1.conductor, Some(c1.id));
    assert_eq!(
        audit_len(&system, AuditedEntity::Conductor).await,
        conductor_records
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn unassigning_a_missing_vehicle_is_not_found() {
    let system = common::system().await;
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();
    system
        .asignaciones
        .assign_vehicle(c1.id, v1.id, ADMIN)
        .await
        .unwrap();
    let conductor_records = audit_len(&system, AuditedEntity::Conductor).await;

    let err = system
        .asignaciones
        .unassign_vehicle(c1.id, VehiculoId(99), ADMIN)
        .await
        .unwrap_err();
    assert_eq!(err, FleetError::not_found("Vehiculo", 99));

    let v1 = system.vehiculos.get(v1.id).await.unwrap().unwrap();
    assert_eq!(v1.conductor, Some(c1.id));
    assert_eq!(
        audit_len(&system, AuditedEntity::Conductor).await,
        conductor_records
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn reassigning_to_the_same_conductor_is_refused() {
    let system = common::system().await;
    let c1 = system.conductores.create(conductor("C1"), ADMIN).await.unwrap();
    let v1 = system.vehiculos.create(vehiculo("V1"), ADMIN).await.unwrap();
    system
        .asignaciones
        .assign_vehicle(c1.id, v1.id, ADMIN)
        .await
        .unwrap();
    let conductor_records = audit_len(&system, AuditedEntity::Conductor).await;

    let err = system
        .asignaciones
        .assign_vehicle(c1.id, v1.id, OPS)
        .await
        .unwrap_err();
    assert!(
        matches!(&err, FleetError::ValidationConflict(m) if m.contains("already assigned")),
        "unexpected error: {err:?}"
    );

    assert_eq!(system.vehiculos.count_by_conductor(c1.id).await.unwrap(), 1);
    let v1 = system.vehiculos.get(v1.id).await.unwrap().unwrap();
    assert_eq!(v1.conductor, Some(c1.id));
    assert_eq!(
        audit_len(&system, AuditedEntity::Conductor).await,
        conductor_records
    );

    system.shutdown().await.unwrap();
}
