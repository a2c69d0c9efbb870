use actor_framework::mock::{create_mock_client, expect_action, MockClient};
use actor_framework::ActorClient;
use flota_pedidos::clients::{AuditRecorder, ClienteClient, ConductorClient, PedidoClient, VehiculoClient};
use flota_pedidos::cliente_actor::ClienteAction;
use flota_pedidos::model::{
    AuditedEntity, Cliente, ClienteId, Conductor, ConductorId, Edit, Editor, EstadoPedido,
    PedidoCreate, TipoOperacion, UsuarioId, Vehiculo, VehiculoId,
};
use flota_pedidos::pedido_actor::PedidoContext;
use flota_pedidos::FleetError;

fn editor() -> Editor {
    Editor {
        id: UsuarioId(1),
        username: "admin".into(),
    }
}

fn cliente() -> Cliente {
    Cliente {
        id: ClienteId(1),
        identificacion: "1020".into(),
        nombre_completo: "Ana Torres".into(),
        telefono: None,
        direccion_residencia: None,
        activo: true,
        referencias: 1,
    }
}

fn conductor() -> Conductor {
    Conductor {
        id: ConductorId(1),
        identificacion: "C1".into(),
        nombre_completo: "Luis Pardo".into(),
        fecha_nacimiento: None,
        telefono: None,
        activo: true,
        referencias: 1,
    }
}

fn audit() -> AuditRecorder {
    let (actors, recorder) = flota_pedidos::audit_actor::new(10);
    for actor in actors.into_vec() {
        tokio::spawn(actor.run(()));
    }
    recorder
}

fn spawn_pedidos(ctx: PedidoContext) -> (PedidoClient, tokio::task::JoinHandle<()>) {
    let (actor, client) = flota_pedidos::pedido_actor::new(10);
    (client, tokio::spawn(actor.run(ctx)))
}

/// Real Pedido actor with mocked Cliente, Conductor and Vehiculo actors and real audit logs.
#[tokio::test]
async fn test_create_releases_cliente_when_conductor_is_missing() {
    let mut clientes = MockClient::<Cliente>::new();
    let mut conductores = MockClient::<Conductor>::new();
    let vehiculos = MockClient::<Vehiculo>::new();

    // retain, then the compensating release
    clientes.expect_action(ClienteId(1)).return_ok(cliente());
    conductores
        .expect_action(ConductorId(9))
        .return_err(FleetError::not_found("Conductor", 9));
    clientes.expect_action(ClienteId(1)).return_ok(cliente());

    let audit = audit();
    let (pedidos, handle) = spawn_pedidos(PedidoContext {
        clientes: ClienteClient::new(clientes.client()),
        conductores: ConductorClient::new(conductores.client()),
        vehiculos: VehiculoClient::new(vehiculos.client()),
        audit: audit.clone(),
    });

    let mut create = PedidoCreate::new(ClienteId(1), "Bodega Norte", "Calle 80");
    create.conductor_id = Some(ConductorId(9));
    let err = pedidos
        .create_pedido(Edit::new(editor(), create))
        .await
        .unwrap_err();
    assert_eq!(err, FleetError::not_found("Conductor", 9));

    assert!(pedidos.find_all().await.unwrap().is_empty());
    assert!(audit.all(AuditedEntity::Pedido).await.unwrap().is_empty());

    clientes.verify();
    conductores.verify();
    vehiculos.verify();

    drop(pedidos);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_assignment_promotes_pending_order() {
    let mut clientes = MockClient::<Cliente>::new();
    let mut conductores = MockClient::<Conductor>::new();
    let vehiculos = MockClient::<Vehiculo>::new();

    clientes.expect_action(ClienteId(1)).return_ok(cliente());
    // pair_for_order checks the rules and retains both sides
    conductores.expect_action(ConductorId(1)).return_ok(conductor());

    let audit = audit();
    let (pedidos, handle) = spawn_pedidos(PedidoContext {
        clientes: ClienteClient::new(clientes.client()),
        conductores: ConductorClient::new(conductores.client()),
        vehiculos: VehiculoClient::new(vehiculos.client()),
        audit: audit.clone(),
    });

    let created = pedidos
        .create_pedido(Edit::new(
            editor(),
            PedidoCreate::new(ClienteId(1), "Bodega Norte", "Calle 80"),
        ))
        .await
        .unwrap();
    assert_eq!(created.estado, EstadoPedido::Pendiente);

    let assigned = pedidos
        .assign_driver_and_vehicle(created.id, ConductorId(1), VehiculoId(3), editor())
        .await
        .unwrap();
    assert_eq!(assigned.estado, EstadoPedido::Asignado);
    assert_eq!(assigned.conductor, Some(ConductorId(1)));
    assert_eq!(assigned.vehiculo, Some(VehiculoId(3)));

    let history = audit
        .history(AuditedEntity::Pedido, created.id.0)
        .await
        .unwrap();
    let ops: Vec<_> = history.iter().map(|r| r.operacion).collect();
    assert_eq!(ops, vec![TipoOperacion::Actualizar, TipoOperacion::Crear]);

    clientes.verify();
    conductores.verify();
    vehiculos.verify();

    drop(pedidos);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_refused_pairing_leaves_order_untouched() {
    let mut clientes = MockClient::<Cliente>::new();
    let mut conductores = MockClient::<Conductor>::new();
    let vehiculos = MockClient::<Vehiculo>::new();

    clientes.expect_action(ClienteId(1)).return_ok(cliente());
    conductores
        .expect_action(ConductorId(1))
        .return_err(FleetError::CapacityExceeded {
            conductor: ConductorId(1),
            max: 3,
        });

    let audit = audit();
    let (pedidos, handle) = spawn_pedidos(PedidoContext {
        clientes: ClienteClient::new(clientes.client()),
        conductores: ConductorClient::new(conductores.client()),
        vehiculos: VehiculoClient::new(vehiculos.client()),
        audit: audit.clone(),
    });

    let created = pedidos
        .create_pedido(Edit::new(
            editor(),
            PedidoCreate::new(ClienteId(1), "Bodega Norte", "Calle 80"),
        ))
        .await
        .unwrap();

    let err = pedidos
        .assign_driver_and_vehicle(created.id, ConductorId(1), VehiculoId(3), editor())
        .await
        .unwrap_err();
    assert!(matches!(err, FleetError::CapacityExceeded { .. }));

    let stored = pedidos.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);
    assert_eq!(audit.all(AuditedEntity::Pedido).await.unwrap().len(), 1);

    clientes.verify();
    conductores.verify();

    drop(pedidos);
    handle.await.unwrap();
}

/// Inspects the raw requests the Pedido actor sends to the Cliente actor.
#[tokio::test]
async fn test_delete_releases_the_cliente() {
    let (cliente_client, mut receiver) = create_mock_client::<Cliente>(10);
    let responder = tokio::spawn(async move {
        let mut seen = Vec::new();
        while let Some((id, action, respond_to)) = expect_action(&mut receiver).await {
            assert_eq!(id, ClienteId(1));
            seen.push(action);
            respond_to.send(Ok(cliente())).unwrap();
        }
        seen
    });

    let conductores = MockClient::<Conductor>::new();
    let vehiculos = MockClient::<Vehiculo>::new();
    let audit = audit();
    let (pedidos, handle) = spawn_pedidos(PedidoContext {
        clientes: ClienteClient::new(cliente_client),
        conductores: ConductorClient::new(conductores.client()),
        vehiculos: VehiculoClient::new(vehiculos.client()),
        audit: audit.clone(),
    });

    let created = pedidos
        .create_pedido(Edit::new(
            editor(),
            PedidoCreate::new(ClienteId(1), "Bodega Norte", "Calle 80"),
        ))
        .await
        .unwrap();
    pedidos.delete_pedido(created.id, editor()).await.unwrap();
    assert!(pedidos.get(created.id).await.unwrap().is_none());

    let records = audit.all(AuditedEntity::Pedido).await.unwrap();
    assert_eq!(records[0].operacion, TipoOperacion::Eliminar);
    assert_eq!(records[0].subject_id, None);

    // Stopping the actor drops its context and closes the cliente channel.
    drop(pedidos);
    handle.await.unwrap();

    let seen = responder.await.unwrap();
    assert_eq!(seen.len(), 2);
    assert!(matches!(seen[0], ClienteAction::Retain));
    assert!(matches!(seen[1], ClienteAction::Release));
}
