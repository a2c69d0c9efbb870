use actor_framework::{ActorEntity, Filter, FrameworkError, Peers, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Truck {
    id: u64,
    plate: String,
    load_kg: u32,
    in_use: bool,
}

#[derive(Debug)]
struct TruckCreate {
    plate: String,
}

#[derive(Debug)]
struct TruckUpdate {
    plate: Option<String>,
}

#[derive(Debug)]
enum TruckAction {
    Load(u32),
    MarkInUse,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum TruckError {
    #[error("plate already registered: {0}")]
    DuplicatePlate(String),
    #[error("overloaded")]
    Overloaded,
    #[error("truck is in use")]
    InUse,
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

const MAX_LOAD_KG: u32 = 1000;

#[async_trait]
impl ActorEntity for Truck {
    type Id = u64;
    type Create = TruckCreate;
    type Update = TruckUpdate;
    type Delete = ();
    type Action = TruckAction;
    type ActionResult = u32;
    type Context = ();
    type Error = TruckError;

    async fn on_create(
        id: u64,
        params: TruckCreate,
        peers: &Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<Self, TruckError> {
        if peers.find(|t| t.plate == params.plate).is_some() {
            return Err(TruckError::DuplicatePlate(params.plate));
        }
        Ok(Self {
            id,
            plate: params.plate,
            load_kg: 0,
            in_use: false,
        })
    }

    async fn on_update(
        &mut self,
        update: TruckUpdate,
        peers: &Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<(), TruckError> {
        if let Some(plate) = update.plate {
            if peers.find(|t| t.plate == plate).is_some() {
                return Err(TruckError::DuplicatePlate(plate));
            }
            self.plate = plate;
        }
        Ok(())
    }

    async fn on_delete(&self, _params: (), _ctx: &()) -> Result<(), TruckError> {
        if self.in_use {
            return Err(TruckError::InUse);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TruckAction,
        _peers: &Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<u32, TruckError> {
        match action {
            TruckAction::Load(kg) => {
                // Mutate first, validate after: the draft must be discarded on error.
                self.load_kg += kg;
                if self.load_kg > MAX_LOAD_KG {
                    return Err(TruckError::Overloaded);
                }
                Ok(self.load_kg)
            }
            TruckAction::MarkInUse => {
                self.in_use = true;
                Ok(self.load_kg)
            }
        }
    }
}

fn spawn() -> actor_framework::ResourceClient<Truck> {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));
    client
}

fn create(plate: &str) -> TruckCreate {
    TruckCreate {
        plate: plate.into(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = spawn();

    // 1. Create
    let truck = client.create(create("ABC-123")).await.unwrap();
    assert_eq!(truck.id, 1); // First ID should be 1

    // 2. Action
    let load = client
        .perform_action(truck.id, TruckAction::Load(400))
        .await
        .unwrap();
    assert_eq!(load, 400);

    // 3. Update
    let updated = client
        .update(
            truck.id,
            TruckUpdate {
                plate: Some("XYZ-987".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.plate, "XYZ-987");
    assert_eq!(updated.load_kg, 400);

    // 4. Delete
    client.delete(truck.id, ()).await.unwrap();
    assert!(client.get(truck.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_action_leaves_entity_untouched() {
    let client = spawn();
    let truck = client.create(create("ABC-123")).await.unwrap();
    client
        .perform_action(truck.id, TruckAction::Load(900))
        .await
        .unwrap();

    let result = client
        .perform_action(truck.id, TruckAction::Load(200))
        .await;
    assert_eq!(result, Err(TruckError::Overloaded));

    let stored = client.get(truck.id).await.unwrap().unwrap();
    assert_eq!(stored.load_kg, 900);
}

#[tokio::test]
async fn test_peers_enforce_uniqueness_but_exclude_self() {
    let client = spawn();
    let first = client.create(create("ABC-123")).await.unwrap();
    let second = client.create(create("DEF-456")).await.unwrap();

    let duplicate = client.create(create("ABC-123")).await;
    assert_eq!(
        duplicate,
        Err(TruckError::DuplicatePlate("ABC-123".into()))
    );

    // Re-submitting its own plate is not a conflict.
    let same = client
        .update(
            first.id,
            TruckUpdate {
                plate: Some("ABC-123".into()),
            },
        )
        .await;
    assert!(same.is_ok());

    let taken = client
        .update(
            second.id,
            TruckUpdate {
                plate: Some("ABC-123".into()),
            },
        )
        .await;
    assert_eq!(taken, Err(TruckError::DuplicatePlate("ABC-123".into())));

    // The failed create did not consume a slot in the store.
    assert_eq!(client.count(Filter::all()).await.unwrap(), 2);
}

#[tokio::test]
async fn test_delete_veto_and_not_found() {
    let client = spawn();
    let truck = client.create(create("ABC-123")).await.unwrap();
    client
        .perform_action(truck.id, TruckAction::MarkInUse)
        .await
        .unwrap();

    assert_eq!(client.delete(truck.id, ()).await, Err(TruckError::InUse));
    assert!(client.get(truck.id).await.unwrap().is_some());

    let missing = client.delete(42, ()).await;
    assert!(matches!(
        missing,
        Err(TruckError::Framework(FrameworkError::NotFound { id, .. })) if id == "42"
    ));
}

#[tokio::test]
async fn test_list_filters_and_orders_by_id() {
    let client = spawn();
    for plate in ["C-3", "A-1", "B-2", "A-4"] {
        client.create(create(plate)).await.unwrap();
    }

    let a_plates = client
        .list(Filter::new(|t: &Truck| t.plate.starts_with("A-")))
        .await
        .unwrap();
    let ids: Vec<u64> = a_plates.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 4]);

    let all = client.list(Filter::all()).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_closed_actor_reports_framework_error() {
    let (actor, client) = ResourceActor::<Truck>::new(10);
    drop(actor);

    let result = client.create(create("ABC-123")).await;
    assert_eq!(result, Err(TruckError::Framework(FrameworkError::ActorClosed)));
}
