//! # Generic Messages
//!
//! The request envelope exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use std::fmt;
use tokio::sync::oneshot;

/// One-shot response channel, carrying the entity's own error type.
pub type Response<V, E> = oneshot::Sender<Result<V, E>>;

/// A boxed predicate used by `List` and `Count` requests.
///
/// Finders are expressed as filters evaluated inside the actor, so a count and the write
/// that depends on it can never interleave with another request.
pub struct Filter<T>(Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Filter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Box::new(predicate))
    }

    /// Matches every entity.
    pub fn all() -> Self {
        Self(Box::new(|_| true))
    }

    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Filter(..)")
    }
}

/// Internal message type sent to the actor.
///
/// CRUD variants plus `List`/`Count` for finders and `Action` for resource-specific
/// operations. Every variant is typed by the entity's associated types, so a Vehiculo
/// payload can never reach a Cliente actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Count {
        filter: Filter<T>,
        respond_to: Response<usize, T::Error>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T, T::Error>,
    },
    Delete {
        id: T::Id,
        params: T::Delete,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}
