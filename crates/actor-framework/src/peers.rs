//! # Peers
//!
//! A read-only window over the other entities held by the same actor, handed to every
//! mutating hook.

use crate::entity::ActorEntity;
use std::collections::HashMap;

/// Every entity in the store except the one being created or modified.
pub struct Peers<'a, T: ActorEntity> {
    store: &'a HashMap<T::Id, T>,
    exclude: Option<T::Id>,
}

impl<'a, T: ActorEntity> Peers<'a, T> {
    pub fn new(store: &'a HashMap<T::Id, T>, exclude: Option<T::Id>) -> Self {
        Self { store, exclude }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        let exclude = self.exclude.as_ref();
        self.store
            .iter()
            .filter(move |(id, _)| Some(*id) != exclude)
            .map(|(_, item)| item)
    }

    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&'a T> {
        self.iter().find(|item| predicate(item))
    }

    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.iter().filter(|item| predicate(item)).count()
    }
}
