//! In-memory mirror of the last full fetch.

use std::collections::HashSet;

use crate::entity::{Entity, EntityId};

/// Ordered sequence of entities in server response order.
///
/// Replaced wholesale on every fetch, never diffed. The only in-place
/// mutation is [`EntityStore::set_votes`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched sequence, dropping whatever was there.
    ///
    /// Entities repeating an earlier id are dropped so ids stay unique; the
    /// first occurrence wins.
    pub fn replace_all(&mut self, entities: Vec<Entity>) {
        let mut seen: HashSet<EntityId> = HashSet::with_capacity(entities.len());
        let mut unique: Vec<Entity> = Vec::with_capacity(entities.len());
        for entity in entities {
            if !seen.insert(entity.id.clone()) {
                tracing::warn!(id = %entity.id, "Dropping entity with duplicate id");
                continue;
            }
            unique.push(entity);
        }
        self.entities = unique;
    }

    /// `None` is the normal outcome for an entity removed remotely since the
    /// last fetch.
    pub fn find_by_id(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| &entity.id == id)
    }

    /// Overwrite the vote count of the entity with `id`. Silent no-op when
    /// no such entity is stored. Returns whether a write happened.
    pub fn set_votes(&mut self, id: &EntityId, votes: u32) -> bool {
        match self.entities.iter_mut().find(|entity| &entity.id == id) {
            Some(entity) => {
                entity.votes = votes;
                true
            }
            None => false,
        }
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
