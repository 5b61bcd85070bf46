//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use animal_votes::client::{ClientError, CollectionClient, Failure};
use animal_votes::entity::{Draft, Entity, EntityId};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub fn entity(id: u64, name: &str, votes: u32) -> Entity {
    Entity {
        id: EntityId::from(id),
        name: name.to_string(),
        image: format!("http://img/{}.png", name.to_lowercase()),
        votes,
    }
}

/// In-memory collection that counts every call as a network round trip.
pub struct FakeCollection {
    entities: Mutex<Vec<Entity>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    create_calls: AtomicUsize,
    fail_list: AtomicBool,
    fail_get: AtomicBool,
    fail_create: AtomicBool,
}

impl FakeCollection {
    pub fn with(entities: Vec<Entity>) -> Self {
        let next_id = entities.len() + 1;
        Self {
            entities: Mutex::new(entities),
            next_id: AtomicUsize::new(next_id),
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            fail_list: AtomicBool::new(false),
            fail_get: AtomicBool::new(false),
            fail_create: AtomicBool::new(false),
        }
    }

    /// Fox (3 votes) and Owl (0 votes).
    pub fn fox_and_owl() -> Self {
        Self::with(vec![entity(1, "Fox", 3), entity(2, "Owl", 0)])
    }

    pub fn network_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
            + self.get_calls.load(Ordering::SeqCst)
            + self.create_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.entities
            .lock()
            .iter()
            .map(|e| e.id.clone())
            .collect()
    }

    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_get(&self, fail: bool) {
        self.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    /// Change a stored entity behind the client's back.
    pub fn set_remote_votes(&self, id: u64, votes: u32) {
        let mut entities = self.entities.lock();
        if let Some(e) = entities.iter_mut().find(|e| e.id == EntityId::from(id)) {
            e.votes = votes;
        }
    }
}

#[async_trait]
impl CollectionClient for FakeCollection {
    async fn list_all(&self) -> Result<Vec<Entity>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(ClientError::FetchFailed {
                url: "fake://characters".to_string(),
                failure: Failure::Status(503),
            });
        }
        Ok(self.entities.lock().clone())
    }

    async fn get_one(&self, id: &EntityId) -> Result<Entity, ClientError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let url = format!("fake://characters/{}", id);
        if self.fail_get.load(Ordering::SeqCst) {
            return Err(ClientError::FetchFailed {
                url,
                failure: Failure::Status(503),
            });
        }
        self.entities
            .lock()
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or(ClientError::FetchFailed {
                url,
                failure: Failure::Status(404),
            })
    }

    async fn create(&self, draft: &Draft) -> Result<Entity, ClientError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(ClientError::CreateFailed {
                url: "fake://characters".to_string(),
                failure: Failure::Status(500),
            });
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as u64;
        let created = Entity {
            id: EntityId::from(id),
            name: draft.name().to_string(),
            image: draft.image().to_string(),
            votes: 0,
        };
        self.entities.lock().push(created.clone());
        Ok(created)
    }
}
