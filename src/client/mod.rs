//! Remote collection access.
//!
//! The controller talks to the collection only through [`CollectionClient`],
//! so tests can swap the HTTP implementation for an in-memory one.

mod error;
mod http;

use async_trait::async_trait;

use crate::entity::{Draft, Entity, EntityId};

pub use error::{ClientError, Failure};
pub use http::HttpCollectionClient;

/// Read-all, read-one and create against a remote collection resource.
///
/// Every call resolves exactly once. Implementations perform network I/O
/// only: no caching, no retries, no local state.
#[async_trait]
pub trait CollectionClient: Send + Sync {
    /// Fetch the whole collection in server order.
    async fn list_all(&self) -> Result<Vec<Entity>, ClientError>;

    /// Fetch one entity by id.
    async fn get_one(&self, id: &EntityId) -> Result<Entity, ClientError>;

    /// Submit a draft and return the entity with its server-assigned id.
    async fn create(&self, draft: &Draft) -> Result<Entity, ClientError>;
}
