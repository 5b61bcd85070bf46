use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::config::RemoteConfig;
use crate::entity::{Draft, Entity, EntityId};

use super::error::{ClientError, Failure};
use super::CollectionClient;

/// [`CollectionClient`] backed by a JSON REST resource.
///
/// `GET {base}/{resource}`, `GET {base}/{resource}/{id}` and
/// `POST {base}/{resource}`.
#[derive(Clone)]
pub struct HttpCollectionClient {
    client: Client,
    collection: Url,
}

impl HttpCollectionClient {
    pub fn new(base_url: &str, resource: &str) -> Result<Self, ClientError> {
        Self::with_client(Client::new(), base_url, resource)
    }

    /// Build on top of an existing reqwest client (shared pool, custom TLS).
    pub fn with_client(client: Client, base_url: &str, resource: &str) -> Result<Self, ClientError> {
        let collection = collection_url(base_url, resource)?;
        Ok(Self { client, collection })
    }

    pub fn from_config(config: &RemoteConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url, &config.resource)
    }

    /// Location of the whole collection.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    /// Location of a single entity. The id is percent-encoded as one segment.
    ///
    /// Empty, `.` and `..` ids cannot be addressed that way (URL path
    /// normalisation would resolve them to the collection itself) and fail
    /// with [`Failure::InvalidId`].
    pub fn item_url(&self, id: &EntityId) -> Result<Url, ClientError> {
        if matches!(id.as_str(), "" | "." | "..") {
            return Err(fetch_failed(
                &self.collection,
                Failure::InvalidId(id.to_string()),
            ));
        }

        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidLocation {
                location: self.collection.to_string(),
                message: "URL cannot be a base".to_string(),
            })?
            .push(id.as_str());
        Ok(url)
    }
}

#[async_trait]
impl CollectionClient for HttpCollectionClient {
    async fn list_all(&self) -> Result<Vec<Entity>, ClientError> {
        let url = self.collection.clone();
        tracing::debug!(url = %url, "Listing collection");

        let entities: Vec<Entity> = send_json(self.client.get(url.clone()))
            .await
            .map_err(|failure| fetch_failed(&url, failure))?;

        tracing::debug!(count = entities.len(), "Collection listed");
        Ok(entities)
    }

    async fn get_one(&self, id: &EntityId) -> Result<Entity, ClientError> {
        let url = self.item_url(id)?;
        tracing::debug!(url = %url, id = %id, "Fetching entity");

        send_json(self.client.get(url.clone()))
            .await
            .map_err(|failure| fetch_failed(&url, failure))
    }

    async fn create(&self, draft: &Draft) -> Result<Entity, ClientError> {
        let url = self.collection.clone();
        tracing::debug!(url = %url, name = %draft.name(), "Creating entity");

        let request = self.client.post(url.clone()).json(&draft.payload());
        let created: Entity = send_json(request).await.map_err(|failure| {
            tracing::warn!(url = %url, failure = %failure, "Create request failed");
            ClientError::CreateFailed {
                url: url.to_string(),
                failure,
            }
        })?;

        tracing::info!(id = %created.id, name = %created.name, "Entity created");
        Ok(created)
    }
}

fn collection_url(base_url: &str, resource: &str) -> Result<Url, ClientError> {
    let invalid = |message: String| ClientError::InvalidLocation {
        location: base_url.to_string(),
        message,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .push(resource);
    Ok(url)
}

fn fetch_failed(url: &Url, failure: Failure) -> ClientError {
    tracing::warn!(url = %url, failure = %failure, "Fetch request failed");
    ClientError::FetchFailed {
        url: url.to_string(),
        failure,
    }
}

async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Failure> {
    let response = request
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| Failure::Connection(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Failure::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| Failure::Body(e.to_string()))
}
