//! Valkey Endpoint Repository
//!
//! Implements the endpoint repository port against a Valkey (or Redis)
//! server using the async `redis` client. Each record is one hash at
//! `endpoint:<identifier>`; writes replace all fields in a single HSET.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::warn;

use vigil_ports::{storage_key, EndpointRepository, EndpointRepositoryError, FieldMap, KEY_PREFIX};

/// Valkey-backed endpoint repository
#[derive(Clone)]
pub struct ValkeyEndpointRepository {
    connection: ConnectionManager,
}

impl ValkeyEndpointRepository {
    /// Connect to the store at the given URL (e.g. `redis://host:6379/0`)
    pub async fn connect(url: &str) -> Result<Self, EndpointRepositoryError> {
        let client = redis::Client::open(url)
            .map_err(|e| EndpointRepositoryError::Unavailable(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| EndpointRepositoryError::Unavailable(e.to_string()))?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl EndpointRepository for ValkeyEndpointRepository {
    async fn exists(&self, identifier: &str) -> Result<bool, EndpointRepositoryError> {
        let mut connection = self.connection.clone();
        connection
            .exists(storage_key(identifier))
            .await
            .map_err(|e| EndpointRepositoryError::Unavailable(e.to_string()))
    }

    async fn fetch(&self, identifier: &str) -> Result<FieldMap, EndpointRepositoryError> {
        let mut connection = self.connection.clone();
        let fields: FieldMap = connection
            .hgetall(storage_key(identifier))
            .await
            .map_err(|e| {
                // Read failures surface as absence, keeping reads available
                warn!(identifier, error = %e, "hgetall failed");
                EndpointRepositoryError::NotFound(identifier.to_string())
            })?;

        if fields.is_empty() {
            return Err(EndpointRepositoryError::NotFound(identifier.to_string()));
        }
        Ok(fields)
    }

    async fn store(
        &self,
        identifier: &str,
        fields: &[(String, String)],
    ) -> Result<(), EndpointRepositoryError> {
        let mut connection = self.connection.clone();
        connection
            .hset_multiple(storage_key(identifier), fields)
            .await
            .map_err(|e| EndpointRepositoryError::Unavailable(e.to_string()))
    }

    async fn list_identifiers(&self) -> Result<Vec<String>, EndpointRepositoryError> {
        let mut connection = self.connection.clone();
        let keys: Vec<String> = connection
            .keys(format!("{KEY_PREFIX}*"))
            .await
            .map_err(|e| EndpointRepositoryError::Unavailable(e.to_string()))?;

        Ok(keys
            .into_iter()
            .filter_map(|key| key.strip_prefix(KEY_PREFIX).map(str::to_string))
            .collect())
    }
}
