//! In-Memory Endpoint Repository
//!
//! Port implementation over a shared map, used by handler tests and
//! local development in place of a live Valkey server.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use vigil_ports::{EndpointRepository, EndpointRepositoryError, FieldMap};

/// In-memory endpoint repository
#[derive(Clone, Default)]
pub struct InMemoryEndpointRepository {
    records: Arc<RwLock<HashMap<String, FieldMap>>>,
}

impl InMemoryEndpointRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EndpointRepository for InMemoryEndpointRepository {
    async fn exists(&self, identifier: &str) -> Result<bool, EndpointRepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .get(identifier)
            .is_some_and(|fields| !fields.is_empty()))
    }

    async fn fetch(&self, identifier: &str) -> Result<FieldMap, EndpointRepositoryError> {
        let records = self.records.read().await;
        records
            .get(identifier)
            .filter(|fields| !fields.is_empty())
            .cloned()
            .ok_or_else(|| EndpointRepositoryError::NotFound(identifier.to_string()))
    }

    async fn store(
        &self,
        identifier: &str,
        fields: &[(String, String)],
    ) -> Result<(), EndpointRepositoryError> {
        let mut records = self.records.write().await;
        records.insert(identifier.to_string(), fields.iter().cloned().collect());
        Ok(())
    }

    async fn list_identifiers(&self) -> Result<Vec<String>, EndpointRepositoryError> {
        let records = self.records.read().await;
        Ok(records.keys().cloned().collect())
    }
}
