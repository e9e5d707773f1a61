//! Endpoint Repository Port
//!
//! Defines the narrow contract the handlers use against the key-value
//! store: one hash record per endpoint at key `endpoint:<identifier>`.

use std::collections::HashMap;

use async_trait::async_trait;

/// Flat string field mapping of a stored endpoint record
pub type FieldMap = HashMap<String, String>;

/// Key namespace for endpoint records
pub const KEY_PREFIX: &str = "endpoint:";

/// Storage key for an endpoint identifier
pub fn storage_key(identifier: &str) -> String {
    format!("{KEY_PREFIX}{identifier}")
}

/// Endpoint repository port
///
/// Each operation is a single atomic call against one key; no
/// transactional guarantees hold across keys.
#[async_trait]
pub trait EndpointRepository: Send + Sync {
    /// True iff a record with any fields exists for the identifier
    async fn exists(&self, identifier: &str) -> Result<bool, EndpointRepositoryError>;

    /// Read the full field mapping of a record
    ///
    /// Fails with `NotFound` when the mapping is empty or the read fails
    /// at the key level.
    async fn fetch(&self, identifier: &str) -> Result<FieldMap, EndpointRepositoryError>;

    /// Overwrite all named fields of a record as one atomic operation
    async fn store(
        &self,
        identifier: &str,
        fields: &[(String, String)],
    ) -> Result<(), EndpointRepositoryError>;

    /// Enumerate the identifiers of all stored endpoint records
    ///
    /// Enumeration order comes from the store and is not guaranteed
    /// stable.
    async fn list_identifiers(&self) -> Result<Vec<String>, EndpointRepositoryError>;
}

/// Endpoint repository error
#[derive(thiserror::Error, Debug)]
pub enum EndpointRepositoryError {
    #[error("no such endpoint {0:?}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_prefixes_identifier() {
        assert_eq!(storage_key("my-service"), "endpoint:my-service");
    }

    #[test]
    fn error_display_names_the_identifier() {
        let err = EndpointRepositoryError::NotFound("my-service".to_string());
        assert!(err.to_string().contains("my-service"));

        let err = EndpointRepositoryError::Unavailable("connection reset".to_string());
        assert!(err.to_string().contains("connection reset"));
    }
}
