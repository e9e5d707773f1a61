//! Process Configuration
//!
//! Store connection settings come from the environment; the service
//! refuses to start without them.

/// Environment variable holding the store connection URL
pub const VALKEY_URL_VAR: &str = "VALKEY_URL";

/// Key-value store connection configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Valkey connection URL
    pub url: String,
}

impl StoreConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(VALKEY_URL_VAR)
            .map_err(|_| ConfigError::MissingVar(VALKEY_URL_VAR))?;
        Ok(Self { url })
    }
}

/// Configuration error
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    MissingVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_error_names_the_variable() {
        let err = ConfigError::MissingVar(VALKEY_URL_VAR);
        assert_eq!(err.to_string(), "environment variable VALKEY_URL must be set");
    }
}
