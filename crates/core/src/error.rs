//! Error types shared across the system

use thiserror::Error;

/// Base error type for domain validation
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("path {path:?} does not match pattern {pattern:?}")]
    InvalidIdentifier {
        path: String,
        pattern: &'static str,
    },

    #[error("malformed endpoint: invalid url {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("malformed endpoint: invalid frequency {value:?}: {source}")]
    InvalidFrequency {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
}
