//! Domain Core - Endpoint Entity and Codec
//!
//! This crate contains the endpoint entity, the identifier validation
//! rule, and the conversions between the entity, its JSON wire form,
//! and the flat field mapping used for storage. Pure logic, no I/O.

pub mod endpoint;
pub mod error;
pub mod identifier;

pub use crate::endpoint::{Endpoint, EndpointPayload};
pub use crate::error::DomainError;
pub use crate::identifier::{extract_identifier, IDENTIFIER_PATTERN};

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;
