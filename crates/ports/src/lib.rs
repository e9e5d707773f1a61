//! Ports - Abstraction Layer
//!
//! This crate defines the ports (traits) the request handlers depend on.
//! They are implemented by adapters in the infrastructure layer, which
//! keeps the handlers independently testable against an in-memory fake.

pub mod endpoint_repository;

pub use crate::endpoint_repository::{
    storage_key, EndpointRepository, EndpointRepositoryError, FieldMap, KEY_PREFIX,
};
