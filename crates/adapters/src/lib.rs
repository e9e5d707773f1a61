//! Adapters - Infrastructure Implementations
//!
//! This crate contains the implementations of the ports defined in
//! vigil-ports: the Valkey-backed endpoint repository used in
//! production, an in-memory repository for tests, and the process
//! configuration loader.

pub mod config;
pub mod memory;
pub mod valkey;

pub use crate::config::{ConfigError, StoreConfig};
pub use crate::memory::InMemoryEndpointRepository;
pub use crate::valkey::ValkeyEndpointRepository;
