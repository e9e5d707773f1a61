//! Vigil Server - Endpoint Configuration API
//!
//! HTTP layer of the endpoint configuration service: routes, handlers,
//! and shared application state. The binary in `main.rs` wires these to
//! a Valkey-backed repository; tests wire them to an in-memory one.

pub mod handlers;
pub mod routes;

pub use crate::handlers::AppState;
pub use crate::routes::create_router;
