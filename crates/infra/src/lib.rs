//! # Fixwise Infra
//!
//! Infrastructure adapters for the availability engine:
//! - HTTP client with retry/backoff over the appointments backend
//! - The appointments API adapter (edit-flow fetch and dataset reload)
//! - The in-memory availability snapshot backing the query port
//! - Configuration loading (environment and file)
//!
//! Everything here implements a port defined in `fixwise-core` or maps an
//! external error into the `fixwise-domain` error model.

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod snapshot;

pub use api::AppointmentsApi;
pub use errors::InfraError;
pub use http::HttpClient;
pub use snapshot::{AvailabilitySnapshot, SnapshotHandle, SnapshotRefresher};
