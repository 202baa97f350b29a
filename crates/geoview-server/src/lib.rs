//! Layer catalog HTTP service for the GeoJSON viewer.
//!
//! - [`catalog`] - Directory scan and path-checked document loading
//! - [`routes`] - `GET /api/layers` and `GET /api/layers/data`
//! - [`config`] - Command-line and environment configuration
//! - [`error`] - [`ApiError`] and its HTTP mapping
//! - [`logging`] - Tracing subscriber setup

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod routes;

pub use catalog::CatalogRoot;
pub use config::{Args, ServerConfig};
pub use error::ApiError;
