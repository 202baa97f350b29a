//! Map-state core for the GeoJSON viewer.
//!
//! This crate is target-independent: it compiles for both the browser
//! bundle and native test runs. It provides:
//! - [`models`] - Catalog, layer, color, extent and feature types
//! - [`LayerSelection`] - Which layers are active and how they are colored
//! - [`MapEngine`] - The seam to the imperative map library
//! - [`MapAdapter`] - Reconciles selection, basemap and tool mode onto an engine

pub mod adapter;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod selection;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use adapter::{LayerStatus, LoadOutcome, MapAdapter, MapOptions, ReconcileReport};
pub use engine::{FitOptions, InteractionKind, LoadTicket, MapEngine};
pub use error::{ColorParseError, LoadError};
pub use models::{
    ActiveLayer, Basemap, Color, Extent, FeatureAttribute, FeatureInfo, GeoJsonKind, LayerGroup,
    LayerId, LayerStyle, ToolMode, display_name, is_geojson_file_name,
};
pub use selection::{ColorRetention, GroupCheckState, GroupToggle, LayerSelection};
