//! Data models for the map viewer.
//!
//! Contains domain types for:
//! - [`LayerGroup`], [`LayerId`], [`ActiveLayer`] - Catalog entries and active layers
//! - [`Color`], [`LayerStyle`] - Per-layer styling
//! - [`Extent`] - Bounding boxes used for view fitting and ROI rectangles
//! - [`FeatureInfo`] - Attributes of a picked feature
//! - [`ToolMode`], [`Basemap`] - Map interaction and background state
//! - [`GeoJsonKind`] - Accepted top-level GeoJSON document types

mod color;
mod extent;
mod feature;
mod geojson;
mod layer;
mod tool;

pub use color::{Color, LayerStyle};
pub use extent::Extent;
pub use feature::{FeatureAttribute, FeatureInfo};
pub use geojson::GeoJsonKind;
pub use layer::{ActiveLayer, LayerGroup, LayerId, display_name, is_geojson_file_name};
pub use tool::{Basemap, ToolMode};
