//! Browser-side services.
//!
//! This module provides:
//! - [`map`] - The OpenLayers [`MapEngine`](geoview_core::MapEngine)
//! - [`catalog`] - Fetching the layer catalog
//! - [`error`] - Fetch errors

pub mod catalog;
pub mod error;
pub mod map;
