//! The seam between the map adapter and an imperative map library.
//!
//! [`MapEngine`] is the only surface the adapter drives. The browser build
//! implements it on top of OpenLayers; tests use the recording engine from
//! [`crate::mock`].

use crate::config::{FIT_MAX_ZOOM, FIT_PADDING};
use crate::models::{Basemap, Extent, LayerId, LayerStyle};

/// Identifies one load of one vector layer.
///
/// Handed to the engine when the layer is created and echoed back with the
/// load result. The adapter acts on a completion only while the same id is
/// registered under the same generation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    pub id: LayerId,
    pub generation: u64,
}

/// Options for fitting the view to an extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    /// Top, right, bottom, left padding in pixels.
    pub padding: [f64; 4],
    pub max_zoom: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: FIT_PADDING,
            max_zoom: FIT_MAX_ZOOM,
        }
    }
}

/// Input handlers installed on top of the always-on pan/zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    /// Click to pick a feature
    FeaturePick,
    /// Two-corner drag producing an axis-aligned rectangle
    BoxDraw,
}

/// Imperative operations on a live map instance.
///
/// Implementations own the map object. They never call back into the
/// adapter synchronously from inside one of these methods; load and pick
/// results arrive later through the adapter's `on_*` entry points.
pub trait MapEngine {
    /// Handle to one data layer and its backing source.
    type Layer;

    /// Register the raster layer for a basemap.
    fn add_basemap(&mut self, basemap: Basemap, visible: bool);

    fn set_basemap_visible(&mut self, basemap: Basemap, visible: bool);

    /// Create a vector layer for `ticket.id`, add it on top of the existing
    /// data layers and start loading its data asynchronously.
    fn add_vector_layer(&mut self, ticket: &LoadTicket, style: &LayerStyle) -> Self::Layer;

    fn restyle_layer(&mut self, layer: &Self::Layer, style: &LayerStyle);

    fn set_layer_visible(&mut self, layer: &Self::Layer, visible: bool);

    /// Remove a layer from the map and release its source, including any
    /// load still in flight.
    fn remove_vector_layer(&mut self, layer: Self::Layer);

    fn fit_extent(&mut self, extent: Extent, options: FitOptions);

    fn install_interaction(&mut self, kind: InteractionKind);

    fn remove_interaction(&mut self, kind: InteractionKind);

    /// Remove every drawn ROI rectangle.
    fn clear_draw_source(&mut self);

    /// Detach the map from its DOM target.
    fn detach(&mut self);
}
