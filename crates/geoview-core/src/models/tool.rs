//! Map interaction mode and basemap choice.

use crate::engine::InteractionKind;

/// Current map tool. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolMode {
    /// Pan and zoom only (default)
    #[default]
    Navigate,
    /// Click a feature to inspect its attributes
    Select,
    /// Drag a rectangle to mark a region of interest
    Draw,
}

impl ToolMode {
    pub const ALL: [ToolMode; 3] = [ToolMode::Navigate, ToolMode::Select, ToolMode::Draw];

    /// The special handler this mode installs on the map, if any.
    pub fn interaction(self) -> Option<InteractionKind> {
        match self {
            Self::Navigate => None,
            Self::Select => Some(InteractionKind::FeaturePick),
            Self::Draw => Some(InteractionKind::BoxDraw),
        }
    }
}

/// Background raster layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Basemap {
    /// OpenStreetMap tiles (default)
    #[default]
    Osm,
    /// Satellite imagery
    Satellite,
}

impl Basemap {
    pub const ALL: [Basemap; 2] = [Basemap::Osm, Basemap::Satellite];

    /// Stable name used for the layer property and the radio input value.
    pub fn key(self) -> &'static str {
        match self {
            Self::Osm => "osm",
            Self::Satellite => "satellite",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Osm => "OSM",
            Self::Satellite => "Satellite",
        }
    }
}
