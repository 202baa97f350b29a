//! Application configuration.
//!
//! Centralizes the constants used by the browser build. Map styling that
//! the core also needs (default layer color, fit padding) lives in
//! [`geoview_core::config`].

use geoview_core::ColorRetention;

// =============================================================================
// Application Metadata
// =============================================================================

/// Sidebar title.
pub const APP_TITLE: &str = "Couches";

/// Sidebar subtitle.
pub const APP_SUBTITLE: &str = "Explorateur GeoJSON";

// =============================================================================
// Network Configuration
// =============================================================================

/// Catalog listing endpoint.
pub const LAYERS_ENDPOINT: &str = "/api/layers";

/// GeoJSON content endpoint; takes a `path` query parameter.
pub const LAYER_DATA_ENDPOINT: &str = "/api/layers/data";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Selection
// =============================================================================

/// Whether a layer keeps its color across deactivation.
pub const COLOR_RETENTION: ColorRetention = ColorRetention::Reset;

// =============================================================================
// Map Configuration
// =============================================================================

/// Basemap tile sources.
pub mod basemaps {
    /// Satellite imagery tiles.
    pub const SATELLITE_URL: &str = "https://mt1.google.com/vt/lyrs=s&x={x}&y={y}&z={z}";
    pub const SATELLITE_MAX_ZOOM: f64 = 20.0;
}

/// Initial map view.
pub mod view {
    pub const PROJECTION: &str = "EPSG:4326";
    pub const INITIAL_CENTER: [f64; 2] = [0.0, 0.0];
    pub const INITIAL_ZOOM: f64 = 2.0;
}

/// Interaction styles.
pub mod styles {
    /// Highlight of the picked feature.
    pub const SELECT_STROKE: &str = "rgba(255, 0, 0, 0.7)";
    pub const SELECT_STROKE_WIDTH: f64 = 3.0;
    pub const SELECT_FILL: &str = "rgba(255, 0, 0, 0.1)";
    pub const SELECT_POINT_RADIUS: f64 = 7.0;
    pub const SELECT_POINT_OUTLINE: &str = "white";
    pub const SELECT_POINT_OUTLINE_WIDTH: f64 = 2.0;

    /// ROI rectangles.
    pub const DRAW_STROKE: &str = "#ffcc33";
    pub const DRAW_STROKE_WIDTH: f64 = 2.0;
    pub const DRAW_FILL: &str = "rgba(255, 255, 255, 0.2)";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
