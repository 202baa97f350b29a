//! Map-state constants shared by the adapter and the browser engine.

// =============================================================================
// Layer Styling
// =============================================================================

/// Color assigned to a layer when it becomes active.
pub const DEFAULT_LAYER_COLOR: &str = "#3b82f6";

/// Opacity of the polygon fill relative to the layer color.
pub const FILL_ALPHA: f64 = 0.1;

/// Stroke width for lines and polygon outlines, in pixels.
pub const STROKE_WIDTH: f64 = 2.0;

/// Point marker radius, in pixels.
pub const POINT_RADIUS: f64 = 5.0;

/// Point marker outline color.
pub const POINT_OUTLINE_COLOR: &str = "white";

/// Point marker outline width, in pixels.
pub const POINT_OUTLINE_WIDTH: f64 = 1.0;

// =============================================================================
// View Fitting
// =============================================================================

/// Padding around a fitted extent: top, right, bottom, left (pixels).
pub const FIT_PADDING: [f64; 4] = [50.0, 50.0, 50.0, 50.0];

/// Maximum zoom reached by an automatic fit (single-point layers).
pub const FIT_MAX_ZOOM: f64 = 16.0;

// =============================================================================
// Drawing
// =============================================================================

/// Z-index of the ROI drawing layer; above every data layer.
pub const DRAW_LAYER_Z_INDEX: i32 = 999;

// =============================================================================
// Catalog
// =============================================================================

/// File suffixes recognized as GeoJSON.
pub const GEOJSON_EXTENSIONS: &[&str] = &[".geojson", ".json"];
