//! OpenLayers bindings.
//!
//! Only the slice of the `ol` global the map engine drives is bound here.
//! The full build of OpenLayers is loaded by `index.html`.

#![allow(dead_code)]

use js_sys::{Array, Function, Object};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// =============================================================================
// Map and View
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ol, js_name = Map)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ol, js_class = "Map")]
    pub fn new(options: &Object) -> Map;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &Map, layer: &JsValue);

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &Map, layer: &JsValue);

    #[wasm_bindgen(method, js_name = addInteraction)]
    pub fn add_interaction(this: &Map, interaction: &JsValue);

    #[wasm_bindgen(method, js_name = removeInteraction)]
    pub fn remove_interaction(this: &Map, interaction: &JsValue);

    #[wasm_bindgen(method, js_name = getView)]
    pub fn get_view(this: &Map) -> View;

    #[wasm_bindgen(method, js_name = setTarget)]
    pub fn set_target(this: &Map, target: &JsValue);

    #[wasm_bindgen(js_namespace = ol, js_name = View)]
    pub type View;

    #[wasm_bindgen(constructor, js_namespace = ol, js_class = "View")]
    pub fn new(options: &Object) -> View;

    #[wasm_bindgen(method)]
    pub fn fit(this: &View, extent: &Array, options: &Object);
}

// =============================================================================
// Layers
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["ol", "layer"], js_name = Tile)]
    pub type TileLayer;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "layer"], js_class = "Tile")]
    pub fn new(options: &Object) -> TileLayer;

    #[wasm_bindgen(method, js_name = setVisible)]
    pub fn set_visible(this: &TileLayer, visible: bool);

    #[wasm_bindgen(js_namespace = ["ol", "layer"], js_name = Vector)]
    pub type VectorLayer;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "layer"], js_class = "Vector")]
    pub fn new(options: &Object) -> VectorLayer;

    #[wasm_bindgen(method, js_name = setVisible)]
    pub fn set_visible(this: &VectorLayer, visible: bool);

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &VectorLayer, style: &Style);

    #[wasm_bindgen(method, js_name = setSource)]
    pub fn set_source(this: &VectorLayer, source: &JsValue);

    #[wasm_bindgen(method)]
    pub fn dispose(this: &VectorLayer);
}

// =============================================================================
// Sources and Formats
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["ol", "source"], js_name = OSM)]
    pub type OsmSource;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "source"], js_class = "OSM")]
    pub fn new() -> OsmSource;

    #[wasm_bindgen(js_namespace = ["ol", "source"], js_name = XYZ)]
    pub type XyzSource;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "source"], js_class = "XYZ")]
    pub fn new(options: &Object) -> XyzSource;

    #[wasm_bindgen(js_namespace = ["ol", "source"], js_name = Vector)]
    #[derive(Clone)]
    pub type VectorSource;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "source"], js_class = "Vector")]
    pub fn new(options: &Object) -> VectorSource;

    #[wasm_bindgen(method, js_name = addFeatures)]
    pub fn add_features(this: &VectorSource, features: &Array);

    /// `[minX, minY, maxX, maxY]`; infinite when the source is empty.
    #[wasm_bindgen(method, js_name = getExtent)]
    pub fn get_extent(this: &VectorSource) -> Array;

    #[wasm_bindgen(method)]
    pub fn clear(this: &VectorSource, fast: bool);

    #[wasm_bindgen(method)]
    pub fn dispose(this: &VectorSource);

    #[wasm_bindgen(js_namespace = ["ol", "format"], js_name = GeoJSON)]
    pub type GeoJsonFormat;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "format"], js_class = "GeoJSON")]
    pub fn new() -> GeoJsonFormat;

    /// Throws on text that is not GeoJSON.
    #[wasm_bindgen(method, catch, js_name = readFeatures)]
    pub fn read_features(
        this: &GeoJsonFormat,
        text: &str,
        options: &Object,
    ) -> Result<Array, JsValue>;
}

// =============================================================================
// Styles
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["ol", "style"], js_name = Style)]
    pub type Style;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "style"], js_class = "Style")]
    pub fn new(options: &Object) -> Style;

    #[wasm_bindgen(js_namespace = ["ol", "style"], js_name = Stroke)]
    pub type Stroke;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "style"], js_class = "Stroke")]
    pub fn new(options: &Object) -> Stroke;

    #[wasm_bindgen(js_namespace = ["ol", "style"], js_name = Fill)]
    pub type Fill;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "style"], js_class = "Fill")]
    pub fn new(options: &Object) -> Fill;

    #[wasm_bindgen(js_namespace = ["ol", "style"], js_name = Circle)]
    pub type CircleStyle;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "style"], js_class = "Circle")]
    pub fn new(options: &Object) -> CircleStyle;
}

// =============================================================================
// Interactions
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["ol", "interaction"], js_name = Select)]
    pub type Select;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "interaction"], js_class = "Select")]
    pub fn new(options: &Object) -> Select;

    #[wasm_bindgen(js_namespace = ["ol", "interaction"], js_name = Draw)]
    pub type Draw;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "interaction"], js_class = "Draw")]
    pub fn new(options: &Object) -> Draw;

    /// Geometry function turning a two-point circle draw into a box.
    #[wasm_bindgen(js_namespace = ["ol", "interaction", "Draw"], js_name = createBox)]
    pub fn create_box() -> JsValue;

    #[wasm_bindgen(js_namespace = ["ol", "interaction"], js_name = Interaction)]
    pub type Interaction;

    #[wasm_bindgen(method)]
    pub fn on(this: &Interaction, event_type: &str, listener: &Function) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn dispose(this: &Interaction);

    /// Payload of the `select` event.
    pub type SelectEvent;

    #[wasm_bindgen(method, getter)]
    pub fn selected(this: &SelectEvent) -> Array;

    /// Payload of the `drawend` event.
    pub type DrawEvent;

    #[wasm_bindgen(method, getter)]
    pub fn feature(this: &DrawEvent) -> Feature;

    #[wasm_bindgen(js_namespace = ol, js_name = Feature)]
    pub type Feature;

    #[wasm_bindgen(method, js_name = getProperties)]
    pub fn get_properties(this: &Feature) -> Object;

    #[wasm_bindgen(method, js_name = getGeometry)]
    pub fn get_geometry(this: &Feature) -> Option<Geometry>;

    pub type Geometry;

    #[wasm_bindgen(method, js_name = getExtent)]
    pub fn get_extent(this: &Geometry) -> Array;

    /// `ol.events.condition.click`
    #[wasm_bindgen(thread_local_v2, js_namespace = ["ol", "events", "condition"], js_name = click)]
    pub static CLICK: JsValue;
}

// =============================================================================
// Controls
// =============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["ol", "control"], js_name = Attribution)]
    pub type Attribution;

    #[wasm_bindgen(constructor, js_namespace = ["ol", "control"], js_class = "Attribution")]
    pub fn new() -> Attribution;
}
