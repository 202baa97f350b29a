//! [`MapEngine`] implementation backed by OpenLayers.
//!
//! Every asynchronous result (layer load, feature pick, drawn rectangle) is
//! forwarded to the [`EventSink`] handed to [`OlEngine::new`]. The sink is
//! responsible for re-entering the adapter outside of the current call.

use std::cell::Cell;
use std::rc::Rc;

use geoview_core::{
    Basemap, Extent, FeatureInfo, FitOptions, InteractionKind, LayerId, LayerStyle, LoadError,
    LoadTicket, MapEngine,
};
use js_sys::{Array, Object, Reflect};
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use super::ol;
use crate::config::{LAYER_DATA_ENDPOINT, basemaps, styles, view};
use crate::utils::{dom, fetch_text};

/// Asynchronous results delivered by the engine.
#[derive(Debug)]
pub enum MapEvent {
    LayerLoaded(LoadTicket, Result<Extent, LoadError>),
    FeaturePicked(Option<FeatureInfo>),
    RectangleDrawn(Extent),
}

pub type EventSink = Rc<dyn Fn(MapEvent)>;

/// Handle to one data layer.
///
/// `released` is set on removal; a load still in flight then neither fills
/// the disposed source nor reports back.
pub struct OlLayer {
    layer: ol::VectorLayer,
    source: ol::VectorSource,
    released: Rc<Cell<bool>>,
}

struct InstalledInteraction {
    kind: InteractionKind,
    interaction: ol::Interaction,
    _listener: Closure<dyn FnMut(JsValue)>,
}

pub struct OlEngine {
    map: ol::Map,
    basemaps: Vec<(Basemap, ol::TileLayer)>,
    draw_source: ol::VectorSource,
    interaction: Option<InstalledInteraction>,
    sink: EventSink,
}

/// True once the OpenLayers script has defined the `ol` global.
pub fn is_available() -> bool {
    dom::has_global("ol")
}

impl OlEngine {
    /// Create the map inside `target` with an empty draw layer on top.
    pub fn new(target: &HtmlElement, sink: EventSink) -> Self {
        let draw_source = ol::VectorSource::new(&Object::new());
        let draw_layer = ol::VectorLayer::new(&options(&[
            ("source", js(&draw_source)),
            ("style", js(&draw_style())),
            ("zIndex", &JsValue::from(geoview_core::config::DRAW_LAYER_Z_INDEX)),
        ]));

        let map_view = ol::View::new(&options(&[
            ("projection", &JsValue::from_str(view::PROJECTION)),
            ("center", &number_array(&view::INITIAL_CENTER)),
            ("zoom", &JsValue::from_f64(view::INITIAL_ZOOM)),
        ]));

        // Zoom and rotate buttons stay off; attribution is required by the tile providers.
        let controls = Array::of1(&ol::Attribution::new());

        let map = ol::Map::new(&options(&[
            ("target", js(&target)),
            ("layers", js(&Array::of1(&draw_layer))),
            ("view", js(&map_view)),
            ("controls", js(&controls)),
        ]));

        Self {
            map,
            basemaps: Vec::new(),
            draw_source,
            interaction: None,
            sink,
        }
    }

    fn basemap_layer(&self, basemap: Basemap) -> Option<&ol::TileLayer> {
        self.basemaps
            .iter()
            .find(|(candidate, _)| *candidate == basemap)
            .map(|(_, layer)| layer)
    }

    fn feature_pick(&self) -> (ol::Interaction, Closure<dyn FnMut(JsValue)>) {
        let select = ol::Select::new(&options(&[
            ("condition", &ol::CLICK.with(JsValue::clone)),
            ("style", js(&select_style())),
        ]));

        let sink = Rc::clone(&self.sink);
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let event: ol::SelectEvent = event.unchecked_into();
            let picked = event
                .selected()
                .get(0)
                .dyn_into::<ol::Feature>()
                .ok()
                .map(|feature| feature_info(&feature));
            sink(MapEvent::FeaturePicked(picked));
        });

        let interaction: ol::Interaction = select.unchecked_into();
        interaction.on("select", listener.as_ref().unchecked_ref());
        (interaction, listener)
    }

    fn box_draw(&self) -> (ol::Interaction, Closure<dyn FnMut(JsValue)>) {
        let draw = ol::Draw::new(&options(&[
            ("source", js(&self.draw_source)),
            ("type", &JsValue::from_str("Circle")),
            ("geometryFunction", &ol::Draw::create_box()),
        ]));

        let sink = Rc::clone(&self.sink);
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            let event: ol::DrawEvent = event.unchecked_into();
            if let Some(extent) = event
                .feature()
                .get_geometry()
                .and_then(|geometry| extent_from_array(&geometry.get_extent()))
            {
                sink(MapEvent::RectangleDrawn(extent));
            }
        });

        let interaction: ol::Interaction = draw.unchecked_into();
        interaction.on("drawend", listener.as_ref().unchecked_ref());
        (interaction, listener)
    }
}

impl MapEngine for OlEngine {
    type Layer = OlLayer;

    fn add_basemap(&mut self, basemap: Basemap, visible: bool) {
        let source: JsValue = match basemap {
            Basemap::Osm => ol::OsmSource::new().into(),
            Basemap::Satellite => ol::XyzSource::new(&options(&[
                ("url", &JsValue::from_str(basemaps::SATELLITE_URL)),
                ("maxZoom", &JsValue::from_f64(basemaps::SATELLITE_MAX_ZOOM)),
            ]))
            .into(),
        };
        let layer = ol::TileLayer::new(&options(&[
            ("source", &source),
            ("visible", &JsValue::from_bool(visible)),
        ]));
        self.map.add_layer(&layer);
        self.basemaps.push((basemap, layer));
    }

    fn set_basemap_visible(&mut self, basemap: Basemap, visible: bool) {
        if let Some(layer) = self.basemap_layer(basemap) {
            layer.set_visible(visible);
        }
    }

    fn add_vector_layer(&mut self, ticket: &LoadTicket, style: &LayerStyle) -> OlLayer {
        let source = ol::VectorSource::new(&Object::new());
        let released = Rc::new(Cell::new(false));
        spawn_local(load_features(
            ticket.clone(),
            source.clone(),
            Rc::clone(&released),
            Rc::clone(&self.sink),
        ));

        let layer = ol::VectorLayer::new(&options(&[
            ("source", js(&source)),
            ("style", js(&vector_style(style))),
        ]));
        self.map.add_layer(&layer);

        OlLayer {
            layer,
            source,
            released,
        }
    }

    fn restyle_layer(&mut self, layer: &OlLayer, style: &LayerStyle) {
        layer.layer.set_style(&vector_style(style));
    }

    fn set_layer_visible(&mut self, layer: &OlLayer, visible: bool) {
        layer.layer.set_visible(visible);
    }

    fn remove_vector_layer(&mut self, layer: OlLayer) {
        layer.released.set(true);
        self.map.remove_layer(&layer.layer);
        layer.layer.set_source(&JsValue::NULL);
        layer.source.clear(true);
        layer.source.dispose();
        layer.layer.dispose();
    }

    fn fit_extent(&mut self, extent: Extent, fit: FitOptions) {
        let fit_options = options(&[
            ("padding", &number_array(&fit.padding)),
            ("maxZoom", &JsValue::from_f64(fit.max_zoom)),
        ]);
        let extent = extent.to_array();
        self.map
            .get_view()
            .fit(&number_array(&extent).unchecked_into(), &fit_options);
    }

    fn install_interaction(&mut self, kind: InteractionKind) {
        let (interaction, listener) = match kind {
            InteractionKind::FeaturePick => self.feature_pick(),
            InteractionKind::BoxDraw => self.box_draw(),
        };
        self.map.add_interaction(&interaction);
        self.interaction = Some(InstalledInteraction {
            kind,
            interaction,
            _listener: listener,
        });
    }

    fn remove_interaction(&mut self, kind: InteractionKind) {
        if let Some(installed) = self.interaction.take_if(|i| i.kind == kind) {
            self.map.remove_interaction(&installed.interaction);
            installed.interaction.dispose();
        }
    }

    fn clear_draw_source(&mut self) {
        self.draw_source.clear(false);
    }

    fn detach(&mut self) {
        self.map.set_target(&JsValue::UNDEFINED);
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Fetch and parse one layer's GeoJSON, then report the outcome.
///
/// Every path that gets a response settles the layer: a failed request is
/// a [`LoadError::Fetch`] and a body the format rejects is a
/// [`LoadError::Parse`]. Layer loads carry no timeout.
async fn load_features(
    ticket: LoadTicket,
    source: ol::VectorSource,
    released: Rc<Cell<bool>>,
    sink: EventSink,
) {
    let fetched = fetch_text(&data_url(&ticket.id), None).await;
    if released.get() {
        return;
    }
    let result = fetched
        .map_err(|err| LoadError::Fetch(err.to_string()))
        .and_then(|text| read_into(&source, &text));
    sink(MapEvent::LayerLoaded(ticket, result));
}

fn read_into(source: &ol::VectorSource, text: &str) -> Result<Extent, LoadError> {
    let read_options = options(&[(
        "featureProjection",
        &JsValue::from_str(view::PROJECTION),
    )]);
    let features = ol::GeoJsonFormat::new()
        .read_features(text, &read_options)
        .map_err(|err| LoadError::Parse(js_error_message(&err)))?;
    source.add_features(&features);
    Ok(extent_from_array(&source.get_extent()).unwrap_or_else(Extent::empty))
}

fn js_error_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn data_url(id: &LayerId) -> String {
    let encoded: String = js_sys::encode_uri_component(id.as_str()).into();
    format!("{}?path={}", LAYER_DATA_ENDPOINT, encoded)
}

fn js(value: &impl AsRef<JsValue>) -> &JsValue {
    value.as_ref()
}

/// Build a plain options object.
fn options(entries: &[(&str, &JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object
}

fn number_array(values: &[f64]) -> JsValue {
    values
        .iter()
        .map(|v| JsValue::from_f64(*v))
        .collect::<Array>()
        .into()
}

fn extent_from_array(array: &Array) -> Option<Extent> {
    let values: Vec<f64> = array.iter().filter_map(|v| v.as_f64()).collect();
    Extent::from_slice(&values)
}

/// Copy a feature's properties minus its geometry.
fn feature_info(feature: &ol::Feature) -> FeatureInfo {
    let properties = Object::assign(&Object::new(), &feature.get_properties());
    let _ = Reflect::delete_property(&properties, &JsValue::from_str("geometry"));

    match serde_wasm_bindgen::from_value::<Map<String, Value>>(properties.into()) {
        Ok(map) => FeatureInfo::from_properties(map),
        Err(err) => {
            dom::console_warn(&format!("Unreadable feature properties: {}", err));
            FeatureInfo::default()
        }
    }
}

fn stroke(color: &str, width: f64) -> ol::Stroke {
    ol::Stroke::new(&options(&[
        ("color", &JsValue::from_str(color)),
        ("width", &JsValue::from_f64(width)),
    ]))
}

fn fill(color: &str) -> ol::Fill {
    ol::Fill::new(&options(&[("color", &JsValue::from_str(color))]))
}

fn circle(radius: f64, fill_color: &str, outline: &str, outline_width: f64) -> ol::CircleStyle {
    ol::CircleStyle::new(&options(&[
        ("radius", &JsValue::from_f64(radius)),
        ("fill", js(&fill(fill_color))),
        ("stroke", js(&stroke(outline, outline_width))),
    ]))
}

fn vector_style(style: &LayerStyle) -> ol::Style {
    ol::Style::new(&options(&[
        ("stroke", js(&stroke(&style.stroke_color, style.stroke_width))),
        ("fill", js(&fill(&style.fill_color))),
        (
            "image",
            js(&circle(
                style.point_radius,
                &style.point_fill,
                &style.point_outline,
                style.point_outline_width,
            )),
        ),
    ]))
}

fn select_style() -> ol::Style {
    ol::Style::new(&options(&[
        ("stroke", js(&stroke(styles::SELECT_STROKE, styles::SELECT_STROKE_WIDTH))),
        ("fill", js(&fill(styles::SELECT_FILL))),
        (
            "image",
            js(&circle(
                styles::SELECT_POINT_RADIUS,
                styles::SELECT_STROKE,
                styles::SELECT_POINT_OUTLINE,
                styles::SELECT_POINT_OUTLINE_WIDTH,
            )),
        ),
    ]))
}

fn draw_style() -> ol::Style {
    ol::Style::new(&options(&[
        ("stroke", js(&stroke(styles::DRAW_STROKE, styles::DRAW_STROKE_WIDTH))),
        ("fill", js(&fill(styles::DRAW_FILL))),
    ]))
}
