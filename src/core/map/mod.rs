//! OpenLayers map engine.

mod engine;
mod ol;

pub use engine::{EventSink, MapEvent, OlEngine, OlLayer, is_available};
