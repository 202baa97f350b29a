//! Recording map engine for tests.
//!
//! [`RecordingEngine`] keeps an in-memory picture of what a real map would
//! show (layer stack, visible basemap, installed handlers) and a log of
//! every call it received.

use crate::engine::{FitOptions, InteractionKind, LoadTicket, MapEngine};
use crate::models::{Basemap, Extent, LayerId, LayerStyle};

/// One call made on the engine, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    AddBasemap(Basemap, bool),
    SetBasemapVisible(Basemap, bool),
    AddVectorLayer(LoadTicket),
    RestyleLayer(LayerId, LayerStyle),
    SetLayerVisible(LayerId, bool),
    RemoveVectorLayer(LayerId),
    FitExtent(Extent, FitOptions),
    InstallInteraction(InteractionKind),
    RemoveInteraction(InteractionKind),
    ClearDrawSource,
    Detach,
}

/// Layer handle handed out by [`RecordingEngine`].
#[derive(Debug)]
pub struct MockLayer {
    pub ticket: LoadTicket,
}

#[derive(Clone, Debug)]
struct LayerEntry {
    ticket: LoadTicket,
    style: LayerStyle,
    visible: bool,
}

#[derive(Debug, Default)]
pub struct RecordingEngine {
    calls: Vec<EngineCall>,
    layers: Vec<LayerEntry>,
    basemaps: Vec<(Basemap, bool)>,
    interactions: Vec<InteractionKind>,
    released_sources: usize,
    detached: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Data layers on the map, bottom to top.
    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|l| l.ticket.id.clone()).collect()
    }

    /// Ticket of the layer currently on the map for `id`.
    pub fn ticket(&self, id: &LayerId) -> Option<LoadTicket> {
        self.entry(id).map(|l| l.ticket.clone())
    }

    pub fn layer_style(&self, id: &LayerId) -> Option<&LayerStyle> {
        self.entry(id).map(|l| &l.style)
    }

    pub fn is_layer_visible(&self, id: &LayerId) -> Option<bool> {
        self.entry(id).map(|l| l.visible)
    }

    pub fn visible_basemaps(&self) -> Vec<Basemap> {
        self.basemaps
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(b, _)| *b)
            .collect()
    }

    pub fn basemap_count(&self) -> usize {
        self.basemaps.len()
    }

    /// Special handlers currently installed.
    pub fn interactions(&self) -> &[InteractionKind] {
        &self.interactions
    }

    pub fn fits(&self) -> Vec<Extent> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::FitExtent(extent, _) => Some(*extent),
                _ => None,
            })
            .collect()
    }

    pub fn draw_clears(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, EngineCall::ClearDrawSource))
            .count()
    }

    pub fn released_sources(&self) -> usize {
        self.released_sources
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    fn entry(&self, id: &LayerId) -> Option<&LayerEntry> {
        self.layers.iter().find(|l| &l.ticket.id == id)
    }

    fn entry_mut(&mut self, ticket: &LoadTicket) -> Option<&mut LayerEntry> {
        self.layers.iter_mut().find(|l| &l.ticket == ticket)
    }
}

impl MapEngine for RecordingEngine {
    type Layer = MockLayer;

    fn add_basemap(&mut self, basemap: Basemap, visible: bool) {
        self.calls.push(EngineCall::AddBasemap(basemap, visible));
        self.basemaps.push((basemap, visible));
    }

    fn set_basemap_visible(&mut self, basemap: Basemap, visible: bool) {
        self.calls.push(EngineCall::SetBasemapVisible(basemap, visible));
        for (b, v) in &mut self.basemaps {
            if *b == basemap {
                *v = visible;
            }
        }
    }

    fn add_vector_layer(&mut self, ticket: &LoadTicket, style: &LayerStyle) -> MockLayer {
        self.calls.push(EngineCall::AddVectorLayer(ticket.clone()));
        self.layers.push(LayerEntry {
            ticket: ticket.clone(),
            style: style.clone(),
            visible: true,
        });
        MockLayer {
            ticket: ticket.clone(),
        }
    }

    fn restyle_layer(&mut self, layer: &MockLayer, style: &LayerStyle) {
        self.calls
            .push(EngineCall::RestyleLayer(layer.ticket.id.clone(), style.clone()));
        if let Some(entry) = self.entry_mut(&layer.ticket) {
            entry.style = style.clone();
        }
    }

    fn set_layer_visible(&mut self, layer: &MockLayer, visible: bool) {
        self.calls
            .push(EngineCall::SetLayerVisible(layer.ticket.id.clone(), visible));
        if let Some(entry) = self.entry_mut(&layer.ticket) {
            entry.visible = visible;
        }
    }

    fn remove_vector_layer(&mut self, layer: MockLayer) {
        self.calls
            .push(EngineCall::RemoveVectorLayer(layer.ticket.id.clone()));
        self.layers.retain(|l| l.ticket != layer.ticket);
        self.released_sources += 1;
    }

    fn fit_extent(&mut self, extent: Extent, options: FitOptions) {
        self.calls.push(EngineCall::FitExtent(extent, options));
    }

    fn install_interaction(&mut self, kind: InteractionKind) {
        self.calls.push(EngineCall::InstallInteraction(kind));
        self.interactions.push(kind);
    }

    fn remove_interaction(&mut self, kind: InteractionKind) {
        self.calls.push(EngineCall::RemoveInteraction(kind));
        self.interactions.retain(|k| *k != kind);
    }

    fn clear_draw_source(&mut self) {
        self.calls.push(EngineCall::ClearDrawSource);
    }

    fn detach(&mut self) {
        self.calls.push(EngineCall::Detach);
        self.detached = true;
    }
}
