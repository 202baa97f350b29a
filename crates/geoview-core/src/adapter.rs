//! Map engine adapter.
//!
//! [`MapAdapter`] is the single owner of a [`MapEngine`] and of the registry
//! of live vector layers. It turns declarative state (the
//! [`LayerSelection`], the chosen [`Basemap`], the current [`ToolMode`])
//! into engine calls, and it filters the asynchronous results coming back
//! from the engine (layer loads, feature picks, drawn rectangles).
//!
//! ## Reconciliation
//!
//! [`MapAdapter::reconcile`] diffs the selection against the registry:
//! stale layers are removed first, missing ones are created in activation
//! order, and layers whose color changed are restyled in place. After the
//! pass the registry keys are exactly the active ids.
//!
//! ## Load completions
//!
//! Each created layer gets a [`LoadTicket`] with a fresh generation. A
//! completion is applied only if the registry still holds that id under the
//! same generation and the entry has not settled yet; anything else is
//! reported as [`LoadOutcome::Stale`] or [`LoadOutcome::AlreadySettled`]
//! and has no effect on the map.

use std::collections::{HashMap, HashSet};

use crate::engine::{FitOptions, InteractionKind, LoadTicket, MapEngine};
use crate::error::LoadError;
use crate::models::{Basemap, Color, Extent, FeatureInfo, LayerId, LayerStyle, ToolMode};
use crate::selection::LayerSelection;

// ============================================================================
// Public Types
// ============================================================================

/// Construction options for [`MapAdapter`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapOptions {
    /// Basemap visible after initialization.
    pub basemap: Basemap,
    /// Padding and zoom cap used when fitting to a loaded layer.
    pub fit: FitOptions,
}

/// Load state of a registered layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayerStatus {
    /// Data request in flight
    Loading,
    /// Loaded with at least one geometry
    Ready,
    /// Loaded, but the source holds no geometry
    Empty,
    /// Load failed; the layer is hidden
    Failed(LoadError),
}

impl LayerStatus {
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// What a reconciliation pass changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub added: Vec<LayerId>,
    pub removed: Vec<LayerId>,
    pub restyled: Vec<LayerId>,
}

impl ReconcileReport {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.restyled.is_empty()
    }
}

/// Result of handing a load completion to the adapter.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// The view was fitted to the layer's extent.
    Fitted(Extent),
    /// The layer loaded but has no finite extent; the view was left alone.
    EmptyExtent,
    /// The load failed; the layer was hidden.
    Failed(LoadError),
    /// The ticket no longer matches a registered layer.
    Stale,
    /// The layer already handled its first completion.
    AlreadySettled,
}

// ============================================================================
// Registry
// ============================================================================

struct LiveLayer<L> {
    handle: L,
    generation: u64,
    color: Color,
    status: LayerStatus,
}

// ============================================================================
// MapAdapter
// ============================================================================

pub struct MapAdapter<E: MapEngine> {
    engine: E,
    registry: HashMap<LayerId, LiveLayer<E::Layer>>,
    next_generation: u64,
    fit: FitOptions,
    basemap: Basemap,
    tool_mode: ToolMode,
    installed: Option<InteractionKind>,
    selected_feature: Option<FeatureInfo>,
    drawings: Vec<Extent>,
    disposed: bool,
}

impl<E: MapEngine> MapAdapter<E> {
    /// Take ownership of an engine and register one raster layer per
    /// basemap, with only `options.basemap` visible.
    pub fn new(mut engine: E, options: MapOptions) -> Self {
        for basemap in Basemap::ALL {
            engine.add_basemap(basemap, basemap == options.basemap);
        }

        Self {
            engine,
            registry: HashMap::new(),
            next_generation: 0,
            fit: options.fit,
            basemap: options.basemap,
            tool_mode: ToolMode::Navigate,
            installed: None,
            selected_feature: None,
            drawings: Vec::new(),
            disposed: false,
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    // =========================================================================
    // Layers
    // =========================================================================

    /// Bring the live layers in line with `selection`.
    pub fn reconcile(&mut self, selection: &LayerSelection) -> ReconcileReport {
        let mut report = ReconcileReport::default();
        if self.disposed {
            return report;
        }

        let active: HashSet<&LayerId> = selection.active_ids().collect();

        // Removal first, so a layer that disappears never outlives the pass.
        let stale: Vec<LayerId> = self
            .registry
            .keys()
            .filter(|id| !active.contains(id))
            .cloned()
            .collect();
        for id in stale {
            if let Some(live) = self.registry.remove(&id) {
                self.engine.remove_vector_layer(live.handle);
                report.removed.push(id);
            }
        }

        for layer in selection.active_layers() {
            let color = selection.color(&layer.id).unwrap_or_default();
            match self.registry.get_mut(&layer.id) {
                Some(live) => {
                    if live.color != color {
                        self.engine
                            .restyle_layer(&live.handle, &LayerStyle::for_color(color));
                        live.color = color;
                        report.restyled.push(layer.id.clone());
                    }
                }
                None => {
                    let ticket = LoadTicket {
                        id: layer.id.clone(),
                        generation: self.next_generation,
                    };
                    self.next_generation += 1;

                    let handle = self
                        .engine
                        .add_vector_layer(&ticket, &LayerStyle::for_color(color));
                    self.registry.insert(
                        layer.id.clone(),
                        LiveLayer {
                            handle,
                            generation: ticket.generation,
                            color,
                            status: LayerStatus::Loading,
                        },
                    );
                    report.added.push(layer.id.clone());
                }
            }
        }

        report
    }

    /// Handle the first load completion of a layer's source.
    pub fn on_layer_loaded(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Extent, LoadError>,
    ) -> LoadOutcome {
        if self.disposed {
            return LoadOutcome::Stale;
        }

        let Some(live) = self
            .registry
            .get_mut(&ticket.id)
            .filter(|live| live.generation == ticket.generation)
        else {
            return LoadOutcome::Stale;
        };

        if live.status.is_settled() {
            return LoadOutcome::AlreadySettled;
        }

        match result {
            Ok(extent) if extent.is_finite() => {
                live.status = LayerStatus::Ready;
                self.engine.fit_extent(extent, self.fit);
                LoadOutcome::Fitted(extent)
            }
            Ok(_) => {
                live.status = LayerStatus::Empty;
                LoadOutcome::EmptyExtent
            }
            Err(err) => {
                live.status = LayerStatus::Failed(err.clone());
                self.engine.set_layer_visible(&live.handle, false);
                LoadOutcome::Failed(err)
            }
        }
    }

    pub fn layer_status(&self, id: &LayerId) -> Option<&LayerStatus> {
        self.registry.get(id).map(|live| &live.status)
    }

    /// Status of every registered layer.
    pub fn layer_statuses(&self) -> HashMap<LayerId, LayerStatus> {
        self.registry
            .iter()
            .map(|(id, live)| (id.clone(), live.status.clone()))
            .collect()
    }

    /// Registered ids, sorted.
    pub fn registered_ids(&self) -> Vec<LayerId> {
        let mut ids: Vec<_> = self.registry.keys().cloned().collect();
        ids.sort();
        ids
    }

    // =========================================================================
    // Basemap
    // =========================================================================

    /// Show exactly one basemap and hide the others. Re-selecting the
    /// current basemap touches nothing.
    pub fn set_basemap(&mut self, basemap: Basemap) {
        if self.disposed || self.basemap == basemap {
            return;
        }
        for candidate in Basemap::ALL {
            self.engine
                .set_basemap_visible(candidate, candidate == basemap);
        }
        self.basemap = basemap;
    }

    // =========================================================================
    // Interaction Modes
    // =========================================================================

    /// Switch tool mode. Returns `false` if the mode did not change.
    ///
    /// The previous special handler is always removed before the next one
    /// is installed, so at most one is ever present.
    pub fn set_tool_mode(&mut self, mode: ToolMode) -> bool {
        if self.disposed || mode == self.tool_mode {
            return false;
        }

        if let Some(kind) = self.installed.take() {
            self.engine.remove_interaction(kind);
        }

        if let Some(kind) = mode.interaction() {
            self.engine.install_interaction(kind);
            self.installed = Some(kind);
        }

        if mode != ToolMode::Select {
            self.selected_feature = None;
        }

        self.tool_mode = mode;
        true
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.tool_mode
    }

    pub fn installed_interaction(&self) -> Option<InteractionKind> {
        self.installed
    }

    /// Record the result of a click in select mode.
    ///
    /// `None` (a click on empty map) clears the current selection. Picks
    /// delivered after leaving select mode are ignored.
    pub fn on_feature_picked(&mut self, picked: Option<FeatureInfo>) -> Option<&FeatureInfo> {
        if !self.disposed && self.tool_mode == ToolMode::Select {
            self.selected_feature = picked;
        }
        self.selected_feature.as_ref()
    }

    pub fn selected_feature(&self) -> Option<&FeatureInfo> {
        self.selected_feature.as_ref()
    }

    /// Close the attribute inspector.
    pub fn dismiss_feature(&mut self) {
        self.selected_feature = None;
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Record a finished ROI rectangle.
    pub fn on_rectangle_drawn(&mut self, extent: Extent) {
        if !self.disposed && self.tool_mode == ToolMode::Draw {
            self.drawings.push(extent);
        }
    }

    pub fn drawings(&self) -> &[Extent] {
        &self.drawings
    }

    /// Remove every ROI rectangle. Safe in any mode.
    pub fn clear_drawings(&mut self) {
        if self.disposed {
            return;
        }
        self.engine.clear_draw_source();
        self.drawings.clear();
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Release every layer source and the draw source, then detach the map.
    ///
    /// Later calls on the adapter are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }

        for (_, live) in self.registry.drain() {
            self.engine.remove_vector_layer(live.handle);
        }
        self.engine.clear_draw_source();
        self.drawings.clear();
        if let Some(kind) = self.installed.take() {
            self.engine.remove_interaction(kind);
        }
        self.selected_feature = None;
        self.engine.detach();
        self.disposed = true;
    }
}
