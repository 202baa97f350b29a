//! Root application module.
//!
//! Contains the App component and the [`AppContext`] of signals shared by
//! the sidebar and the map.

use std::collections::HashMap;

use geoview_core::{
    Basemap, Color, FeatureInfo, LayerGroup, LayerId, LayerSelection, LayerStatus, ToolMode,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{MapView, Sidebar, Spinner};
use crate::config::COLOR_RETENTION;
use crate::core::catalog::fetch_catalog;
use crate::utils::dom;

// ============================================================================
// CatalogStatus
// ============================================================================

/// Progress of the catalog request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogStatus {
    /// First request in flight; the map is not mounted yet
    Loading,
    Ready,
    /// Last request failed; the previous catalog (possibly empty) is kept
    Failed(String),
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// The selection, tool mode and basemap are user intents; the map view
/// pushes them into its adapter. The feature, layer status and ROI count
/// flow the other way and are written only by the map view.
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub catalog: RwSignal<Vec<LayerGroup>>,
    pub catalog_status: RwSignal<CatalogStatus>,
    /// A refresh request is in flight.
    pub refreshing: RwSignal<bool>,

    pub selection: RwSignal<LayerSelection>,
    pub tool_mode: RwSignal<ToolMode>,
    pub basemap: RwSignal<Basemap>,

    pub selected_feature: RwSignal<Option<FeatureInfo>>,
    pub layer_status: RwSignal<HashMap<LayerId, LayerStatus>>,
    pub roi_count: RwSignal<usize>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            catalog: RwSignal::new(Vec::new()),
            catalog_status: RwSignal::new(CatalogStatus::Loading),
            refreshing: RwSignal::new(false),
            selection: RwSignal::new(LayerSelection::with_retention(COLOR_RETENTION)),
            tool_mode: RwSignal::new(ToolMode::default()),
            basemap: RwSignal::new(Basemap::default()),
            selected_feature: RwSignal::new(None),
            layer_status: RwSignal::new(HashMap::new()),
            roi_count: RwSignal::new(0),
        }
    }

    /// Fetch the catalog and drop active layers that disappeared from it.
    ///
    /// Failures are logged; the current catalog stays on screen.
    pub fn load_catalog(&self) {
        let ctx = *self;
        if ctx.refreshing.get_untracked() {
            return;
        }
        ctx.refreshing.set(true);

        spawn_local(async move {
            match fetch_catalog().await {
                Ok(groups) => {
                    ctx.selection.update(|s| {
                        s.retain_catalog(&groups);
                    });
                    ctx.catalog.set(groups);
                    ctx.catalog_status.set(CatalogStatus::Ready);
                }
                Err(err) => {
                    dom::console_error(&format!("Error fetching layers: {}", err));
                    ctx.catalog_status.set(CatalogStatus::Failed(err.to_string()));
                }
            }
            ctx.refreshing.set(false);
        });
    }

    pub fn toggle_layer(&self, group_name: &str, file_name: &str) {
        self.selection.update(|s| {
            s.toggle_layer(group_name, file_name);
        });
    }

    pub fn toggle_group(&self, group: &LayerGroup) {
        self.selection.update(|s| {
            s.toggle_group(group);
        });
    }

    pub fn set_layer_color(&self, id: &LayerId, color: Color) {
        self.selection.update(|s| {
            s.set_color(id, color);
        });
    }

    pub fn set_tool_mode(&self, mode: ToolMode) {
        self.tool_mode.set(mode);
    }

    pub fn set_basemap(&self, basemap: Basemap) {
        self.basemap.set(basemap);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Components
// ============================================================================

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    ctx.load_catalog();

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f3f4f6;
                    color: #1f2937;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #dc2626; margin-bottom: 1rem;">
                        "Une erreur est survenue"
                    </h1>
                    <ul style="color: #6b7280; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #3b82f6;
                            color: white;
                            border: none;
                            padding: 0.75rem 2rem;
                            border-radius: 4px;
                            cursor: pointer;
                        "
                    >
                        "Recharger"
                    </button>
                </div>
            }
        >
            <Home />
        </ErrorBoundary>
    }
}

/// Sidebar plus the map, or a spinner while the first catalog request runs.
#[component]
fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let loading = Memo::new(move |_| ctx.catalog_status.get() == CatalogStatus::Loading);

    view! {
        <div style="display: flex; width: 100vw; height: 100vh; overflow: hidden; background: #f3f4f6;">
            <Sidebar />
            <main style="flex: 1; position: relative; height: 100%;">
                <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                    <MapView />
                </Show>
            </main>
        </div>
    }
}
