//! Map container.
//!
//! Owns the [`MapAdapter`] for the lifetime of the component. Reactive
//! effects push the selection, tool mode and basemap into it; engine
//! events come back through [`spawn_local`] so they never re-enter the
//! adapter while it is borrowed.

use std::rc::Rc;

use geoview_core::{LoadOutcome, MapAdapter, MapOptions};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{BasemapSwitcher, Inspector, Toolbar};
use crate::app::AppContext;
use crate::core::map::{self, EventSink, MapEvent, OlEngine};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/map/map.module.css");

type AdapterSlot = StoredValue<Option<MapAdapter<OlEngine>>, LocalStorage>;

#[component]
pub fn MapView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let container = NodeRef::<leptos::html::Div>::new();
    let adapter: AdapterSlot = StoredValue::new_local(None);
    let ready = RwSignal::new(false);
    let unavailable = RwSignal::new(false);

    // Build the map once the container is in the DOM.
    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        if ready.get_untracked() {
            return;
        }
        if !map::is_available() {
            dom::console_error("OpenLayers failed to load; the map is disabled");
            unavailable.set(true);
            return;
        }

        let engine = OlEngine::new(&element, event_sink(ctx, adapter));
        let options = MapOptions {
            basemap: ctx.basemap.get_untracked(),
            ..MapOptions::default()
        };
        adapter.set_value(Some(MapAdapter::new(engine, options)));
        ready.set(true);
    });

    Effect::new(move |_| {
        if !ready.get() {
            return;
        }
        let report = ctx
            .selection
            .with(|selection| with_adapter(adapter, |a| a.reconcile(selection)));
        if report.is_some_and(|r| !r.is_empty()) {
            sync_layer_status(ctx, adapter);
        }
    });

    Effect::new(move |_| {
        if !ready.get() {
            return;
        }
        let mode = ctx.tool_mode.get();
        if with_adapter(adapter, |a| a.set_tool_mode(mode)) == Some(true) {
            sync_feature(ctx, adapter);
        }
    });

    Effect::new(move |_| {
        if !ready.get() {
            return;
        }
        let basemap = ctx.basemap.get();
        with_adapter(adapter, |a| a.set_basemap(basemap));
    });

    on_cleanup(move || {
        adapter.try_update_value(|slot| {
            if let Some(mut live) = slot.take() {
                live.dispose();
            }
        });
        ctx.layer_status.set(Default::default());
        ctx.selected_feature.set(None);
        ctx.roi_count.set(0);
    });

    let on_clear = Callback::new(move |_: ()| {
        with_adapter(adapter, |a| a.clear_drawings());
        sync_drawings(ctx, adapter);
    });
    let on_close = Callback::new(move |_: ()| {
        with_adapter(adapter, |a| a.dismiss_feature());
        sync_feature(ctx, adapter);
    });

    view! {
        <div class=css::container>
            <div node_ref=container class=css::map></div>
            <Show when=move || unavailable.get()>
                <div class=css::unavailable>"Carte indisponible"</div>
            </Show>
            <Toolbar on_clear=on_clear />
            <BasemapSwitcher />
            <Inspector on_close=on_close />
        </div>
    }
}

// =============================================================================
// Adapter plumbing
// =============================================================================

fn with_adapter<R>(
    adapter: AdapterSlot,
    f: impl FnOnce(&mut MapAdapter<OlEngine>) -> R,
) -> Option<R> {
    adapter.try_update_value(|slot| slot.as_mut().map(f)).flatten()
}

/// Route engine events back into the adapter on a later task.
fn event_sink(ctx: AppContext, adapter: AdapterSlot) -> EventSink {
    Rc::new(move |event: MapEvent| spawn_local(async move { apply_event(ctx, adapter, event) }))
}

fn apply_event(ctx: AppContext, adapter: AdapterSlot, event: MapEvent) {
    match event {
        MapEvent::LayerLoaded(ticket, result) => {
            let outcome = with_adapter(adapter, |a| a.on_layer_loaded(&ticket, result));
            match outcome {
                Some(LoadOutcome::Failed(err)) => {
                    dom::console_error(&format!("Layer {} failed to load: {}", ticket.id, err));
                }
                Some(LoadOutcome::Stale) => {
                    web_sys::console::log_1(
                        &format!("Ignored stale load of {}", ticket.id).into(),
                    );
                }
                _ => {}
            }
            sync_layer_status(ctx, adapter);
        }
        MapEvent::FeaturePicked(picked) => {
            with_adapter(adapter, |a| {
                a.on_feature_picked(picked);
            });
            sync_feature(ctx, adapter);
        }
        MapEvent::RectangleDrawn(extent) => {
            with_adapter(adapter, |a| a.on_rectangle_drawn(extent));
            sync_drawings(ctx, adapter);
        }
    }
}

fn sync_layer_status(ctx: AppContext, adapter: AdapterSlot) {
    if let Some(statuses) = with_adapter(adapter, |a| a.layer_statuses()) {
        ctx.layer_status.set(statuses);
    }
}

fn sync_feature(ctx: AppContext, adapter: AdapterSlot) {
    if let Some(feature) = with_adapter(adapter, |a| a.selected_feature().cloned()) {
        ctx.selected_feature.set(feature);
    }
}

fn sync_drawings(ctx: AppContext, adapter: AdapterSlot) {
    if let Some(count) = with_adapter(adapter, |a| a.drawings().len()) {
        ctx.roi_count.set(count);
    }
}
