//! End-to-end checks of selection + adapter against the recording engine.

use std::collections::BTreeSet;

use geoview_core::mock::RecordingEngine;
use geoview_core::{
    Color, Extent, LayerGroup, LayerId, LayerSelection, LoadOutcome, LoadTicket, MapAdapter,
    MapOptions, ToolMode,
};

const FILES: [&str; 3] = ["a.geojson", "b.geojson", "c.json"];

fn active_set(selection: &LayerSelection) -> BTreeSet<LayerId> {
    selection.active_ids().cloned().collect()
}

fn registry_set(adapter: &MapAdapter<RecordingEngine>) -> BTreeSet<LayerId> {
    adapter.registered_ids().into_iter().collect()
}

fn engine_set(adapter: &MapAdapter<RecordingEngine>) -> BTreeSet<LayerId> {
    adapter.engine().layer_ids().into_iter().collect()
}

/// Every toggle sequence of length 5 over three files, reconciling after
/// each step, keeps registry, engine and selection in agreement.
#[test]
fn registry_tracks_selection_for_all_short_sequences() {
    let steps = 5;
    let total = FILES.len().pow(steps);

    for mut code in 0..total {
        let mut selection = LayerSelection::new();
        let mut adapter = MapAdapter::new(RecordingEngine::new(), MapOptions::default());
        let mut history = Vec::new();

        for _ in 0..steps {
            let file = FILES[code % FILES.len()];
            code /= FILES.len();
            history.push(file);

            selection.toggle_layer("roads", file);
            adapter.reconcile(&selection);

            assert_eq!(registry_set(&adapter), active_set(&selection), "{history:?}");
            assert_eq!(engine_set(&adapter), active_set(&selection), "{history:?}");
        }
    }
}

/// Completions delivered after any later toggles only act on layers that
/// are still registered under the same ticket.
#[test]
fn late_completions_only_fit_live_layers() {
    let mut selection = LayerSelection::new();
    let mut adapter = MapAdapter::new(RecordingEngine::new(), MapOptions::default());
    let mut tickets: Vec<LoadTicket> = Vec::new();

    // a on, b on, a off, a on again, c on, c off
    for file in ["a.geojson", "b.geojson", "a.geojson", "a.geojson", "c.json", "c.json"] {
        selection.toggle_layer("roads", file);
        adapter.reconcile(&selection);
        for id in selection.active_ids() {
            if let Some(ticket) = adapter.engine().ticket(id)
                && !tickets.contains(&ticket)
            {
                tickets.push(ticket);
            }
        }
    }

    // Issued: a (first), b, a (second), c. Only b and the second a are live.
    assert_eq!(tickets.len(), 4);
    let extent = Extent::new(0.0, 0.0, 1.0, 1.0);
    let outcomes: Vec<_> = tickets
        .iter()
        .map(|ticket| (ticket.id.clone(), adapter.on_layer_loaded(ticket, Ok(extent))))
        .collect();

    let fitted: Vec<_> = outcomes
        .iter()
        .filter(|(_, outcome)| matches!(outcome, LoadOutcome::Fitted(_)))
        .map(|(id, _)| id.as_str().to_string())
        .collect();
    let stale = outcomes
        .iter()
        .filter(|(_, outcome)| *outcome == LoadOutcome::Stale)
        .count();

    assert_eq!(fitted, vec!["roads/b.geojson", "roads/a.geojson"]);
    assert_eq!(stale, 2);
    assert_eq!(adapter.engine().fits().len(), 2);
}

#[test]
fn recolor_cycle_resets_to_default() {
    let mut selection = LayerSelection::new();
    let mut adapter = MapAdapter::new(RecordingEngine::new(), MapOptions::default());
    let a = LayerId::new("roads", "a.geojson");

    selection.toggle_layer("roads", "a.geojson");
    adapter.reconcile(&selection);
    selection.set_color(&a, Color::rgb(255, 0, 0));
    adapter.reconcile(&selection);
    assert_eq!(
        adapter.engine().layer_style(&a).map(|s| s.stroke_color.as_str()),
        Some("#ff0000")
    );

    selection.toggle_layer("roads", "a.geojson");
    adapter.reconcile(&selection);
    selection.toggle_layer("roads", "a.geojson");
    adapter.reconcile(&selection);

    assert_eq!(selection.color(&a), Some(Color::default()));
    assert_eq!(
        adapter.engine().layer_style(&a).map(|s| s.stroke_color.as_str()),
        Some("#3b82f6")
    );
}

#[test]
fn partial_group_toggle_activates_rest() {
    let group = LayerGroup::new(
        "parcels",
        FILES.iter().map(|f| f.to_string()).collect(),
    );
    let mut selection = LayerSelection::new();
    let mut adapter = MapAdapter::new(RecordingEngine::new(), MapOptions::default());

    selection.toggle_layer("parcels", "b.geojson");
    adapter.reconcile(&selection);
    let b_ticket = adapter
        .engine()
        .ticket(&LayerId::new("parcels", "b.geojson"))
        .unwrap();

    selection.toggle_group(&group);
    let report = adapter.reconcile(&selection);
    assert_eq!(report.added.len(), 2);
    assert!(report.removed.is_empty());

    // The already-active layer kept its layer object.
    assert_eq!(
        adapter.engine().ticket(&LayerId::new("parcels", "b.geojson")),
        Some(b_ticket)
    );
}

#[test]
fn mode_cycle_never_stacks_handlers() {
    let mut adapter = MapAdapter::new(RecordingEngine::new(), MapOptions::default());
    let sequence = [
        ToolMode::Draw,
        ToolMode::Select,
        ToolMode::Draw,
        ToolMode::Navigate,
        ToolMode::Select,
        ToolMode::Select,
        ToolMode::Navigate,
    ];
    for mode in sequence {
        adapter.set_tool_mode(mode);
        let installed = adapter.engine().interactions();
        assert!(installed.len() <= 1, "{mode:?} left {installed:?}");
        assert_eq!(installed.first().copied(), mode.interaction());
    }
}
