//! Active-layer selection state.
//!
//! [`LayerSelection`] is the single source of truth for which catalog files
//! are switched on and which color each one is drawn with. It is pure data:
//! the map adapter reads it during reconciliation but never writes to it.

use std::collections::HashMap;

use crate::models::{ActiveLayer, Color, LayerGroup, LayerId};

/// What happens to a layer's color when it is switched off and on again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorRetention {
    /// Re-activation starts from the default color (default)
    #[default]
    Reset,
    /// Re-activation restores the last color chosen for that layer
    Remember,
}

/// Check state of a group in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupCheckState {
    /// Every file in the group is active
    All,
    /// No file in the group is active
    None,
    /// Some but not all files are active (indeterminate checkbox)
    Some,
}

/// Result of [`LayerSelection::toggle_group`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupToggle {
    Activated,
    Deactivated,
}

/// Ordered set of active layers plus their colors.
///
/// Invariants:
/// - an id appears at most once in `active`;
/// - `colors` has an entry exactly for the ids in `active`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerSelection {
    active: Vec<ActiveLayer>,
    colors: HashMap<LayerId, Color>,
    retention: ColorRetention,
    remembered: HashMap<LayerId, Color>,
}

impl LayerSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: ColorRetention) -> Self {
        Self {
            retention,
            ..Self::default()
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Flip one layer on or off. Returns `true` if it is now active.
    pub fn toggle_layer(&mut self, group_name: &str, file_name: &str) -> bool {
        let id = LayerId::new(group_name, file_name);
        if self.is_active(&id) {
            self.deactivate(&id);
            false
        } else {
            self.activate(group_name, file_name);
            true
        }
    }

    /// Toggle every file of a group.
    ///
    /// A fully active group is switched off entirely. Any other group (none
    /// or only some files active) is switched on entirely; files that were
    /// already active keep their position and color.
    pub fn toggle_group(&mut self, group: &LayerGroup) -> GroupToggle {
        match self.group_check_state(group) {
            GroupCheckState::All => {
                for id in group.layer_ids() {
                    self.deactivate(&id);
                }
                GroupToggle::Deactivated
            }
            GroupCheckState::None | GroupCheckState::Some => {
                for file in &group.files {
                    if !self.is_active(&LayerId::new(&group.group_name, file)) {
                        self.activate(&group.group_name, file);
                    }
                }
                GroupToggle::Activated
            }
        }
    }

    /// Change the color of an active layer.
    ///
    /// Returns `false` and changes nothing if the layer is not active.
    pub fn set_color(&mut self, id: &LayerId, color: Color) -> bool {
        match self.colors.get_mut(id) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Drop active layers that are no longer present in a freshly fetched
    /// catalog. Returns the ids that were removed.
    pub fn retain_catalog(&mut self, groups: &[LayerGroup]) -> Vec<LayerId> {
        let stale: Vec<LayerId> = self
            .active
            .iter()
            .filter(|layer| {
                !groups
                    .iter()
                    .any(|g| g.group_name == layer.group_name && g.contains(&layer.file_name))
            })
            .map(|layer| layer.id.clone())
            .collect();

        for id in &stale {
            self.deactivate(id);
        }
        stale
    }

    fn activate(&mut self, group_name: &str, file_name: &str) {
        let layer = ActiveLayer::new(group_name, file_name);
        let color = match self.retention {
            ColorRetention::Reset => Color::default(),
            ColorRetention::Remember => self
                .remembered
                .get(&layer.id)
                .copied()
                .unwrap_or_default(),
        };
        self.colors.insert(layer.id.clone(), color);
        self.active.push(layer);
    }

    fn deactivate(&mut self, id: &LayerId) {
        self.active.retain(|layer| &layer.id != id);
        if let Some(color) = self.colors.remove(id)
            && self.retention == ColorRetention::Remember
        {
            self.remembered.insert(id.clone(), color);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Active layers in activation order (later entries draw on top).
    pub fn active_layers(&self) -> &[ActiveLayer] {
        &self.active
    }

    pub fn active_ids(&self) -> impl Iterator<Item = &LayerId> {
        self.active.iter().map(|layer| &layer.id)
    }

    pub fn is_active(&self, id: &LayerId) -> bool {
        self.colors.contains_key(id)
    }

    pub fn color(&self, id: &LayerId) -> Option<Color> {
        self.colors.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of files of `group` that are currently active.
    pub fn active_count_in(&self, group: &LayerGroup) -> usize {
        group.layer_ids().filter(|id| self.is_active(id)).count()
    }

    pub fn group_check_state(&self, group: &LayerGroup) -> GroupCheckState {
        let active = self.active_count_in(group);
        if active == 0 {
            GroupCheckState::None
        } else if active == group.files.len() {
            GroupCheckState::All
        } else {
            GroupCheckState::Some
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roads() -> LayerGroup {
        LayerGroup::new(
            "roads",
            vec![
                "a.geojson".into(),
                "b.geojson".into(),
                "c.geojson".into(),
                "d.geojson".into(),
                "e.geojson".into(),
            ],
        )
    }

    fn assert_colors_match_active(selection: &LayerSelection) {
        assert_eq!(selection.colors.len(), selection.active.len());
        for layer in &selection.active {
            assert!(selection.colors.contains_key(&layer.id));
        }
    }

    #[test]
    fn test_toggle_parity() {
        let id = LayerId::new("roads", "a.geojson");
        for count in 1..=8 {
            let mut selection = LayerSelection::new();
            for _ in 0..count {
                selection.toggle_layer("roads", "a.geojson");
                assert_colors_match_active(&selection);
            }
            assert_eq!(selection.is_active(&id), count % 2 == 1, "after {count} toggles");
        }
    }

    #[test]
    fn test_toggle_appends_in_order() {
        let mut selection = LayerSelection::new();
        assert!(selection.toggle_layer("roads", "b.geojson"));
        assert!(selection.toggle_layer("rivers", "x.json"));
        assert!(selection.toggle_layer("roads", "a.geojson"));

        let ids: Vec<_> = selection.active_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["roads/b.geojson", "rivers/x.json", "roads/a.geojson"]);

        assert!(!selection.toggle_layer("rivers", "x.json"));
        let ids: Vec<_> = selection.active_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["roads/b.geojson", "roads/a.geojson"]);
    }

    #[test]
    fn test_group_toggle_from_none_activates_all() {
        let group = roads();
        let mut selection = LayerSelection::new();
        assert_eq!(selection.group_check_state(&group), GroupCheckState::None);

        assert_eq!(selection.toggle_group(&group), GroupToggle::Activated);
        assert_eq!(selection.group_check_state(&group), GroupCheckState::All);
        assert_eq!(selection.len(), 5);
        assert_colors_match_active(&selection);
    }

    #[test]
    fn test_group_toggle_from_partial_activates_all() {
        let group = roads();
        let mut selection = LayerSelection::new();
        selection.toggle_layer("roads", "b.geojson");
        selection.toggle_layer("roads", "d.geojson");
        let red = Color::rgb(255, 0, 0);
        selection.set_color(&LayerId::new("roads", "b.geojson"), red);
        assert_eq!(selection.group_check_state(&group), GroupCheckState::Some);

        assert_eq!(selection.toggle_group(&group), GroupToggle::Activated);
        assert_eq!(selection.group_check_state(&group), GroupCheckState::All);
        assert_eq!(selection.len(), 5);

        // Already-active layers keep their place and color.
        assert_eq!(selection.active_layers()[0].file_name, "b.geojson");
        assert_eq!(selection.active_layers()[1].file_name, "d.geojson");
        assert_eq!(
            selection.color(&LayerId::new("roads", "b.geojson")),
            Some(red)
        );
        assert_eq!(
            selection.color(&LayerId::new("roads", "a.geojson")),
            Some(Color::default())
        );
    }

    #[test]
    fn test_group_toggle_from_all_deactivates_all() {
        let group = roads();
        let mut selection = LayerSelection::new();
        selection.toggle_layer("other", "keep.json");
        selection.toggle_group(&group);

        assert_eq!(selection.toggle_group(&group), GroupToggle::Deactivated);
        assert_eq!(selection.group_check_state(&group), GroupCheckState::None);
        assert_eq!(selection.len(), 1);
        assert!(selection.is_active(&LayerId::new("other", "keep.json")));
        assert_colors_match_active(&selection);
    }

    #[test]
    fn test_empty_group_reports_none() {
        let group = LayerGroup::new("empty", vec![]);
        let mut selection = LayerSelection::new();
        assert_eq!(selection.group_check_state(&group), GroupCheckState::None);
        assert_eq!(selection.toggle_group(&group), GroupToggle::Activated);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_set_color_requires_active() {
        let mut selection = LayerSelection::new();
        let id = LayerId::new("roads", "a.geojson");
        assert!(!selection.set_color(&id, Color::rgb(1, 2, 3)));
        assert_eq!(selection.color(&id), None);

        selection.toggle_layer("roads", "a.geojson");
        assert!(selection.set_color(&id, Color::rgb(1, 2, 3)));
        assert_eq!(selection.color(&id), Some(Color::rgb(1, 2, 3)));
    }

    #[test]
    fn test_reactivation_resets_color_by_default() {
        let mut selection = LayerSelection::new();
        let id = LayerId::new("roads", "a.geojson");
        selection.toggle_layer("roads", "a.geojson");
        assert_eq!(selection.color(&id), Some(Color::default()));

        selection.set_color(&id, Color::rgb(255, 0, 0));
        selection.toggle_layer("roads", "a.geojson");
        selection.toggle_layer("roads", "a.geojson");
        assert_eq!(selection.color(&id), Some(Color::default()));
    }

    #[test]
    fn test_reactivation_remembers_color_when_configured() {
        let mut selection = LayerSelection::with_retention(ColorRetention::Remember);
        let id = LayerId::new("roads", "a.geojson");
        selection.toggle_layer("roads", "a.geojson");
        selection.set_color(&id, Color::rgb(255, 0, 0));
        selection.toggle_layer("roads", "a.geojson");
        assert_eq!(selection.color(&id), None);

        selection.toggle_layer("roads", "a.geojson");
        assert_eq!(selection.color(&id), Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn test_retain_catalog_drops_missing_files() {
        let mut selection = LayerSelection::new();
        selection.toggle_layer("roads", "a.geojson");
        selection.toggle_layer("roads", "gone.geojson");
        selection.toggle_layer("removed_group", "x.json");

        let removed = selection.retain_catalog(&[roads()]);
        assert_eq!(
            removed,
            vec![
                LayerId::new("roads", "gone.geojson"),
                LayerId::new("removed_group", "x.json"),
            ]
        );
        assert_eq!(selection.len(), 1);
        assert_colors_match_active(&selection);
    }
}
