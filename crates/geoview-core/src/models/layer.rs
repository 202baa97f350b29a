//! Catalog groups and active-layer identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GEOJSON_EXTENSIONS;

/// One catalog subdirectory and the GeoJSON files it contains.
///
/// Serialized as `{"groupName": ..., "files": [...]}`, the shape returned by
/// `GET /api/layers`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerGroup {
    pub group_name: String,
    pub files: Vec<String>,
}

impl LayerGroup {
    pub fn new(group_name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            group_name: group_name.into(),
            files,
        }
    }

    /// Ids of every file in this group, in catalog order.
    pub fn layer_ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.files
            .iter()
            .map(|file| LayerId::new(&self.group_name, file))
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }
}

/// Unique key of a layer: `groupName/fileName`.
///
/// This is also the `path` query parameter of the data endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(group_name: &str, file_name: &str) -> Self {
        Self(format!("{}/{}", group_name, file_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A layer the user has switched on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveLayer {
    pub id: LayerId,
    pub group_name: String,
    pub file_name: String,
}

impl ActiveLayer {
    pub fn new(group_name: &str, file_name: &str) -> Self {
        Self {
            id: LayerId::new(group_name, file_name),
            group_name: group_name.to_string(),
            file_name: file_name.to_string(),
        }
    }
}

/// True for names the catalog lists and the data endpoint serves.
pub fn is_geojson_file_name(file_name: &str) -> bool {
    GEOJSON_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Sidebar label for a file: the name without its GeoJSON suffix.
pub fn display_name(file_name: &str) -> &str {
    GEOJSON_EXTENSIONS
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_id_format() {
        let id = LayerId::new("roads", "highways.geojson");
        assert_eq!(id.as_str(), "roads/highways.geojson");
        assert_eq!(id.to_string(), "roads/highways.geojson");
    }

    #[test]
    fn test_group_serde_shape() {
        let group = LayerGroup::new("roads", vec!["a.geojson".into(), "b.json".into()]);
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(json, r#"{"groupName":"roads","files":["a.geojson","b.json"]}"#);

        let parsed: LayerGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }

    #[test]
    fn test_group_layer_ids() {
        let group = LayerGroup::new("parcels", vec!["north.json".into(), "south.json".into()]);
        let ids: Vec<_> = group.layer_ids().collect();
        assert_eq!(
            ids,
            vec![
                LayerId::new("parcels", "north.json"),
                LayerId::new("parcels", "south.json"),
            ]
        );
        assert!(group.contains("north.json"));
        assert!(!group.contains("east.json"));
    }

    #[test]
    fn test_geojson_file_names() {
        assert!(is_geojson_file_name("highways.geojson"));
        assert!(is_geojson_file_name("zones.json"));
        assert!(!is_geojson_file_name("streets.txt"));
        assert!(!is_geojson_file_name("zones.JSON"));
        assert!(!is_geojson_file_name("geojson"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("highways.geojson"), "highways");
        assert_eq!(display_name("zones.json"), "zones");
        assert_eq!(display_name("notes.txt"), "notes.txt");
    }
}
