//! Top-level GeoJSON document types accepted by the catalog.

use serde_json::Value;

/// The `type` values a served document may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeoJsonKind {
    FeatureCollection,
    Feature,
    GeometryCollection,
}

impl GeoJsonKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "FeatureCollection" => Some(Self::FeatureCollection),
            "Feature" => Some(Self::Feature),
            "GeometryCollection" => Some(Self::GeometryCollection),
            _ => None,
        }
    }

    /// Classify a parsed document by its `type` field.
    ///
    /// Returns `None` for anything that is not an object with one of the
    /// accepted type names, including bare geometries such as `Point`.
    pub fn of_document(document: &Value) -> Option<Self> {
        document
            .get("type")
            .and_then(Value::as_str)
            .and_then(Self::from_type_name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FeatureCollection => "FeatureCollection",
            Self::Feature => "Feature",
            Self::GeometryCollection => "GeometryCollection",
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_accepted_documents() {
        assert_eq!(
            GeoJsonKind::of_document(&json!({"type": "FeatureCollection", "features": []})),
            Some(GeoJsonKind::FeatureCollection)
        );
        assert_eq!(
            GeoJsonKind::of_document(&json!({"type": "Feature", "geometry": null})),
            Some(GeoJsonKind::Feature)
        );
        assert_eq!(
            GeoJsonKind::of_document(&json!({"type": "GeometryCollection", "geometries": []})),
            Some(GeoJsonKind::GeometryCollection)
        );
    }

    #[test]
    fn test_rejected_documents() {
        assert_eq!(GeoJsonKind::of_document(&json!({"type": "Point"})), None);
        assert_eq!(GeoJsonKind::of_document(&json!({"features": []})), None);
        assert_eq!(GeoJsonKind::of_document(&json!({"type": 7})), None);
        assert_eq!(GeoJsonKind::of_document(&json!(["FeatureCollection"])), None);
    }
}
