//! Attributes of a feature picked in select mode.

use serde_json::{Map, Value};

/// Property name holding a feature's geometry; never shown as an attribute.
const GEOMETRY_KEY: &str = "geometry";

/// One attribute row in the inspector.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureAttribute {
    pub name: String,
    pub value: Value,
}

impl FeatureAttribute {
    /// Text shown for the value.
    ///
    /// Objects and arrays render as compact JSON, strings render without
    /// quotes, and every other scalar uses its JSON text.
    pub fn display_value(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// The non-geometry properties of a picked feature, in property order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureInfo {
    attributes: Vec<FeatureAttribute>,
}

impl FeatureInfo {
    /// Build from a feature's property map, dropping the geometry entry.
    pub fn from_properties(properties: Map<String, Value>) -> Self {
        let attributes = properties
            .into_iter()
            .filter(|(name, _)| name != GEOMETRY_KEY)
            .map(|(name, value)| FeatureAttribute { name, value })
            .collect();
        Self { attributes }
    }

    pub fn attributes(&self) -> &[FeatureAttribute] {
        &self.attributes
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn props(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_geometry_is_dropped() {
        let info = FeatureInfo::from_properties(props(json!({
            "name": "A1",
            "geometry": {"type": "Point", "coordinates": [0, 0]},
            "lanes": 2
        })));
        assert_eq!(info.len(), 2);
        assert!(info.get("geometry").is_none());
        assert_eq!(info.get("lanes"), Some(&json!(2)));
    }

    #[test]
    fn test_property_order_is_kept() {
        let info = FeatureInfo::from_properties(props(json!({
            "zeta": 1,
            "alpha": 2,
            "mid": 3
        })));
        let names: Vec<_> = info.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_display_value() {
        let row = |value: Value| FeatureAttribute {
            name: "k".into(),
            value,
        };
        assert_eq!(row(json!("Rue de la Paix")).display_value(), "Rue de la Paix");
        assert_eq!(row(json!(42)).display_value(), "42");
        assert_eq!(row(json!(true)).display_value(), "true");
        assert_eq!(row(Value::Null).display_value(), "null");
        assert_eq!(row(json!({"a": [1, 2]})).display_value(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_only_geometry_is_empty() {
        let info = FeatureInfo::from_properties(props(json!({"geometry": null})));
        assert!(info.is_empty());
    }
}
