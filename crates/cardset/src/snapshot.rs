//! Persisted property values supplied by the host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted values of one host object, keyed by property name.
pub type PropertyMap = BTreeMap<String, Value>;

/// Persisted values of every host object, keyed by object name.
pub type ObjectMap = BTreeMap<String, PropertyMap>;

/// A host-supplied snapshot of persisted property values.
///
/// A snapshot without an object map is valid and means nothing has been
/// persisted yet.
///
/// # Example
///
/// ```
/// use cardset::HostSnapshot;
/// use serde_json::json;
///
/// let snapshot: HostSnapshot = serde_json::from_value(json!({
///     "objects": { "dataColors": { "fill": { "solid": { "color": "#00FF00" } } } }
/// })).unwrap();
///
/// assert!(snapshot.property("dataColors", "fill").is_some());
/// assert!(snapshot.property("dataColors", "stroke").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<ObjectMap>,
}

impl HostSnapshot {
    /// A snapshot carrying the given objects.
    pub fn from_objects(objects: ObjectMap) -> Self {
        Self {
            objects: Some(objects),
        }
    }

    /// Builds a snapshot from a JSON object of objects, ignoring entries that
    /// are not themselves JSON objects.
    pub fn from_json(objects: &Value) -> Self {
        let Some(objects) = objects.as_object() else {
            return Self::default();
        };
        let objects = objects
            .iter()
            .filter_map(|(object, properties)| {
                let properties = properties.as_object()?;
                let properties = properties
                    .iter()
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect();
                Some((object.clone(), properties))
            })
            .collect();
        Self::from_objects(objects)
    }

    pub fn objects(&self) -> Option<&ObjectMap> {
        self.objects.as_ref()
    }

    pub fn object(&self, object: &str) -> Option<&PropertyMap> {
        self.objects.as_ref()?.get(object)
    }

    pub fn property(&self, object: &str, property: &str) -> Option<&Value> {
        self.object(object)?.get(property)
    }
}
