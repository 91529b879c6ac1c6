/// Shared data structures for the catalog
///
/// These structs represent the data model that flows between
/// the product source and the view layer. Products are read-only
/// once loaded.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents a single product in the catalog
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique product code (e.g., "GT-F200")
    pub id: String,
    /// Category label, from an open set (e.g., "Freezers")
    pub category: String,
    /// Display name
    pub model: String,
    /// Image references, the first one is the thumbnail
    pub images: Vec<String>,
    /// Technical specifications in display order
    #[serde(default)]
    pub specifications: Specifications,
    /// Human-readable feature list
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// The image shown on grid cards
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Open key/value mapping of technical attributes
///
/// Keys keep document order. Values are usually strings, but numbers
/// and booleans are accepted and displayed as their JSON text.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Specifications(IndexMap<String, Value>);

impl Specifications {
    /// Display value for a key, if present
    pub fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).map(display_value)
    }

    /// Iterate `(key, display value)` pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), display_value(v)))
    }

    /// The mapping serialized as compact JSON, keys in document order.
    /// Search matches against this text.
    pub fn serialized(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Specifications {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
