//! TOML serialization for descriptors.
//!
//! The renderer reads both descriptors as TOML. Element order matters to human
//! readers diffing generated cards, so keyed collections are stored as
//! [`OrderedMap`] and serialized in insertion order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;

/// A string-keyed map that serializes in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry. Keys are expected to be unique; callers build them from
    /// fixed label tables and [`crate::grid::GridCoordinate::key`].
    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.entries.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Serialize a descriptor to TOML text.
pub fn to_toml<T: Serialize>(descriptor: &T) -> Result<String> {
    Ok(toml::to_string(descriptor)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut m = OrderedMap::new();
        m.push("year", "2024".to_string());
        m.push("month", "Feb".to_string());
        m.push("d00", String::new());
        let out = to_toml(&m).unwrap();
        assert_eq!(out, "year = \"2024\"\nmonth = \"Feb\"\nd00 = \"\"\n");
    }

    #[test]
    fn test_ordered_map_lookup() {
        let mut m = OrderedMap::with_capacity(2);
        m.push("a", 1);
        m.push("b", 2);
        assert_eq!(m.get("b"), Some(&2));
        assert_eq!(m.get("c"), None);
        assert_eq!(m.len(), 2);
        assert!(!m.is_empty());
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
