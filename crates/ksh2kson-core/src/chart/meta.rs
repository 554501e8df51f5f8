use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Flat `key=value` header metadata, values kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartMeta {
    fields: BTreeMap<String, String>,
}

impl ChartMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field; a later value for the same key wins.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|s| s.as_str())
    }

    /// Get a field that must be present.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Error::missing_field(key))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ChartMeta {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut meta = Self::new();
        for (k, v) in iter {
            meta.insert(k, v);
        }
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_missing_key() {
        let meta: ChartMeta = [("title", "Song")].into_iter().collect();
        assert_eq!(meta.require("title").unwrap(), "Song");
        match meta.require("artist") {
            Err(Error::MissingField { field }) => assert_eq!(field, "artist"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
