use std::collections::{BTreeMap, HashMap};

use super::Pulse;

/// Sparse side-channel options keyed by property name, then exact pulse.
///
/// Only exact-position queries are supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionalOptions {
    props: HashMap<String, BTreeMap<Pulse, String>>,
}

impl PositionalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` at `y`, replacing any previous value there.
    pub fn insert(&mut self, name: impl Into<String>, y: Pulse, value: impl Into<String>) {
        self.props
            .entry(name.into())
            .or_default()
            .insert(y, value.into());
    }

    /// Mutable access to the value of `name` at `y`, if set.
    pub fn get_mut(&mut self, name: &str, y: Pulse) -> Option<&mut String> {
        self.props.get_mut(name).and_then(|m| m.get_mut(&y))
    }

    pub fn get(&self, name: &str, y: Pulse) -> Option<&str> {
        self.props
            .get(name)
            .and_then(|m| m.get(&y))
            .map(|s| s.as_str())
    }

    /// All `(y, value)` pairs of `name` in increasing y.
    pub fn iter(&self, name: &str) -> impl Iterator<Item = (Pulse, &str)> {
        self.props
            .get(name)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&y, v)| (y, v.as_str())))
    }
}
