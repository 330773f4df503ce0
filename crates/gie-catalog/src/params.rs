//! Ordered query-string parameters.

/// An ordered set of query-string pairs with unique keys.
///
/// Inserting an existing key replaces its value in place, so overlaying one
/// set on another keeps the first-seen key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Sets `key` only when `value` is present.
    pub fn insert_opt(&mut self, key: &'static str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Overlays every pair of `other` on top of `self`.
    pub fn overlay(&mut self, other: &QueryParams) {
        for (key, value) in &other.pairs {
            self.insert(key, value.clone());
        }
    }

    /// Removes every pair whose value is empty or whitespace.
    pub fn drop_empty(&mut self) {
        self.pairs.retain(|(_, value)| !value.trim().is_empty());
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Returns the keys in insertion order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.pairs.iter().map(|(k, _)| *k).collect()
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
