//! Hash map keyed by arbitrary values.
//!
//! Keys are bucketed by their canonical rendering and compared with
//! structural equality inside a bucket. Entries keep insertion order.

use std::collections::HashMap;

use crate::Value;

#[derive(Clone, Default)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
    buckets: HashMap<String, Vec<usize>>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Only used while a map is being built; once
    /// wrapped in a `Value` the map is never mutated again.
    pub fn insert(&mut self, key: Value, value: Value) {
        let bucket = self.buckets.entry(key.render()).or_default();
        if let Some(&idx) = bucket.iter().find(|&&idx| self.entries[idx].0 == key) {
            self.entries[idx].1 = value;
            return;
        }
        bucket.push(self.entries.len());
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.buckets
            .get(&key.render())?
            .iter()
            .map(|&idx| &self.entries[idx])
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl PartialEq for ValueMap {
    /// Same key set under structural equality, with equal values.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|ov| ov == v))
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
