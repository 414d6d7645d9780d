use super::Value;

use indexmap::IndexMap;
use std::ops;

/// The named fields of one instance.
///
/// This is the get/set-by-name capability the path resolver works against.
/// Field order follows the model declaration.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Record {
    fields: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Sets a field, returning the previous value if it was present.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Returns the field's value, inserting null first if it is absent.
    pub fn slot_mut(&mut self, name: &str) -> &mut Value {
        self.fields.entry(name.to_string()).or_default()
    }

    /// Moves a field's value out, leaving null behind. Absent fields read as
    /// null.
    pub fn take(&mut self, name: &str) -> Value {
        self.fields
            .get_mut(name)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl ops::Index<&str> for Record {
    type Output = Value;

    #[track_caller]
    fn index(&self, name: &str) -> &Value {
        match self.fields.get(name) {
            Some(value) => value,
            None => panic!("record has no field `{name}`; record={self:#?}"),
        }
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for Record {
    fn from_iter<T: IntoIterator<Item = (N, Value)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
