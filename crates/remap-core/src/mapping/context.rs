use crate::Value;

use indexmap::IndexMap;

/// State carried through one map call and handed to every custom hook.
///
/// The engine never reads the properties; they belong to the caller and its
/// hooks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MappingContext {
    properties: IndexMap<String, Value>,
    depth: usize,
}

impl MappingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.properties.shift_remove(name)
    }

    /// Nesting level of the current map call. The outermost call is at 0;
    /// each nested record mapped through the registry adds one.
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[doc(hidden)]
    pub fn enter(&mut self) {
        self.depth += 1;
    }

    #[doc(hidden)]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
