use super::FactoryConfig;

use indexmap::IndexMap;
use remap_core::{mapping::Direction, ClassMap, Error, ModelRef, NullPolicy, Result, TypePair};
use tracing::debug;

use std::sync::Arc;

/// Registered class maps plus the factory-wide defaults.
#[derive(Debug, Clone)]
pub(crate) struct Registry {
    class_maps: IndexMap<TypePair, Arc<ClassMap>>,
    pub(crate) map_nulls: bool,
    pub(crate) use_auto_mapping: bool,
}

impl Registry {
    pub(crate) fn new(config: &FactoryConfig) -> Self {
        Self {
            class_maps: IndexMap::new(),
            map_nulls: config.map_nulls,
            use_auto_mapping: config.use_auto_mapping,
        }
    }

    /// Records a finished class map, returning the one it replaces.
    pub(crate) fn insert(&mut self, class_map: ClassMap) -> Option<Arc<ClassMap>> {
        self.class_maps.insert(class_map.pair, Arc::new(class_map))
    }

    pub(crate) fn get(&self, pair: &TypePair) -> Option<&Arc<ClassMap>> {
        self.class_maps.get(pair)
    }

    /// Null policy used when neither a field nor its class map sets one.
    pub(crate) fn null_policy(&self) -> NullPolicy {
        NullPolicy::from_bool(self.map_nulls)
    }

    /// The registered class map covering a copy from `source` to `dest`, and
    /// which way it runs.
    pub(crate) fn lookup(
        &self,
        source: ModelRef,
        dest: ModelRef,
    ) -> Option<(Arc<ClassMap>, Direction)> {
        let pair = TypePair::new(source, dest);

        if let Some(class_map) = self.class_maps.get(&pair) {
            return Some((class_map.clone(), Direction::AToB));
        }

        self.class_maps
            .get(&pair.reverse())
            .map(|class_map| (class_map.clone(), Direction::BToA))
    }

    /// Like [`Registry::lookup`], falling back to a derived class map.
    pub(crate) fn resolve(
        &self,
        source: ModelRef,
        dest: ModelRef,
    ) -> Result<(Arc<ClassMap>, Direction)> {
        match self.lookup(source, dest) {
            Some(found) => Ok(found),
            None => Ok((self.derive(TypePair::new(source, dest))?, Direction::AToB)),
        }
    }

    /// Builds the structural class map of an unregistered pair.
    ///
    /// A pair is derivable only if auto mapping is on and the two models
    /// share at least one field name.
    pub(crate) fn derive(&self, pair: TypePair) -> Result<Arc<ClassMap>> {
        if !self.use_auto_mapping {
            return Err(Error::unregistered_type_pair(pair.a.name(), pair.b.name()));
        }

        let class_map = ClassMap::derive(pair)?;

        if class_map.fields.is_empty() {
            return Err(Error::unregistered_type_pair(pair.a.name(), pair.b.name()));
        }

        debug!(%pair, fields = class_map.fields.len(), "derived class map");
        Ok(Arc::new(class_map))
    }
}
