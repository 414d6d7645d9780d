mod builder;
pub use builder::{Builder, FactoryConfig};

mod registry;
pub(crate) use registry::Registry;

use crate::{BoundMapper, ClassMapBuilder, MapperFacade};

use remap_core::{err, ClassMap, Mappable, Result, TypePair};
use tracing::{debug, warn};

use std::sync::Arc;

/// Registry of class maps, and the source of mappers.
///
/// Registration mutates the factory; mappers taken from it are snapshots of
/// the registry at the time they were created, so a facade never observes a
/// later `register()`.
#[derive(Debug, Clone)]
pub struct MapperFactory {
    registry: Arc<Registry>,
}

impl MapperFactory {
    /// A factory with default settings: nulls are mapped and unregistered
    /// pairs are derived by field name.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn from_registry(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Starts a fresh class map for `A -> B`.
    ///
    /// Nothing is recorded until [`ClassMapBuilder::register`] is called.
    pub fn class_map<A: Mappable, B: Mappable>(&mut self) -> ClassMapBuilder<'_, A, B> {
        ClassMapBuilder::new(self)
    }

    /// Finishes and records a class map, replacing any map already registered
    /// for the same pair.
    pub fn register(&mut self, class_map: ClassMap) -> Result<()> {
        let pair = class_map.pair;
        let class_map = class_map
            .finish()
            .map_err(|err| err.context(err!("registering class map {pair}")))?;

        debug!(
            %pair,
            fields = class_map.fields.len(),
            defaults = class_map.defaults().count(),
            excluded = class_map.excluded.len(),
            hook = class_map.has_hook(),
            "registered class map",
        );

        if Arc::make_mut(&mut self.registry).insert(class_map).is_some() {
            warn!(%pair, "replaced an existing class map");
        }

        Ok(())
    }

    /// The class map registered for exactly `A -> B`, if any.
    pub fn class_map_for<A: Mappable, B: Mappable>(&self) -> Option<&ClassMap> {
        self.registry
            .get(&TypePair::of::<A, B>())
            .map(|class_map| &**class_map)
    }

    /// Mapper dispatching on the types of each call.
    pub fn mapper_facade(&self) -> MapperFacade {
        MapperFacade::new(self.registry.clone())
    }

    /// Mapper bound to `A <-> B`.
    ///
    /// Fails right away if no class map is registered for the pair (either
    /// way round) and none can be derived.
    pub fn bound_mapper<A: Mappable, B: Mappable>(&self) -> Result<BoundMapper<A, B>> {
        BoundMapper::new(self.registry.clone())
    }

    pub fn map_nulls(&self) -> bool {
        self.registry.map_nulls
    }

    pub fn uses_auto_mapping(&self) -> bool {
        self.registry.use_auto_mapping
    }
}

impl Default for MapperFactory {
    fn default() -> Self {
        Self::new()
    }
}
