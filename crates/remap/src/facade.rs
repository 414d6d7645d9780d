use crate::{engine::Exec, factory::Registry};

use remap_core::{mapping::Direction, ClassMap, Mappable, MappingContext, ModelRef, Result};

use std::{marker::PhantomData, sync::Arc};

/// Maps between any two types, finding the class map on each call.
///
/// Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct MapperFacade {
    registry: Arc<Registry>,
}

/// Maps between `A` and `B` in either direction, with the class map resolved
/// up front.
pub struct BoundMapper<A, B> {
    registry: Arc<Registry>,
    class_map: Arc<ClassMap>,

    /// Direction of `A -> B` relative to `class_map`, which may have been
    /// registered as `B -> A`.
    direction: Direction,

    _p: PhantomData<fn() -> (A, B)>,
}

impl MapperFacade {
    pub(crate) fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Maps `source` into a default-constructed `D`.
    pub fn map<S: Mappable, D: Mappable>(&self, source: &S) -> Result<D> {
        self.map_with_context(source, &mut MappingContext::new())
    }

    /// Maps `source` onto an existing `dest`.
    ///
    /// Fields no rule writes, and fields whose null was suppressed, keep
    /// their value. On error, `dest` is left untouched.
    pub fn map_into<S: Mappable, D: Mappable>(&self, source: &S, dest: &mut D) -> Result<()> {
        self.map_into_with_context(source, dest, &mut MappingContext::new())
    }

    pub fn map_with_context<S: Mappable, D: Mappable>(
        &self,
        source: &S,
        context: &mut MappingContext,
    ) -> Result<D> {
        let mut dest = D::default();
        self.map_into_with_context(source, &mut dest, context)?;
        Ok(dest)
    }

    pub fn map_into_with_context<S: Mappable, D: Mappable>(
        &self,
        source: &S,
        dest: &mut D,
        context: &mut MappingContext,
    ) -> Result<()> {
        let record = Exec::new(&self.registry, context).map_record(
            ModelRef::of::<S>(),
            source.to_record(),
            ModelRef::of::<D>(),
            dest.to_record(),
        )?;

        *dest = D::load(record)?;
        Ok(())
    }

    /// Maps every source in order.
    pub fn map_as_list<'a, S, D>(
        &self,
        sources: impl IntoIterator<Item = &'a S>,
    ) -> Result<Vec<D>>
    where
        S: Mappable,
        D: Mappable,
    {
        let mut context = MappingContext::new();
        sources
            .into_iter()
            .map(|source| self.map_with_context(source, &mut context))
            .collect()
    }
}

impl<A: Mappable, B: Mappable> BoundMapper<A, B> {
    pub(crate) fn new(registry: Arc<Registry>) -> Result<Self> {
        let (class_map, direction) =
            registry.resolve(ModelRef::of::<A>(), ModelRef::of::<B>())?;

        Ok(Self {
            registry,
            class_map,
            direction,
            _p: PhantomData,
        })
    }

    /// The class map this mapper runs.
    pub fn class_map(&self) -> &ClassMap {
        &self.class_map
    }

    pub fn map(&self, source: &A) -> Result<B> {
        let mut dest = B::default();
        self.map_into(source, &mut dest)?;
        Ok(dest)
    }

    pub fn map_into(&self, source: &A, dest: &mut B) -> Result<()> {
        *dest = self.run(self.direction, source, dest)?;
        Ok(())
    }

    /// Maps a `B` back into a default-constructed `A`.
    pub fn map_reverse(&self, source: &B) -> Result<A> {
        let mut dest = A::default();
        self.map_reverse_into(source, &mut dest)?;
        Ok(dest)
    }

    pub fn map_reverse_into(&self, source: &B, dest: &mut A) -> Result<()> {
        *dest = self.run(self.direction.reverse(), source, dest)?;
        Ok(())
    }

    fn run<S: Mappable, D: Mappable>(
        &self,
        direction: Direction,
        source: &S,
        dest: &D,
    ) -> Result<D> {
        let mut context = MappingContext::new();
        let record = Exec::new(&self.registry, &mut context).apply(
            &self.class_map,
            direction,
            source.to_record(),
            dest.to_record(),
        )?;

        D::load(record)
    }
}

impl<A, B> Clone for BoundMapper<A, B> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            class_map: self.class_map.clone(),
            direction: self.direction,
            _p: PhantomData,
        }
    }
}

impl<A, B> std::fmt::Debug for BoundMapper<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundMapper")
            .field("pair", &self.class_map.pair)
            .field("direction", &self.direction)
            .finish()
    }
}
