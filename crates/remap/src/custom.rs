use remap_core::{err, mapping::Hook, Error, Mappable, MappingContext, Result};

use std::{any::Any, marker::PhantomData};

/// Hand-written mapping logic for one pair of types.
///
/// Attached with [`ClassMapBuilder::customize`]. Each method runs after the
/// field rules of its direction have been applied, so it sees (and may
/// overwrite) everything they wrote. Both default to doing nothing.
///
/// Errors are returned to the caller of `map` unchanged.
///
/// [`ClassMapBuilder::customize`]: crate::ClassMapBuilder::customize
pub trait CustomMapper<A, B>: Send + Sync + 'static {
    fn map_a_to_b(&self, a: &A, b: &mut B, context: &mut MappingContext) -> anyhow::Result<()> {
        let _ = (a, b, context);
        Ok(())
    }

    fn map_b_to_a(&self, b: &B, a: &mut A, context: &mut MappingContext) -> anyhow::Result<()> {
        let _ = (b, a, context);
        Ok(())
    }
}

/// Exposes a typed [`CustomMapper`] as a class map [`Hook`].
pub(crate) struct TypedHook<A, B, M> {
    mapper: M,
    _p: PhantomData<fn(&A, &B)>,
}

impl<A, B, M> TypedHook<A, B, M> {
    pub(crate) fn new(mapper: M) -> Self {
        Self {
            mapper,
            _p: PhantomData,
        }
    }
}

impl<A, B, M> Hook for TypedHook<A, B, M>
where
    A: Mappable,
    B: Mappable,
    M: CustomMapper<A, B>,
{
    fn map_a_to_b(&self, a: &dyn Any, b: &mut dyn Any, context: &mut MappingContext) -> Result<()> {
        let a = downcast_ref::<A>(a)?;
        let b = downcast_mut::<B>(b)?;
        self.mapper
            .map_a_to_b(a, b, context)
            .map_err(Error::custom_mapper)
    }

    fn map_b_to_a(&self, b: &dyn Any, a: &mut dyn Any, context: &mut MappingContext) -> Result<()> {
        let b = downcast_ref::<B>(b)?;
        let a = downcast_mut::<A>(a)?;
        self.mapper
            .map_b_to_a(b, a, context)
            .map_err(Error::custom_mapper)
    }
}

fn downcast_ref<T: Mappable>(instance: &dyn Any) -> Result<&T> {
    instance
        .downcast_ref()
        .ok_or_else(|| err!("custom mapper expected a `{}`", T::model().name))
}

fn downcast_mut<T: Mappable>(instance: &mut dyn Any) -> Result<&mut T> {
    instance
        .downcast_mut()
        .ok_or_else(|| err!("custom mapper expected a `{}`", T::model().name))
}
