use super::{Direction, MappingContext};
use crate::{Result, Value};

use std::any::Any;

/// Type-erased custom mapping logic attached to a class map.
///
/// Runs after the field pass of every map call for the class map's pair, with
/// both instances already loaded. Instances are passed as `Any` because the
/// class map only knows its types at runtime; `remap::CustomMapper` is the
/// typed front end.
pub trait Hook: Send + Sync + 'static {
    fn map_a_to_b(&self, a: &dyn Any, b: &mut dyn Any, context: &mut MappingContext) -> Result<()>;

    fn map_b_to_a(&self, b: &dyn Any, a: &mut dyn Any, context: &mut MappingContext) -> Result<()>;

    /// Calls the entry point matching `direction`.
    fn apply(
        &self,
        direction: Direction,
        source: &dyn Any,
        dest: &mut dyn Any,
        context: &mut MappingContext,
    ) -> Result<()> {
        match direction {
            Direction::AToB => self.map_a_to_b(source, dest, context),
            Direction::BToA => self.map_b_to_a(source, dest, context),
        }
    }
}

/// Per-element conversion applied to a field's values before they are
/// written.
pub trait ElementTransform: Send + Sync + 'static {
    fn transform(&self, value: Value, direction: Direction) -> Result<Value>;
}

impl<F> ElementTransform for F
where
    F: Fn(Value, Direction) -> Result<Value> + Send + Sync + 'static,
{
    fn transform(&self, value: Value, direction: Direction) -> Result<Value> {
        self(value, direction)
    }
}
