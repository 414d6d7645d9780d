mod builder;
pub use builder::{ClassMapBuilder, FieldMapBuilder};

mod custom;
pub use custom::CustomMapper;

mod engine;

pub mod factory;
pub use factory::{Builder, FactoryConfig, MapperFactory};

mod facade;
pub use facade::{BoundMapper, MapperFacade};

pub use remap_core::{
    bail, err,
    mapping::{self, Direction, ElementTransform, MappingContext, MappingDirection},
    record,
    schema::{self, Type},
    ClassMap, Error, FieldMapping, FieldPath, FieldValue, MapKey, Mappable, ModelRef, NullPolicy,
    PathErrorKind, Record, Result, TypePair, Value,
};

pub use remap_macros::Mappable;

#[doc(hidden)]
pub mod codegen_support {
    pub use remap_core::{
        schema::{Field, Model, Type},
        Error, FieldValue, Mappable, ModelRef, Record, Result, Value,
    };
    pub use std::sync::OnceLock;

    /// Takes field `name` out of `record` and loads it.
    pub fn load_field<T: FieldValue>(
        record: &mut Record,
        model: &'static str,
        name: &'static str,
    ) -> Result<T> {
        T::load(record.take(name))
            .map_err(|err| err.context(remap_core::err!("loading `{model}.{name}`")))
    }
}
