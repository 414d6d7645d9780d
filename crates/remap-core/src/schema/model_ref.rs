use super::{Mappable, Model};
use crate::{err, Record, Result};

use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
};

/// Type-erased handle to a [`Mappable`] type.
///
/// Carries the operations the engine needs on a type it only knows at
/// runtime: its model, a default instance, and conversion between records
/// and boxed instances. Two refs are equal when they name the same Rust type.
#[derive(Clone, Copy)]
pub struct ModelRef {
    type_id: fn() -> TypeId,
    model: fn() -> &'static Model,
    default_record: fn() -> Record,
    load_any: fn(Record) -> Result<Box<dyn Any>>,
    record_any: fn(&dyn Any) -> Result<Record>,
}

impl ModelRef {
    pub fn of<T: Mappable>() -> Self {
        Self {
            type_id: TypeId::of::<T>,
            model: T::model,
            default_record: default_record::<T>,
            load_any: load_any::<T>,
            record_any: record_any::<T>,
        }
    }

    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    pub fn model(&self) -> &'static Model {
        (self.model)()
    }

    pub fn name(&self) -> &'static str {
        self.model().name
    }

    /// Record of a default-constructed instance.
    pub fn default_record(&self) -> Record {
        (self.default_record)()
    }

    /// Rebuilds a boxed instance of the referenced type from a record.
    pub fn load_any(&self, record: Record) -> Result<Box<dyn Any>> {
        (self.load_any)(record)
    }

    /// Flattens a boxed instance back into a record.
    ///
    /// Fails if `instance` is not of the referenced type.
    pub fn record_any(&self, instance: &dyn Any) -> Result<Record> {
        (self.record_any)(instance)
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }
}

fn default_record<T: Mappable>() -> Record {
    T::default().to_record()
}

fn load_any<T: Mappable>(record: Record) -> Result<Box<dyn Any>> {
    Ok(Box::new(T::load(record)?))
}

fn record_any<T: Mappable>(instance: &dyn Any) -> Result<Record> {
    match instance.downcast_ref::<T>() {
        Some(instance) => Ok(instance.to_record()),
        None => Err(err!("instance is not a `{}`", T::model().name)),
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for ModelRef {}

impl Hash for ModelRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id().hash(state);
    }
}

impl fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ModelRef").field(&self.name()).finish()
    }
}

impl fmt::Display for ModelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
