use super::Model;
use crate::{Record, Result};

/// A type whose instances can be read and written field by field.
///
/// Implemented by `#[derive(Mappable)]`. Instances are flattened into a
/// [`Record`] before mapping and rebuilt with [`Mappable::load`] afterwards.
/// `Default` provides the zero-argument construction used for fresh
/// destinations and for nested containers materialized during writes.
pub trait Mappable: Default + 'static {
    /// Field names and declared types, in declaration order.
    fn model() -> &'static Model;

    /// Reads every field into a record.
    fn to_record(&self) -> Record;

    /// Rebuilds an instance from a record.
    fn load(record: Record) -> Result<Self>;
}
