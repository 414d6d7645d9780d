#[macro_use]
mod macros;

mod error;
pub use error::{Error, IntoError, PathErrorKind};

pub mod mapping;
pub use mapping::{ClassMap, FieldMapping, MappingContext, NullPolicy, TypePair};

pub mod path;
pub use path::FieldPath;

pub mod schema;
pub use schema::{Mappable, ModelRef};

pub mod value;
pub use value::{FieldValue, MapKey, Record, Value};

/// A Result type alias that uses remap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
