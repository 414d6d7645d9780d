mod error;
use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

mod rename;
use rename::RenameRule;
