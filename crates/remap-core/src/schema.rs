mod field;
pub use field::Field;

mod mappable;
pub use mappable::Mappable;

mod model;
pub use model::Model;

mod model_ref;
pub use model_ref::ModelRef;

mod ty;
pub use ty::Type;
