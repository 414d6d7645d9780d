mod class_map;
pub use class_map::ClassMap;

mod context;
pub use context::MappingContext;

mod direction;
pub use direction::{Direction, MappingDirection};

mod field_mapping;
pub use field_mapping::FieldMapping;

mod hook;
pub use hook::{ElementTransform, Hook};

mod null_policy;
pub use null_policy::NullPolicy;

mod type_pair;
pub use type_pair::TypePair;
