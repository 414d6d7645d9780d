use super::ModelRef;

use std::fmt;

/// Declared type of a field. Every type is nullable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Bool,
    F64,
    I32,
    I64,
    String,

    /// Sequence with the given element type
    List(Box<Type>),

    /// Mapping with the given key and value types
    Map(Box<Type>, Box<Type>),

    /// Nested mappable type
    Model(ModelRef),
}

impl Type {
    pub fn list(elem: Type) -> Self {
        Self::List(Box::new(elem))
    }

    pub fn map(key: Type, value: Type) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::F64 | Self::I32 | Self::I64 | Self::String
        )
    }

    pub fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    pub fn as_model(&self) -> Option<&ModelRef> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::F64 => f.write_str("f64"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::String => f.write_str("String"),
            Self::List(elem) => write!(f, "List<{elem}>"),
            Self::Map(key, value) => write!(f, "Map<{key}, {value}>"),
            Self::Model(model) => f.write_str(model.name()),
        }
    }
}
