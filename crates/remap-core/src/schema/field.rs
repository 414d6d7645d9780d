use super::Type;

/// A named, typed field of a [`Model`](super::Model).
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Name used in path expressions
    pub name: String,

    /// Declared type
    pub ty: Type,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}
