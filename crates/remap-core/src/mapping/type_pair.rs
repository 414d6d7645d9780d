use crate::{Mappable, ModelRef};

use std::fmt;

/// Ordered pair of mappable types identifying a class map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypePair {
    pub a: ModelRef,
    pub b: ModelRef,
}

impl TypePair {
    pub fn new(a: ModelRef, b: ModelRef) -> Self {
        Self { a, b }
    }

    pub fn of<A: Mappable, B: Mappable>() -> Self {
        Self::new(ModelRef::of::<A>(), ModelRef::of::<B>())
    }

    /// The same pair with its sides swapped.
    pub fn reverse(self) -> Self {
        Self::new(self.b, self.a)
    }
}

impl fmt::Display for TypePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}
