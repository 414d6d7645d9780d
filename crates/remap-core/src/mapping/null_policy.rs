/// Whether a null source value overwrites the destination.
///
/// Policies are layered: a field's policy applies unless it is `Inherit`,
/// then the class map's, then the factory's.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullPolicy {
    #[default]
    Inherit,
    MapNulls,
    SuppressNulls,
}

impl NullPolicy {
    pub fn from_bool(map_nulls: bool) -> Self {
        if map_nulls {
            Self::MapNulls
        } else {
            Self::SuppressNulls
        }
    }

    /// `self`, unless it defers to `fallback`.
    pub fn or(self, fallback: NullPolicy) -> Self {
        match self {
            Self::Inherit => fallback,
            policy => policy,
        }
    }

    /// Nulls are copied unless explicitly suppressed.
    pub fn maps_nulls(self) -> bool {
        !matches!(self, Self::SuppressNulls)
    }
}
