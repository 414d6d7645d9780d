use super::Error;

/// Error when no class map is registered, or can be derived, for a pair of
/// types.
#[derive(Debug)]
pub(super) struct UnregisteredTypePairError {
    pub(super) a: Box<str>,
    pub(super) b: Box<str>,
}

impl std::error::Error for UnregisteredTypePairError {}

impl core::fmt::Display for UnregisteredTypePairError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no class map registered or derivable for {} -> {}",
            self.a, self.b
        )
    }
}

impl Error {
    pub fn unregistered_type_pair(a: impl Into<Box<str>>, b: impl Into<Box<str>>) -> Error {
        Error::from(super::ErrorKind::UnregisteredTypePair(
            UnregisteredTypePairError {
                a: a.into(),
                b: b.into(),
            },
        ))
    }

    /// Returns `true` if no class map could be found for the requested pair.
    pub fn is_unregistered_type_pair(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::UnregisteredTypePair(_))
    }
}
