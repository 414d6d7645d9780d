use super::Error;

/// Error when a path expression is malformed or cannot be resolved against
/// an instance.
#[derive(Debug)]
pub(super) struct PathError {
    pub(super) path: Box<str>,
    pub(super) kind: PathErrorKind,
}

/// Why a path could not be parsed or resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathErrorKind {
    /// The expression does not follow the path grammar.
    Malformed { position: usize, reason: &'static str },

    /// A segment names a field the model does not have.
    UnknownField { model: String, field: String },

    /// An index segment is past the end of the sequence.
    IndexOutOfRange { index: usize, len: usize },

    /// A key segment cannot address the map's key type.
    KeyTypeMismatch { key: String },

    /// A segment descends into a value that is not a record, list or map.
    NotAContainer { segment: String },

    /// Wildcard segments are only legal on both sides of a rule at once.
    WildcardMismatch,
}

impl std::error::Error for PathError {}

impl core::fmt::Display for PathError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid path `{}`: ", self.path)?;

        match &self.kind {
            PathErrorKind::Malformed { position, reason } => {
                write!(f, "{reason} at position {position}")
            }
            PathErrorKind::UnknownField { model, field } => {
                write!(f, "`{model}` has no field `{field}`")
            }
            PathErrorKind::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            PathErrorKind::KeyTypeMismatch { key } => {
                write!(f, "key `{key}` does not match the map's key type")
            }
            PathErrorKind::NotAContainer { segment } => {
                write!(f, "`{segment}` is not a record, list or map")
            }
            PathErrorKind::WildcardMismatch => f.write_str(
                "multi-occurrence segments must appear on both sides of a field mapping",
            ),
        }
    }
}

impl Error {
    /// Creates a path error for the given expression.
    pub fn path(path: impl Into<Box<str>>, kind: PathErrorKind) -> Error {
        Error::from(super::ErrorKind::Path(PathError {
            path: path.into(),
            kind,
        }))
    }

    /// Returns `true` if this error is a path error.
    pub fn is_path(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::Path(_))
    }

    /// Returns the reason of a path error, if this is one.
    pub fn path_error_kind(&self) -> Option<&PathErrorKind> {
        match self.root_kind() {
            super::ErrorKind::Path(err) => Some(&err.kind),
            _ => None,
        }
    }
}
