use super::Error;

/// Whatever a custom mapper hook raised. Displayed without decoration.
#[derive(Debug)]
pub(super) struct CustomMapperError {
    pub(super) inner: anyhow::Error,
}

impl std::error::Error for CustomMapperError {}

impl core::fmt::Display for CustomMapperError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Wraps an error raised by user code inside a custom mapper.
    pub fn custom_mapper(err: impl Into<anyhow::Error>) -> Error {
        Error::from(super::ErrorKind::CustomMapper(CustomMapperError {
            inner: err.into(),
        }))
    }

    /// Returns `true` if this error was raised by a custom mapper hook.
    pub fn is_custom_mapper(&self) -> bool {
        matches!(self.root_kind(), super::ErrorKind::CustomMapper(_))
    }
}
