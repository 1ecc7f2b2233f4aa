use super::Error;

/// Error when a parameter binding or fetch projection is invalid.
///
/// This occurs when:
/// - A NULL value is bound to a placeholder
/// - An array parameter mixes numeric and string members
/// - Named and positional placeholder keys are mixed in one statement
/// - A key-pair fetch is requested on a result with fewer than two columns
///
/// These errors are raised at bind or fetch time, never during rendering.
#[derive(Debug)]
pub(super) struct BindingError {
    message: Box<str>,
}

impl std::error::Error for BindingError {}

impl core::fmt::Display for BindingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid binding: {}", self.message)
    }
}

impl Error {
    /// Creates a binding error.
    pub fn binding(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Binding(BindingError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a binding error.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Binding(_))
    }
}
