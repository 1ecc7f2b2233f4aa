use super::Error;

/// Error when a schema or registry configuration violates an invariant.
///
/// This occurs when:
/// - A merge-family table intent has no ordering key
/// - The partition date column is ambiguous, missing, or not a Date column
/// - A version or sign column has a disallowed type
/// - A column is declared nullable (the engine surface has no NULL)
/// - A type name is re-registered with a conflicting descriptor
///
/// These errors are raised while building statements, before any SQL is
/// emitted.
#[derive(Debug)]
pub(super) struct ConfigurationError {
    message: Box<str>,
}

impl std::error::Error for ConfigurationError {}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Configuration(ConfigurationError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Configuration(_))
    }
}
