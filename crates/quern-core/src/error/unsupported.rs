use super::Error;

/// Error when the storage engine structurally cannot perform an operation.
///
/// This occurs when:
/// - A transaction control operation is requested (begin, commit, rollback,
///   savepoints, isolation levels)
/// - A row-level mutation is requested (UPDATE, DELETE, TRUNCATE)
/// - A DDL form the engine has no grammar for is requested (indexes, foreign
///   keys, unique or check constraints, column renames)
///
/// These are permanent capability gaps, not retryable failures. They are
/// raised before any network call is made.
#[derive(Debug)]
pub(super) struct UnsupportedOperation {
    operation: Box<str>,
}

impl std::error::Error for UnsupportedOperation {}

impl core::fmt::Display for UnsupportedOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "operation not supported by the storage engine: {}",
            self.operation
        )
    }
}

impl Error {
    /// Creates an unsupported operation error carrying the operation's name.
    pub fn unsupported(operation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Unsupported(UnsupportedOperation {
            operation: operation.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported operation error.
    pub fn is_unsupported(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Unsupported(_))
    }

    /// Returns the name of the rejected operation, if this is an unsupported
    /// operation error.
    pub fn unsupported_operation(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::Unsupported(err) => Some(&err.operation),
            _ => None,
        }
    }
}
