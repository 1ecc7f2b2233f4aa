use super::Error;

/// Coarse category of a remote failure, for the host framework's own error
/// hierarchy. The adapter never retries; the category is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteKind {
    /// The engine could not be reached or the connection dropped.
    Connection,

    /// The engine rejected the statement text.
    Syntax,

    /// The engine rejected the statement for a catalog or constraint reason
    /// (unknown table, unknown database).
    Constraint,

    /// Any other remote failure.
    Other,
}

/// Error reported by the network client while executing otherwise-valid SQL.
///
/// The failure is surfaced as-is; this layer does not retry and does not
/// interpret the remote error beyond the coarse [`RemoteKind`] tag.
#[derive(Debug)]
pub(super) struct RemoteError {
    pub(super) category: RemoteKind,
    pub(super) inner: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub(super) message: Option<Box<str>>,
}

impl std::error::Error for RemoteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .as_ref()
            .map(|inner| inner.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for RemoteError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("remote execution failed: ")?;
        match (&self.inner, &self.message) {
            (Some(inner), _) => {
                // Display the error and walk its source chain
                core::fmt::Display::fmt(inner, f)?;
                let mut source = inner.source();
                while let Some(err) = source {
                    write!(f, ": {}", err)?;
                    source = err.source();
                }
                Ok(())
            }
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("unknown error"),
        }
    }
}

impl Error {
    /// Creates an error from a failure reported by the network client.
    pub fn remote(
        category: RemoteKind,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::Remote(RemoteError {
            category,
            inner: Some(Box::new(err)),
            message: None,
        }))
    }

    /// Creates a remote execution error from a bare message, for clients
    /// whose transport reports failures as text.
    pub fn remote_message(category: RemoteKind, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Remote(RemoteError {
            category,
            inner: None,
            message: Some(message.into().into()),
        }))
    }

    /// Returns `true` if this error is a remote execution error.
    pub fn is_remote(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Remote(_))
    }

    /// Returns the coarse category of a remote execution error.
    pub fn remote_kind(&self) -> Option<RemoteKind> {
        match self.kind() {
            super::ErrorKind::Remote(err) => Some(err.category),
            _ => None,
        }
    }
}
