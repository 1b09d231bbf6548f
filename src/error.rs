//! Error taxonomy shared by the credential store and the verifier.

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required parameter (path, section target, options) is missing.
    #[error("{0}")]
    InvalidArgument(String),

    /// A referenced section does not exist.
    #[error("section '{0}' not found")]
    NotFound(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Signing, transport, or response failure during verification.
    #[error("{0}")]
    Auth(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn io(action: &str, path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            context: format!("{} {}", action, path.display()),
            source,
        }
    }
}
