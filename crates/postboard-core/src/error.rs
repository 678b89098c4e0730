use core::result::Result as CoreResult;
use std::io::Error as IoError;

use reqwest::Error as ReqwestError;
use thiserror::Error;
use toml::de::Error as TomlError;
use toml::ser::Error as TomlSerError;

/// Result type for postboard operations.
pub type Result<T> = CoreResult<T, Error>;

/// Collection a failed load was reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// The post collection.
    Posts,
    /// The user collection.
    Users,
}

impl Resource {
    /// Lowercase label used in log lines and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Posts => "posts",
            Self::Users => "users",
        }
    }
}

/// Errors that can occur while loading data or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// An HTTP request failed before a response was decoded.
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),

    /// TOML serialization failed.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] TomlSerError),

    /// Configuration is invalid or its location cannot be resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Fetching or decoding one of the remote collections failed.
    #[error("Failed to load {}: {reason}", resource.label())]
    LoadFailure {
        /// Collection that failed.
        resource: Resource,
        /// Underlying transport, status or decoding error.
        reason: String,
    },
}

impl Error {
    /// Builds a load failure for `resource` from any displayable cause.
    pub fn load_failure(resource: Resource, reason: impl ToString) -> Self {
        Self::LoadFailure {
            resource,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let config_error = Error::Config("missing home directory".to_owned());
        assert_eq!(
            config_error.to_string(),
            "Configuration error: missing home directory"
        );

        let load_error = Error::load_failure(Resource::Users, "connection refused");
        assert_eq!(
            load_error.to_string(),
            "Failed to load users: connection refused"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }
}
