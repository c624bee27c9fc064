//! Error types for eAPI operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to a device or loading profiles.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport failed (connection, TLS, timeout, non-2xx status).
    #[error("HTTP request failed: {message}")]
    Http {
        /// Error message from the transport.
        message: String,
        /// HTTP status code if one was received.
        status: Option<u16>,
    },

    /// The device answered with a JSON-RPC error member.
    #[error("command failed on device: {message}")]
    Command {
        /// JSON-RPC error code.
        code: i64,
        /// Device-supplied error message.
        message: String,
    },

    /// The response body was not the expected JSON-RPC shape.
    #[error("invalid eAPI response: {0}")]
    InvalidResponse(String),

    /// Named connection profile does not exist.
    #[error("connection profile not found: {0}")]
    ProfileNotFound(String),

    /// Profile file could not be read or written.
    #[error("profile config error at {path}: {message}")]
    ProfileConfig {
        /// Path of the profile file.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },
}

impl Error {
    /// Build a profile config error with path context.
    pub fn profile_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ProfileConfig {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Http {
                message: format!("HTTP {code}"),
                status: Some(code),
            },
            other => Self::Http {
                message: other.to_string(),
                status: None,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

/// Result type for eAPI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_display() {
        let err = Error::Command {
            code: 1002,
            message: "CLI command 2 of 2 'vlan 5000' failed: invalid command".to_string(),
        };
        assert!(err.to_string().contains("vlan 5000"));
    }

    #[test]
    fn test_profile_not_found_display() {
        let err = Error::ProfileNotFound("lab".to_string());
        assert_eq!(err.to_string(), "connection profile not found: lab");
    }
}
