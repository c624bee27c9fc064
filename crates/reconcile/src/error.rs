//! Error types for reconciliation runs.
//!
//! Every error here is fatal to the current run: nothing is retried and
//! nothing is rolled back. A mutation that succeeded before the failure
//! stays applied, and the caller sees it reflected in the reported state.

use thiserror::Error;

/// Errors that can abort a reconciliation run.
#[derive(Debug, Error)]
pub enum Error {
    /// An attribute value was rejected by its registered validator.
    ///
    /// Raised before any device mutation.
    #[error("invalid value for {attr}: {message}")]
    Validation {
        /// Name of the offending attribute
        attr: String,
        /// Human-readable reason from the validator
        message: String,
    },

    /// A resource kind is misdefined.
    ///
    /// This is a programming defect in the kind's capability table, not a
    /// runtime device condition: lifecycle support declared without the
    /// matching routine, or (in strict mode) a changed attribute with no
    /// setter.
    #[error("resource kind {kind} is misdefined: {message}")]
    Capability {
        /// Name of the misdefined resource kind
        kind: &'static str,
        /// Description of the defect
        message: String,
    },

    /// The connection provider failed to read or write.
    ///
    /// Surfaced verbatim; retry policy, if any, belongs to the provider.
    #[error("device transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Build a validation error for an attribute.
    pub fn validation(attr: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            attr: attr.into(),
            message: message.into(),
        }
    }

    /// Build a capability error for a resource kind.
    pub fn capability(kind: &'static str, message: impl Into<String>) -> Self {
        Self::Capability {
            kind,
            message: message.into(),
        }
    }

    /// Wrap a connection provider failure.
    pub fn transport(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Box::new(source))
    }
}

/// Result type for reconciliation operations.
pub type Result<T> = std::result::Result<T, Error>;
