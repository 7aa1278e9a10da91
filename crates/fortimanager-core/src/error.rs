//! Error types for FortiManager resource operations.
//!
//! Every crate in the workspace reports failures through [`Error`]. Variants carry
//! the resource type and, where relevant, the operation or field that failed so the
//! orchestrator can surface a precise message without further wrapping.

use serde::Serialize;
use thiserror::Error;

use crate::types::Operation;

/// Main error type for FortiManager resource operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A required scoping parameter could not be resolved before a mutating call
    #[error("{resource}: cannot resolve scope parameter `{parameter}`")]
    ScopeResolutionError {
        /// Resource type name
        resource: String,
        /// Scoping parameter that was blank
        parameter: String,
    },

    /// A scoping parameter was still blank after the import-option fallback
    #[error("{resource}: parameter {parameter} is missing")]
    MissingParameterError {
        /// Resource type name
        resource: String,
        /// Scoping parameter that was blank
        parameter: String,
    },

    /// The external client call failed
    #[error("Error {operation} {resource} resource: {message}")]
    RemoteCallError {
        /// Resource type name
        resource: String,
        /// Operation that was attempted
        operation: Operation,
        /// Message reported by the client
        message: String,
    },

    /// A remote value could not be assigned to local state
    #[error("{resource}: error reading {field}: {message}")]
    FieldReadError {
        /// Resource type name
        resource: String,
        /// Local field name
        field: String,
        /// Shape mismatch description
        message: String,
    },

    /// A local value does not match its field kind
    #[error("{resource}: invalid value for {field}: {message}")]
    InvalidFieldValue {
        /// Resource type name
        resource: String,
        /// Local field name
        field: String,
        /// Mismatch description
        message: String,
    },

    /// The field that supplies the identity is unset
    #[error("{resource}: identity field `{field}` is not set")]
    IdentityError {
        /// Resource type name
        resource: String,
        /// Identity field name
        field: String,
    },

    /// JSON that cannot be represented as a wire value
    #[error("Invalid wire value: {0}")]
    InvalidWireValue(String),

    /// No descriptor registered under a type name
    #[error("Unknown resource type: {0}")]
    UnknownResource(String),

    /// A resource descriptor violates its structural rules
    #[error("Invalid resource descriptor: {0}")]
    InvalidDescriptor(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error raised inside a client implementation
    #[error("Client error: {0}")]
    ClientError(String),
}

/// Specialized result type for FortiManager resource operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Severity attached to a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The operation failed
    Error,
}

/// Structured diagnostic handed back to the orchestrator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Diagnostic {
    /// Severity
    pub severity: Severity,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable summary
    pub summary: String,
    /// Optional structured detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ScopeResolutionError { .. } => "SCOPE_RESOLUTION_ERROR",
            Self::MissingParameterError { .. } => "MISSING_PARAMETER",
            Self::RemoteCallError { .. } => "REMOTE_CALL_ERROR",
            Self::FieldReadError { .. } => "FIELD_READ_ERROR",
            Self::InvalidFieldValue { .. } => "INVALID_FIELD_VALUE",
            Self::IdentityError { .. } => "IDENTITY_ERROR",
            Self::InvalidWireValue(_) => "INVALID_WIRE_VALUE",
            Self::UnknownResource(_) => "UNKNOWN_RESOURCE",
            Self::InvalidDescriptor(_) => "INVALID_DESCRIPTOR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ClientError(_) => "CLIENT_ERROR",
        }
    }

    /// Returns the resource type the error is attributed to, if any.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        match self {
            Self::ScopeResolutionError { resource, .. }
            | Self::MissingParameterError { resource, .. }
            | Self::RemoteCallError { resource, .. }
            | Self::FieldReadError { resource, .. }
            | Self::InvalidFieldValue { resource, .. }
            | Self::IdentityError { resource, .. } => Some(resource),
            _ => None,
        }
    }

    /// Converts the error into a [`Diagnostic`].
    #[must_use]
    pub fn into_diagnostic(self) -> Diagnostic {
        let detail = match &self {
            Self::ScopeResolutionError { resource, parameter }
            | Self::MissingParameterError { resource, parameter } => Some(serde_json::json!({
                "resource": resource,
                "parameter": parameter,
            })),
            Self::RemoteCallError {
                resource,
                operation,
                ..
            } => Some(serde_json::json!({
                "resource": resource,
                "operation": operation,
            })),
            Self::FieldReadError { resource, field, .. }
            | Self::InvalidFieldValue { resource, field, .. }
            | Self::IdentityError { resource, field } => Some(serde_json::json!({
                "resource": resource,
                "field": field,
            })),
            _ => None,
        };

        Diagnostic {
            severity: Severity::Error,
            code: self.error_code().to_string(),
            summary: self.to_string(),
            detail,
        }
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(
            self,
            Self::RemoteCallError { .. }
                | Self::FieldReadError { .. }
                | Self::InvalidDescriptor(_)
                | Self::ConfigError(_)
                | Self::ClientError(_)
        )
    }
}

// Conversions from external error types
impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidWireValue(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
