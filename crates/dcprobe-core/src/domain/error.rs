// ============================================================================
// domain/error.rs - DESCRIPTOR VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid connection descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Host address must not be empty")]
    MissingHost,

    #[error("Username and password must be provided together (missing: {missing})")]
    IncompleteCredentials { missing: &'static str },

    #[error("Cannot render endpoint URL for host '{host}': {reason}")]
    InvalidEndpoint { host: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDescriptor(msg) => vec![
                "Check your connection parameters".into(),
                format!("Details: {}", msg),
            ],
            Self::MissingHost => vec![
                "Provide a target host with --host".into(),
                "Or set DCPROBE_HOST, or add it to the [connection] config section".into(),
                "Example: dcprobe datacenters --host 192.168.1.86".into(),
            ],
            Self::IncompleteCredentials { missing } => vec![
                format!("A {} is required when the other half is set", missing),
                "Pass both --username and --password, or neither".into(),
                "The password can also come from DCPROBE_PASSWORD".into(),
            ],
            Self::InvalidEndpoint { host, .. } => vec![
                format!("'{}' could not be turned into an endpoint URL", host),
                "Use a bare address or hostname, e.g. 192.168.1.86 or vcenter.local".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDescriptor(_)
            | Self::MissingHost
            | Self::IncompleteCredentials { .. }
            | Self::InvalidEndpoint { .. } => ErrorCategory::Validation,
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
