//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Validator construction failed (unreachable host, bad credentials,
    /// malformed input — whatever the backend reports).
    #[error("Validator construction failed: {reason}")]
    ConnectionFailed { reason: String },

    /// The datacenter listing call failed on an established session.
    #[error("Datacenter query failed: {reason}")]
    QueryFailed { reason: String },

    /// Inventory access failed (lock poisoned, etc.).
    #[error("Inventory store error")]
    InventoryLockError,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConnectionFailed { reason } => vec![
                format!("Could not establish a session: {}", reason),
                "Check that the host is reachable and the credentials are valid".into(),
                "Run with -vv to see the resolved endpoint URL".into(),
            ],
            Self::QueryFailed { reason } => vec![
                format!("The endpoint rejected the inventory query: {}", reason),
                "The session was established; this is a backend-side failure".into(),
            ],
            Self::InventoryLockError => vec![
                "The inventory backend is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConnectionFailed { .. } => ErrorCategory::Connection,
            Self::QueryFailed { .. } => ErrorCategory::Query,
            Self::InventoryLockError => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
