//! Application layer for dcprobe.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (BootstrapService)
//! - **Ports**: Interface definitions (traits) for the validator backend
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::BootstrapService;

// Re-export port traits (for adapter implementation)
pub use ports::{ValidatorFactory, ValidatorHandle};

pub use error::ApplicationError;
