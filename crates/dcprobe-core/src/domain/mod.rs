// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dcprobe.
//!
//! This module contains pure business logic with no I/O of any kind. All
//! network and fixture concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls (`url` is used
//!   for pure string-to-URL rendering only)
//! - **Immutable entities**: A descriptor never changes after `build()`
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::descriptor::{ConnectionDescriptor, DescriptorBuilder};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Credentials, Datacenter};

// Internal only - not re-exported
pub use validation::DomainValidator;
