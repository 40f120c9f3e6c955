//! dcprobe Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the dcprobe
//! connection bootstrap tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           dcprobe-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (BootstrapService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: ValidatorFactory / Handle)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    dcprobe-adapters (Infrastructure)    │
//! │      (StaticValidatorFactory, etc)      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ConnectionDescriptor, Credentials,     │
//! │  Datacenter) — No I/O Dependencies      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dcprobe_core::{
//!     application::BootstrapService,
//!     domain::ConnectionDescriptor,
//! };
//!
//! // 1. Build a descriptor
//! let descriptor = ConnectionDescriptor::builder()
//!     .host("192.168.1.86")
//!     .credentials("root", "password")
//!     .force(true)
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with an injected factory adapter)
//! let service = BootstrapService::new(factory);
//! for dc in service.datacenters(&descriptor).unwrap() {
//!     println!("DC: {dc}");
//! }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootstrapService,
        ports::{ValidatorFactory, ValidatorHandle},
    };
    pub use crate::domain::{
        ConnectionDescriptor, Credentials, Datacenter, DescriptorBuilder,
    };
    pub use crate::error::{ProbeError, ProbeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
